//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/pause", post(pause_handler))
        .route("/resume", post(resume_handler))
        .route("/reset", post(reset_handler))
        .route("/stop", post(stop_handler))
        .route("/broadcast", post(broadcast_handler))
        .route("/status", get(status_handler))
        .route("/events", get(events_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{engine::EngineConfig, services::recording::RecordingResources};

    fn app() -> (Router, Arc<AppState>) {
        let state = Arc::new(AppState::new(
            20554,
            "127.0.0.1".to_string(),
            EngineConfig::default(),
            Arc::new(RecordingResources::new()),
        ));
        (create_router(Arc::clone(&state)), state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn start_pause_resume_stop() {
        let (app, state) = app();

        let (status, body) = send(&app, Method::POST, "/start", Some(json!({"minutes": 1, "seconds": 30}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
        assert_eq!(body["counter"]["minutes"], 1);
        assert_eq!(body["counter"]["seconds"], 30);
        assert_eq!(body["counter"]["first_total_seconds"], 90);

        let (_, body) = send(&app, Method::POST, "/pause", None).await;
        assert_eq!(body["counter"]["state"], "paused");

        let (_, body) = send(&app, Method::POST, "/resume", None).await;
        assert_eq!(body["counter"]["state"], "running");

        let (_, body) = send(&app, Method::POST, "/stop", None).await;
        assert_eq!(body["status"], "idle");
        assert_eq!(body["counter"]["first_total_seconds"], 0);
        assert!(!state.engine.is_ticking());
    }

    #[tokio::test]
    async fn start_too_short_is_unprocessable() {
        let (app, state) = app();

        let (status, body) = send(&app, Method::POST, "/start", Some(json!({"seconds": 3}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["status"], "error");
        assert_eq!(body["counter"]["state"], "idle");
        assert_eq!(state.get_last_action(), (None, None));
    }

    #[tokio::test]
    async fn status_reports_display_and_last_action() {
        let (app, _state) = app();

        send(&app, Method::POST, "/start", Some(json!({"hours": 2}))).await;
        send(&app, Method::POST, "/pause", None).await;

        let (status, body) = send(&app, Method::GET, "/status", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["display"], "02:00:00");
        assert_eq!(body["active"], true);
        assert_eq!(body["progress"], 1.0);
        assert_eq!(body["last_action"], "pause");
        assert_eq!(body["port"], 20554);
    }

    #[tokio::test]
    async fn reset_is_always_accepted() {
        let (app, _state) = app();

        let (status, body) = send(&app, Method::POST, "/reset", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["counter"]["state"], "idle");
    }

    #[tokio::test]
    async fn events_stream_starts_with_current_snapshot() {
        let (app, state) = app();
        state.start(0, 0, 45).unwrap();
        state.pause();

        let request = Request::builder().uri("/events").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let frame = response.into_body().frame().await.unwrap().unwrap();
        let chunk = String::from_utf8(frame.into_data().unwrap().to_vec()).unwrap();
        assert!(chunk.contains("event: counter"));
        assert!(chunk.contains("\"state\":\"paused\""));
        assert!(chunk.contains("\"seconds\":45"));
    }

    #[tokio::test]
    async fn health_check() {
        let (app, _state) = app();

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
