//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream};
use tracing::{info, warn};

use super::responses::{ApiResponse, HealthResponse, StartRequest, StatusResponse};
use crate::state::AppState;

/// Handle POST /start - Start a countdown
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartRequest>,
) -> Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)> {
    match state.start(request.hours, request.minutes, request.seconds) {
        Ok(counter) => {
            info!("Start endpoint called - countdown at {}", counter.display());
            Ok(Json(ApiResponse::ok("Countdown started".to_string(), counter)))
        }
        Err(e) => {
            warn!("Start endpoint rejected request: {}", e);
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::error(e.to_string(), state.engine.snapshot())),
            ))
        }
    }
}

/// Handle POST /pause - Pause a running countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let counter = state.pause();
    Json(ApiResponse::ok("Pause requested".to_string(), counter))
}

/// Handle POST /resume - Resume a paused countdown
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let counter = state.resume();
    Json(ApiResponse::ok("Resume requested".to_string(), counter))
}

/// Handle POST /reset - Return to idle
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let counter = state.reset();
    Json(ApiResponse::ok("Countdown reset".to_string(), counter))
}

/// Handle POST /stop - Return to idle and release the notification and alarm
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let counter = state.stop();
    Json(ApiResponse::ok("Countdown stopped".to_string(), counter))
}

/// Handle POST /broadcast - Publish the current snapshot to every observer again
pub async fn broadcast_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let counter = state.broadcast();
    Json(ApiResponse::ok("Snapshot broadcast".to_string(), counter))
}

/// Handle GET /status - Return the current countdown
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let counter = state.engine.snapshot();
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        counter,
        active: counter.state.is_active(),
        display: counter.display(),
        progress: counter.progress(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /events - Stream every published snapshot, latest first
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let rx = state.engine.watch();

    let events = stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first && rx.changed().await.is_err() {
            return None;
        }
        let snapshot = *rx.borrow_and_update();
        Some((Event::default().event("counter").json_data(snapshot), (rx, false)))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
