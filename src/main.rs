//! Tick Tack - A countdown timer engine with a persistent notification
//!
//! This is the main entry point for the ticktack daemon.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use ticktack::{
    api::create_router,
    config::Config,
    services::ConsoleResources,
    state::AppState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("ticktack={},tower_http=info", config.log_level()))
        .init();

    info!("Starting ticktack v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, tick={}ms, auto-stop={}s",
        config.host, config.port, config.tick_ms, config.auto_stop_secs
    );

    let resources = Arc::new(ConsoleResources::new(format!(
        "POST http://{}/stop to dismiss",
        config.address()
    )));
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.engine_config(),
        resources,
    ));

    // Mirror every snapshot into the debug log
    state.engine.subscribe(|snapshot| tracing::debug!("Published {}", snapshot));

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start      - Start a countdown {{hours, minutes, seconds}}");
    info!("  POST /pause      - Pause the running countdown");
    info!("  POST /resume     - Resume the paused countdown");
    info!("  POST /reset      - Return to idle");
    info!("  POST /stop       - Return to idle and dismiss the notification");
    info!("  POST /broadcast  - Publish the current countdown again");
    info!("  GET  /status     - Current countdown");
    info!("  GET  /events     - Server-sent countdown updates");
    info!("  GET  /health     - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    state.stop();
    info!("Server shutdown complete");
    Ok(())
}
