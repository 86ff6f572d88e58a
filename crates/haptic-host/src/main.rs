//! Haptic host entry point.

use std::sync::Arc;

use haptic_core::clock::SystemFrameClock;
use haptic_host::config::HostConfig;
use haptic_host::error::AppError;
use haptic_host::frame_loop::FrameLoop;
use haptic_host::sink::TracingSink;
use haptic_host::state::AppState;
use haptic_playback::PatternLibrary;
use haptic_scheduler::SharedScheduler;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting haptic host");

    let config = HostConfig::from_env()?;
    let library = match &config.patterns_path {
        Some(path) => PatternLibrary::load(path)?,
        None => {
            tracing::warn!("PATTERNS_PATH is not set, starting with an empty pattern library");
            PatternLibrary::new()
        }
    };

    // Start the frame loop before accepting requests.
    let clock = Arc::new(SystemFrameClock::new());
    let scheduler = SharedScheduler::new();
    let frame_loop = FrameLoop::spawn(
        scheduler.clone(),
        Arc::clone(&clock),
        TracingSink,
        config.frame_interval(),
    );

    let app_state = AppState::new(scheduler, Arc::new(library), clock);

    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = haptic_host::build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    frame_loop.stop().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
