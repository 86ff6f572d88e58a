//! Haptic Host: reference process around the haptic scheduler.
//!
//! Owns the fixed-rate frame loop and exposes an Axum API for scheduling
//! vibrations, starting patterns and inspecting per-device output.

use axum::Router;

pub mod config;
pub mod error;
pub mod frame_loop;
pub mod held;
pub mod routes;
pub mod sink;
pub mod state;

/// Builds the application router without middleware layers.
pub fn build_router(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/devices", routes::devices::router())
        .nest("/api/v1/vibrations", routes::vibrations::router())
        .nest("/api/v1/patterns", routes::patterns::router())
        .with_state(state)
}
