//! Read-only view of the last frame's device output.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Aggregated output of one device.
#[derive(Debug, Serialize)]
pub struct DeviceStrengthResponse {
    /// Device identifier.
    pub device: String,
    /// Strength emitted on the last tick, `0` if the device was silent.
    pub strength: f32,
}

/// GET /
async fn list_devices(State(state): State<AppState>) -> Json<BTreeMap<String, f32>> {
    Json(state.scheduler.strengths().into_iter().collect())
}

/// GET /{device}/strength
async fn device_strength(
    State(state): State<AppState>,
    Path(device): Path<String>,
) -> Json<DeviceStrengthResponse> {
    let strength = state.scheduler.current_strength(&device);
    Json(DeviceStrengthResponse { device, strength })
}

/// Returns the router for device output.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_devices))
        .route("/{device}/strength", get(device_strength))
}
