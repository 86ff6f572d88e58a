//! Single-frame vibration requests.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use haptic_core::error::HapticError;
use haptic_core::scheduler::HapticScheduler;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize, Serialize)]
pub struct VibrationRequest {
    /// Target device.
    pub device: String,
    /// Strength added to the device's next frame, in `[0, 1]`.
    pub strength: f32,
}

/// Rejects blank device identifiers.
pub(crate) fn validate_device(device: &str) -> Result<(), HapticError> {
    if device.trim().is_empty() {
        return Err(HapticError::Validation(
            "device must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// POST /
#[instrument(skip(state, request), fields(device = %request.device))]
async fn schedule_vibration(
    State(state): State<AppState>,
    Json(request): Json<VibrationRequest>,
) -> Result<(StatusCode, Json<VibrationRequest>), ApiError> {
    validate_device(&request.device)?;
    if !(0.0..=1.0).contains(&request.strength) {
        return Err(HapticError::Validation(format!(
            "strength {} is outside [0, 1]",
            request.strength
        ))
        .into());
    }

    let mut scheduler = state.scheduler.clone();
    scheduler.schedule_vibration(request.device.clone(), request.strength);

    Ok((StatusCode::ACCEPTED, Json(request)))
}

/// Returns the router for vibration requests.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(schedule_vibration))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use haptic_core::clock::FrameTime;
    use haptic_core::device::NullSink;
    use haptic_playback::PatternLibrary;
    use haptic_scheduler::SharedScheduler;
    use tower::ServiceExt;

    use super::*;

    fn post(body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn state_with(scheduler: SharedScheduler<String>) -> AppState {
        AppState::new(
            scheduler,
            Arc::new(PatternLibrary::new()),
            Arc::new(FrameTime::default()),
        )
    }

    #[tokio::test]
    async fn test_vibration_is_applied_on_next_tick() {
        // Arrange
        let scheduler = SharedScheduler::new();
        let app = router().with_state(state_with(scheduler.clone()));

        // Act
        let response = app
            .oneshot(post(&serde_json::json!({ "device": "left", "strength": 0.6 })))
            .await
            .unwrap();
        scheduler.tick(&FrameTime::new(0.1, 0.1), &mut NullSink);

        // Assert
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert!((scheduler.current_strength(&"left".to_string()) - 0.6).abs() < 1e-4);
    }

    #[tokio::test]
    async fn test_out_of_range_strength_returns_400() {
        let app = router().with_state(state_with(SharedScheduler::new()));

        let response = app
            .oneshot(post(&serde_json::json!({ "device": "left", "strength": 1.5 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_device_returns_400() {
        let app = router().with_state(state_with(SharedScheduler::new()));

        let response = app
            .oneshot(post(&serde_json::json!({ "device": " ", "strength": 0.5 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_fields_return_422() {
        let app = router().with_state(state_with(SharedScheduler::new()));

        let response = app.oneshot(post(&serde_json::json!({}))).await.unwrap();

        // Axum rejects bodies that fail to deserialize with 422.
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
