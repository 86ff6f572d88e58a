//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use haptic_core::clock::FrameTime;
use haptic_core::curve::Curve;
use haptic_core::device::NullSink;
use haptic_core::pattern::Pattern;
use haptic_playback::PatternLibrary;
use haptic_scheduler::SharedScheduler;
use haptic_test_support::triangle_curve;
use http_body_util::BodyExt;
use tower::ServiceExt;

use haptic_host::state::AppState;

/// Frame time every request observes.
pub const NOW: f32 = 2.0;

/// Library with a triangle pattern (`triangle`, secondary hand at 0.5) and a
/// one-hand pattern (`single`, secondary hand disabled).
pub fn test_library() -> PatternLibrary {
    PatternLibrary::from_patterns([
        Pattern::new("triangle", triangle_curve())
            .with_secondary_hand_multiplier(0.5)
            .unwrap(),
        Pattern::new("single", Curve::constant(0.5, 1.0))
            .with_secondary_hand_multiplier(0.0)
            .unwrap(),
    ])
    .unwrap()
}

/// Build the full app router around `scheduler` with a fixed frame clock.
/// Uses the same route structure as `main.rs`.
pub fn build_test_app(scheduler: SharedScheduler<String>) -> Router {
    let app_state = AppState::new(
        scheduler,
        Arc::new(test_library()),
        Arc::new(FrameTime::new(NOW, 0.1)),
    );
    haptic_host::build_router(app_state)
}

/// Tick `scheduler` once at `now`.
pub fn tick_at(scheduler: &SharedScheduler<String>, now: f32) {
    scheduler.tick(&FrameTime::new(now, 0.1), &mut NullSink);
}

/// Send a request with an optional JSON body and return the status and the
/// JSON response (`Null` for empty bodies).
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, "POST", uri, Some(body)).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "GET", uri, None).await
}
