//! Integration tests for vibration requests and device output.

mod common;

use axum::http::StatusCode;
use haptic_scheduler::SharedScheduler;

#[tokio::test]
async fn test_vibrations_are_summed_and_clamped_per_device() {
    // Arrange
    let scheduler = SharedScheduler::new();
    for (device, strength) in [("left", 0.7), ("left", 0.6), ("right", 0.2)] {
        let app = common::build_test_app(scheduler.clone());
        let (status, _) = common::post_json(
            app,
            "/api/v1/vibrations",
            &serde_json::json!({ "device": device, "strength": strength }),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
    }

    // Act
    common::tick_at(&scheduler, 0.1);
    let app = common::build_test_app(scheduler.clone());
    let (status, json) = common::get_json(app, "/api/v1/devices").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert!((json["left"].as_f64().unwrap() - 1.0).abs() < 1e-4);
    assert!((json["right"].as_f64().unwrap() - 0.2).abs() < 1e-4);
}

#[tokio::test]
async fn test_vibration_lasts_a_single_frame() {
    let scheduler = SharedScheduler::new();
    let app = common::build_test_app(scheduler.clone());
    common::post_json(
        app,
        "/api/v1/vibrations",
        &serde_json::json!({ "device": "left", "strength": 0.4 }),
    )
    .await;

    common::tick_at(&scheduler, 0.1);
    common::tick_at(&scheduler, 0.2);
    let app = common::build_test_app(scheduler.clone());
    let (status, json) = common::get_json(app, "/api/v1/devices/left/strength").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["device"], "left");
    assert!(json["strength"].as_f64().unwrap().abs() < f64::EPSILON);
}
