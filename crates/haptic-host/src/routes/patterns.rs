//! Pattern catalogue and playback endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post};
use haptic_core::error::HapticError;
use haptic_playback::{GradualPlayback, play_over_time, play_over_time_on_held};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::held::RequestedHold;
use crate::routes::vibrations::validate_device;
use crate::state::AppState;

fn default_strength_multiplier() -> f32 {
    1.0
}

fn validate_multiplier(multiplier: f32) -> Result<(), HapticError> {
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(HapticError::Validation(format!(
            "strength multiplier {multiplier} must be a non-negative number"
        )));
    }
    Ok(())
}

/// Catalogue entry for one pattern.
#[derive(Debug, Serialize)]
pub struct PatternSummary {
    /// Pattern name.
    pub name: String,
    /// Curve duration in seconds.
    pub duration: f32,
    /// Gain applied to a secondary hand.
    pub secondary_hand_multiplier: f32,
}

/// Request body for POST /{name}/play.
#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    /// Target device.
    pub device: String,
    /// Scale applied to the curve, `1` when omitted.
    #[serde(default = "default_strength_multiplier")]
    pub strength_multiplier: f32,
}

/// Request body for POST /{name}/play-held.
#[derive(Debug, Deserialize)]
pub struct PlayHeldRequest {
    /// Devices holding the object, in grab order.
    pub holders: Vec<String>,
}

/// Request body for POST /{name}/gradual.
#[derive(Debug, Deserialize)]
pub struct GradualRequest {
    /// Target device.
    pub device: String,
    /// Position along the curve reached this frame.
    pub timeline_point: f32,
    /// Scale applied to the curve, `1` when omitted.
    #[serde(default = "default_strength_multiplier")]
    pub strength_multiplier: f32,
}

/// Query string for DELETE /{name}/gradual.
#[derive(Debug, Deserialize)]
pub struct ResetGradualQuery {
    /// Only rewind this device. Rewinds every device when absent.
    pub device: Option<String>,
}

/// Response body for a started playback.
#[derive(Debug, Serialize)]
pub struct PlaybackResponse {
    /// Pattern that was started.
    pub pattern: String,
    /// Device playing at full strength.
    pub primary: String,
    /// Device playing at the secondary-hand multiplier, if any.
    pub secondary: Option<String>,
    /// Frame time the playback started at.
    pub start_time: f32,
}

/// Response body for a gradual playback step.
#[derive(Debug, Serialize)]
pub struct GradualResponse {
    /// Target device.
    pub device: String,
    /// Strength scheduled for the next frame.
    pub strength: f32,
}

/// GET /
async fn list_patterns(State(state): State<AppState>) -> Json<Vec<PatternSummary>> {
    let summaries = state
        .library
        .iter()
        .map(|pattern| PatternSummary {
            name: pattern.name().to_string(),
            duration: pattern.duration(),
            secondary_hand_multiplier: pattern.secondary_hand_multiplier(),
        })
        .collect();
    Json(summaries)
}

/// POST /{name}/play
#[instrument(skip(state, request), fields(pattern = %name, device = %request.device))]
async fn play(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<PlayRequest>,
) -> Result<(StatusCode, Json<PlaybackResponse>), ApiError> {
    validate_device(&request.device)?;
    validate_multiplier(request.strength_multiplier)?;
    let pattern = state.library.require(&name)?;

    let frame = state.clock.frame();
    let mut scheduler = state.scheduler.clone();
    play_over_time(
        &pattern,
        request.device.clone(),
        request.strength_multiplier,
        &frame,
        &mut scheduler,
    );
    info!("pattern playback started");

    Ok((
        StatusCode::ACCEPTED,
        Json(PlaybackResponse {
            pattern: name,
            primary: request.device,
            secondary: None,
            start_time: frame.now,
        }),
    ))
}

/// POST /{name}/play-held
#[instrument(skip(state, request), fields(pattern = %name))]
async fn play_held(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<PlayHeldRequest>,
) -> Result<(StatusCode, Json<PlaybackResponse>), ApiError> {
    let pattern = state.library.require(&name)?;
    let hold = RequestedHold::new(request.holders);

    let frame = state.clock.frame();
    let mut scheduler = state.scheduler.clone();
    let hands = play_over_time_on_held(&pattern, &hold, &frame, &mut scheduler)
        .ok_or_else(|| {
            HapticError::Validation("first holder must be a device".to_string())
        })?;
    info!(primary = %hands.primary, secondary = ?hands.secondary, "held playback started");

    Ok((
        StatusCode::ACCEPTED,
        Json(PlaybackResponse {
            pattern: name,
            primary: hands.primary,
            secondary: hands.secondary,
            start_time: frame.now,
        }),
    ))
}

/// POST /{name}/gradual
#[instrument(skip(state, request), fields(pattern = %name, device = %request.device))]
async fn play_gradually(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<GradualRequest>,
) -> Result<Json<GradualResponse>, ApiError> {
    validate_device(&request.device)?;
    validate_multiplier(request.strength_multiplier)?;
    let pattern = state.library.require(&name)?;

    let mut scheduler = state.scheduler.clone();
    let strength = state
        .gradual_sessions()
        .entry(name)
        .or_insert_with(|| GradualPlayback::new(pattern))
        .play(
            request.device.clone(),
            request.timeline_point,
            request.strength_multiplier,
            &mut scheduler,
        );

    Ok(Json(GradualResponse {
        device: request.device,
        strength,
    }))
}

/// DELETE /{name}/gradual
async fn reset_gradual(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ResetGradualQuery>,
) -> Result<StatusCode, ApiError> {
    state.library.require(&name)?;

    let mut sessions = state.gradual_sessions();
    match (sessions.get_mut(&name), query.device) {
        (Some(session), Some(device)) => session.reset_device(&device),
        (Some(session), None) => session.reset(),
        (None, _) => {}
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for pattern playback.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_patterns))
        .route("/{name}/play", post(play))
        .route("/{name}/play-held", post(play_held))
        .route("/{name}/gradual", post(play_gradually).delete(reset_gradual))
}
