//! Haptic host: error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use haptic_core::error::HapticError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the host process.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The pattern library could not be loaded.
    #[error("pattern library error: {0}")]
    Library(#[from] HapticError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `HapticError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub HapticError);

impl From<HapticError> for ApiError {
    fn from(err: HapticError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            HapticError::PatternNotFound(_) => (StatusCode::NOT_FOUND, "pattern_not_found"),
            HapticError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            HapticError::Asset(_) => (StatusCode::INTERNAL_SERVER_ERROR, "asset_error"),
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
