//! Haptic error types.

use thiserror::Error;

/// Top-level haptic error type.
///
/// Only authoring and lookup paths produce errors. Scheduling and playback
/// resolve missing devices or degenerate input to zero output instead.
#[derive(Debug, Error)]
pub enum HapticError {
    /// A named pattern was not found in the library.
    #[error("pattern not found: {0}")]
    PatternNotFound(String),

    /// A curve, pattern or request failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A pattern asset could not be read or parsed.
    #[error("asset error: {0}")]
    Asset(String),
}
