//! Curve and pattern fixtures shared across test suites.

use std::sync::Arc;

use haptic_core::curve::{Curve, Keyframe};
use haptic_core::pattern::Pattern;

/// Keyframes `(0, 0), (0.5, 1), (1, 0)`.
///
/// # Panics
///
/// Panics if the fixture keyframes stop being a valid curve.
#[must_use]
pub fn triangle_curve() -> Curve {
    Curve::new(vec![
        Keyframe::new(0.0, 0.0),
        Keyframe::new(0.5, 1.0),
        Keyframe::new(1.0, 0.0),
    ])
    .expect("triangle keyframes are valid")
}

/// A pattern over [`triangle_curve`] with the given secondary-hand multiplier.
///
/// # Panics
///
/// Panics if `secondary_hand_multiplier` is outside `[0, 1]`.
#[must_use]
pub fn triangle_pattern(secondary_hand_multiplier: f32) -> Arc<Pattern> {
    Arc::new(
        Pattern::new("triangle", triangle_curve())
            .with_secondary_hand_multiplier(secondary_hand_multiplier)
            .expect("multiplier must be within [0, 1]"),
    )
}

/// A full-strength flat pattern lasting `duration` seconds.
#[must_use]
pub fn constant_pattern(name: &str, duration: f32) -> Arc<Pattern> {
    Arc::new(Pattern::new(name, Curve::constant(duration, 1.0)))
}
