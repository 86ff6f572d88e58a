//! Haptic pattern definitions.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::HapticError;

/// Secondary-hand multipliers below this value disable secondary playback.
pub const SECONDARY_HAND_THRESHOLD: f32 = 0.01;

/// A named vibration curve plus the gain applied to a secondary hand.
///
/// Patterns are authored offline and shared read-only at runtime, usually
/// behind an `Arc`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "PatternAsset")]
pub struct Pattern {
    name: String,
    #[serde(rename = "keyframes")]
    curve: Curve,
    secondary_hand_multiplier: f32,
}

/// Authored form of a [`Pattern`], checked before it becomes one.
#[derive(Deserialize)]
struct PatternAsset {
    name: String,
    keyframes: Curve,
    #[serde(default = "default_secondary_hand_multiplier")]
    secondary_hand_multiplier: f32,
}

fn default_secondary_hand_multiplier() -> f32 {
    1.0
}

impl TryFrom<PatternAsset> for Pattern {
    type Error = HapticError;

    fn try_from(asset: PatternAsset) -> Result<Self, Self::Error> {
        let pattern = Self {
            name: asset.name,
            curve: asset.keyframes,
            secondary_hand_multiplier: asset.secondary_hand_multiplier,
        };
        pattern.validate()?;
        Ok(pattern)
    }
}

impl Pattern {
    /// Creates a pattern with a full-strength secondary hand.
    #[must_use]
    pub fn new(name: impl Into<String>, curve: Curve) -> Self {
        Self {
            name: name.into(),
            curve,
            secondary_hand_multiplier: default_secondary_hand_multiplier(),
        }
    }

    /// Sets the secondary-hand multiplier.
    ///
    /// # Errors
    ///
    /// Returns `HapticError::Validation` if `multiplier` is outside `[0, 1]`.
    pub fn with_secondary_hand_multiplier(mut self, multiplier: f32) -> Result<Self, HapticError> {
        if !(0.0..=1.0).contains(&multiplier) {
            return Err(HapticError::Validation(format!(
                "secondary hand multiplier {multiplier} for pattern `{}` is outside [0, 1]",
                self.name
            )));
        }
        self.secondary_hand_multiplier = multiplier;
        Ok(self)
    }

    /// Checks the name and secondary-hand multiplier invariants.
    ///
    /// # Errors
    ///
    /// Returns `HapticError::Validation` for an empty name or an out-of-range
    /// secondary-hand multiplier.
    pub fn validate(&self) -> Result<(), HapticError> {
        if self.name.trim().is_empty() {
            return Err(HapticError::Validation(
                "pattern name must not be empty".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.secondary_hand_multiplier) {
            return Err(HapticError::Validation(format!(
                "secondary hand multiplier {} for pattern `{}` is outside [0, 1]",
                self.secondary_hand_multiplier, self.name
            )));
        }
        Ok(())
    }

    /// Returns the pattern name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the intensity curve.
    #[must_use]
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Returns the secondary-hand multiplier.
    #[must_use]
    pub fn secondary_hand_multiplier(&self) -> f32 {
        self.secondary_hand_multiplier
    }

    /// Whether playback should also target a secondary hand.
    #[must_use]
    pub fn plays_on_secondary_hand(&self) -> bool {
        self.secondary_hand_multiplier >= SECONDARY_HAND_THRESHOLD
    }

    /// Duration of the underlying curve.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.curve.duration()
    }
}
