//! Keyframed intensity curves and the peak evaluator.

use std::f32::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::error::HapticError;

/// Number of evenly spaced samples taken by [`Curve::peak_in_interval`].
pub const PEAK_SAMPLE_COUNT: u16 = 20;

/// Shape of the segment that starts at a keyframe.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Straight line to the next keyframe.
    #[default]
    Linear,
    /// Hold the keyframe value until the next keyframe.
    Step,
    /// Hermite blend with flat tangents on both ends.
    Smooth,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    SineIn,
    SineOut,
    SineInOut,
}

impl Easing {
    /// Maps a normalized segment position `x` in `[0, 1]` to a blend factor.
    #[must_use]
    pub fn at_normalized(self, x: f32) -> f32 {
        match self {
            Easing::Linear => x,
            Easing::Step => 0.0,
            Easing::Smooth => x * x * (3.0 - 2.0 * x),
            Easing::QuadIn => x * x,
            Easing::QuadOut => 1.0 - (1.0 - x).powi(2),
            Easing::QuadInOut => {
                if x < 0.5 {
                    2.0 * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicIn => x.powi(3),
            Easing::CubicOut => 1.0 - (1.0 - x).powi(3),
            Easing::CubicInOut => {
                if x < 0.5 {
                    4.0 * x.powi(3)
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
                }
            }
            Easing::SineIn => 1.0 - (x * FRAC_PI_2).cos(),
            Easing::SineOut => (x * FRAC_PI_2).sin(),
            Easing::SineInOut => -((PI * x).cos() - 1.0) / 2.0,
        }
    }
}

/// A single `(time, value)` point on a curve.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Time of the keyframe in seconds (or timeline units for gradual playback).
    pub time: f32,
    /// Intensity at this keyframe, in `[0, 1]`.
    pub value: f32,
    /// Shape of the segment towards the next keyframe.
    #[serde(default)]
    pub easing: Easing,
}

impl Keyframe {
    /// Creates a linear keyframe.
    #[must_use]
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            easing: Easing::Linear,
        }
    }

    /// Sets the easing of the segment starting at this keyframe.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// A piecewise-interpolated intensity curve.
///
/// Keyframes are kept sorted by time. Outside the keyed range the curve holds
/// its first and last values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(try_from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct Curve {
    keyframes: Vec<Keyframe>,
}

impl Curve {
    /// Builds a curve from keyframes in any order.
    ///
    /// # Errors
    ///
    /// Returns `HapticError::Validation` if a time is not finite or a value is
    /// outside `[0, 1]`.
    pub fn new(mut keyframes: Vec<Keyframe>) -> Result<Self, HapticError> {
        for (index, key) in keyframes.iter().enumerate() {
            if !key.time.is_finite() {
                return Err(HapticError::Validation(format!(
                    "keyframe {index} has a non-finite time"
                )));
            }
            if !(0.0..=1.0).contains(&key.value) {
                return Err(HapticError::Validation(format!(
                    "keyframe {index} value {} is outside [0, 1]",
                    key.value
                )));
            }
        }
        keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
        Ok(Self { keyframes })
    }

    /// A flat curve holding `value` from `0` to `duration`.
    ///
    /// `value` is clamped to `[0, 1]` and negative durations become zero.
    #[must_use]
    pub fn constant(duration: f32, value: f32) -> Self {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        let duration = if duration.is_finite() {
            duration.max(0.0)
        } else {
            0.0
        };
        Self {
            keyframes: vec![Keyframe::new(0.0, value), Keyframe::new(duration, value)],
        }
    }

    /// Returns the keyframes in time order.
    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Returns `true` if the curve has no keyframes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Time of the last keyframe, or `0` for an empty curve.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.keyframes.last().map_or(0.0, |key| key.time)
    }

    /// Evaluates the curve at `time`. Empty curves evaluate to `0`.
    #[must_use]
    pub fn evaluate(&self, time: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keyframes.first(), self.keyframes.last()) else {
            return 0.0;
        };
        if time.is_nan() {
            return 0.0;
        }
        if time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        // first.time < time < last.time, so both neighbours exist.
        let next = self.keyframes.partition_point(|key| key.time <= time);
        let from = &self.keyframes[next - 1];
        let to = &self.keyframes[next];
        let x = (time - from.time) / (to.time - from.time);
        from.value + (to.value - from.value) * from.easing.at_normalized(x)
    }

    /// Highest sampled value over `[start, end)`.
    ///
    /// The interval is split into [`PEAK_SAMPLE_COUNT`] evenly spaced samples.
    /// Empty curves and intervals with `end <= start` return `0`.
    #[must_use]
    pub fn peak_in_interval(&self, start: f32, end: f32) -> f32 {
        let length = end - start;
        if self.keyframes.is_empty() || length.is_nan() || length <= 0.0 {
            return 0.0;
        }

        let step = length / f32::from(PEAK_SAMPLE_COUNT);
        (0..PEAK_SAMPLE_COUNT)
            .map(|i| self.evaluate(start + step * f32::from(i)))
            .fold(0.0, f32::max)
    }
}

impl TryFrom<Vec<Keyframe>> for Curve {
    type Error = HapticError;

    fn try_from(keyframes: Vec<Keyframe>) -> Result<Self, Self::Error> {
        Self::new(keyframes)
    }
}

impl From<Curve> for Vec<Keyframe> {
    fn from(curve: Curve) -> Self {
        curve.keyframes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Curve {
        Curve::new(vec![
            Keyframe::new(0.0, 0.0),
            Keyframe::new(0.5, 1.0),
            Keyframe::new(1.0, 0.0),
        ])
        .unwrap()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_evaluate_interpolates_linearly_between_keys() {
        let curve = triangle();

        assert!(approx(curve.evaluate(0.25), 0.5));
        assert!(approx(curve.evaluate(0.5), 1.0));
        assert!(approx(curve.evaluate(0.75), 0.5));
    }

    #[test]
    fn test_evaluate_holds_end_values_outside_range() {
        let curve = Curve::new(vec![Keyframe::new(0.0, 0.3), Keyframe::new(1.0, 0.7)]).unwrap();

        assert!(approx(curve.evaluate(-2.0), 0.3));
        assert!(approx(curve.evaluate(5.0), 0.7));
    }

    #[test]
    fn test_evaluate_applies_segment_easing() {
        let curve = Curve::new(vec![
            Keyframe::new(0.0, 0.0).with_easing(Easing::Step),
            Keyframe::new(1.0, 1.0).with_easing(Easing::QuadIn),
            Keyframe::new(2.0, 0.0),
        ])
        .unwrap();

        assert!(approx(curve.evaluate(0.9), 0.0));
        // QuadIn at x = 0.5 blends a quarter of the way from 1.0 down to 0.0.
        assert!(approx(curve.evaluate(1.5), 0.75));
    }

    #[test]
    fn test_new_sorts_keyframes_by_time() {
        let curve = Curve::new(vec![
            Keyframe::new(1.0, 0.0),
            Keyframe::new(0.0, 0.0),
            Keyframe::new(0.5, 1.0),
        ])
        .unwrap();

        let times: Vec<f32> = curve.keyframes().iter().map(|k| k.time).collect();
        assert_eq!(times, vec![0.0, 0.5, 1.0]);
        assert!(approx(curve.duration(), 1.0));
    }

    #[test]
    fn test_new_rejects_value_out_of_range() {
        let result = Curve::new(vec![Keyframe::new(0.0, 1.5)]);

        assert!(matches!(result, Err(HapticError::Validation(_))));
    }

    #[test]
    fn test_new_rejects_non_finite_time() {
        let result = Curve::new(vec![Keyframe::new(f32::INFINITY, 0.5)]);

        assert!(matches!(result, Err(HapticError::Validation(_))));
    }

    #[test]
    fn test_empty_curve_has_zero_duration_and_peak() {
        let curve = Curve::default();

        assert!(curve.is_empty());
        assert!(approx(curve.duration(), 0.0));
        assert!(approx(curve.evaluate(0.3), 0.0));
        assert!(approx(curve.peak_in_interval(0.0, 1.0), 0.0));
    }

    #[test]
    fn test_peak_in_interval_finds_curve_apex() {
        let curve = triangle();

        let peak = curve.peak_in_interval(0.4, 0.6);

        assert!(peak > 0.95, "expected peak near 1.0, got {peak}");
    }

    #[test]
    fn test_peak_in_interval_excludes_interval_end() {
        let curve = Curve::new(vec![
            Keyframe::new(0.0, 0.0).with_easing(Easing::Step),
            Keyframe::new(1.0, 1.0),
        ])
        .unwrap();

        assert!(approx(curve.peak_in_interval(0.0, 1.0), 0.0));
    }

    #[test]
    fn test_peak_in_degenerate_interval_is_zero() {
        let curve = Curve::constant(1.0, 1.0);

        assert!(approx(curve.peak_in_interval(0.5, 0.5), 0.0));
        assert!(approx(curve.peak_in_interval(0.8, 0.2), 0.0));
        assert!(approx(curve.peak_in_interval(f32::NAN, 0.2), 0.0));
    }

    #[test]
    fn test_constant_curve_clamps_inputs() {
        let curve = Curve::constant(-1.0, 3.0);

        assert!(approx(curve.duration(), 0.0));
        assert!(approx(curve.evaluate(0.0), 1.0));
    }

    #[test]
    fn test_easing_endpoints_are_fixed() {
        let easings = [
            Easing::Linear,
            Easing::Smooth,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::QuadInOut,
            Easing::CubicIn,
            Easing::CubicOut,
            Easing::CubicInOut,
            Easing::SineIn,
            Easing::SineOut,
            Easing::SineInOut,
        ];
        for easing in easings {
            assert!(approx(easing.at_normalized(0.0), 0.0), "{easing:?} at 0");
            assert!(approx(easing.at_normalized(1.0), 1.0), "{easing:?} at 1");
        }
    }

    #[test]
    fn test_deserialize_rejects_invalid_keyframes() {
        let json = serde_json::json!([{ "time": 0.0, "value": -0.2 }]);

        let result: Result<Curve, _> = serde_json::from_value(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_defaults_easing_to_linear() {
        let json = serde_json::json!([
            { "time": 1.0, "value": 0.0 },
            { "time": 0.0, "value": 1.0, "easing": "cubic_out" }
        ]);

        let curve: Curve = serde_json::from_value(json).unwrap();

        assert_eq!(curve.keyframes()[0].easing, Easing::CubicOut);
        assert_eq!(curve.keyframes()[1].easing, Easing::Linear);
    }
}
