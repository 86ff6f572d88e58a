//! Queued work held by the scheduler between ticks.

use std::sync::Arc;

use haptic_core::pattern::Pattern;

/// One frame's intent to add strength to a device's output.
#[derive(Debug, Clone, PartialEq)]
pub struct VibrationRequest<D> {
    /// Target device.
    pub device: D,
    /// Strength to add, never negative or non-finite.
    pub strength: f32,
}

impl<D> VibrationRequest<D> {
    /// Creates a request, normalising negative and non-finite strengths to 0.
    #[must_use]
    pub fn new(device: D, strength: f32) -> Self {
        let strength = if strength.is_finite() {
            strength.max(0.0)
        } else {
            0.0
        };
        Self { device, strength }
    }
}

/// One active timed playback of a pattern on one device.
#[derive(Debug, Clone)]
pub struct RunningPattern<D> {
    /// Target device.
    pub device: D,
    /// The pattern being played.
    pub pattern: Arc<Pattern>,
    /// Frame time at which playback started.
    pub start_time: f32,
    /// Gain applied to every sampled value.
    pub strength_multiplier: f32,
}

impl<D> RunningPattern<D> {
    /// Time since playback started.
    #[must_use]
    pub fn elapsed(&self, now: f32) -> f32 {
        now - self.start_time
    }

    /// Whether the pattern has played past the end of its curve.
    #[must_use]
    pub fn is_finished(&self, now: f32) -> bool {
        self.elapsed(now) > self.pattern.duration()
    }

    /// Strength contributed during the frame ending at `now`.
    ///
    /// Samples the curve peak over the last `delta_time` seconds of playback.
    #[must_use]
    pub fn strength_for_frame(&self, now: f32, delta_time: f32) -> f32 {
        let elapsed = self.elapsed(now);
        self.pattern
            .curve()
            .peak_in_interval(elapsed - delta_time, elapsed)
            * self.strength_multiplier
    }
}
