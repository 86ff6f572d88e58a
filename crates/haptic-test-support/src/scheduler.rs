//! Test scheduler: records calls instead of aggregating them.

use std::sync::Arc;

use haptic_core::clock::FrameClock;
use haptic_core::pattern::Pattern;
use haptic_core::scheduler::HapticScheduler;

/// A `schedule_pattern` call captured by [`RecordingScheduler`].
#[derive(Debug, Clone)]
pub struct RecordedPattern<D> {
    /// Target device.
    pub device: D,
    /// Scheduled pattern.
    pub pattern: Arc<Pattern>,
    /// Multiplier passed by the caller.
    pub strength_multiplier: f32,
    /// `clock.now()` at the time of the call.
    pub start_time: f32,
}

/// A scheduler that records every call in order. Useful for asserting what
/// playback code asked for without running a frame.
#[derive(Debug)]
pub struct RecordingScheduler<D> {
    vibrations: Vec<(D, f32)>,
    patterns: Vec<RecordedPattern<D>>,
}

impl<D> RecordingScheduler<D> {
    /// Create an empty recording scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vibrations: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Recorded `schedule_vibration` calls as `(device, strength)`.
    #[must_use]
    pub fn vibrations(&self) -> &[(D, f32)] {
        &self.vibrations
    }

    /// Recorded `schedule_pattern` calls.
    #[must_use]
    pub fn patterns(&self) -> &[RecordedPattern<D>] {
        &self.patterns
    }
}

impl<D> Default for RecordingScheduler<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> HapticScheduler<D> for RecordingScheduler<D> {
    fn schedule_vibration(&mut self, device: D, strength01: f32) {
        self.vibrations.push((device, strength01));
    }

    fn schedule_pattern(
        &mut self,
        device: D,
        pattern: Arc<Pattern>,
        strength_multiplier: f32,
        clock: &dyn FrameClock,
    ) {
        self.patterns.push(RecordedPattern {
            device,
            pattern,
            strength_multiplier,
            start_time: clock.now(),
        });
    }
}
