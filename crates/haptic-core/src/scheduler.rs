//! Scheduler abstraction.
//!
//! Playback code only needs to enqueue work; the aggregating implementation
//! lives in `haptic-scheduler`.

use std::sync::Arc;

use crate::clock::FrameClock;
use crate::pattern::Pattern;

/// Accepts per-frame vibration requests and timed pattern playbacks.
pub trait HapticScheduler<D> {
    /// Adds `strength01` to the device's output for the next tick only.
    fn schedule_vibration(&mut self, device: D, strength01: f32);

    /// Starts playing `pattern` on the device at `clock.now()`.
    fn schedule_pattern(
        &mut self,
        device: D,
        pattern: Arc<Pattern>,
        strength_multiplier: f32,
        clock: &dyn FrameClock,
    );
}
