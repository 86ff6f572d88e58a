//! Test clock: deterministic `FrameClock` implementation for tests.

use std::sync::Mutex;

use haptic_core::clock::{FrameClock, FrameTime};

/// A clock that only moves when told to.
///
/// Starts at `now = 0` with the configured frame step as `delta_time`.
#[derive(Debug)]
pub struct SteppedClock {
    step: f32,
    current: Mutex<FrameTime>,
}

impl SteppedClock {
    /// Create a clock advancing by `step` seconds per frame.
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self {
            step,
            current: Mutex::new(FrameTime::new(0.0, step)),
        }
    }

    /// Move forward by one frame step and return the new frame time.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn advance(&self) -> FrameTime {
        let mut current = self.current.lock().unwrap();
        *current = FrameTime::new(current.now + self.step, self.step);
        *current
    }

    /// Jump to an explicit frame time.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn set(&self, now: f32, delta_time: f32) {
        *self.current.lock().unwrap() = FrameTime::new(now, delta_time);
    }
}

impl FrameClock for SteppedClock {
    fn now(&self) -> f32 {
        self.current.lock().unwrap().now
    }

    fn delta_time(&self) -> f32 {
        self.current.lock().unwrap().delta_time
    }
}
