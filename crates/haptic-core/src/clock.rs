//! Frame clock abstraction for determinism.

use std::sync::Mutex;
use std::time::Instant;

/// Time values for a single rendered frame, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Monotonic time at the start of the frame.
    pub now: f32,
    /// Time elapsed since the previous frame.
    pub delta_time: f32,
}

impl FrameTime {
    /// Creates a frame time from explicit values.
    #[must_use]
    pub fn new(now: f32, delta_time: f32) -> Self {
        Self { now, delta_time }
    }
}

/// Abstraction over the host's frame timing.
///
/// Both values stay constant for the duration of a frame.
pub trait FrameClock: Send + Sync {
    /// Returns the current frame time in seconds.
    fn now(&self) -> f32;

    /// Returns the time elapsed since the previous frame in seconds.
    fn delta_time(&self) -> f32;

    /// Returns both values as a [`FrameTime`].
    fn frame(&self) -> FrameTime {
        FrameTime {
            now: self.now(),
            delta_time: self.delta_time(),
        }
    }
}

impl FrameClock for FrameTime {
    fn now(&self) -> f32 {
        self.now
    }

    fn delta_time(&self) -> f32 {
        self.delta_time
    }
}

/// Production clock backed by [`Instant`].
///
/// Time only moves when the frame loop calls [`SystemFrameClock::advance`],
/// so every caller within one frame observes the same `now`. The frame delta
/// is measured between instants, so it keeps full precision however long the
/// clock has been running.
#[derive(Debug)]
pub struct SystemFrameClock {
    started: Instant,
    current: Mutex<SampledFrame>,
}

#[derive(Debug, Clone, Copy)]
struct SampledFrame {
    at: Instant,
    time: FrameTime,
}

impl SystemFrameClock {
    /// Creates a clock whose time origin is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        let started = Instant::now();
        Self {
            started,
            current: Mutex::new(SampledFrame {
                at: started,
                time: FrameTime::default(),
            }),
        }
    }

    /// Samples the system time and starts a new frame.
    pub fn advance(&self) -> FrameTime {
        self.advance_to(Instant::now())
    }

    fn advance_to(&self, at: Instant) -> FrameTime {
        let mut current = self.lock();
        let time = FrameTime {
            now: at.saturating_duration_since(self.started).as_secs_f32(),
            delta_time: at.saturating_duration_since(current.at).as_secs_f32(),
        };
        *current = SampledFrame { at, time };
        time
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SampledFrame> {
        self.current
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn current(&self) -> FrameTime {
        self.lock().time
    }
}

impl Default for SystemFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemFrameClock {
    fn now(&self) -> f32 {
        self.current().now
    }

    fn delta_time(&self) -> f32 {
        self.current().delta_time
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_frame_time_acts_as_clock() {
        let frame = FrameTime::new(2.5, 0.02);

        assert!((frame.now() - 2.5).abs() < f32::EPSILON);
        assert!((frame.delta_time() - 0.02).abs() < f32::EPSILON);
        assert_eq!(frame.frame(), frame);
    }

    #[test]
    fn test_system_clock_is_frozen_between_advances() {
        let clock = SystemFrameClock::new();
        assert!(clock.now().abs() < f32::EPSILON);

        let first = clock.advance();
        assert!((clock.now() - first.now).abs() < f32::EPSILON);
        assert!((clock.delta_time() - first.delta_time).abs() < f32::EPSILON);

        let second = clock.advance();
        assert!(second.now >= first.now);
        assert!(second.delta_time >= 0.0);
    }

    #[test]
    fn test_delta_time_keeps_precision_after_long_uptime() {
        // Arrange
        let clock = SystemFrameClock::new();
        let frame = Duration::from_secs_f64(1.0 / 90.0);
        let mut at = clock.started + Duration::from_secs(200_000);
        clock.advance_to(at);

        // Act / Assert
        for _ in 0..90 {
            at += frame;
            let time = clock.advance_to(at);
            assert!(
                (time.delta_time - frame.as_secs_f32()).abs() < 1e-6,
                "delta was {}",
                time.delta_time
            );
        }
        assert!((clock.now() - 200_001.0).abs() < 0.1);
    }
}
