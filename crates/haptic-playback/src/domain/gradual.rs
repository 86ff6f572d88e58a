//! Gradual playback sessions.
//!
//! Gradual playback samples a pattern's curve at a caller-supplied timeline
//! point (for example a trigger travelling from 0 to 1) instead of wall-clock
//! time. Each device keeps its own cursor, so two hands driving the same
//! pattern never interfere.

use std::collections::HashMap;
use std::sync::Arc;

use haptic_core::device::DeviceKey;
use haptic_core::held::Holdable;
use haptic_core::pattern::Pattern;
use haptic_core::scheduler::HapticScheduler;

use super::hands::{Hands, resolve_hands};

/// Per-device cursors for incrementally playing one pattern.
#[derive(Debug, Clone)]
pub struct GradualPlayback<D> {
    pattern: Arc<Pattern>,
    cursors: HashMap<D, f32>,
}

impl<D: DeviceKey> GradualPlayback<D> {
    /// Creates a session with every cursor at `0`.
    #[must_use]
    pub fn new(pattern: Arc<Pattern>) -> Self {
        Self {
            pattern,
            cursors: HashMap::new(),
        }
    }

    /// The pattern being played.
    #[must_use]
    pub fn pattern(&self) -> &Arc<Pattern> {
        &self.pattern
    }

    /// Last timeline point played on `device`, or `0` if it never played.
    #[must_use]
    pub fn cursor(&self, device: &D) -> f32 {
        self.cursors.get(device).copied().unwrap_or(0.0)
    }

    /// Plays the part of the curve between the device's cursor and
    /// `timeline_point`, then moves the cursor there.
    ///
    /// The interval is never reordered: moving backwards yields `0`. A
    /// non-finite `timeline_point` schedules `0` and leaves the cursor alone.
    /// Returns the strength that was scheduled.
    pub fn play(
        &mut self,
        device: D,
        timeline_point: f32,
        strength_multiplier: f32,
        scheduler: &mut dyn HapticScheduler<D>,
    ) -> f32 {
        if !timeline_point.is_finite() {
            scheduler.schedule_vibration(device, 0.0);
            return 0.0;
        }

        let strength = self
            .pattern
            .curve()
            .peak_in_interval(self.cursor(&device), timeline_point)
            * strength_multiplier;
        scheduler.schedule_vibration(device.clone(), strength);
        self.cursors.insert(device, timeline_point);
        strength
    }

    /// Plays on the hands holding `held`: the primary hand at full strength
    /// and, if the pattern enables it, the secondary hand at the pattern's
    /// secondary-hand multiplier.
    ///
    /// Returns the hands that were played, or `None` if nothing device-capable
    /// holds the object.
    pub fn play_on_held(
        &mut self,
        held: &dyn Holdable<D>,
        timeline_point: f32,
        scheduler: &mut dyn HapticScheduler<D>,
    ) -> Option<Hands<D>> {
        let hands = resolve_hands(held, self.pattern.plays_on_secondary_hand())?;

        self.play(hands.primary.clone(), timeline_point, 1.0, scheduler);
        if let Some(secondary) = &hands.secondary {
            let multiplier = self.pattern.secondary_hand_multiplier();
            self.play(secondary.clone(), timeline_point, multiplier, scheduler);
        }
        Some(hands)
    }

    /// Rewinds one device's cursor to `0`.
    pub fn reset_device(&mut self, device: &D) {
        self.cursors.remove(device);
    }

    /// Rewinds every cursor to `0`.
    pub fn reset(&mut self) {
        self.cursors.clear();
    }
}

#[cfg(test)]
mod tests {
    use haptic_test_support::{MockHeldObject, RecordingScheduler, triangle_pattern};

    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_each_step_plays_peak_of_its_sub_interval() {
        // Arrange
        let pattern = triangle_pattern(1.0);
        let mut session = GradualPlayback::new(Arc::clone(&pattern));
        let mut scheduler = RecordingScheduler::<&str>::new();

        // Act
        let mut previous = 0.0;
        for step in 0..=10_u8 {
            let point = f32::from(step) / 10.0;
            let strength = session.play("pad", point, 1.0, &mut scheduler);

            // Assert
            let expected = pattern.curve().peak_in_interval(previous, point);
            assert!(approx(strength, expected), "step {step}: {strength} != {expected}");
            previous = point;
        }
        assert!(Arc::ptr_eq(session.pattern(), &pattern));
        assert_eq!(scheduler.vibrations().len(), 11);
        assert!(approx(scheduler.vibrations()[0].1, 0.0));
        assert!(scheduler.vibrations()[5].1 > 0.8);
    }

    #[test]
    fn test_moving_backwards_plays_nothing() {
        let mut session = GradualPlayback::new(triangle_pattern(1.0));
        let mut scheduler = RecordingScheduler::<&str>::new();
        session.play("pad", 0.6, 1.0, &mut scheduler);

        let strength = session.play("pad", 0.4, 1.0, &mut scheduler);

        assert!(approx(strength, 0.0));
        assert!(approx(session.cursor(&"pad"), 0.4));
    }

    #[test]
    fn test_strength_multiplier_scales_output() {
        let mut session = GradualPlayback::new(triangle_pattern(1.0));
        let mut scheduler = RecordingScheduler::<&str>::new();

        let full = session.play("a", 0.5, 1.0, &mut scheduler);
        let half = session.play("b", 0.5, 0.5, &mut scheduler);

        assert!(approx(half, full * 0.5));
    }

    #[test]
    fn test_cursors_are_independent_per_device() {
        let mut session = GradualPlayback::new(triangle_pattern(1.0));
        let mut scheduler = RecordingScheduler::<&str>::new();
        session.play("left", 0.5, 1.0, &mut scheduler);

        let right = session.play("right", 0.5, 1.0, &mut scheduler);

        assert!(right > 0.8);
        assert!(approx(session.cursor(&"left"), 0.5));
        assert!(approx(session.cursor(&"right"), 0.5));
    }

    #[test]
    fn test_non_finite_point_plays_zero_and_keeps_cursor() {
        let mut session = GradualPlayback::new(triangle_pattern(1.0));
        let mut scheduler = RecordingScheduler::<&str>::new();
        session.play("pad", 0.3, 1.0, &mut scheduler);

        let strength = session.play("pad", f32::NAN, 1.0, &mut scheduler);

        assert!(approx(strength, 0.0));
        assert!(approx(session.cursor(&"pad"), 0.3));
    }

    #[test]
    fn test_reset_rewinds_cursors() {
        let mut session = GradualPlayback::new(triangle_pattern(1.0));
        let mut scheduler = RecordingScheduler::<&str>::new();
        session.play("left", 0.7, 1.0, &mut scheduler);
        session.play("right", 0.7, 1.0, &mut scheduler);

        session.reset_device(&"left");
        assert!(approx(session.cursor(&"left"), 0.0));
        assert!(approx(session.cursor(&"right"), 0.7));

        session.reset();
        assert!(approx(session.cursor(&"right"), 0.0));
    }

    #[test]
    fn test_play_on_held_drives_both_hands_with_own_cursors() {
        // Arrange
        let mut session = GradualPlayback::new(triangle_pattern(0.5));
        let mut scheduler = RecordingScheduler::<&str>::new();
        let held = MockHeldObject::held_by(["left", "right"]);

        // Act
        let hands = session.play_on_held(&held, 0.5, &mut scheduler).unwrap();

        // Assert
        assert_eq!(hands.secondary, Some("right"));
        let vibrations = scheduler.vibrations();
        assert_eq!(vibrations.len(), 2);
        assert_eq!(vibrations[0].0, "left");
        assert_eq!(vibrations[1].0, "right");
        assert!(vibrations[0].1 > 0.8);
        assert!(approx(vibrations[1].1, vibrations[0].1 * 0.5));
    }

    #[test]
    fn test_play_on_held_skips_disabled_secondary_hand() {
        let mut session = GradualPlayback::new(triangle_pattern(0.005));
        let mut scheduler = RecordingScheduler::<&str>::new();
        let held = MockHeldObject::held_by(["left", "right"]);

        session.play_on_held(&held, 0.5, &mut scheduler);

        assert_eq!(scheduler.vibrations().len(), 1);
    }

    #[test]
    fn test_play_on_unheld_object_is_a_no_op() {
        let mut session = GradualPlayback::new(triangle_pattern(1.0));
        let mut scheduler = RecordingScheduler::<&str>::new();
        let held = MockHeldObject::<&str>::unheld();

        let hands = session.play_on_held(&held, 0.5, &mut scheduler);

        assert!(hands.is_none());
        assert!(scheduler.vibrations().is_empty());
    }
}
