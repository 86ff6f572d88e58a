//! Time-based pattern playback.
//!
//! These functions only enqueue running instances; the scheduler's tick does
//! the per-frame evaluation.

use std::sync::Arc;

use haptic_core::clock::FrameClock;
use haptic_core::held::Holdable;
use haptic_core::pattern::Pattern;
use haptic_core::scheduler::HapticScheduler;

use crate::domain::hands::{Hands, resolve_hands};

/// Starts `pattern` on `device` at the clock's current time.
pub fn play_over_time<D>(
    pattern: &Arc<Pattern>,
    device: D,
    strength_multiplier: f32,
    clock: &dyn FrameClock,
    scheduler: &mut dyn HapticScheduler<D>,
) {
    scheduler.schedule_pattern(device, Arc::clone(pattern), strength_multiplier, clock);
}

/// Starts `pattern` on the hands holding `held`.
///
/// The primary hand plays at full strength. A secondary hand, when the
/// pattern's secondary-hand multiplier is at least
/// [`SECONDARY_HAND_THRESHOLD`](haptic_core::pattern::SECONDARY_HAND_THRESHOLD),
/// gets its own instance scaled by that multiplier.
///
/// Returns the hands that were played, or `None` if the object has no
/// device-capable primary holder.
pub fn play_over_time_on_held<D: Clone>(
    pattern: &Arc<Pattern>,
    held: &dyn Holdable<D>,
    clock: &dyn FrameClock,
    scheduler: &mut dyn HapticScheduler<D>,
) -> Option<Hands<D>> {
    let Some(hands) = resolve_hands(held, pattern.plays_on_secondary_hand()) else {
        tracing::debug!(pattern = pattern.name(), "no device holds the object, skipping playback");
        return None;
    };

    play_over_time(pattern, hands.primary.clone(), 1.0, clock, scheduler);
    if let Some(secondary) = &hands.secondary {
        play_over_time(
            pattern,
            secondary.clone(),
            pattern.secondary_hand_multiplier(),
            clock,
            scheduler,
        );
    }
    tracing::debug!(
        pattern = pattern.name(),
        two_handed = hands.secondary.is_some(),
        "pattern started on held object"
    );
    Some(hands)
}
