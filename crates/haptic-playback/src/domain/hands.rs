//! Primary and secondary hand resolution for held objects.

use std::ptr;

use haptic_core::held::{Holdable, Holder};

/// Devices that should receive playback for a held object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hands<D> {
    /// The first holder of the object.
    pub primary: D,
    /// A second hand on the object or on a structurally related object.
    pub secondary: Option<D>,
}

/// Returns the first holder of `held` if it is device-capable.
pub fn primary_hand<D>(held: &dyn Holdable<D>) -> Option<&D> {
    held.holders().first().and_then(Holder::device)
}

/// Finds a second hand for `held`.
///
/// Prefers the object's own second holder. Otherwise takes the first holder
/// of the first related object (descendants, then ancestors) whose first
/// holder is device-capable.
pub fn secondary_hand<D>(held: &dyn Holdable<D>) -> Option<&D> {
    if let Some(device) = held.holders().get(1).and_then(Holder::device) {
        return Some(device);
    }

    held.relatives()
        .into_iter()
        .filter(|relative| !ptr::addr_eq(ptr::from_ref(*relative), ptr::from_ref(held)))
        .find_map(|relative| relative.holders().first().and_then(Holder::device))
}

/// Resolves the devices to play on for `held`.
///
/// Returns `None` when the object has no device-capable primary holder. The
/// secondary hand is only looked up when `include_secondary` is set.
pub fn resolve_hands<D: Clone>(held: &dyn Holdable<D>, include_secondary: bool) -> Option<Hands<D>> {
    let primary = primary_hand(held)?.clone();
    let secondary = if include_secondary {
        secondary_hand(held).cloned()
    } else {
        None
    };
    Some(Hands { primary, secondary })
}
