//! Output sink for hosts without haptic hardware attached.

use std::fmt::Debug;

use haptic_core::device::{Impulse, ImpulseSink};

/// Writes every impulse to the trace log instead of a physical device.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl<D: Debug> ImpulseSink<D> for TracingSink {
    fn send_impulse(&mut self, device: &D, impulse: Impulse) {
        tracing::debug!(
            ?device,
            strength = impulse.strength,
            duration = impulse.duration,
            "haptic impulse"
        );
    }
}
