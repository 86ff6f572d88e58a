//! Device identity and output sink abstractions.

use std::fmt::Debug;
use std::hash::Hash;

/// Identity of one physical output channel, such as a single controller.
///
/// Devices are only used as map keys, so any cheap-to-clone type with stable
/// equality qualifies.
pub trait DeviceKey: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

impl<T> DeviceKey for T where T: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

/// A vibration impulse delivered to a device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    /// Output strength in `[0, 1]`.
    pub strength: f32,
    /// How long the impulse lasts, in seconds.
    pub duration: f32,
}

/// Host-owned receiver of the final per-device output.
pub trait ImpulseSink<D> {
    /// Performs the physical effect for one device.
    fn send_impulse(&mut self, device: &D, impulse: Impulse);
}

impl<D, F> ImpulseSink<D> for F
where
    F: FnMut(&D, Impulse),
{
    fn send_impulse(&mut self, device: &D, impulse: Impulse) {
        self(device, impulse);
    }
}

/// A sink that discards every impulse.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl<D> ImpulseSink<D> for NullSink {
    fn send_impulse(&mut self, _device: &D, _impulse: Impulse) {}
}
