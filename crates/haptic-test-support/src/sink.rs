//! Test sink: records every impulse it receives.

use haptic_core::device::{Impulse, ImpulseSink};

/// An impulse sink that keeps every `(device, impulse)` pair in arrival order.
#[derive(Debug)]
pub struct RecordingSink<D> {
    impulses: Vec<(D, Impulse)>,
}

impl<D: Clone> RecordingSink<D> {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            impulses: Vec::new(),
        }
    }

    /// All impulses received so far.
    #[must_use]
    pub fn impulses(&self) -> &[(D, Impulse)] {
        &self.impulses
    }

    /// Impulses received for one device.
    #[must_use]
    pub fn impulses_for(&self, device: &D) -> Vec<Impulse>
    where
        D: PartialEq,
    {
        self.impulses
            .iter()
            .filter(|(d, _)| d == device)
            .map(|(_, impulse)| *impulse)
            .collect()
    }
}

impl<D: Clone> Default for RecordingSink<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Clone> ImpulseSink<D> for RecordingSink<D> {
    fn send_impulse(&mut self, device: &D, impulse: Impulse) {
        self.impulses.push((device.clone(), impulse));
    }
}
