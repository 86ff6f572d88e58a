//! Held objects described by API requests.

use haptic_core::held::{Holdable, Holder};

/// An object held by the listed devices, in grab order. It has no structural
/// relatives, so the secondary hand can only be its second holder.
#[derive(Debug, Clone)]
pub struct RequestedHold {
    holders: Vec<Holder<String>>,
}

impl RequestedHold {
    /// Builds a hold from device identifiers. Blank identifiers stand for a
    /// holder without haptic output.
    #[must_use]
    pub fn new(devices: impl IntoIterator<Item = String>) -> Self {
        let holders = devices
            .into_iter()
            .map(|device| {
                if device.trim().is_empty() {
                    Holder::Other
                } else {
                    Holder::Device(device)
                }
            })
            .collect();
        Self { holders }
    }
}

impl Holdable<String> for RequestedHold {
    fn holders(&self) -> &[Holder<String>] {
        &self.holders
    }

    fn relatives(&self) -> Vec<&dyn Holdable<String>> {
        Vec::new()
    }
}
