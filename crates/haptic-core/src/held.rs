//! Held-object contract supplied by the host's interaction layer.

/// Something currently grabbing a held object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Holder<D> {
    /// A holder backed by a haptic-capable device, such as a hand controller.
    Device(D),
    /// A holder with no haptic output, such as a socket or a script.
    Other,
}

impl<D> Holder<D> {
    /// Returns the device if this holder can vibrate.
    #[must_use]
    pub fn device(&self) -> Option<&D> {
        match self {
            Holder::Device(device) => Some(device),
            Holder::Other => None,
        }
    }
}

/// An interactable object that can be held by one or more holders.
pub trait Holdable<D> {
    /// Current holders, in the order they started holding.
    fn holders(&self) -> &[Holder<D>];

    /// Whether anything currently holds this object.
    fn is_held(&self) -> bool {
        !self.holders().is_empty()
    }

    /// Structurally related holdables: descendants in traversal order,
    /// followed by ancestors from nearest to farthest.
    fn relatives(&self) -> Vec<&dyn Holdable<D>>;
}
