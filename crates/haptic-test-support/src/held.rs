//! Test held objects: an owned tree of holdables.

use haptic_core::held::{Holdable, Holder};

/// A held object with explicit holders, children and ancestors.
///
/// Ancestors are stored as owned copies because the tree is only read.
#[derive(Debug, Clone)]
pub struct MockHeldObject<D> {
    holders: Vec<Holder<D>>,
    children: Vec<MockHeldObject<D>>,
    ancestors: Vec<MockHeldObject<D>>,
}

impl<D> MockHeldObject<D> {
    /// An object nobody holds.
    #[must_use]
    pub fn unheld() -> Self {
        Self {
            holders: Vec::new(),
            children: Vec::new(),
            ancestors: Vec::new(),
        }
    }

    /// An object held by the given devices, in order.
    #[must_use]
    pub fn held_by(devices: impl IntoIterator<Item = D>) -> Self {
        Self {
            holders: devices.into_iter().map(Holder::Device).collect(),
            ..Self::unheld()
        }
    }

    /// Append a holder with no haptic output.
    #[must_use]
    pub fn with_other_holder(mut self) -> Self {
        self.holders.push(Holder::Other);
        self
    }

    /// Append a child object.
    #[must_use]
    pub fn with_child(mut self, child: MockHeldObject<D>) -> Self {
        self.children.push(child);
        self
    }

    /// Append an ancestor, nearest first.
    #[must_use]
    pub fn with_ancestor(mut self, ancestor: MockHeldObject<D>) -> Self {
        self.ancestors.push(ancestor);
        self
    }

    fn collect_descendants<'a>(&'a self, into: &mut Vec<&'a dyn Holdable<D>>) {
        for child in &self.children {
            into.push(child);
            child.collect_descendants(into);
        }
    }
}

impl<D> Holdable<D> for MockHeldObject<D> {
    fn holders(&self) -> &[Holder<D>] {
        &self.holders
    }

    fn relatives(&self) -> Vec<&dyn Holdable<D>> {
        let mut relatives: Vec<&dyn Holdable<D>> = Vec::new();
        self.collect_descendants(&mut relatives);
        relatives.extend(self.ancestors.iter().map(|a| a as &dyn Holdable<D>));
        relatives
    }
}
