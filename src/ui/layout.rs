// SPDX-License-Identifier: MPL-2.0
//! Named slots of the host window.
//!
//! A selection box is mounted into a slot by name. The window lays out its
//! slots top to bottom; each slot holds at most one box.

use crate::application::port::{MountHost, MountTarget};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    slots: Vec<String>,
}

impl Layout {
    #[must_use]
    pub fn new<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut layout = Self::default();
        for slot in slots {
            layout = layout.with_slot(slot);
        }
        layout
    }

    /// A layout with exactly one slot.
    #[must_use]
    pub fn single(slot: impl Into<String>) -> Self {
        Self::new([slot])
    }

    /// Adds a slot. Duplicate names are ignored.
    #[must_use]
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        if !self.slots.contains(&slot) {
            self.slots.push(slot);
        }
        self
    }

    #[must_use]
    pub fn slots(&self) -> &[String] {
        &self.slots
    }
}

impl MountHost for Layout {
    fn has_slot(&self, target: &MountTarget) -> bool {
        self.slots.iter().any(|slot| slot == target.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_declared_slots_only() {
        let layout = Layout::new(["files", "attachments"]);
        assert!(layout.has_slot(&MountTarget::from("files")));
        assert!(layout.has_slot(&MountTarget::from("attachments")));
        assert!(!layout.has_slot(&MountTarget::from("sidebar")));
    }

    #[test]
    fn duplicate_slots_collapse() {
        let layout = Layout::single("files").with_slot("files");
        assert_eq!(layout.slots().len(), 1);
    }

    #[test]
    fn empty_layout_has_no_slots() {
        assert!(!Layout::default().has_slot(&MountTarget::from("files")));
    }
}
