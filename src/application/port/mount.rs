// SPDX-License-Identifier: MPL-2.0
//! Mount target port definition.

use std::fmt;

/// Name of the host slot a selection box is mounted into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountTarget(String);

impl MountTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MountTarget {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Port answering whether a slot exists in the host layout.
pub trait MountHost {
    /// Returns `true` if `target` names a slot the host can render into.
    fn has_slot(&self, target: &MountTarget) -> bool;
}
