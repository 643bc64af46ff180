// SPDX-License-Identifier: MPL-2.0
//! Selection bounds.

use std::fmt;
use std::num::NonZeroUsize;

/// Maximum number of files a selection may hold.
///
/// A limit of one switches the selection to replace semantics: every
/// successful add discards the previous file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxFiles {
    /// At most this many files.
    Limited(NonZeroUsize),
    /// No upper bound.
    #[default]
    Unbounded,
}

impl MaxFiles {
    /// A single-file selection (replace semantics).
    pub const SINGLE: Self = Self::Limited(NonZeroUsize::MIN);

    /// Creates a limit from a count. Returns `None` for zero.
    #[must_use]
    pub fn limited(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self::Limited)
    }

    /// Returns the numeric limit, or `None` when unbounded.
    #[must_use]
    pub fn get(self) -> Option<usize> {
        match self {
            Self::Limited(n) => Some(n.get()),
            Self::Unbounded => None,
        }
    }

    /// Returns `true` for a limit of exactly one.
    #[must_use]
    pub fn is_single(self) -> bool {
        self == Self::SINGLE
    }

    /// Returns `true` when more than one file may be picked at once.
    #[must_use]
    pub fn allows_multiple(self) -> bool {
        !self.is_single()
    }

    /// Free slots left when `current` files are selected.
    #[must_use]
    pub fn remaining(self, current: usize) -> usize {
        match self {
            Self::Limited(n) => n.get().saturating_sub(current),
            Self::Unbounded => usize::MAX,
        }
    }

    /// Returns `true` when `current` equals the limit.
    #[must_use]
    pub fn is_reached(self, current: usize) -> bool {
        self.get() == Some(current)
    }
}

impl fmt::Display for MaxFiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(n) => write!(f, "{n}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}
