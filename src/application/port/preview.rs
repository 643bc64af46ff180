// SPDX-License-Identifier: MPL-2.0
//! Preview handle port definition.
//!
//! A [`PreviewHandle`] is a revocable display reference bound to one file for
//! one render pass. Adapters decide what backs it (a decoded image, an object
//! URL, nothing at all for non-image files).

use crate::domain::File;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of one allocated preview handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

impl HandleId {
    /// Returns a new process-unique handle id.
    #[must_use]
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// How the view should present a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// A visual preview (thumbnail) is available.
    Visual,
    /// No visual preview; render the fallback file icon.
    Fallback,
}

/// A preview handle for the current render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewHandle {
    id: HandleId,
    kind: PreviewKind,
}

impl PreviewHandle {
    #[must_use]
    pub fn new(id: HandleId, kind: PreviewKind) -> Self {
        Self { id, kind }
    }

    #[must_use]
    pub fn id(&self) -> HandleId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> PreviewKind {
        self.kind
    }

    #[must_use]
    pub fn is_visual(&self) -> bool {
        self.kind == PreviewKind::Visual
    }
}

/// Port for allocating and releasing preview resources.
///
/// `allocate` must not fail: files without a visual preview receive a
/// [`PreviewKind::Fallback`] handle. Every allocated handle is released
/// exactly once.
pub trait PreviewPort {
    /// Allocates a handle for `file`.
    fn allocate(&mut self, file: &File) -> PreviewHandle;

    /// Releases a handle previously returned by `allocate`.
    fn release(&mut self, handle: PreviewHandle);
}
