// SPDX-License-Identifier: MPL-2.0
//! Selected file values.
//!
//! A [`File`] is an immutable description of something the user picked or
//! dropped. Identity is reference identity: cloning a `File` yields the same
//! file, while two files built from identical attributes stay distinct.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Mime prefix shared by every previewable image type.
const IMAGE_MIME_PREFIX: &str = "image/";

// =============================================================================
// FileId
// =============================================================================

/// Stable identifier assigned to a file when it enters a selection.
///
/// Positions shift on every removal; ids do not. View bindings (remove
/// buttons) hold an id and resolve it to a position only when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u64);

impl FileId {
    /// Returns a new process-unique id.
    #[must_use]
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// File
// =============================================================================

#[derive(Debug)]
struct FileData {
    name: String,
    size: u64,
    mime_type: String,
    path: Option<PathBuf>,
}

/// A file offered to the selection box.
#[derive(Debug, Clone)]
pub struct File(Arc<FileData>);

impl File {
    /// Creates a file that has no backing path (e.g. added programmatically).
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self(Arc::new(FileData {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            path: None,
        }))
    }

    /// Creates a file backed by a filesystem path.
    pub fn with_path(
        name: impl Into<String>,
        size: u64,
        mime_type: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self(Arc::new(FileData {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            path: Some(path.into()),
        }))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.0.size
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.0.mime_type
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.0.path.as_deref()
    }

    /// Returns `true` when the mime type is an `image/*` type.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.0.mime_type.starts_with(IMAGE_MIME_PREFIX)
    }
}

impl PartialEq for File {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for File {}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} B)", self.0.name, self.0.mime_type, self.0.size)
    }
}
