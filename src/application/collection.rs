// SPDX-License-Identifier: MPL-2.0
//! The ordered set of currently selected files.

use super::policy::Admission;
use crate::domain::{File, FileId, MaxFiles};
use crate::error::{Error, Result};

/// One selected file together with its stable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: FileId,
    file: File,
}

impl Entry {
    #[must_use]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[must_use]
    pub fn file(&self) -> &File {
        &self.file
    }
}

/// Canonical selection state.
///
/// Order is insertion order. The length never exceeds the configured limit.
#[derive(Debug, Clone)]
pub struct FileCollection {
    entries: Vec<Entry>,
    max_files: MaxFiles,
}

impl FileCollection {
    #[must_use]
    pub fn new(max_files: MaxFiles) -> Self {
        Self {
            entries: Vec::new(),
            max_files,
        }
    }

    #[must_use]
    pub fn max_files(&self) -> MaxFiles {
        self.max_files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn files(&self) -> impl ExactSizeIterator<Item = &File> {
        self.entries.iter().map(Entry::file)
    }

    /// Current position of `id`, if it is still selected.
    #[must_use]
    pub fn position(&self, id: FileId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Applies an admission and returns the files actually appended.
    ///
    /// The batch is clipped to the free room again, so an admission computed
    /// against stale state can never push the selection past its limit.
    pub fn add(&mut self, admission: Admission) -> Vec<File> {
        let Admission {
            mut accepted,
            replace,
        } = admission;
        if accepted.is_empty() {
            return accepted;
        }

        if replace {
            self.entries.clear();
        }
        accepted.truncate(self.max_files.remaining(self.entries.len()));

        self.entries.extend(accepted.iter().map(|file| Entry {
            id: FileId::next(),
            file: file.clone(),
        }));
        debug_assert!(self
            .max_files
            .get()
            .is_none_or(|max| self.entries.len() <= max));
        accepted
    }

    /// Removes the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a current position.
    pub fn remove_at(&mut self, index: usize) -> Result<File> {
        if index >= self.entries.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index).file)
    }

    /// Removes the entry with `id`, wherever it currently sits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFile`] if no entry carries `id`.
    pub fn remove(&mut self, id: FileId) -> Result<File> {
        let index = self.position(id).ok_or(Error::UnknownFile(id))?;
        Ok(self.entries.remove(index).file)
    }
}
