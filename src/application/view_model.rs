// SPDX-License-Identifier: MPL-2.0
//! Render synchronization: the view-model handed to the UI.
//!
//! The view-model is rebuilt from scratch after every mutation. Views never
//! read the selection directly.

use super::collection::Entry;
use super::port::PreviewHandle;
use crate::domain::{display_size, FileId, MaxFiles};

/// Display data for one selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    /// Binding for remove actions.
    pub id: FileId,
    pub display_name: String,
    pub display_size: String,
    pub handle: PreviewHandle,
    pub is_image: bool,
}

/// Snapshot of everything the view needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// No file is selected.
    pub empty: bool,
    /// Exactly one file in a single-file box (large preview layout).
    pub single: bool,
    /// The limit is reached; dialog and drop triggers should be suppressed.
    pub interaction_locked: bool,
    /// Files are currently dragged over the box.
    pub hovering: bool,
    /// Render pass counter. Unchanged by no-op operations.
    pub generation: u64,
    pub entries: Vec<EntryView>,
}

impl ViewModel {
    /// Derives the view-model from the selection and its preview handles.
    ///
    /// `handles` must be the generation allocated for `entries`, in the same
    /// order.
    #[must_use]
    pub fn derive(entries: &[Entry], handles: &[PreviewHandle], max_files: MaxFiles) -> Self {
        debug_assert_eq!(entries.len(), handles.len());

        let count = entries.len();
        let entries = entries
            .iter()
            .zip(handles)
            .map(|(entry, handle)| EntryView {
                id: entry.id(),
                display_name: entry.file().name().to_string(),
                display_size: display_size(entry.file().size()),
                handle: *handle,
                is_image: entry.file().is_image(),
            })
            .collect();

        Self {
            empty: count == 0,
            single: count == 1 && max_files.is_single(),
            interaction_locked: max_files.is_reached(count),
            hovering: false,
            generation: 0,
            entries,
        }
    }

    /// View-model of a box that has not rendered anything yet.
    #[must_use]
    pub fn initial(max_files: MaxFiles) -> Self {
        Self::derive(&[], &[], max_files)
    }
}
