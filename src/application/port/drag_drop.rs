// SPDX-License-Identifier: MPL-2.0
//! Drag-and-drop port definition.

use crate::domain::File;

/// A drag-and-drop signal in domain terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropSignal {
    /// Files are being dragged over the box.
    DragOver,
    /// The drag left the box without dropping.
    DragLeave,
    /// A complete batch was dropped.
    Drop(Vec<File>),
}

/// Drop effect reported back to the host for a drag-over signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    /// Dropped files will be copied into the selection.
    Copy,
    /// The drop would be rejected.
    None,
}

/// Port translating raw host events into [`DropSignal`]s.
///
/// Hosts deliver drag-and-drop as a stream of low-level events (one per file
/// on most platforms). An adapter keeps whatever state it needs to assemble
/// those into whole batches and hands out a signal whenever one completes.
pub trait DropSource {
    /// Host event type (e.g. `iced::window::Event`).
    type Event;

    /// Feeds one host event. Returns the signal it completes, if any.
    fn translate(&mut self, event: Self::Event) -> Option<DropSignal>;
}
