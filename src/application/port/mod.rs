// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The selection core never talks to a windowing system, a file dialog or an
//! image cache directly. It goes through these traits, which infrastructure
//! adapters implement.
//!
//! # Available Ports
//!
//! - [`dialog`]: Presenting a native file picker
//! - [`drag_drop`]: Turning host drag-and-drop events into file batches
//! - [`preview`]: Allocating and releasing per-file preview handles
//! - [`mount`]: Resolving the slot a selection box is mounted into
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `rfd` types)
//! - No `async fn` - the dialog port returns a boxed future that callers
//!   hand to Iced's `Task::perform`

pub mod dialog;
pub mod drag_drop;
pub mod mount;
pub mod preview;

// Re-export main types for convenience
pub use dialog::{DialogRequest, FileDialog};
pub use drag_drop::{DropEffect, DropSignal, DropSource};
pub use mount::{MountHost, MountTarget};
pub use preview::{HandleId, PreviewHandle, PreviewKind, PreviewPort};
