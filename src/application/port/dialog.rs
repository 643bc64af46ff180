// SPDX-License-Identifier: MPL-2.0
//! File dialog port definition.

use crate::domain::{AcceptFilter, File};
use futures_util::future::BoxFuture;

/// What the selection box asks the dialog to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    /// Restricts the pickable set. Empty means any file.
    pub filter: AcceptFilter,
    /// Whether several files may be picked at once.
    pub multiple: bool,
}

/// Port for presenting a file picker.
///
/// The returned future resolves to the picked files, or an empty batch when
/// the user cancels. Cancellation is not an error.
///
/// # Example
///
/// ```ignore
/// use iced_dragbox::application::port::{DialogRequest, FileDialog};
///
/// fn browse(dialog: &impl FileDialog, request: DialogRequest) -> iced::Task<Message> {
///     iced::Task::perform(dialog.present(request), Message::DialogClosed)
/// }
/// ```
pub trait FileDialog {
    /// Presents the dialog for `request`.
    fn present(&self, request: DialogRequest) -> BoxFuture<'static, Vec<File>>;
}
