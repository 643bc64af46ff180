// SPDX-License-Identifier: MPL-2.0
//! Construction options for a selection box.
//!
//! Options are consumed by [`DragBox::mount`](super::DragBox::mount) and are
//! immutable afterwards.

use super::notify::{AddHook, RemoveHook};
use crate::domain::{AcceptFilter, File, MaxFiles};

/// Default empty-state hint for dragging.
pub const DEFAULT_TEXT_DRAG: &str = "Drag and drop here";
/// Default separator between the two empty-state hints.
pub const DEFAULT_TEXT_OR: &str = "or";
/// Default label of the browse button.
pub const DEFAULT_TEXT_SELECT: &str = "Browse files";

/// Default fallback icon for files without a visual preview.
pub const DEFAULT_ICON_FILE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#9ca3af" stroke-width="1.5" stroke-linejoin="round"><path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><path d="M14 2v6h6"/></svg>"##;
/// Default icon of the remove button.
pub const DEFAULT_ICON_REMOVE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#9ca3af" stroke-width="2" stroke-linecap="round"><path d="M6 6l12 12M18 6L6 18"/></svg>"##;

/// Strings shown in the empty state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texts {
    pub drag: String,
    pub or: String,
    pub select: String,
}

impl Default for Texts {
    fn default() -> Self {
        Self {
            drag: DEFAULT_TEXT_DRAG.to_string(),
            or: DEFAULT_TEXT_OR.to_string(),
            select: DEFAULT_TEXT_SELECT.to_string(),
        }
    }
}

/// SVG markup for the fallback and remove icons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icons {
    pub file: String,
    pub remove: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            file: DEFAULT_ICON_FILE.to_string(),
            remove: DEFAULT_ICON_REMOVE.to_string(),
        }
    }
}

/// Everything configurable on a selection box.
#[derive(Default)]
pub struct DragBoxOptions {
    pub accept: AcceptFilter,
    pub max_files: MaxFiles,
    /// Apply `accept` to dropped and programmatically added files too.
    pub enforce_accept: bool,
    pub texts: Texts,
    pub icons: Icons,
    pub on_add: Option<AddHook>,
    pub on_remove: Option<RemoveHook>,
}

impl std::fmt::Debug for DragBoxOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragBoxOptions")
            .field("accept", &self.accept)
            .field("max_files", &self.max_files)
            .field("enforce_accept", &self.enforce_accept)
            .field("texts", &self.texts)
            .field("on_add", &self.on_add.is_some())
            .field("on_remove", &self.on_remove.is_some())
            .finish_non_exhaustive()
    }
}

impl DragBoxOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn accept(mut self, accept: AcceptFilter) -> Self {
        self.accept = accept;
        self
    }

    #[must_use]
    pub fn max_files(mut self, max_files: MaxFiles) -> Self {
        self.max_files = max_files;
        self
    }

    #[must_use]
    pub fn enforce_accept(mut self, enforce: bool) -> Self {
        self.enforce_accept = enforce;
        self
    }

    #[must_use]
    pub fn texts(mut self, texts: Texts) -> Self {
        self.texts = texts;
        self
    }

    #[must_use]
    pub fn icons(mut self, icons: Icons) -> Self {
        self.icons = icons;
        self
    }

    #[must_use]
    pub fn on_add(mut self, hook: impl FnMut(&[File]) + Send + 'static) -> Self {
        self.on_add = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_remove(mut self, hook: impl FnMut(&File) + Send + 'static) -> Self {
        self.on_remove = Some(Box::new(hook));
        self
    }
}
