// SPDX-License-Identifier: MPL-2.0
//! Preview handles backed by Iced's image cache.
//!
//! Image files with a path get an [`image::Handle`]; decoding happens lazily
//! in the renderer. Everything else gets a fallback handle. Releasing a
//! handle drops the image handle so the renderer can evict the texture.

use crate::application::port::{HandleId, PreviewHandle, PreviewKind, PreviewPort};
use crate::domain::File;
use iced::widget::image;
use std::collections::HashMap;

/// [`PreviewPort`] producing Iced image handles.
#[derive(Debug, Default)]
pub struct IcedPreviewPort {
    images: HashMap<HandleId, image::Handle>,
}

impl IcedPreviewPort {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Image behind a visual handle of the current generation.
    #[must_use]
    pub fn image(&self, id: HandleId) -> Option<&image::Handle> {
        self.images.get(&id)
    }

    /// Number of image handles currently held.
    #[must_use]
    pub fn held_images(&self) -> usize {
        self.images.len()
    }
}

impl PreviewPort for IcedPreviewPort {
    fn allocate(&mut self, file: &File) -> PreviewHandle {
        let id = HandleId::next();
        match file.path() {
            Some(path) if file.is_image() => {
                self.images.insert(id, image::Handle::from_path(path));
                PreviewHandle::new(id, PreviewKind::Visual)
            }
            _ => PreviewHandle::new(id, PreviewKind::Fallback),
        }
    }

    fn release(&mut self, handle: PreviewHandle) {
        self.images.remove(&handle.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_with_paths_get_visual_handles() {
        let mut port = IcedPreviewPort::new();
        let handle = port.allocate(&File::with_path("a.png", 1, "image/png", "/tmp/a.png"));
        assert!(handle.is_visual());
        assert!(port.image(handle.id()).is_some());

        port.release(handle);
        assert!(port.image(handle.id()).is_none());
        assert_eq!(port.held_images(), 0);
    }

    #[test]
    fn images_without_paths_fall_back() {
        let mut port = IcedPreviewPort::new();
        let handle = port.allocate(&File::new("a.png", 1, "image/png"));
        assert_eq!(handle.kind(), PreviewKind::Fallback);
        assert_eq!(port.held_images(), 0);
    }

    #[test]
    fn non_images_fall_back() {
        let mut port = IcedPreviewPort::new();
        let handle = port.allocate(&File::with_path("a.pdf", 1, "application/pdf", "/tmp/a.pdf"));
        assert_eq!(handle.kind(), PreviewKind::Fallback);
    }
}
