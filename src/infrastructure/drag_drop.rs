// SPDX-License-Identifier: MPL-2.0
//! File drops from Iced window events.
//!
//! Iced reports a multi-file drag as one `FileHovered` event per file, then
//! one `FileDropped` event per file. The adapter counts hovered files and
//! releases the dropped paths as a single batch once every hovered file has
//! landed. Drops that arrive without a preceding hover are released
//! immediately.

use super::fs;
use crate::application::port::{DropSignal, DropSource};
use iced::window;
use std::path::PathBuf;

/// [`DropSource`] fed with Iced window events.
#[derive(Debug, Default)]
pub struct WindowDropSource {
    hovered: usize,
    pending: Vec<PathBuf>,
}

impl WindowDropSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` for the window events this adapter consumes.
    #[must_use]
    pub fn is_drop_event(event: &window::Event) -> bool {
        matches!(
            event,
            window::Event::FileHovered(_)
                | window::Event::FileDropped(_)
                | window::Event::FilesHoveredLeft
        )
    }

    fn reset(&mut self) {
        self.hovered = 0;
        self.pending.clear();
    }
}

impl DropSource for WindowDropSource {
    type Event = window::Event;

    fn translate(&mut self, event: window::Event) -> Option<DropSignal> {
        match event {
            window::Event::FileHovered(_) => {
                self.hovered += 1;
                Some(DropSignal::DragOver)
            }
            window::Event::FilesHoveredLeft => {
                self.reset();
                Some(DropSignal::DragLeave)
            }
            window::Event::FileDropped(path) => {
                self.pending.push(path);
                if self.pending.len() < self.hovered {
                    return None;
                }
                let paths = std::mem::take(&mut self.pending);
                self.hovered = 0;
                tracing::debug!(paths = paths.len(), "drop batch complete");
                Some(DropSignal::Drop(fs::files_from_paths(paths)))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &std::path::Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"data").expect("write file");
        path
    }

    #[test]
    fn hovered_files_are_batched_into_one_drop() {
        let dir = tempdir().expect("failed to create temp dir");
        let a = touch(dir.path(), "a.txt");
        let b = touch(dir.path(), "b.png");
        let mut source = WindowDropSource::new();

        assert_eq!(
            source.translate(window::Event::FileHovered(a.clone())),
            Some(DropSignal::DragOver)
        );
        assert_eq!(
            source.translate(window::Event::FileHovered(b.clone())),
            Some(DropSignal::DragOver)
        );
        assert_eq!(source.translate(window::Event::FileDropped(a)), None);

        match source.translate(window::Event::FileDropped(b)) {
            Some(DropSignal::Drop(files)) => {
                let names: Vec<&str> = files.iter().map(|f| f.name()).collect();
                assert_eq!(names, ["a.txt", "b.png"]);
                assert_eq!(files[1].mime_type(), "image/png");
            }
            other => panic!("expected drop batch, got {other:?}"),
        }
    }

    #[test]
    fn drop_without_hover_is_released_immediately() {
        let dir = tempdir().expect("failed to create temp dir");
        let a = touch(dir.path(), "a.txt");
        let mut source = WindowDropSource::new();

        assert!(matches!(
            source.translate(window::Event::FileDropped(a)),
            Some(DropSignal::Drop(files)) if files.len() == 1
        ));
    }

    #[test]
    fn leaving_discards_partial_state() {
        let dir = tempdir().expect("failed to create temp dir");
        let a = touch(dir.path(), "a.txt");
        let mut source = WindowDropSource::new();

        source.translate(window::Event::FileHovered(a.clone()));
        source.translate(window::Event::FileHovered(a.clone()));
        assert_eq!(
            source.translate(window::Event::FilesHoveredLeft),
            Some(DropSignal::DragLeave)
        );
        assert!(matches!(
            source.translate(window::Event::FileDropped(a)),
            Some(DropSignal::Drop(_))
        ));
    }

    #[test]
    fn unrelated_events_are_ignored() {
        let mut source = WindowDropSource::new();
        assert_eq!(source.translate(window::Event::Closed), None);
        assert!(!WindowDropSource::is_drop_event(&window::Event::Closed));
    }
}
