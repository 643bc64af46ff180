// SPDX-License-Identifier: MPL-2.0
//! Native file picker backed by `rfd`.

use super::fs;
use crate::application::port::{DialogRequest, FileDialog};
use crate::domain::{AcceptFilter, AcceptPattern, File};
use futures_util::future::{BoxFuture, FutureExt};
use std::path::PathBuf;

/// [`FileDialog`] presenting the platform's open-file dialog.
#[derive(Debug, Clone, Default)]
pub struct RfdFileDialog {
    title: String,
    filter_name: String,
    start_directory: Option<PathBuf>,
}

impl RfdFileDialog {
    /// Creates a dialog with the given window title and filter label.
    pub fn new(title: impl Into<String>, filter_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            filter_name: filter_name.into(),
            start_directory: None,
        }
    }

    /// Opens the dialog in `dir` when it exists.
    #[must_use]
    pub fn with_start_directory(mut self, dir: Option<PathBuf>) -> Self {
        self.start_directory = dir;
        self
    }
}

impl FileDialog for RfdFileDialog {
    fn present(&self, request: DialogRequest) -> BoxFuture<'static, Vec<File>> {
        let title = self.title.clone();
        let filter_name = self.filter_name.clone();
        let start_directory = self.start_directory.clone();

        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title(&title);

            let extensions = filter_extensions(&request.filter);
            if !extensions.is_empty() {
                dialog = dialog.add_filter(&filter_name, extensions.as_slice());
            }

            if let Some(dir) = start_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            let picked: Vec<PathBuf> = if request.multiple {
                dialog
                    .pick_files()
                    .await
                    .unwrap_or_default()
                    .iter()
                    .map(|h| h.path().to_path_buf())
                    .collect()
            } else {
                dialog
                    .pick_file()
                    .await
                    .map(|h| h.path().to_path_buf())
                    .into_iter()
                    .collect()
            };

            tracing::debug!(picked = picked.len(), multiple = request.multiple, "dialog closed");
            fs::files_from_paths(picked)
        }
        .boxed()
    }
}

/// Extensions the native dialog should offer for `filter`.
///
/// Native dialogs filter by extension only, so mime patterns are expanded
/// through the `mime_guess` tables. An empty result means no filter.
#[must_use]
pub fn filter_extensions(filter: &AcceptFilter) -> Vec<String> {
    let mut extensions: Vec<String> = Vec::new();
    let mut push = |ext: &str| {
        let ext = ext.to_ascii_lowercase();
        if !extensions.contains(&ext) {
            extensions.push(ext);
        }
    };

    for pattern in filter.patterns() {
        match pattern {
            AcceptPattern::Extension(ext) => push(ext.as_str()),
            AcceptPattern::Mime(mime) => {
                for ext in mime_guess::get_mime_extensions_str(mime).unwrap_or_default() {
                    push(*ext);
                }
            }
            AcceptPattern::TopLevel(top) => {
                let wildcard = format!("{top}/*");
                for ext in mime_guess::get_mime_extensions_str(&wildcard).unwrap_or_default() {
                    push(*ext);
                }
            }
        }
    }
    extensions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrestricted_filter_has_no_extensions() {
        assert!(filter_extensions(&AcceptFilter::unrestricted()).is_empty());
    }

    #[test]
    fn extension_patterns_pass_through() {
        let extensions = filter_extensions(&AcceptFilter::parse(".PDF,.txt,.pdf"));
        assert_eq!(extensions, vec!["pdf".to_string(), "txt".to_string()]);
    }

    #[test]
    fn mime_patterns_expand_to_known_extensions() {
        let extensions = filter_extensions(&AcceptFilter::parse("image/png"));
        assert!(extensions.contains(&"png".to_string()));
    }

    #[test]
    fn wildcard_expands_to_the_whole_top_level_type() {
        let extensions = filter_extensions(&AcceptFilter::parse("image/*"));
        assert!(extensions.contains(&"png".to_string()));
        assert!(extensions.contains(&"jpg".to_string()));
        assert!(!extensions.contains(&"pdf".to_string()));
    }
}
