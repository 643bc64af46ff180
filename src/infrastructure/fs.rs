// SPDX-License-Identifier: MPL-2.0
//! Filesystem helpers turning picked or dropped paths into [`File`]s.

use crate::domain::File;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Reads name, size and mime type of the file at `path`.
///
/// The mime type is guessed from the extension; unknown extensions map to
/// `application/octet-stream`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the metadata cannot be read or the path is not a
/// regular file.
pub fn file_from_path(path: &Path) -> Result<File> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(Error::Io(format!("not a regular file: {}", path.display())));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok(File::with_path(name, metadata.len(), mime.essence_str(), path))
}

/// Converts every readable path, in order. Unreadable paths are logged and
/// skipped.
pub fn files_from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Vec<File> {
    paths
        .into_iter()
        .filter_map(|path| match file_from_path(&path) {
            Ok(file) => Some(file),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping unreadable file");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_size_and_guesses_mime() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("photo.png");
        std::fs::write(&path, [0u8; 1536]).expect("write file");

        let file = file_from_path(&path).expect("file");
        assert_eq!(file.name(), "photo.png");
        assert_eq!(file.size(), 1536);
        assert_eq!(file.mime_type(), "image/png");
        assert_eq!(file.path(), Some(path.as_path()));
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("blob.zzzunknown");
        std::fs::write(&path, b"x").expect("write file");

        let file = file_from_path(&path).expect("file");
        assert_eq!(file.mime_type(), "application/octet-stream");
    }

    #[test]
    fn directories_are_rejected() {
        let dir = tempdir().expect("failed to create temp dir");
        assert!(matches!(file_from_path(dir.path()), Err(Error::Io(_))));
    }

    #[test]
    fn missing_paths_are_skipped_in_batches() {
        let dir = tempdir().expect("failed to create temp dir");
        let present = dir.path().join("a.txt");
        std::fs::write(&present, b"hello").expect("write file");

        let files = files_from_paths(vec![dir.path().join("missing.txt"), present]);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name(), "a.txt");
    }
}
