// SPDX-License-Identifier: MPL-2.0
use crate::domain::FileId;
use thiserror::Error;

/// Errors surfaced by the selection box and its adapters.
///
/// Oversubscribed batches and filtered-out mime types are not errors: they
/// are truncated away silently. Only removal of something that is not there
/// and mounting into a missing slot are reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("UI Error: {0}")]
    Ui(String),

    /// No slot with this name exists in the host layout.
    #[error("mount target not found: {0}")]
    TargetNotFound(String),

    /// Positional removal outside the current selection.
    #[error("index {index} out of range for {len} selected file(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Id-based removal of a file that is no longer selected.
    #[error("file {0} is not selected")]
    UnknownFile(FileId),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Ui(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn index_out_of_range_reports_bounds() {
        let err = Error::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index 4 out of range for 2 selected file(s)");
    }

    #[test]
    fn target_not_found_names_target() {
        let err = Error::TargetNotFound("sidebar".into());
        assert!(err.to_string().contains("sidebar"));
    }
}
