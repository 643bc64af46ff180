// SPDX-License-Identifier: MPL-2.0
//! Accept filter for the file dialog.
//!
//! Patterns follow the HTML `accept` attribute: exact mime types
//! (`application/pdf`), top-level wildcards (`image/*`) and file extensions
//! (`.pdf`). An empty filter is unrestricted.
//!
//! The filter is advisory: the dialog uses it to narrow the pickable set.
//! It is only applied to dropped or programmatically added files when the
//! selection box is configured to enforce it.

use super::file::File;
use std::fmt;

// =============================================================================
// AcceptPattern
// =============================================================================

/// A single accept pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptPattern {
    /// Full mime type, e.g. `application/pdf`.
    Mime(String),
    /// Top-level wildcard, stored without the `/*`, e.g. `image`.
    TopLevel(String),
    /// File extension, stored lowercase without the dot, e.g. `pdf`.
    Extension(String),
}

impl AcceptPattern {
    /// Parses one pattern. Returns `None` for blank input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Some(ext) = raw.strip_prefix('.') {
            return Some(Self::Extension(ext.to_ascii_lowercase()));
        }

        let lower = raw.to_ascii_lowercase();
        match lower.strip_suffix("/*") {
            Some(top) => Some(Self::TopLevel(top.to_string())),
            None => Some(Self::Mime(lower)),
        }
    }

    /// Returns `true` if `file` satisfies this pattern.
    #[must_use]
    pub fn matches(&self, file: &File) -> bool {
        match self {
            Self::Mime(mime) => file.mime_type().eq_ignore_ascii_case(mime),
            Self::TopLevel(top) => file
                .mime_type()
                .split_once('/')
                .is_some_and(|(file_top, _)| file_top.eq_ignore_ascii_case(top)),
            Self::Extension(ext) => file
                .name()
                .rsplit_once('.')
                .is_some_and(|(_, file_ext)| file_ext.eq_ignore_ascii_case(ext)),
        }
    }
}

impl fmt::Display for AcceptPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mime(mime) => write!(f, "{mime}"),
            Self::TopLevel(top) => write!(f, "{top}/*"),
            Self::Extension(ext) => write!(f, ".{ext}"),
        }
    }
}

// =============================================================================
// AcceptFilter
// =============================================================================

/// Set of accept patterns. Empty means every file is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AcceptFilter {
    patterns: Vec<AcceptPattern>,
}

impl AcceptFilter {
    /// Filter that accepts everything.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Parses a comma-separated list such as `"image/*, .pdf"`.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        Self::from_patterns(list.split(','))
    }

    /// Builds a filter from individual pattern strings. Blank entries are skipped.
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed: Vec<AcceptPattern> = Vec::new();
        for pattern in patterns.into_iter().filter_map(|p| AcceptPattern::parse(p.as_ref())) {
            if !parsed.contains(&pattern) {
                parsed.push(pattern);
            }
        }
        Self { patterns: parsed }
    }

    #[must_use]
    pub fn patterns(&self) -> &[AcceptPattern] {
        &self.patterns
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns `true` if `file` matches any pattern (or the filter is empty).
    #[must_use]
    pub fn matches(&self, file: &File) -> bool {
        self.is_unrestricted() || self.patterns.iter().any(|p| p.matches(file))
    }
}

impl fmt::Display for AcceptFilter {
    /// Renders the filter back into its comma-separated form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{pattern}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_unrestricted() {
        let filter = AcceptFilter::parse("");
        assert!(filter.is_unrestricted());
        assert!(filter.matches(&File::new("any.bin", 1, "application/octet-stream")));
    }

    #[test]
    fn parses_comma_separated_list() {
        let filter = AcceptFilter::parse("image/*, application/PDF ,.TXT");
        assert_eq!(
            filter.patterns(),
            &[
                AcceptPattern::TopLevel("image".into()),
                AcceptPattern::Mime("application/pdf".into()),
                AcceptPattern::Extension("txt".into()),
            ]
        );
        assert_eq!(filter.to_string(), "image/*,application/pdf,.txt");
    }

    #[test]
    fn duplicate_and_blank_patterns_are_dropped() {
        let filter = AcceptFilter::from_patterns(["image/*", "", "  ", "image/*"]);
        assert_eq!(filter.patterns().len(), 1);
    }

    #[test]
    fn wildcard_matches_top_level_type() {
        let filter = AcceptFilter::parse("image/*");
        assert!(filter.matches(&File::new("a.png", 1, "image/png")));
        assert!(filter.matches(&File::new("a.svg", 1, "IMAGE/svg+xml")));
        assert!(!filter.matches(&File::new("a.pdf", 1, "application/pdf")));
    }

    #[test]
    fn extension_matches_file_name() {
        let filter = AcceptFilter::parse(".pdf");
        assert!(filter.matches(&File::new("Report.PDF", 1, "application/octet-stream")));
        assert!(!filter.matches(&File::new("pdf", 1, "application/pdf")));
    }

    #[test]
    fn exact_mime_requires_full_match() {
        let filter = AcceptFilter::parse("text/plain");
        assert!(filter.matches(&File::new("a", 1, "text/plain")));
        assert!(!filter.matches(&File::new("a", 1, "text/csv")));
    }
}
