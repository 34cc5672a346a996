//! Scan findings and edit requests
//!
//! An OutdatedEntry carries everything the presentation layer needs to render
//! a finding and everything the edit routine needs to rewrite it: the exact
//! line and column span of the original version token. Entries are rebuilt on
//! every check pass; the engine never retains a superseded set.

use crate::domain::Severity;
use serde::{Deserialize, Serialize};

/// Byte offsets of a substring within one line of the manifest
///
/// The span always covers exactly the literal raw constraint token as it
/// appears in the text, so replacing it leaves surrounding whitespace and
/// comments untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpan {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl ColumnSpan {
    /// Creates a new ColumnSpan
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns true if the span covers no text
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// One outdated dependency found by a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutdatedEntry {
    /// Package name
    pub name: String,
    /// Version currently declared in the manifest (bare, no operator)
    pub current_version: String,
    /// Latest version known to the registry
    pub latest_version: String,
    /// Zero-based line index of the declaration in the manifest text
    pub line_number: usize,
    /// Span of the raw constraint token on that line
    pub column_span: ColumnSpan,
    /// Magnitude of the available update
    pub severity: Severity,
}

/// A request to replace one version token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEdit {
    /// Span of the original token on its line
    pub span: ColumnSpan,
    /// The new bare version to write
    pub new_version: String,
    /// Whether to re-attach the original constraint-operator prefix
    pub keep_prefix: bool,
}

impl UpdateEdit {
    /// Creates a new UpdateEdit
    pub fn new(span: ColumnSpan, new_version: impl Into<String>, keep_prefix: bool) -> Self {
        Self {
            span,
            new_version: new_version.into(),
            keep_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_span_new() {
        let span = ColumnSpan::new(4, 10);
        assert_eq!(span.start, 4);
        assert_eq!(span.end, 10);
        assert_eq!(span.len(), 6);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_column_span_empty() {
        assert!(ColumnSpan::new(3, 3).is_empty());
        assert!(ColumnSpan::new(5, 3).is_empty());
        assert_eq!(ColumnSpan::new(5, 3).len(), 0);
    }

    #[test]
    fn test_update_edit_new() {
        let edit = UpdateEdit::new(ColumnSpan::new(2, 8), "1.5.0", true);
        assert_eq!(edit.new_version, "1.5.0");
        assert!(edit.keep_prefix);
    }

    #[test]
    fn test_serde_outdated_entry() {
        let entry = OutdatedEntry {
            name: "http_parser".to_string(),
            current_version: "1.0.0".to_string(),
            latest_version: "1.0.1".to_string(),
            line_number: 7,
            column_span: ColumnSpan::new(15, 21),
            severity: Severity::Patch,
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"severity\":\"patch\""));

        let parsed: OutdatedEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
