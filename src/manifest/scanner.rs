//! Lexical manifest scanning
//!
//! Locates dependency declarations in the raw manifest text. The line search
//! is a trimmed `name:` prefix match, which assumes one declaration per line.
//! A commented-out or nested key with the same literal prefix can match first;
//! that is a known limitation of the heuristic, kept as-is.

use crate::domain::ColumnSpan;

/// Returns the zero-based index of the first line declaring `name`
pub fn find_dependency_line(lines: &[&str], name: &str) -> Option<usize> {
    let needle = format!("{}:", name);
    lines
        .iter()
        .position(|line| line.trim().starts_with(&needle))
}

/// Returns the span of the literal raw constraint substring within a line
///
/// The search anchors on the original token text, not a normalized form, so
/// the span survives inline comments and irregular spacing.
pub fn find_spec_span(line: &str, raw_spec: &str) -> Option<ColumnSpan> {
    if raw_spec.is_empty() {
        return None;
    }
    line.find(raw_spec)
        .map(|start| ColumnSpan::new(start, start + raw_spec.len()))
}
