//! Constraint string parsing
//!
//! Handles version constraint formats:
//! - Exact: `1.2.3`
//! - Operator prefixed: `^1.2.3`, `~1.2.3`, `>=1.2.3`
//! - Range: `>=1.0.0 <2.0.0` (only the first bound is extracted)
//! - Trailing comments: `1.2.3 # pinned for bug #123`

use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

/// Characters that may prefix a version constraint
const OPERATOR_CHARS: [char; 5] = ['^', '~', '>', '=', '<'];

/// First bare `digits.digits.digits` triple in a string
static VERSION_TRIPLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\.\d+").unwrap());

/// Extracts a bare semantic version from a raw constraint string
///
/// Strips leading operator characters (`^`, `~`, `>`, `=`, `<`, in any
/// combination), a trailing `#` comment and surrounding whitespace. If the
/// remainder is a valid semantic version it is returned as-is; otherwise the
/// first `digits.digits.digits` substring is returned. Range constraints like
/// `>=1.0.0 <2.0.0` therefore yield their first bound, which the engine
/// treats as the current version. Returns None when no version is found.
pub fn extract_version(raw_spec: &str) -> Option<String> {
    let without_comment = match raw_spec.find('#') {
        Some(idx) => &raw_spec[..idx],
        None => raw_spec,
    };

    let cleaned = without_comment
        .trim()
        .trim_start_matches(OPERATOR_CHARS)
        .trim();

    if cleaned.is_empty() {
        return None;
    }

    if Version::parse(cleaned).is_ok() {
        return Some(cleaned.to_string());
    }

    VERSION_TRIPLE_RE
        .find(cleaned)
        .map(|m| m.as_str().to_string())
}

/// Returns the leading operator/whitespace prefix of a raw constraint token
///
/// This is the part re-attached by prefix-preserving edits, captured from the
/// original token rather than re-synthesized.
pub fn constraint_prefix(raw_spec: &str) -> &str {
    let end = raw_spec
        .find(|c: char| !OPERATOR_CHARS.contains(&c) && !c.is_whitespace())
        .unwrap_or(raw_spec.len());
    &raw_spec[..end]
}
