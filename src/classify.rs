//! Freshness classification
//!
//! Compares two semantic versions and decides whether the declared one is
//! outdated and, if so, how large the available update is. Both functions are
//! defensive: inputs are validated upstream, but a parse failure here must
//! never abort a scan.

use crate::domain::Severity;
use semver::Version;
use tracing::warn;

/// Returns true if `current` is strictly older than `latest`
///
/// Uses full semantic-version ordering (major, minor, patch, pre-release
/// rules). Unparseable input yields false rather than an error.
pub fn is_outdated(current: &str, latest: &str) -> bool {
    match (Version::parse(current), Version::parse(latest)) {
        (Ok(cur), Ok(lat)) => cur < lat,
        _ => {
            warn!(current, latest, "invalid version format in comparison");
            false
        }
    }
}

/// Classifies the magnitude of an update from `current` to `latest`
///
/// Major components differ -> Major; else minor components differ -> Minor;
/// else Patch. Unparseable input defaults to Major, the most conservative
/// tier, so a finding is never silently dropped after is_outdated said yes.
pub fn classify(current: &str, latest: &str) -> Severity {
    match (Version::parse(current), Version::parse(latest)) {
        (Ok(cur), Ok(lat)) => {
            if cur.major != lat.major {
                Severity::Major
            } else if cur.minor != lat.minor {
                Severity::Minor
            } else {
                Severity::Patch
            }
        }
        _ => {
            warn!(current, latest, "invalid version format in classification");
            Severity::Major
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_outdated_older() {
        assert!(is_outdated("1.0.0", "1.0.1"));
        assert!(is_outdated("1.0.0", "1.1.0"));
        assert!(is_outdated("1.0.0", "2.0.0"));
    }

    #[test]
    fn test_is_outdated_equal() {
        assert!(!is_outdated("1.2.3", "1.2.3"));
    }

    #[test]
    fn test_is_outdated_newer_than_latest() {
        assert!(!is_outdated("2.0.0", "1.9.9"));
    }

    #[test]
    fn test_is_outdated_prerelease_ordering() {
        // Pre-release sorts before its release per semver rules
        assert!(is_outdated("1.0.0-alpha", "1.0.0"));
        assert!(is_outdated("1.0.0-alpha", "1.0.0-beta"));
        assert!(!is_outdated("1.0.0", "1.0.0-rc.1"));
    }

    #[test]
    fn test_is_outdated_invalid_input_is_false() {
        assert!(!is_outdated("not-a-version", "1.0.0"));
        assert!(!is_outdated("1.0.0", "garbage"));
        assert!(!is_outdated("", ""));
    }

    #[test]
    fn test_classify_major() {
        assert_eq!(classify("1.2.3", "2.0.0"), Severity::Major);
    }

    #[test]
    fn test_classify_minor() {
        assert_eq!(classify("1.2.3", "1.3.0"), Severity::Minor);
    }

    #[test]
    fn test_classify_patch() {
        assert_eq!(classify("1.2.3", "1.2.9"), Severity::Patch);
    }

    #[test]
    fn test_classify_major_wins_over_minor() {
        // Both components differ; the major mismatch decides
        assert_eq!(classify("1.2.3", "2.5.0"), Severity::Major);
    }

    #[test]
    fn test_classify_invalid_defaults_to_major() {
        assert_eq!(classify("bogus", "1.0.0"), Severity::Major);
        assert_eq!(classify("1.0.0", "bogus"), Severity::Major);
    }

    #[test]
    fn test_classify_multi_digit_components() {
        assert_eq!(classify("1.9.0", "1.10.0"), Severity::Minor);
        assert_eq!(classify("9.0.0", "10.0.0"), Severity::Major);
    }
}
