//! Declared dependency constraints
//!
//! A DependencyConstraint is one entry of the manifest's dependency mapping,
//! read fresh on every check pass and immutable afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single declared dependency: package name plus its raw constraint string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyConstraint {
    /// The package name as written in the manifest
    pub name: String,
    /// The raw version constraint string (e.g., `^1.2.3`, `>=1.0.0 <2.0.0`)
    pub raw_spec: String,
}

impl DependencyConstraint {
    /// Creates a new DependencyConstraint
    pub fn new(name: impl Into<String>, raw_spec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_spec: raw_spec.into(),
        }
    }
}

impl fmt::Display for DependencyConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.raw_spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_constraint_new() {
        let dep = DependencyConstraint::new("http_parser", "^4.0.2");
        assert_eq!(dep.name, "http_parser");
        assert_eq!(dep.raw_spec, "^4.0.2");
    }

    #[test]
    fn test_display_trait() {
        let dep = DependencyConstraint::new("provider", "^6.1.1");
        assert_eq!(format!("{}", dep), "provider: ^6.1.1");
    }

    #[test]
    fn test_dependency_constraint_equality() {
        let a = DependencyConstraint::new("dio", "^5.4.0");
        let b = DependencyConstraint::new("dio", "^5.4.0");
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_round_trip() {
        let dep = DependencyConstraint::new("dio", ">=5.0.0 <6.0.0");
        let json = serde_json::to_string(&dep).unwrap();
        let parsed: DependencyConstraint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dep);
    }
}
