//! Update severity tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// How large an available update is, by semantic-version component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Only the patch component differs (e.g., 1.2.3 -> 1.2.9)
    Patch,
    /// The minor component differs with the same major (e.g., 1.2.3 -> 1.3.0)
    Minor,
    /// The major component differs (e.g., 1.2.3 -> 2.0.0)
    Major,
}

impl Severity {
    /// Returns the lowercase name of this severity tier
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Patch => "patch",
            Severity::Minor => "minor",
            Severity::Major => "major",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
