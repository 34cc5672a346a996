//! pubspec.yaml dependency extraction
//!
//! Parses the whole document as YAML and reads the top-level `dependencies`
//! mapping. Only string-valued entries become constraints; git/path/sdk
//! dependencies use nested mappings and are not version-checkable here.

use crate::domain::DependencyConstraint;
use crate::error::ManifestError;
use serde_yaml::Value;

/// Parses the dependency mapping from raw manifest text
///
/// Returns the declared dependencies in mapping order. A document without a
/// `dependencies` mapping yields an empty list; malformed YAML is a hard
/// parse error for the whole scan.
pub fn parse_dependencies(text: &str) -> Result<Vec<DependencyConstraint>, ManifestError> {
    let document: Value = serde_yaml::from_str(text)
        .map_err(|e| ManifestError::parse_error(e.to_string()))?;

    let mut dependencies = Vec::new();

    let Some(mapping) = document.get("dependencies").and_then(Value::as_mapping) else {
        return Ok(dependencies);
    };

    for (key, value) in mapping {
        let Some(name) = key.as_str() else {
            continue;
        };
        // Nested mappings (sdk/git/path dependencies) carry no version token
        let Some(raw_spec) = value.as_str() else {
            continue;
        };
        dependencies.push(DependencyConstraint::new(name, raw_spec));
    }

    Ok(dependencies)
}
