//! Manifest parsing and text scanning
//!
//! This module provides:
//! - A structured YAML parse of the pubspec's dependency mapping
//! - A lexical scanner that locates the exact line and column span of each
//!   dependency's version token for precise replacement

mod pubspec;
mod scanner;

pub use pubspec::parse_dependencies;
pub use scanner::{find_dependency_line, find_spec_span};
