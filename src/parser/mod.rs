//! Version-constraint parsing
//!
//! This module provides extraction of a comparable semantic version from the
//! raw constraint strings found in pubspec dependency declarations.

mod constraint;

pub use constraint::{constraint_prefix, extract_version};
