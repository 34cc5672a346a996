//! Core domain types for the freshness engine
//!
//! This module provides:
//! - DependencyConstraint: one declared dependency from the manifest
//! - ColumnSpan / OutdatedEntry: scan findings with exact text locations
//! - UpdateEdit: a request to rewrite one version token
//! - Severity: patch/minor/major classification of an available update

mod dependency;
mod entry;
mod severity;

pub use dependency::DependencyConstraint;
pub use entry::{ColumnSpan, OutdatedEntry, UpdateEdit};
pub use severity::Severity;
