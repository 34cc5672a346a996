//! pubfresh - dependency freshness engine for pubspec manifests
//!
//! This library checks the dependencies declared in a pubspec.yaml manifest
//! against the pub.dev registry:
//! - Extracts comparable versions from constraint strings
//! - Resolves latest versions with caching, rate limiting and defensive
//!   validation of untrusted responses
//! - Classifies available updates as patch, minor or major
//! - Produces exact line/column replacement spans for applying updates

pub mod classify;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod progress;
pub mod registry;
