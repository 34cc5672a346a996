//! pub.dev registry access
//!
//! This module provides:
//! - RegistryTransport: the async seam between resolution logic and HTTP,
//!   injectable for deterministic tests
//! - HttpTransport: reqwest-backed transport with defensive resource bounds
//! - VersionCache: time-windowed latest-version cache with lazy expiry
//! - RegistryClient: name validation, caching, per-name rate limiting and
//!   response validation on top of a transport

mod cache;
mod resolver;
mod transport;

pub use cache::{VersionCache, CACHE_WINDOW};
pub use resolver::RegistryClient;
pub use transport::{HttpTransport, RegistryResponse, RegistryTransport};
