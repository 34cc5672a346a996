//! Latest-version resolution with validation, caching and rate limiting
//!
//! RegistryClient sits between the engine and a RegistryTransport. Every
//! resolution failure (invalid name, network error, non-200 status, bad
//! response shape, suspect version string) is logged distinctly and collapses
//! to None: the caller skips that dependency and nothing escapes the scan.

use crate::error::RegistryError;
use crate::registry::{RegistryTransport, VersionCache};
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// The SDK's own pseudo-package, never registry-hosted
const SDK_PACKAGE: &str = "flutter";

/// Namespace prefix for SDK-internal packages
const SDK_NAMESPACE_PREFIX: &str = "flutter/";

/// Maximum accepted package name length
const MAX_NAME_LENGTH: usize = 64;

/// Minimum interval between requests for the same package name
const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(100);

/// Allowed package name pattern; anything else never reaches the network
static PACKAGE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").unwrap());

/// Strict character pattern a registry-reported version must match before it
/// is trusted, independent of semver parsing downstream
static RESPONSE_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?$").unwrap()
});

/// Returns true for the SDK pseudo-package and its namespace
fn is_sdk_package(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed == SDK_PACKAGE || trimmed.starts_with(SDK_NAMESPACE_PREFIX)
}

/// Trim and validate a raw package name
///
/// The accepted alphabet is lowercase `[a-z0-9_]`; uppercase, symbols, empty
/// and over-long names are rejected here rather than folded.
fn validate_name(raw: &str) -> Result<String, RegistryError> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(RegistryError::invalid_name(raw, "empty name"));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(RegistryError::invalid_name(
            raw,
            format!("exceeds {} characters", MAX_NAME_LENGTH),
        ));
    }
    if !PACKAGE_NAME_RE.is_match(name) {
        return Err(RegistryError::invalid_name(
            raw,
            "must match [a-z0-9_]+",
        ));
    }

    Ok(name.to_string())
}

/// Resolves latest package versions against a registry transport
///
/// Holds the instance-scoped cache and rate-limit state; resolution is
/// sequential within one scan, so plain maps suffice.
pub struct RegistryClient {
    transport: Box<dyn RegistryTransport>,
    cache: VersionCache,
    last_request: HashMap<String, Instant>,
    min_request_interval: Duration,
}

impl RegistryClient {
    /// Create a client over the given transport with default windows
    pub fn new(transport: Box<dyn RegistryTransport>) -> Self {
        Self {
            transport,
            cache: VersionCache::new(),
            last_request: HashMap::new(),
            min_request_interval: MIN_REQUEST_INTERVAL,
        }
    }

    /// Set a custom cache freshness window
    pub fn with_cache_window(mut self, window: Duration) -> Self {
        self.cache = VersionCache::with_window(window);
        self
    }

    /// Set a custom per-name minimum request interval
    pub fn with_min_request_interval(mut self, interval: Duration) -> Self {
        self.min_request_interval = interval;
        self
    }

    /// Resolve the latest known version of a package, or None to skip it
    pub async fn resolve_latest(&mut self, package: &str) -> Option<String> {
        if is_sdk_package(package) {
            debug!(package, "skipping SDK package");
            return None;
        }

        let name = match validate_name(package) {
            Ok(name) => name,
            Err(e) => {
                warn!(package, error = %e, "rejecting invalid package name");
                return None;
            }
        };

        if let Some(version) = self.cache.get(&name) {
            debug!(package = %name, version, "cache hit");
            return Some(version.to_string());
        }

        self.throttle(&name).await;

        let response = match self.transport.fetch_metadata(&name).await {
            Ok(response) => response,
            Err(e) => {
                match &e {
                    RegistryError::Timeout { .. } => {
                        warn!(package = %name, "registry request timed out")
                    }
                    RegistryError::Network { message, .. } => {
                        warn!(package = %name, %message, "network error fetching package")
                    }
                    RegistryError::ResponseTooLarge { bytes, .. } => {
                        warn!(package = %name, bytes, "oversized registry response rejected")
                    }
                    RegistryError::InvalidResponse { message, .. } => {
                        warn!(package = %name, %message, "unparseable registry response")
                    }
                    _ => warn!(package = %name, error = %e, "registry request failed"),
                }
                return None;
            }
        };

        if response.status != 200 {
            warn!(
                package = %name,
                status = response.status,
                "package not found on registry"
            );
            return None;
        }

        let Some(version) = response
            .body
            .pointer("/latest/version")
            .and_then(Value::as_str)
        else {
            warn!(package = %name, "response missing latest.version string");
            return None;
        };

        if !RESPONSE_VERSION_RE.is_match(version) {
            warn!(package = %name, version, "rejecting suspect version string");
            return None;
        }

        self.cache.insert(&name, version);
        Some(version.to_string())
    }

    /// Empty the version cache unconditionally
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Sleep out the remainder of the per-name minimum request interval
    async fn throttle(&mut self, name: &str) {
        if let Some(last) = self.last_request.get(name) {
            let elapsed = last.elapsed();
            if elapsed < self.min_request_interval {
                tokio::time::sleep(self.min_request_interval - elapsed).await;
            }
        }
        self.last_request.insert(name.to_string(), Instant::now());
    }
}
