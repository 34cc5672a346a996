//! HTTP transport for registry requests
//!
//! Wraps reqwest with the resource bounds every registry call must respect:
//! - Bounded request timeout (15 seconds)
//! - Descriptive User-Agent
//! - Certificate validation with a minimum TLS version
//! - Capped redirect following
//! - Capped response body size (1 MiB) before any parsing

use crate::error::RegistryError;
use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Default pub.dev registry base URL
pub const DEFAULT_REGISTRY_URL: &str = "https://pub.dev";

/// Timeout for registry requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// User-Agent header sent with every request
const USER_AGENT: &str = concat!("pubfresh/", env!("CARGO_PKG_VERSION"));

/// Maximum redirects followed per request
const MAX_REDIRECTS: usize = 5;

/// Maximum accepted response body size in bytes
const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// Raw outcome of a package-metadata request
///
/// A non-200 status carries a null body; the caller treats it as "not found"
/// rather than an error.
#[derive(Debug, Clone)]
pub struct RegistryResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed JSON body (null for non-200 responses)
    pub body: Value,
}

/// Transport seam between resolution logic and the network
///
/// Production uses HttpTransport; tests inject a deterministic fake so cache
/// and rate-limit behavior can be verified without a registry.
#[async_trait]
pub trait RegistryTransport: Send + Sync {
    /// Fetch package metadata for a validated package name
    async fn fetch_metadata(&self, package: &str) -> Result<RegistryResponse, RegistryError>;
}

/// reqwest-backed transport against the pub.dev metadata endpoint
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport against the default registry
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_base_url(DEFAULT_REGISTRY_URL)
    }

    /// Create a transport against a custom registry base URL
    pub fn with_base_url(base_url: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .https_only(base_url.starts_with("https://"))
            .build()
            .map_err(|e| RegistryError::ClientError {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the metadata URL for a package
    ///
    /// Names reaching this point are validated to `[a-z0-9_]+`, which needs
    /// no percent-encoding.
    fn build_url(&self, package: &str) -> String {
        format!("{}/api/packages/{}", self.base_url, package)
    }
}

#[async_trait]
impl RegistryTransport for HttpTransport {
    async fn fetch_metadata(&self, package: &str) -> Result<RegistryResponse, RegistryError> {
        let url = self.build_url(package);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(package)
            } else {
                RegistryError::network(package, e.to_string())
            }
        })?;

        let status = response.status().as_u16();

        if let Some(declared) = response.content_length() {
            if declared > MAX_RESPONSE_BYTES as u64 {
                return Err(RegistryError::ResponseTooLarge {
                    package: package.to_string(),
                    bytes: declared as usize,
                });
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RegistryError::network(package, e.to_string()))?;

        if bytes.len() > MAX_RESPONSE_BYTES {
            return Err(RegistryError::ResponseTooLarge {
                package: package.to_string(),
                bytes: bytes.len(),
            });
        }

        // Non-200 bodies are never parsed; the status alone decides
        let body = if status == 200 {
            serde_json::from_slice(&bytes)
                .map_err(|e| RegistryError::invalid_response(package, e.to_string()))?
        } else {
            Value::Null
        };

        Ok(RegistryResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_transport_creation() {
        let transport = HttpTransport::new();
        assert!(transport.is_ok());
    }

    #[test]
    fn test_build_url() {
        let transport = HttpTransport::new().unwrap();
        assert_eq!(
            transport.build_url("http_parser"),
            "https://pub.dev/api/packages/http_parser"
        );
    }

    #[test]
    fn test_build_url_custom_base_strips_trailing_slash() {
        let transport = HttpTransport::with_base_url("https://registry.example.com/").unwrap();
        assert_eq!(
            transport.build_url("dio"),
            "https://registry.example.com/api/packages/dio"
        );
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(REQUEST_TIMEOUT, Duration::from_secs(15));
        assert!(USER_AGENT.starts_with("pubfresh/"));
        assert_eq!(MAX_RESPONSE_BYTES, 1024 * 1024);
        assert_eq!(MAX_REDIRECTS, 5);
    }
}
