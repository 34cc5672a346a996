//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading or parsing the pubspec manifest
//! - RegistryError: Issues with pub.dev registry communication
//!
//! Per-dependency registry failures never escape a scan; they are logged and
//! the affected dependency is skipped. A malformed manifest is the only hard
//! failure a scan surfaces.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors related to manifest operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error, fatal for the whole scan
    #[error("failed to parse manifest: {message}")]
    Parse { message: String },
}

/// Errors related to pub.dev registry communication
///
/// Every variant resolves to the same external signal (the dependency is
/// skipped); the variants exist so failures are logged distinctly.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package name failed validation before any network use
    #[error("invalid package name '{package}': {reason}")]
    InvalidName { package: String, reason: String },

    /// Registry returned a non-200 status
    #[error("package '{package}' not found on registry (status: {status})")]
    NotFound { package: String, status: u16 },

    /// Network request failed
    #[error("failed to fetch package '{package}': {message}")]
    Network { package: String, message: String },

    /// Request exceeded the timeout bound
    #[error("timeout while fetching '{package}'")]
    Timeout { package: String },

    /// Response body or version field failed validation
    #[error("invalid registry response for '{package}': {message}")]
    InvalidResponse { package: String, message: String },

    /// Response body exceeded the size cap
    #[error("registry response for '{package}' too large: {bytes} bytes")]
    ResponseTooLarge { package: String, bytes: usize },

    /// Failed to construct the HTTP client
    #[error("failed to create HTTP client: {message}")]
    ClientError { message: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        ManifestError::Parse {
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new InvalidName error
    pub fn invalid_name(package: impl Into<String>, reason: impl Into<String>) -> Self {
        RegistryError::InvalidName {
            package: package.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new NotFound error
    pub fn not_found(package: impl Into<String>, status: u16) -> Self {
        RegistryError::NotFound {
            package: package.into(),
            status,
        }
    }

    /// Creates a new Network error
    pub fn network(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Network {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            message: message.into(),
        }
    }
}
