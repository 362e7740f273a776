//! Error types for unhash-fetch.

use std::time::Duration;

use thiserror::Error;

/// Failure to turn caller input into a 32-byte digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    #[error("not a valid hex/base64/base64url encoded hash \"{input}\": {reason}")]
    InvalidEncoding { input: String, reason: String },

    #[error("hash is invalid length: {actual} (should be: {expected} bytes)")]
    InvalidLength { actual: usize, expected: usize },

    #[error("hash is invalid type: {actual}")]
    InvalidType { actual: &'static str },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    InvalidHash(#[from] DigestError),

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("hash mismatch from {host}: expected {expected}, got {actual}")]
    HashMismatch {
        host:     String,
        expected: String,
        actual:   String,
    },

    #[error("request to {host} failed: {message}")]
    Network { host: String, message: String },

    #[error("{host} replied with HTTP {status}")]
    UnexpectedStatus { host: String, status: u16 },

    #[error("{host} did not answer within {after:?}")]
    Timeout { host: String, after: Duration },

    #[error("{}", describe_failures(.failures))]
    AllLegsFailed { failures: Vec<FetchError> },
}

impl FetchError {
    /// Host the failure came from, if it belongs to a single leg.
    pub fn host(&self) -> Option<&str> {
        match self {
            FetchError::HashMismatch { host, .. }
            | FetchError::Network { host, .. }
            | FetchError::UnexpectedStatus { host, .. }
            | FetchError::Timeout { host, .. } => Some(host),
            _ => None,
        }
    }
}

fn describe_failures(failures: &[FetchError]) -> String {
    if failures.is_empty() {
        return "no hosts to request from".to_string();
    }
    let details: Vec<String> = failures.iter().map(ToString::to_string).collect();
    format!("all {} hosts failed: {}", failures.len(), details.join("; "))
}

pub type Result<T> = std::result::Result<T, FetchError>;
