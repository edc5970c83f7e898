//! Error types for the agency core.
//!
//! Network failures never escape the lifecycle operations: the submitter and
//! the loader fold every [`ApiError`] into a terminal state value. The types
//! still carry enough detail for logging.

use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (DNS, refused connection, CORS, ...).
    #[error("transport failure: {0}")]
    Transport(String),
    /// Backend answered with a non-2xx status.
    #[error("backend returned status {status}")]
    Status { status: u16 },
    /// Response body could not be decoded.
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
            }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Invalid site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend url `{url}`: {reason}")]
    InvalidBackendUrl { url: String, reason: String },
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Lead form rejected before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("email address is malformed")]
    MalformedEmail,
}
