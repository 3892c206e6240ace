//! Error types for the translation core
//!
//! Adapters report what went wrong on the wire as a [`ProviderError`]. The
//! classifier turns that into an [`ErrorKind`], and whatever reaches the
//! caller is an [`ErrorInfo`].

use serde::{Deserialize, Serialize};

/// Raw failure of a provider call, before classification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The endpoint answered with a non-success status
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// No response arrived (connection refused, DNS, timeout, reset)
    #[error("transport failure: {0}")]
    Transport(String),

    /// A response arrived but did not have the expected shape
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// The bearer credential is not configured, detected before dispatch
    #[error("missing credential: {0}")]
    MissingCredential(String),

    /// The HTTP client itself could not be set up
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            ProviderError::Status {
                status: status.as_u16(),
                body: error.to_string(),
            }
        } else if error.is_timeout()
            || error.is_connect()
            || error.is_body()
            || error.is_request()
        {
            ProviderError::Transport(error.to_string())
        } else if error.is_decode() {
            ProviderError::MalformedResponse(error.to_string())
        } else if error.is_builder() {
            ProviderError::Client(error.to_string())
        } else {
            ProviderError::Transport(error.to_string())
        }
    }
}

/// Result type for adapter calls
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Classified failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    AuthError,
    RateLimited,
    NetworkError,
    Unknown,
}

impl ErrorKind {
    /// Whether the same call may succeed later without configuration changes
    pub fn is_retryable(self) -> bool {
        !matches!(self, ErrorKind::AuthError)
    }

    /// Whether the orchestrator substitutes a mock translation for this failure
    pub fn is_fallback_eligible(self) -> bool {
        matches!(self, ErrorKind::NetworkError | ErrorKind::Unknown)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::AuthError => "AuthError",
            ErrorKind::RateLimited => "RateLimited",
            ErrorKind::NetworkError => "NetworkError",
            ErrorKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Failure surfaced to the caller of `translate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
    pub retryable: bool,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable: kind.is_retryable(),
        }
    }
}

/// A request that cannot be dispatched at all
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("input text is empty")]
    EmptyInput,

    #[error("invalid language code: {0}")]
    InvalidLanguage(String),
}

/// Failure of a session-level translation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Nothing was dispatched
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The provider failed in a way that is not covered by fallback
    #[error(transparent)]
    Translation(#[from] ErrorInfo),
}
