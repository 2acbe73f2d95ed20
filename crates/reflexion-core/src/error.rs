use std::fmt;
use thiserror::Error;

/// A convenience `Result` alias using [`ReflexionError`].
pub type ReflexionResult<T> = Result<T, ReflexionError>;

/// Top-level error type for the Reflexion workspace.
///
/// The language-model call is the only runtime error source; the remaining
/// variants cover configuration loading and (de)serialization.
#[derive(Error, Debug)]
pub enum ReflexionError {
    /// The provider answered with a non-success HTTP status.
    #[error("Provider error ({kind}, status {status}): {message}")]
    Provider {
        /// Failure class derived from the status code.
        kind: ProviderErrorKind,
        /// Raw HTTP status code.
        status: u16,
        /// Response body or provider message.
        message: String,
    },

    /// The request never produced a response (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider answered successfully but no generated text was found.
    #[error("Malformed provider response: {0}")]
    Response(String),

    /// An error in configuration parsing or validation.
    #[error("Config error: {0}")]
    Config(String),

    /// A JSON serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReflexionError {
    /// Builds a [`ReflexionError::Provider`] from a status code and body.
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            kind: ProviderErrorKind::from_status(status),
            status,
            message: message.into(),
        }
    }

    /// Returns the provider failure class, if this is a provider error.
    pub fn provider_kind(&self) -> Option<ProviderErrorKind> {
        match self {
            Self::Provider { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Failure classes a hosted completion API can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Missing, invalid or unauthorized credential (401, 403).
    Auth,
    /// Quota or rate limit exceeded (429).
    RateLimit,
    /// The request was rejected as malformed (other 4xx).
    InvalidRequest,
    /// The provider failed internally (5xx).
    Server,
    /// Any other non-success status.
    Other,
}

impl ProviderErrorKind {
    /// Classifies an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Auth,
            429 => Self::RateLimit,
            400..=499 => Self::InvalidRequest,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Auth => "auth",
            Self::RateLimit => "rate limit",
            Self::InvalidRequest => "invalid request",
            Self::Server => "server",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}
