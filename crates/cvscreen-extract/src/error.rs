//! Error types for the extraction boundary.

use thiserror::Error;

/// Errors that can occur when calling an external AI capability.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The provider returned an error or an unusable reply.
    #[error("Provider error: {0}")]
    Provider(String),

    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The reply could not be parsed into the expected shape.
    #[error("Unparseable reply: {0}")]
    Parse(String),

    /// The call exceeded the deadline imposed at the boundary.
    #[error("Extraction timed out")]
    Timeout,

    /// The caller abandoned the call.
    #[error("Extraction cancelled")]
    Cancelled,
}

impl ExtractError {
    /// Whether this error was caused by caller-side abandonment.
    #[must_use]
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result type alias using our `ExtractError` type.
pub type Result<T> = std::result::Result<T, ExtractError>;
