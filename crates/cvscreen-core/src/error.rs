//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An external AI capability failed.
    #[error("Extraction error: {0}")]
    Extract(#[from] cvscreen_extract::ExtractError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use cvscreen_extract::ExtractError;

    #[test]
    fn test_extract_error_converts_and_keeps_message() {
        let error: Error = ExtractError::Provider("model unavailable".to_string()).into();
        assert_eq!(
            error.to_string(),
            "Extraction error: Provider error: model unavailable"
        );
    }
}
