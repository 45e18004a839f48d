//! Capability traits for the external AI collaborators.
//!
//! Full CV extraction and email classification are opaque external
//! capabilities (in production a language-model endpoint, in tests a
//! deterministic simulator). Callers depend on these traits, never on a
//! concrete vendor client.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::model::{ClassifyInput, CvExtraction, ExtractionRequest, RawClassification};

/// Extracts structured candidate data from a CV document.
///
/// Invoked at most once per detection run. Implementations must honor the
/// cancellation token: when it fires, return [`ExtractError::Cancelled`]
/// promptly instead of completing the call.
///
/// [`ExtractError::Cancelled`]: crate::ExtractError::Cancelled
#[async_trait]
pub trait CvExtractor: Send + Sync {
    /// Run full extraction for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider is unreachable, replies with an
    /// unusable payload, or the call is cancelled. A *parseable* reply that
    /// merely describes a bad document is not an error: it comes back as a
    /// [`CvExtraction`] with `success = false`.
    async fn extract(
        &self,
        request: &ExtractionRequest,
        cancel: &CancellationToken,
    ) -> Result<CvExtraction>;
}

/// Classifies an email into a raw category label.
///
/// The label is a plain string; the caller owns the taxonomy and maps
/// unknown labels onto its catch-all category.
#[async_trait]
pub trait ClassifyBackend: Send + Sync {
    /// Classify the given email content.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider is unreachable or the reply
    /// cannot be parsed.
    async fn classify(&self, input: &ClassifyInput) -> Result<RawClassification>;
}
