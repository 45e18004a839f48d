//! The detection pipeline: light detection, then full extraction.

use std::sync::Arc;
use std::time::Duration;

use cvscreen_extract::{CvExtractor, ExtractError, ExtractionRequest};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::model::{CvDetectionState, DetectionStep};
use crate::config::CvDetectionConfig;
use crate::detect::detect_light_cv;
use crate::email::Email;

/// Default deadline for one extraction call.
const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Sequences light detection and full extraction for one email.
///
/// Each run is single-attempt: no retries, no caching, no deduplication.
/// The pipeline never returns an error; every failure mode lands in a
/// [`DetectionStep::Failed`] state with a message.
pub struct CvDetectionPipeline {
    extractor: Arc<dyn CvExtractor>,
    config: CvDetectionConfig,
    extraction_timeout: Duration,
}

impl CvDetectionPipeline {
    /// Create a pipeline using the given extractor and configuration.
    #[must_use]
    pub fn new(extractor: Arc<dyn CvExtractor>, config: CvDetectionConfig) -> Self {
        Self {
            extractor,
            config,
            extraction_timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }

    /// Override the deadline imposed on the extraction call.
    #[must_use]
    pub const fn with_extraction_timeout(mut self, timeout: Duration) -> Self {
        self.extraction_timeout = timeout;
        self
    }

    /// Process one email to a terminal state.
    pub async fn process(&self, email: &Email) -> CvDetectionState {
        self.process_with_cancel(email, &CancellationToken::new())
            .await
    }

    /// Process one email, abandoning the extraction call when `cancel`
    /// fires. Cancellation surfaces as a `failed` state, not a panic or an
    /// error return.
    pub async fn process_with_cancel(
        &self,
        email: &Email,
        cancel: &CancellationToken,
    ) -> CvDetectionState {
        let mut state = CvDetectionState::new(&email.id);

        state.step = DetectionStep::LightDetection;
        let light = detect_light_cv(email, &self.config);
        let proceed = light.should_proceed_to_full_extraction;
        let file_name = light.potential_cv_file_name.clone();
        debug!(
            email_id = %email.id,
            confidence = light.confidence,
            proceed,
            "Light detection done"
        );
        state.light_detection = Some(light);

        if !proceed {
            // Not a failure: the email just does not look like a CV.
            state.step = DetectionStep::Completed;
            return state;
        }

        state.step = DetectionStep::FullExtraction;
        let request = ExtractionRequest::from_file_name(file_name.unwrap_or_default())
            .with_email_id(&email.id);

        match tokio::time::timeout(
            self.extraction_timeout,
            self.extractor.extract(&request, cancel),
        )
        .await
        {
            Err(_elapsed) => {
                warn!(email_id = %email.id, "Extraction timed out");
                state.step = DetectionStep::Failed;
                state.error = Some(ExtractError::Timeout.to_string());
            }
            Ok(Err(e)) => {
                if e.is_cancellation() {
                    debug!(email_id = %email.id, "Extraction abandoned by caller");
                } else {
                    warn!(email_id = %email.id, error = %e, "Extraction errored");
                }
                state.step = DetectionStep::Failed;
                state.error = Some(e.to_string());
            }
            Ok(Ok(extraction)) => {
                if extraction.success {
                    state.step = DetectionStep::Completed;
                } else {
                    state.step = DetectionStep::Failed;
                    state.error = Some(extraction.error_message());
                }
                state.full_extraction = Some(extraction);
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cvscreen_extract::{
        CvExtraction, ExtractError, SimulatedExtractor,
    };

    /// Extractor that always errors at the boundary.
    struct BrokenExtractor;

    #[async_trait]
    impl CvExtractor for BrokenExtractor {
        async fn extract(
            &self,
            _request: &ExtractionRequest,
            _cancel: &CancellationToken,
        ) -> cvscreen_extract::Result<CvExtraction> {
            Err(ExtractError::Provider("model unavailable".to_string()))
        }
    }

    /// Extractor that replies, but with a failed extraction.
    struct RejectingExtractor {
        errors: Vec<String>,
    }

    #[async_trait]
    impl CvExtractor for RejectingExtractor {
        async fn extract(
            &self,
            _request: &ExtractionRequest,
            _cancel: &CancellationToken,
        ) -> cvscreen_extract::Result<CvExtraction> {
            Ok(CvExtraction::failure(self.errors.clone()))
        }
    }

    /// Extractor that never finishes.
    struct StuckExtractor;

    #[async_trait]
    impl CvExtractor for StuckExtractor {
        async fn extract(
            &self,
            _request: &ExtractionRequest,
            _cancel: &CancellationToken,
        ) -> cvscreen_extract::Result<CvExtraction> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(CvExtraction::failure(Vec::new()))
        }
    }

    fn cv_email() -> Email {
        let mut email = Email::new("m-1");
        email.subject = "Candidature - Développeur".to_string();
        email.preview = "ma candidature pour le poste".to_string();
        email.sender_email = "jean@gmail.com".to_string();
        email.has_attachment = true;
        email.attachments = vec!["CV_Dupont.pdf".to_string()];
        email
    }

    fn plain_email() -> Email {
        let mut email = Email::new("m-2");
        email.subject = "Réunion lundi".to_string();
        email.preview = "on se voit lundi ?".to_string();
        email.sender_email = "collegue@example.com".to_string();
        email
    }

    fn pipeline(extractor: Arc<dyn CvExtractor>) -> CvDetectionPipeline {
        CvDetectionPipeline::new(extractor, CvDetectionConfig::default())
    }

    #[tokio::test]
    async fn test_full_run_completes_with_extraction() {
        let state = pipeline(Arc::new(SimulatedExtractor::new()))
            .process(&cv_email())
            .await;

        assert_eq!(state.step, DetectionStep::Completed);
        assert_eq!(state.email_id, "m-1");
        let extraction = state.full_extraction.unwrap();
        assert!(extraction.success);
        assert_eq!(extraction.first_name, "Dupont");
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_short_circuit_skips_extraction() {
        let state = pipeline(Arc::new(BrokenExtractor)).process(&plain_email()).await;

        // Completed without touching the (broken) extractor.
        assert_eq!(state.step, DetectionStep::Completed);
        assert!(state.full_extraction.is_none());
        assert!(state.error.is_none());
        assert!(!state.light_detection.unwrap().is_likely_cv);
    }

    #[tokio::test]
    async fn test_extractor_error_becomes_failed_state() {
        let state = pipeline(Arc::new(BrokenExtractor)).process(&cv_email()).await;

        assert_eq!(state.step, DetectionStep::Failed);
        assert_eq!(
            state.error.as_deref(),
            Some("Provider error: model unavailable")
        );
    }

    #[tokio::test]
    async fn test_unsuccessful_extraction_joins_errors() {
        let extractor = RejectingExtractor {
            errors: vec!["no text layer".to_string(), "scan only".to_string()],
        };
        let state = pipeline(Arc::new(extractor)).process(&cv_email()).await;

        assert_eq!(state.step, DetectionStep::Failed);
        assert_eq!(state.error.as_deref(), Some("no text layer; scan only"));
        assert!(state.full_extraction.is_some());
    }

    #[tokio::test]
    async fn test_unsuccessful_extraction_without_details() {
        let extractor = RejectingExtractor { errors: Vec::new() };
        let state = pipeline(Arc::new(extractor)).process(&cv_email()).await;

        assert_eq!(state.step, DetectionStep::Failed);
        assert_eq!(
            state.error.as_deref(),
            Some("Extraction failed without details")
        );
    }

    #[tokio::test]
    async fn test_cancellation_becomes_failed_state() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let state = pipeline(Arc::new(SimulatedExtractor::new()))
            .process_with_cancel(&cv_email(), &cancel)
            .await;

        assert_eq!(state.step, DetectionStep::Failed);
        assert_eq!(state.error.as_deref(), Some("Extraction cancelled"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_becomes_failed_state() {
        let state = pipeline(Arc::new(StuckExtractor))
            .with_extraction_timeout(Duration::from_millis(50))
            .process(&cv_email())
            .await;

        assert_eq!(state.step, DetectionStep::Failed);
        assert_eq!(state.error, Some(ExtractError::Timeout.to_string()));
    }

    #[tokio::test]
    async fn test_reprocessing_is_equivalent() {
        let pipeline = pipeline(Arc::new(SimulatedExtractor::new()));
        let email = cv_email();

        let a = pipeline.process(&email).await;
        let b = pipeline.process(&email).await;

        assert_eq!(a.step, b.step);
        assert_eq!(
            a.full_extraction.unwrap().full_name(),
            b.full_extraction.unwrap().full_name()
        );
    }
}
