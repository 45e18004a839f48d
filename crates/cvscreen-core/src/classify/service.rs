//! Classification service: backend calls, batch processing, manual
//! overrides, and the priority tie-break.

use std::sync::Arc;

use chrono::Utc;
use cvscreen_extract::{ClassifyBackend, ClassifyInput};
use tracing::{debug, warn};

use super::category::EmailCategory;
use super::model::ClassificationResult;
use crate::email::Email;
use crate::error::Result;

/// Classifies emails through an injected external backend.
pub struct EmailClassifier {
    backend: Arc<dyn ClassifyBackend>,
}

impl EmailClassifier {
    /// Create a classifier using the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn ClassifyBackend>) -> Self {
        Self { backend }
    }

    /// Classify one email.
    ///
    /// The backend's raw label is mapped onto the fixed taxonomy; unknown
    /// labels land in `non_classe`. Confidence above 100 is clamped.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend call fails.
    pub async fn classify(&self, email: &Email) -> Result<ClassificationResult> {
        let input = ClassifyInput {
            subject: email.subject.clone(),
            body: email.body_text().to_string(),
            sender_email: email.sender_email.clone(),
        };
        let raw = self.backend.classify(&input).await?;
        let category = EmailCategory::parse(&raw.category);
        debug!(
            email_id = %email.id,
            category = category.as_str(),
            confidence = raw.confidence,
            "Classified email"
        );
        Ok(ClassificationResult::new(
            category,
            raw.confidence,
            raw.reasoning,
        ))
    }

    /// Classify a batch of emails, one at a time, in input order.
    ///
    /// The output sequence matches the input sequence. A backend failure on
    /// one email yields a zero-confidence `non_classe` result for that email
    /// and never aborts the rest of the batch.
    pub async fn classify_batch(&self, emails: &[Email]) -> Vec<ClassificationResult> {
        let mut results = Vec::with_capacity(emails.len());
        for email in emails {
            match self.classify(email).await {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(email_id = %email.id, error = %e, "Classification failed");
                    results.push(ClassificationResult::new(
                        EmailCategory::NonClasse,
                        0,
                        format!("Classification failed: {e}"),
                    ));
                }
            }
        }
        results
    }
}

/// Write a classification onto the email's status fields.
pub fn apply_classification(email: &mut Email, result: &ClassificationResult) {
    email.category = Some(result.category);
    email.ai_confidence = Some(result.confidence);
    email.is_doubtful = result.is_doubtful;
    email.manually_classified = false;
    email.classified_at = Some(Utc::now());
}

/// Manually reclassify an email, overriding any prior classification.
///
/// A pure override: the classifier is not consulted, confidence becomes 100,
/// and the doubt flag is cleared.
pub fn reclassify_email(email: &mut Email, category: EmailCategory) {
    email.category = Some(category);
    email.ai_confidence = Some(100);
    email.is_doubtful = false;
    email.manually_classified = true;
    email.classified_at = Some(Utc::now());
}

/// Select the winning category among scored candidates.
///
/// The strictly highest score wins; an exact score tie goes to the category
/// appearing earlier in [`PRIORITY_ORDER`]. When no candidate beats the
/// running best, the result is `non_classe`.
///
/// `categories` and `scores` are parallel arrays of equal length
/// (caller-guaranteed); extra entries on either side are ignored.
///
/// [`PRIORITY_ORDER`]: super::category::PRIORITY_ORDER
#[must_use]
pub fn priority_category(categories: &[EmailCategory], scores: &[u32]) -> EmailCategory {
    debug_assert_eq!(categories.len(), scores.len());

    let mut best = EmailCategory::NonClasse;
    let mut best_score = 0;
    for (&category, &score) in categories.iter().zip(scores) {
        if score > best_score
            || (score == best_score && category.priority_rank() < best.priority_rank())
        {
            best = category;
            best_score = score;
        }
    }
    best
}
