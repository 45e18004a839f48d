//! Classification result model.

use serde::{Deserialize, Serialize};

use super::category::{CategoryGroup, EmailCategory};

/// Confidence below this is flagged for manual review.
pub const DOUBT_THRESHOLD: u8 = 70;

/// Outcome of classifying one email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Assigned category.
    pub category: EmailCategory,
    /// Semantic group the category rolls up into.
    pub category_group: CategoryGroup,
    /// Confidence in 0..=100.
    pub confidence: u8,
    /// Whether the confidence fell below [`DOUBT_THRESHOLD`].
    pub is_doubtful: bool,
    /// Free-text justification from the classifier.
    pub reasoning: String,
}

impl ClassificationResult {
    /// Build a result from a category and confidence, deriving the group and
    /// doubt flag. Confidence above 100 is clamped.
    #[must_use]
    pub fn new(category: EmailCategory, confidence: u8, reasoning: impl Into<String>) -> Self {
        let confidence = confidence.min(100);
        Self {
            category,
            category_group: category.group(),
            confidence,
            is_doubtful: confidence < DOUBT_THRESHOLD,
            reasoning: reasoning.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubt_threshold_boundary() {
        let doubtful = ClassificationResult::new(EmailCategory::Facture, 69, "");
        assert!(doubtful.is_doubtful);

        let confident = ClassificationResult::new(EmailCategory::Facture, 70, "");
        assert!(!confident.is_doubtful);
    }

    #[test]
    fn test_confidence_clamped_to_100() {
        let result = ClassificationResult::new(EmailCategory::Spam, 255, "");
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_group_is_derived_from_category() {
        let result = ClassificationResult::new(EmailCategory::CvSpontane, 90, "");
        assert_eq!(result.category_group, CategoryGroup::Recruitment);
    }
}
