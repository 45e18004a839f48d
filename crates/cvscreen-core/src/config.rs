//! Detection configuration.

use serde::{Deserialize, Serialize};

/// Tunable thresholds and display limits for CV detection.
///
/// Thresholds are compared as-is against confidence scores in 0..=100; a
/// threshold above 100 is accepted and simply never passes, since confidence
/// is capped at 100. No clamping or validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvDetectionConfig {
    /// Minimum light-detection confidence to proceed to full extraction.
    pub light_detection_threshold: u8,
    /// Minimum extraction confidence considered reliable by downstream
    /// consumers. Not used by the detector itself.
    pub full_extraction_threshold: u8,
    /// Maximum number of skills shown in compact candidate views.
    pub max_displayed_skills: usize,
    /// Maximum length of the candidate summary, in characters.
    pub max_summary_length: usize,
}

impl Default for CvDetectionConfig {
    fn default() -> Self {
        Self {
            light_detection_threshold: 40,
            full_extraction_threshold: 70,
            max_displayed_skills: 5,
            max_summary_length: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = CvDetectionConfig::default();
        assert_eq!(config.light_detection_threshold, 40);
        assert_eq!(config.full_extraction_threshold, 70);
        assert_eq!(config.max_displayed_skills, 5);
        assert_eq!(config.max_summary_length, 300);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: CvDetectionConfig =
            serde_json::from_str(r#"{"light_detection_threshold": 60}"#).unwrap();
        assert_eq!(config.light_detection_threshold, 60);
        assert_eq!(config.full_extraction_threshold, 70);
    }
}
