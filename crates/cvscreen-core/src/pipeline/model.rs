//! Detection pipeline state.

use cvscreen_extract::CvExtraction;
use serde::{Deserialize, Serialize};

use crate::detect::LightDetection;

/// Step of the CV detection pipeline.
///
/// Progresses monotonically: `pending → light_detection → full_extraction →
/// completed | failed`, with a short-circuit from `light_detection` straight
/// to `completed` when extraction is not warranted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionStep {
    /// Nothing has run yet.
    #[default]
    Pending,
    /// Light detection in progress.
    LightDetection,
    /// Full extraction in progress.
    FullExtraction,
    /// Terminal: the pipeline finished (with or without extraction).
    Completed,
    /// Terminal: extraction failed or an error was caught at the boundary.
    Failed,
}

impl DetectionStep {
    /// Parse from the wire string representation.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light_detection" => Self::LightDetection,
            "full_extraction" => Self::FullExtraction,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Pending,
        }
    }

    /// Convert to the wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::LightDetection => "light_detection",
            Self::FullExtraction => "full_extraction",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Whether this step is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Per-email record of one detection run.
///
/// Mutated monotonically through the state machine; never revisited once
/// terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvDetectionState {
    /// Id of the email being processed.
    pub email_id: String,
    /// Current pipeline step.
    pub step: DetectionStep,
    /// Light detection result, once that step ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_detection: Option<LightDetection>,
    /// Full extraction result, once that step ran (success or not).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_extraction: Option<CvExtraction>,
    /// Why the pipeline failed, when `step` is `failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CvDetectionState {
    /// Create a fresh pending state for the given email.
    #[must_use]
    pub fn new(email_id: impl Into<String>) -> Self {
        Self {
            email_id: email_id.into(),
            step: DetectionStep::Pending,
            light_detection: None,
            full_extraction: None,
            error: None,
        }
    }
}
