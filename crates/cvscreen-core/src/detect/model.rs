//! Detection signal and result models.

use serde::{Deserialize, Serialize};

/// Where a detection signal was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// An attachment filename matched a CV pattern.
    Filename,
    /// An attachment has a CV-typical file extension.
    AttachmentType,
    /// The subject line contains a CV keyword.
    Subject,
    /// The body text contains a CV keyword.
    Body,
    /// The sender looks like a human address.
    Sender,
}

impl SignalKind {
    /// Convert to the wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Filename => "filename",
            Self::AttachmentType => "attachment_type",
            Self::Subject => "subject",
            Self::Body => "body",
            Self::Sender => "sender",
        }
    }
}

/// One observed piece of evidence that an email carries a CV.
///
/// Signals are append-only within a single detection run and are never
/// persisted beyond the result they belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSignal {
    /// Where the signal was observed.
    pub kind: SignalKind,
    /// The matched string (filename, keyword, or address).
    pub value: String,
    /// Positive contribution to the total weight.
    pub weight: u32,
    /// Human-readable justification.
    pub description: String,
}

impl DetectionSignal {
    /// Create a new signal.
    #[must_use]
    pub fn new(
        kind: SignalKind,
        value: impl Into<String>,
        weight: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            value: value.into(),
            weight,
            description: description.into(),
        }
    }
}

/// Result of the light, zero-cost CV pre-filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightDetection {
    /// Whether the email likely contains a CV.
    pub is_likely_cv: bool,
    /// Confidence score in 0..=100.
    pub confidence: u8,
    /// The evidence backing the score, in observation order.
    pub signals: Vec<DetectionSignal>,
    /// Whether full extraction should be attempted. Computed identically to
    /// `is_likely_cv` today; kept separate to preserve the result shape.
    pub should_proceed_to_full_extraction: bool,
    /// The attachment most likely to be the CV, when one stands out.
    pub potential_cv_file_name: Option<String>,
}

impl LightDetection {
    /// Sum of all signal weights.
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.signals.iter().map(|s| s.weight).sum()
    }
}
