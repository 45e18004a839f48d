//! Data models crossing the external AI boundary.

use serde::{Deserialize, Serialize};

/// Experience level of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Less than ~2 years of experience.
    Junior,
    /// Solid individual contributor.
    #[default]
    Mid,
    /// Senior individual contributor.
    Senior,
    /// Team or tech lead.
    Lead,
    /// Director level and above.
    Executive,
}

impl ExperienceLevel {
    /// Parse from the wire string representation.
    ///
    /// Unknown values fall back to [`ExperienceLevel::Mid`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "junior" => Self::Junior,
            "senior" => Self::Senior,
            "lead" => Self::Lead,
            "executive" => Self::Executive,
            _ => Self::Mid,
        }
    }

    /// Convert to the wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::Lead => "lead",
            Self::Executive => "executive",
        }
    }
}

/// A request to extract structured candidate data from a document.
///
/// The document itself may be unavailable; in that case the extractor works
/// from the filename alone (the simulator does, and the AI backend asks the
/// model to infer what it can).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRequest {
    /// Name of the attachment believed to be a CV.
    pub file_name: String,
    /// Id of the email the attachment came from, for correlation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
    /// Text content of the document, when the caller has it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_content: Option<String>,
}

impl ExtractionRequest {
    /// Create a request carrying only a filename.
    #[must_use]
    pub fn from_file_name(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            email_id: None,
            document_content: None,
        }
    }

    /// Attach the originating email id for correlation.
    #[must_use]
    pub fn with_email_id(mut self, email_id: impl Into<String>) -> Self {
        self.email_id = Some(email_id.into());
        self
    }

    /// Attach the document text.
    #[must_use]
    pub fn with_document_content(mut self, content: impl Into<String>) -> Self {
        self.document_content = Some(content.into());
        self
    }
}

/// Structured candidate data produced by full CV extraction.
///
/// Immutable after creation; one instance per (email, filename) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvExtraction {
    /// Whether the extraction produced usable candidate data.
    pub success: bool,
    /// Candidate first name.
    #[serde(default)]
    pub first_name: String,
    /// Candidate last name.
    #[serde(default)]
    pub last_name: String,
    /// Candidate email address.
    #[serde(default)]
    pub email: String,
    /// Candidate phone number, when present in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Position the candidate applies for or currently holds.
    #[serde(default)]
    pub position: String,
    /// Distinct skills, in document order.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Seniority estimate.
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    /// Years of professional experience, when stated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u8>,
    /// Candidate location, when stated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Short free-text summary of the profile.
    #[serde(default)]
    pub summary: String,
    /// Why the extraction failed, when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl CvExtraction {
    /// A failed extraction carrying the given error messages.
    #[must_use]
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: None,
            position: String::new(),
            skills: Vec::new(),
            experience_level: ExperienceLevel::default(),
            years_of_experience: None,
            location: None,
            summary: String::new(),
            errors: Some(errors),
        }
    }

    /// Candidate full name for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        name.trim().to_string()
    }

    /// The first `max` skills, for compact display.
    #[must_use]
    pub fn display_skills(&self, max: usize) -> &[String] {
        &self.skills[..self.skills.len().min(max)]
    }

    /// Summary truncated to `max` characters, with an ellipsis when cut.
    #[must_use]
    pub fn truncated_summary(&self, max: usize) -> String {
        if self.summary.chars().count() <= max {
            return self.summary.clone();
        }
        let cut: String = self.summary.chars().take(max.saturating_sub(1)).collect();
        format!("{}\u{2026}", cut.trim_end())
    }

    /// Joined error messages, or a generic message when the list is empty.
    #[must_use]
    pub fn error_message(&self) -> String {
        match self.errors.as_deref() {
            Some(errors) if !errors.is_empty() => errors.join("; "),
            _ => "Extraction failed without details".to_string(),
        }
    }
}

/// What an external classifier is given to work with.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyInput {
    /// Email subject line.
    pub subject: String,
    /// Email body or preview text.
    pub body: String,
    /// Sender address.
    pub sender_email: String,
}

/// Raw classification as returned by an external model, before the
/// caller maps the label onto its own taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClassification {
    /// Category label as emitted by the model.
    pub category: String,
    /// Confidence in 0..=100. Values above 100 are clamped by the caller.
    pub confidence: u8,
    /// Free-text justification.
    #[serde(default)]
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_level_roundtrip() {
        for level in [
            ExperienceLevel::Junior,
            ExperienceLevel::Mid,
            ExperienceLevel::Senior,
            ExperienceLevel::Lead,
            ExperienceLevel::Executive,
        ] {
            assert_eq!(ExperienceLevel::parse(level.as_str()), level);
        }
    }

    #[test]
    fn test_experience_level_unknown_falls_back_to_mid() {
        assert_eq!(ExperienceLevel::parse("rockstar"), ExperienceLevel::Mid);
    }

    #[test]
    fn test_display_skills_caps_at_max() {
        let mut extraction = CvExtraction::failure(Vec::new());
        extraction.skills = vec!["Rust", "SQL", "Docker", "Git", "K8s", "Go"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(extraction.display_skills(5).len(), 5);
        assert_eq!(extraction.display_skills(10).len(), 6);
    }

    #[test]
    fn test_truncated_summary_adds_ellipsis() {
        let mut extraction = CvExtraction::failure(Vec::new());
        extraction.summary = "a".repeat(400);

        let truncated = extraction.truncated_summary(300);
        assert_eq!(truncated.chars().count(), 300);
        assert!(truncated.ends_with('\u{2026}'));
    }

    #[test]
    fn test_truncated_summary_leaves_short_text_alone() {
        let mut extraction = CvExtraction::failure(Vec::new());
        extraction.summary = "short".to_string();

        assert_eq!(extraction.truncated_summary(300), "short");
    }

    #[test]
    fn test_error_message_joins_or_falls_back() {
        let failed = CvExtraction::failure(vec!["no text layer".into(), "scan only".into()]);
        assert_eq!(failed.error_message(), "no text layer; scan only");

        let empty = CvExtraction::failure(Vec::new());
        assert_eq!(empty.error_message(), "Extraction failed without details");
    }
}
