//! Email data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::EmailCategory;

/// An email as supplied by the mail provider or a test fixture.
///
/// Immutable in practice except for the classification fields, which are
/// written only by the classifier and by manual reclassification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    /// Provider-assigned identifier.
    pub id: String,
    /// Sender display name.
    #[serde(default)]
    pub sender_name: String,
    /// Sender address.
    #[serde(default)]
    pub sender_email: String,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Short excerpt of the body, used when the full body is unavailable.
    #[serde(default)]
    pub preview: String,
    /// Full body text, when fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Whether the provider flagged this email as carrying attachments.
    #[serde(default)]
    pub has_attachment: bool,
    /// Attachment filenames, in provider order.
    #[serde(default)]
    pub attachments: Vec<String>,

    // Classification fields, written only by the classifier.
    /// Assigned category, once classified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EmailCategory>,
    /// Classifier confidence in 0..=100, once classified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_confidence: Option<u8>,
    /// Whether the classification fell below the doubt threshold.
    #[serde(default)]
    pub is_doubtful: bool,
    /// Whether a human overrode the classifier.
    #[serde(default)]
    pub manually_classified: bool,
    /// When the email was last classified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classified_at: Option<DateTime<Utc>>,
}

impl Email {
    /// Create an unclassified email with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender_name: String::new(),
            sender_email: String::new(),
            subject: String::new(),
            preview: String::new(),
            body: None,
            has_attachment: false,
            attachments: Vec::new(),
            category: None,
            ai_confidence: None,
            is_doubtful: false,
            manually_classified: false,
            classified_at: None,
        }
    }

    /// The text the detector and classifier should read: the full body when
    /// present and non-empty, the preview otherwise.
    #[must_use]
    pub fn body_text(&self) -> &str {
        match self.body.as_deref() {
            Some(body) if !body.is_empty() => body,
            _ => &self.preview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_text_prefers_full_body() {
        let mut email = Email::new("1");
        email.preview = "short excerpt".to_string();
        assert_eq!(email.body_text(), "short excerpt");

        email.body = Some(String::new());
        assert_eq!(email.body_text(), "short excerpt");

        email.body = Some("full text".to_string());
        assert_eq!(email.body_text(), "full text");
    }

    #[test]
    fn test_deserializes_with_missing_fields() {
        let email: Email = serde_json::from_str(r#"{"id":"m-1","subject":"Hello"}"#).unwrap();
        assert_eq!(email.id, "m-1");
        assert_eq!(email.subject, "Hello");
        assert!(email.attachments.is_empty());
        assert!(email.category.is_none());
        assert!(!email.has_attachment);
    }
}
