//! Deterministic simulators for the AI capabilities.
//!
//! These stand in for the language-model backends in tests and in the
//! application's test mode: same input, same output, no network.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::capability::{ClassifyBackend, CvExtractor};
use crate::error::{ExtractError, Result};
use crate::model::{
    ClassifyInput, CvExtraction, ExperienceLevel, ExtractionRequest, RawClassification,
};

/// Filename tokens that describe the document rather than the candidate.
const DOCUMENT_WORDS: &[&str] = &[
    "cv",
    "resume",
    "candidature",
    "curriculum",
    "vitae",
    "lettre",
    "motivation",
    "profil",
    "dossier",
];

/// Simulated full CV extractor.
///
/// Derives a plausible candidate from the filename alone: name tokens come
/// from the stem, seniority from explicit level words, everything else is
/// fixed. An empty filename yields a failed (not errored) extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedExtractor;

impl SimulatedExtractor {
    /// Create a new simulated extractor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn name_tokens(stem: &str) -> Vec<String> {
        stem.split(['_', '-', ' ', '.'])
            .filter(|token| {
                let lower = token.to_lowercase();
                token.len() > 1
                    && !DOCUMENT_WORDS.contains(&lower.as_str())
                    && Self::level_word(&lower).is_none()
                    && !token.chars().all(|c| c.is_ascii_digit())
            })
            .map(capitalize)
            .collect()
    }

    fn level_word(token: &str) -> Option<ExperienceLevel> {
        match token {
            "junior" | "stagiaire" => Some(ExperienceLevel::Junior),
            "senior" => Some(ExperienceLevel::Senior),
            "lead" => Some(ExperienceLevel::Lead),
            "directeur" | "director" => Some(ExperienceLevel::Executive),
            _ => None,
        }
    }

    fn level_from_stem(stem: &str) -> ExperienceLevel {
        stem.split(['_', '-', ' ', '.'])
            .find_map(|token| Self::level_word(&token.to_lowercase()))
            .unwrap_or_default()
    }

    const fn years_for(level: ExperienceLevel) -> u8 {
        match level {
            ExperienceLevel::Junior => 2,
            ExperienceLevel::Mid => 5,
            ExperienceLevel::Senior => 8,
            ExperienceLevel::Lead => 10,
            ExperienceLevel::Executive => 15,
        }
    }
}

#[async_trait]
impl CvExtractor for SimulatedExtractor {
    async fn extract(
        &self,
        request: &ExtractionRequest,
        cancel: &CancellationToken,
    ) -> Result<CvExtraction> {
        if cancel.is_cancelled() {
            return Err(ExtractError::Cancelled);
        }

        let stem = request
            .file_name
            .rsplit_once('.')
            .map_or(request.file_name.as_str(), |(stem, _ext)| stem);
        if stem.trim().is_empty() {
            return Ok(CvExtraction::failure(vec![
                "No filename to extract from".to_string(),
            ]));
        }

        let tokens = Self::name_tokens(stem);
        let first_name = tokens.first().cloned().unwrap_or_else(|| "Alex".to_string());
        let last_name = tokens.get(1).cloned().unwrap_or_else(|| "Martin".to_string());
        let level = Self::level_from_stem(stem);

        Ok(CvExtraction {
            success: true,
            email: format!(
                "{}.{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ),
            first_name,
            last_name,
            phone: Some("+33 6 12 34 56 78".to_string()),
            position: "Développeur".to_string(),
            skills: ["JavaScript", "TypeScript", "React", "Node.js", "SQL", "Git"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            experience_level: level,
            years_of_experience: Some(Self::years_for(level)),
            location: Some("Paris".to_string()),
            summary: format!(
                "Profil {} extrait de {}",
                level.as_str(),
                request.file_name
            ),
            errors: None,
        })
    }
}

/// Simulated email classifier.
///
/// A small keyword heuristic over subject and body, standing in for the
/// language-model call. Labels follow the application's snake_case taxonomy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedClassifier;

impl SimulatedClassifier {
    /// Create a new simulated classifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Keyword rules checked in order; first hit wins.
const CLASSIFY_RULES: &[(&str, &str, u8)] = &[
    ("candidature", "cv_spontane", 85),
    ("cv ", "cv_spontane", 80),
    ("entretien", "entretien", 85),
    ("stage", "demande_stage", 80),
    ("devis", "demande_devis", 85),
    ("facture", "facture", 90),
    ("newsletter", "newsletter_rh", 75),
    ("formation", "formation", 75),
    ("promo", "pub_promo", 80),
    ("gagnez", "spam", 90),
];

#[async_trait]
impl ClassifyBackend for SimulatedClassifier {
    async fn classify(&self, input: &ClassifyInput) -> Result<RawClassification> {
        let haystack = format!("{} {}", input.subject, input.body).to_lowercase();

        for (keyword, category, confidence) in CLASSIFY_RULES {
            if haystack.contains(keyword) {
                return Ok(RawClassification {
                    category: (*category).to_string(),
                    confidence: *confidence,
                    reasoning: format!("Matched keyword '{keyword}'"),
                });
            }
        }

        Ok(RawClassification {
            category: "non_classe".to_string(),
            confidence: 30,
            reasoning: "No classification keyword matched".to_string(),
        })
    }
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_extractor_derives_name_from_filename() {
        let extractor = SimulatedExtractor::new();
        let request = ExtractionRequest::from_file_name("CV_Jean_Dupont.pdf");

        let result = extractor
            .extract(&request, &CancellationToken::new())
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.first_name, "Jean");
        assert_eq!(result.last_name, "Dupont");
        assert_eq!(result.email, "jean.dupont@example.com");
    }

    #[tokio::test]
    async fn test_extractor_reads_seniority_from_filename() {
        let extractor = SimulatedExtractor::new();
        let request = ExtractionRequest::from_file_name("cv-senior-durand.pdf");

        let result = extractor
            .extract(&request, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(result.experience_level, ExperienceLevel::Senior);
        assert_eq!(result.years_of_experience, Some(8));
    }

    #[tokio::test]
    async fn test_extractor_is_deterministic() {
        let extractor = SimulatedExtractor::new();
        let request = ExtractionRequest::from_file_name("resume_Marie_Curie.docx");
        let cancel = CancellationToken::new();

        let a = extractor.extract(&request, &cancel).await.unwrap();
        let b = extractor.extract(&request, &cancel).await.unwrap();

        assert_eq!(a.full_name(), b.full_name());
        assert_eq!(a.skills, b.skills);
    }

    #[tokio::test]
    async fn test_extractor_fails_on_empty_filename() {
        let extractor = SimulatedExtractor::new();
        let request = ExtractionRequest::from_file_name("");

        let result = extractor
            .extract(&request, &CancellationToken::new())
            .await
            .unwrap();

        assert!(!result.success);
        assert!(result.errors.is_some());
    }

    #[tokio::test]
    async fn test_extractor_honors_cancellation() {
        let extractor = SimulatedExtractor::new();
        let request = ExtractionRequest::from_file_name("CV_Jean.pdf");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = extractor.extract(&request, &cancel).await;

        assert!(matches!(result, Err(ExtractError::Cancelled)));
    }

    #[tokio::test]
    async fn test_classifier_matches_keywords() {
        let classifier = SimulatedClassifier::new();
        let input = ClassifyInput {
            subject: "Candidature - Développeur".to_string(),
            body: String::new(),
            sender_email: "jean@gmail.com".to_string(),
        };

        let raw = classifier.classify(&input).await.unwrap();

        assert_eq!(raw.category, "cv_spontane");
        assert!(raw.confidence >= 70);
    }

    #[tokio::test]
    async fn test_classifier_falls_back_to_non_classe() {
        let classifier = SimulatedClassifier::new();
        let input = ClassifyInput {
            subject: "hello".to_string(),
            body: "nothing of note".to_string(),
            sender_email: "someone@example.com".to_string(),
        };

        let raw = classifier.classify(&input).await.unwrap();

        assert_eq!(raw.category, "non_classe");
        assert!(raw.confidence < 70);
    }
}
