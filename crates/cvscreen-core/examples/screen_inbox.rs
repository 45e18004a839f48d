#![allow(clippy::expect_used, clippy::uninlined_format_args)]
//! Example: screen a small inbox with the deterministic simulators.
//!
//! Runs light CV detection, full extraction, and classification over a few
//! sample emails. No network, no API keys; this is the application's test
//! mode.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=debug cargo run --package cvscreen-core --example screen_inbox
//! ```

use std::sync::Arc;

use cvscreen_core::{
    CvDetectionConfig, CvDetectionPipeline, DetectionStep, Email, EmailClassifier,
    apply_classification,
};
use cvscreen_extract::{SimulatedClassifier, SimulatedExtractor};
use tracing_subscriber::EnvFilter;

fn sample_inbox() -> Vec<Email> {
    let mut application = Email::new("mail-1");
    application.sender_name = "Jean Dupont".to_string();
    application.sender_email = "jean.dupont@gmail.com".to_string();
    application.subject = "Candidature - Développeur Full Stack".to_string();
    application.body = Some(
        "Bonjour, veuillez trouver ci-joint ma candidature pour le poste de développeur."
            .to_string(),
    );
    application.has_attachment = true;
    application.attachments = vec!["CV_Jean_Dupont.pdf".to_string(), "lettre.docx".to_string()];

    let mut newsletter = Email::new("mail-2");
    newsletter.sender_email = "noreply@rh-hebdo.fr".to_string();
    newsletter.subject = "Newsletter RH - édition de mars".to_string();
    newsletter.preview = "Les tendances du recrutement ce mois-ci.".to_string();

    let mut quote = Email::new("mail-3");
    quote.sender_email = "direction@acme.fr".to_string();
    quote.subject = "Demande de devis - mission de sourcing".to_string();
    quote.preview = "Pourriez-vous nous faire parvenir un devis ?".to_string();

    vec![application, newsletter, quote]
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = CvDetectionConfig::default();
    let pipeline = CvDetectionPipeline::new(Arc::new(SimulatedExtractor::new()), config);
    let classifier = EmailClassifier::new(Arc::new(SimulatedClassifier::new()));

    let mut inbox = sample_inbox();

    let results = classifier.classify_batch(&inbox).await;
    for (email, result) in inbox.iter_mut().zip(&results) {
        apply_classification(email, result);
        println!(
            "[{}] {:40} -> {} ({}%{})",
            email.id,
            email.subject,
            result.category.display_name(),
            result.confidence,
            if result.is_doubtful { ", doubtful" } else { "" },
        );
    }

    for email in &inbox {
        let state = pipeline.process(email).await;
        match state.step {
            DetectionStep::Completed => match state.full_extraction {
                Some(extraction) => {
                    let light = state.light_detection.expect("light detection ran");
                    println!(
                        "[{}] CV detected (confidence {}%): {} - {} skills shown: {:?}",
                        state.email_id,
                        light.confidence,
                        extraction.full_name(),
                        extraction.experience_level.as_str(),
                        extraction.display_skills(config.max_displayed_skills),
                    );
                }
                None => println!("[{}] no CV detected", state.email_id),
            },
            DetectionStep::Failed => println!(
                "[{}] detection failed: {}",
                state.email_id,
                state.error.unwrap_or_default()
            ),
            step => println!("[{}] unexpected non-terminal step {}", state.email_id, step.as_str()),
        }
    }
}
