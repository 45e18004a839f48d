//! Light CV detection: a zero-cost, keyword and filename pre-filter.
//!
//! Pure function of the email and the configuration. Malformed or absent
//! fields contribute zero signals; this function never fails.

use std::sync::LazyLock;

use regex::Regex;

use super::model::{DetectionSignal, LightDetection, SignalKind};
use crate::config::CvDetectionConfig;
use crate::email::Email;

/// Weight of a filename matching a CV pattern.
const WEIGHT_FILENAME: u32 = 4;
/// Weight of a `.pdf` attachment.
const WEIGHT_PDF: u32 = 2;
/// Weight of a `.doc` / `.docx` attachment.
const WEIGHT_DOC: u32 = 1;
/// Weight of a subject keyword (at most one per email).
const WEIGHT_SUBJECT: u32 = 3;
/// Weight of a body keyword (at most [`MAX_BODY_SIGNALS`] per email).
const WEIGHT_BODY: u32 = 2;
/// Weight of a human-looking sender corroborating other evidence.
const WEIGHT_SENDER: u32 = 1;

/// Cap on body keyword signals, so verbose emails do not dominate.
const MAX_BODY_SIGNALS: usize = 2;

/// Confidence gained per unit of signal weight.
const CONFIDENCE_PER_WEIGHT: u32 = 8;

/// Filename patterns indicating a CV; first match wins per filename.
static FILENAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(^|[\s_.\-])cv([\s_.\-]|$)",
        r"(?i)resume",
        r"(?i)curriculum[\s_\-]*vitae",
        r"(?i)candidature",
        r"(?i)lettre[\s_\-]*de[\s_\-]*motivation",
        r"(?i)profil",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Keywords scanned in subject and body, in priority order.
const CV_KEYWORDS: &[&str] = &[
    "candidature",
    "poste",
    "offre",
    "emploi",
    "stage",
    "alternance",
    "profil",
    "cv ci-joint",
    "cv en pièce jointe",
    "mon parcours",
    "mes compétences",
    "ma candidature",
    "recherche d'emploi",
    "opportunité",
    "postuler",
    "expérience professionnelle",
];

/// Sender address fragments marking automated mail.
const AUTOMATED_SENDER_MARKERS: &[&str] = &["noreply", "no-reply", "notification", "info@"];

/// Run light CV detection over an email.
///
/// Deterministic and free of I/O. The confidence is
/// `min(100, 8 × total signal weight)`; both result flags compare it against
/// `config.light_detection_threshold`.
#[must_use]
pub fn detect_light_cv(email: &Email, config: &CvDetectionConfig) -> LightDetection {
    let mut signals = Vec::new();

    scan_attachments(&email.attachments, &mut signals);
    scan_subject(&email.subject, &mut signals);
    scan_body(email.body_text(), &mut signals);
    scan_sender(&email.sender_email, &mut signals);

    let total: u32 = signals.iter().map(|s| s.weight).sum();
    let confidence =
        u8::try_from(total.saturating_mul(CONFIDENCE_PER_WEIGHT).min(100)).unwrap_or(100);
    let likely = confidence >= config.light_detection_threshold;

    LightDetection {
        is_likely_cv: likely,
        confidence,
        potential_cv_file_name: pick_cv_file_name(&email.attachments),
        signals,
        should_proceed_to_full_extraction: likely,
    }
}

/// Whether a filename matches any CV pattern.
fn matches_cv_pattern(file_name: &str) -> bool {
    FILENAME_PATTERNS.iter().any(|re| re.is_match(file_name))
}

/// Lowercased extension of a filename, if it has one.
fn extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

fn scan_attachments(attachments: &[String], signals: &mut Vec<DetectionSignal>) {
    for name in attachments {
        // First pattern match wins; further patterns are not checked.
        if matches_cv_pattern(name) {
            signals.push(DetectionSignal::new(
                SignalKind::Filename,
                name.clone(),
                WEIGHT_FILENAME,
                "Attachment name matches a CV pattern",
            ));
        }

        // Extension signal is independent of the name pattern.
        match extension(name).as_deref() {
            Some("pdf") => signals.push(DetectionSignal::new(
                SignalKind::AttachmentType,
                name.clone(),
                WEIGHT_PDF,
                "PDF attachment",
            )),
            Some("doc" | "docx") => signals.push(DetectionSignal::new(
                SignalKind::AttachmentType,
                name.clone(),
                WEIGHT_DOC,
                "Word document attachment",
            )),
            _ => {}
        }
    }
}

fn scan_subject(subject: &str, signals: &mut Vec<DetectionSignal>) {
    let lower = subject.to_lowercase();
    // At most one subject signal; first keyword in list order wins.
    if let Some(keyword) = CV_KEYWORDS.iter().find(|k| lower.contains(*k)) {
        signals.push(DetectionSignal::new(
            SignalKind::Subject,
            *keyword,
            WEIGHT_SUBJECT,
            "Subject contains a CV keyword",
        ));
    }
}

fn scan_body(body: &str, signals: &mut Vec<DetectionSignal>) {
    let lower = body.to_lowercase();
    for keyword in CV_KEYWORDS {
        if lower.contains(keyword) {
            signals.push(DetectionSignal::new(
                SignalKind::Body,
                *keyword,
                WEIGHT_BODY,
                "Body contains a CV keyword",
            ));
            if signals
                .iter()
                .filter(|s| s.kind == SignalKind::Body)
                .count()
                >= MAX_BODY_SIGNALS
            {
                break;
            }
        }
    }
}

fn scan_sender(sender_email: &str, signals: &mut Vec<DetectionSignal>) {
    // A human sender only corroborates content evidence; on its own it says
    // nothing about a CV, so an otherwise signal-less email stays at zero.
    if signals.is_empty() {
        return;
    }
    let lower = sender_email.to_lowercase();
    if AUTOMATED_SENDER_MARKERS.iter().any(|m| lower.contains(m)) {
        return;
    }
    signals.push(DetectionSignal::new(
        SignalKind::Sender,
        sender_email,
        WEIGHT_SENDER,
        "Sender looks like a personal address",
    ));
}

/// Pick the attachment most likely to be the CV: first a pattern-matched
/// pdf/doc/docx, then the first `.pdf`, else none.
fn pick_cv_file_name(attachments: &[String]) -> Option<String> {
    attachments
        .iter()
        .find(|name| {
            matches_cv_pattern(name)
                && matches!(extension(name).as_deref(), Some("pdf" | "doc" | "docx"))
        })
        .or_else(|| {
            attachments
                .iter()
                .find(|name| extension(name).as_deref() == Some("pdf"))
        })
        .cloned()
}
