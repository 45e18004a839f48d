//! Email classification.
//!
//! A fixed 21-category taxonomy in four semantic groups plus two catch-alls.
//! The model call itself is an injected external backend; this module owns
//! the deterministic parts: the taxonomy, the doubt threshold, the priority
//! tie-break, and manual overrides.

mod category;
mod model;
mod service;

pub use category::{CategoryGroup, EmailCategory, PRIORITY_ORDER};
pub use model::{ClassificationResult, DOUBT_THRESHOLD};
pub use service::{
    EmailClassifier, apply_classification, priority_category, reclassify_email,
};
