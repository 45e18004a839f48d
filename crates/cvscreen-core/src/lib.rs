//! # cvscreen-core
//!
//! Core logic for the `cvscreen` recruiting mailbox.
//!
//! This crate provides:
//! - **Light CV Detection** - weighted keyword/filename pre-filter scoring
//!   how likely an email is to carry a CV
//! - **Email Classification** - a fixed 21-category taxonomy with a doubt
//!   threshold, priority tie-break, and manual overrides
//! - **Detection Pipeline** - the `pending → light_detection →
//!   full_extraction → completed | failed` state machine around the external
//!   extraction capability
//! - Domain models and configuration
//!
//! The AI-backed capabilities themselves (full extraction, the classifier
//! backend) live behind the traits in `cvscreen-extract` and are injected.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod classify;
mod config;
pub mod detect;
mod email;
mod error;
pub mod pipeline;

pub use classify::{
    CategoryGroup, ClassificationResult, DOUBT_THRESHOLD, EmailCategory, EmailClassifier,
    PRIORITY_ORDER, apply_classification, priority_category, reclassify_email,
};
pub use config::CvDetectionConfig;
pub use detect::{DetectionSignal, LightDetection, SignalKind, detect_light_cv};
pub use email::Email;
pub use error::{Error, Result};
pub use pipeline::{CvDetectionPipeline, CvDetectionState, DetectionStep};
