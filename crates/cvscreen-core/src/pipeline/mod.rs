//! CV detection pipeline.
//!
//! Sequences the light pre-filter and the external full extraction, tracking
//! a small per-email state machine. All failure modes are represented in the
//! returned state; the pipeline itself never errors.

mod model;
mod run;

pub use model::{CvDetectionState, DetectionStep};
pub use run::CvDetectionPipeline;
