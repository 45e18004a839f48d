//! # cvscreen-extract
//!
//! External AI capability boundary for the `cvscreen` recruiting mailbox.
//!
//! Full CV extraction and email classification are opaque external
//! capabilities. This crate defines:
//! - The request/result models crossing that boundary
//! - The [`CvExtractor`] and [`ClassifyBackend`] traits
//! - An HTTP implementation posting to a text-generation endpoint, with
//!   lenient JSON reply parsing
//! - Deterministic simulators for tests and test mode

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod capability;
mod error;
pub mod http;
mod model;
pub mod simulate;

pub use capability::{ClassifyBackend, CvExtractor};
pub use error::{ExtractError, Result};
pub use http::{AiEndpoint, HttpClassifier, HttpExtractor, lenient_json};
pub use model::{
    ClassifyInput, CvExtraction, ExperienceLevel, ExtractionRequest, RawClassification,
};
pub use simulate::{SimulatedClassifier, SimulatedExtractor};
