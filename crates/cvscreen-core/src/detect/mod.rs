//! Light CV detection.
//!
//! A zero-cost pre-filter over an email's attachments, subject, body, and
//! sender: weighted keyword and filename signals add up to a 0..=100
//! confidence score that decides whether full (AI-backed) extraction is
//! worth attempting.

mod light;
mod model;

pub use light::detect_light_cv;
pub use model::{DetectionSignal, LightDetection, SignalKind};
