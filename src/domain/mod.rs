//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external dependencies.
//! Feature derivation lives here as a pure function over patient input.

mod assessment;
mod features;
mod patient;

pub use assessment::{PredictionResult, RiskAssessment, RiskClass};
pub use features::{build, CanonicalFeatureRecord, FeatureError, FEATURE_NAMES};
pub use patient::{Gender, MarkerLevel, RawPatientInput};
