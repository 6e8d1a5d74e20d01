//! # cvdrisk
//!
//! Cardiovascular disease (CVD) risk prediction pipeline.
//!
//! This crate provides:
//! - Deterministic feature derivation from raw patient attributes
//! - Inference against a pre-trained calibrated binary classifier
//! - A line-oriented console front-end for single-patient assessment
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (patient input, feature record, assessment)
//! - `ports`: Trait definitions for the trained classifier
//! - `adapters`: Concrete implementations (calibrated logistic model)
//! - `application`: Use cases orchestrating domain and ports
//! - `console`: Input collection and result rendering

pub mod adapters;
pub mod application;
pub mod console;
pub mod domain;
pub mod ports;

pub use domain::{CanonicalFeatureRecord, RawPatientInput, RiskAssessment, RiskClass};

/// Result type for cvdrisk operations
pub type Result<T> = std::result::Result<T, CvdError>;

/// Main error type for cvdrisk
#[derive(Debug, thiserror::Error)]
pub enum CvdError {
    #[error("Feature derivation failed: {0}")]
    Feature(#[from] domain::FeatureError),

    #[error("Model operation failed: {0}")]
    Model(#[from] ports::ModelError),

    #[error("Invalid patient data: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
