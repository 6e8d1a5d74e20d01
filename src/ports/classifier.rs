//! Risk model port: Trait for the pre-trained binary classifier.
//!
//! This trait abstracts the classifier artifact from the application logic.

use crate::domain::CanonicalFeatureRecord;

/// Errors raised by a risk model implementation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    /// The classifier artifact is missing or corrupt. Fatal: raised at
    /// startup, before any request is served.
    #[error("Failed to load model: {0}")]
    LoadFailure(String),

    /// The feature record does not carry the columns the classifier was
    /// trained on. The request is rejected; there is no partial prediction.
    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(String),
}

/// Trait for the trained binary risk classifier.
///
/// Implementations wrap a single pre-loaded model instance, immutable for
/// the process lifetime. Both operations are cheap, synchronous, and
/// deterministic; callers must pass the same record to both to keep class
/// and probability consistent.
pub trait RiskModel: Send + Sync {
    /// Predict the binary class for one feature record.
    ///
    /// Returns 0 (not at risk) or 1 (at risk).
    ///
    /// # Errors
    /// Returns `ModelError::SchemaMismatch` if the record does not match
    /// the trained column schema.
    fn predict_class(&self, record: &CanonicalFeatureRecord) -> Result<u8, ModelError>;

    /// Predict the probability of the at-risk class (class 1) for one
    /// feature record.
    ///
    /// The returned value is in [0, 1].
    ///
    /// # Errors
    /// Returns `ModelError::SchemaMismatch` if the record does not match
    /// the trained column schema.
    fn predict_probability(&self, record: &CanonicalFeatureRecord) -> Result<f64, ModelError>;
}
