//! Assessment service: Orchestrates feature derivation and inference.
//!
//! This service coordinates:
//! - Input validation
//! - Feature derivation
//! - Classifier invocation (class and probability)

use std::sync::Arc;

use crate::domain::{self, PredictionResult, RawPatientInput, RiskAssessment, RiskClass};
use crate::ports::RiskModel;
use crate::CvdError;

/// Service for running risk assessment over one patient record at a time.
///
/// Owns a shared, read-only handle to the pre-loaded classifier. The model
/// is loaded once before any request is served and never reloaded; each
/// invocation is independent and stateless.
pub struct AssessmentService<M>
where
    M: RiskModel,
{
    model: Arc<M>,
}

impl<M> AssessmentService<M>
where
    M: RiskModel,
{
    /// Create a new assessment service.
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    /// Assess one patient record.
    ///
    /// Performs the full pipeline:
    /// 1. Validate the raw input domain
    /// 2. Derive the canonical feature record
    /// 3. Invoke the classifier for class and probability over that record
    ///
    /// Both classifier operations receive the same record; there is no
    /// fallback prediction path, a failure surfaces as an error.
    ///
    /// # Errors
    /// Returns error if validation, derivation, or inference fails.
    pub fn assess(&self, patient: &RawPatientInput) -> Result<RiskAssessment, CvdError> {
        if let Err(errors) = patient.validate() {
            return Err(CvdError::Validation(errors.join("; ")));
        }

        tracing::debug!("Deriving feature record...");
        let record = domain::build(patient)?;

        tracing::debug!("Running classifier...");
        let label = self.model.predict_class(&record)?;
        let probability = self.model.predict_probability(&record)?;

        let result = PredictionResult {
            risk_class: RiskClass::from_label(label),
            risk_probability: probability,
        };
        let assessment = RiskAssessment::new(result);

        tracing::info!(
            "Assessment complete: class={}, probability={}",
            assessment.result.risk_class,
            assessment.result.probability_percent()
        );

        Ok(assessment)
    }
}
