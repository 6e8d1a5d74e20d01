//! Logistic adapter: Implementation of RiskModel backed by a calibrated
//! logistic-regression artifact.
//!
//! The artifact is the JSON export produced by the training pipeline:
//! feature names, standard-scaler parameters, coefficients, intercept, and
//! the classifier's own decision threshold. It is loaded once at startup
//! and immutable afterwards.
//!
//! # Inference
//!
//! Both port operations derive from a single margin computed over the same
//! record: standardize each column, dot with the coefficients, add the
//! intercept, squash through the sigmoid. The class is the threshold
//! applied to that probability, so class and probability can never come
//! from diverging computation paths.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{CanonicalFeatureRecord, FEATURE_NAMES};
use crate::ports::{ModelError, RiskModel};

/// Maximum number of features supported (cardio schema = 13).
/// Used for input validation and sanity checks.
const MAX_FEATURES: usize = 13;

/// Model parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedCalibratedModel {
    pub feature_names: Vec<String>,
    pub scaler_mean: Vec<f64>,
    pub scaler_std: Vec<f64>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// The decision rule the classifier was calibrated with. Persisted with
    /// the artifact rather than assumed to be 0.5.
    pub decision_threshold: f64,
}

/// Calibrated logistic-regression risk model.
#[derive(Debug)]
pub struct LogisticModel {
    model: ExportedCalibratedModel,
}

impl LogisticModel {
    /// Load the model artifact from a JSON file.
    ///
    /// # Errors
    /// Returns `ModelError::LoadFailure` if the file is missing or corrupt,
    /// or `ModelError::SchemaMismatch` if the artifact was trained on a
    /// different column set than this crate derives.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ModelError::LoadFailure(format!("{}: {e}", path.display())))?;
        let model: ExportedCalibratedModel = serde_json::from_str(&content)
            .map_err(|e| ModelError::LoadFailure(format!("{}: {e}", path.display())))?;

        let loaded = Self::from_exported(model)?;
        tracing::info!(
            "Loaded model from {:?} (n_features={}, threshold={})",
            path,
            loaded.model.feature_names.len(),
            loaded.model.decision_threshold
        );
        Ok(loaded)
    }

    /// Build a model from already-deserialized parameters.
    ///
    /// # Errors
    /// Returns `ModelError::LoadFailure` on internal inconsistencies and
    /// `ModelError::SchemaMismatch` on column-set divergence.
    pub fn from_exported(model: ExportedCalibratedModel) -> Result<Self, ModelError> {
        let n = model.feature_names.len();
        if n == 0 || n > MAX_FEATURES {
            return Err(ModelError::LoadFailure(format!(
                "Invalid feature count in model: got {n}, max {MAX_FEATURES}"
            )));
        }
        if model.coefficients.len() != n
            || model.scaler_mean.len() != n
            || model.scaler_std.len() != n
        {
            return Err(ModelError::LoadFailure(
                "Model parameter lengths do not match feature_names length".into(),
            ));
        }
        if model
            .scaler_std
            .iter()
            .any(|s| !s.is_finite() || *s <= 0.0)
        {
            return Err(ModelError::LoadFailure(
                "Scaler standard deviations must be finite and positive".into(),
            ));
        }
        if model.coefficients.iter().any(|c| !c.is_finite())
            || !model.intercept.is_finite()
        {
            return Err(ModelError::LoadFailure(
                "Model coefficients must be finite".into(),
            ));
        }
        if !(0.0..=1.0).contains(&model.decision_threshold) {
            return Err(ModelError::LoadFailure(format!(
                "Decision threshold {} outside [0, 1]",
                model.decision_threshold
            )));
        }

        // Startup-time schema verification: the artifact must carry exactly
        // the columns this crate derives, resolved by name.
        for name in &model.feature_names {
            if !FEATURE_NAMES.contains(&name.as_str()) {
                return Err(ModelError::SchemaMismatch(format!(
                    "Model expects unknown column '{name}'"
                )));
            }
        }
        for name in FEATURE_NAMES {
            if !model.feature_names.iter().any(|n| n == name) {
                return Err(ModelError::SchemaMismatch(format!(
                    "Model is missing column '{name}'"
                )));
            }
        }

        Ok(Self { model })
    }

    /// The classifier's decision threshold.
    #[must_use]
    pub fn decision_threshold(&self) -> f64 {
        self.model.decision_threshold
    }

    /// Compute the linear margin for one record, resolving columns by name.
    fn margin(&self, record: &CanonicalFeatureRecord) -> Result<f64, ModelError> {
        let mut z = self.model.intercept;
        for (i, name) in self.model.feature_names.iter().enumerate() {
            let value = record.value_of(name).ok_or_else(|| {
                ModelError::SchemaMismatch(format!(
                    "Feature record has no column '{name}'"
                ))
            })?;
            let standardized = (value - self.model.scaler_mean[i]) / self.model.scaler_std[i];
            z += standardized * self.model.coefficients[i];
        }
        Ok(z)
    }
}

/// Numerically stable logistic sigmoid.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl RiskModel for LogisticModel {
    fn predict_class(&self, record: &CanonicalFeatureRecord) -> Result<u8, ModelError> {
        let probability = sigmoid(self.margin(record)?);
        Ok(u8::from(probability >= self.model.decision_threshold))
    }

    fn predict_probability(&self, record: &CanonicalFeatureRecord) -> Result<f64, ModelError> {
        Ok(sigmoid(self.margin(record)?))
    }
}
