//! Risk assessment result types.
//!
//! Represents the output of the CVD risk classifier.

use serde::{Deserialize, Serialize};

/// Binary risk classification for cardiovascular disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskClass {
    /// Classifier label 0: unlikely to have cardiovascular disease
    NotAtRisk,
    /// Classifier label 1: likely at risk for cardiovascular disease
    AtRisk,
}

impl RiskClass {
    /// Map the classifier's binary label to a risk class.
    ///
    /// The trained model emits exactly 0 or 1 per row; any other label is a
    /// contract violation handled at the adapter boundary.
    #[must_use]
    pub fn from_label(label: u8) -> Self {
        if label == 1 {
            Self::AtRisk
        } else {
            Self::NotAtRisk
        }
    }

    /// The classifier's binary label for this class.
    #[must_use]
    pub fn label(self) -> u8 {
        match self {
            Self::NotAtRisk => 0,
            Self::AtRisk => 1,
        }
    }

    /// Human-readable verdict for the renderer.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::NotAtRisk => "The patient is unlikely to have Cardiovascular Disease.",
            Self::AtRisk => "The patient is likely at risk for Cardiovascular Disease.",
        }
    }
}

impl std::fmt::Display for RiskClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAtRisk => write!(f, "not at risk"),
            Self::AtRisk => write!(f, "at risk"),
        }
    }
}

/// Raw classifier output: a binary class and the class-1 probability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Binary risk classification
    pub risk_class: RiskClass,

    /// Probability of the at-risk class, in [0, 1]
    pub risk_probability: f64,
}

impl PredictionResult {
    /// The probability formatted as a percentage with two-decimal precision.
    #[must_use]
    pub fn probability_percent(&self) -> String {
        format!("{:.2}%", self.risk_probability * 100.0)
    }
}

/// A complete assessment as handed to the renderer.
///
/// Ephemeral: computed on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// The classifier output
    pub result: PredictionResult,

    /// Timestamp of the assessment
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl RiskAssessment {
    /// Create a new assessment from a prediction result.
    #[must_use]
    pub fn new(result: PredictionResult) -> Self {
        Self {
            result,
            created_at: chrono::Utc::now(),
        }
    }
}
