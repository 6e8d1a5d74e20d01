//! Raw patient input types for cardiovascular risk prediction.
//!
//! Field set matches the cardio training dataset: anthropometrics, blood
//! pressure, and lifestyle factors collected through the front-end form.

use serde::{Deserialize, Serialize};

use super::features::FeatureError;

/// Patient gender, encoded as 1 (female) / 2 (male) in the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Canonical integer code used by the trained model.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Female => 1,
            Self::Male => 2,
        }
    }
}

impl TryFrom<u8> for Gender {
    type Error = FeatureError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Female),
            2 => Ok(Self::Male),
            other => Err(FeatureError::UnmappedCategory {
                field: "gender",
                value: other,
            }),
        }
    }
}

/// Three-level clinical marker used for both cholesterol and glucose.
///
/// Encoded as 1 (normal), 2 (above normal), 3 (well above normal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerLevel {
    Normal,
    AboveNormal,
    WellAboveNormal,
}

impl MarkerLevel {
    /// Canonical integer code used by the trained model.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Normal => 1,
            Self::AboveNormal => 2,
            Self::WellAboveNormal => 3,
        }
    }

    /// Decode from a canonical integer code.
    ///
    /// # Errors
    /// Returns `FeatureError::UnmappedCategory` for codes outside 1..=3.
    pub fn from_code(field: &'static str, code: u8) -> Result<Self, FeatureError> {
        match code {
            1 => Ok(Self::Normal),
            2 => Ok(Self::AboveNormal),
            3 => Ok(Self::WellAboveNormal),
            other => Err(FeatureError::UnmappedCategory {
                field,
                value: other,
            }),
        }
    }
}

/// Raw patient attributes as supplied by the input collector.
///
/// One record per interaction; never persisted. All categorical fields are
/// proper enums so that an unmapped category cannot be represented once the
/// collector boundary has been crossed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPatientInput {
    /// Age in years (1-120)
    pub age_years: u32,

    /// Patient gender
    pub gender: Gender,

    /// Height in cm (100-250)
    pub height_cm: u32,

    /// Weight in kg (30-200)
    pub weight_kg: u32,

    /// Systolic blood pressure in mmHg (80-250)
    pub systolic_bp: u32,

    /// Diastolic blood pressure in mmHg (40-150)
    pub diastolic_bp: u32,

    /// Cholesterol level
    pub cholesterol_level: MarkerLevel,

    /// Glucose level
    pub glucose_level: MarkerLevel,

    /// Does the patient smoke?
    pub smokes: bool,

    /// Does the patient consume alcohol?
    pub drinks_alcohol: bool,

    /// Is the patient physically active?
    pub physically_active: bool,
}

impl RawPatientInput {
    /// Validate that all numeric fields are within the documented domain.
    ///
    /// The console collector enforces these bounds at entry; this check
    /// covers programmatic callers that bypass the prompts.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(1..=120).contains(&self.age_years) {
            errors.push(format!("Age {} out of range [1, 120]", self.age_years));
        }
        if !(100..=250).contains(&self.height_cm) {
            errors.push(format!("Height {} out of range [100, 250]", self.height_cm));
        }
        if !(30..=200).contains(&self.weight_kg) {
            errors.push(format!("Weight {} out of range [30, 200]", self.weight_kg));
        }
        if !(80..=250).contains(&self.systolic_bp) {
            errors.push(format!(
                "Systolic BP {} out of range [80, 250]",
                self.systolic_bp
            ));
        }
        if !(40..=150).contains(&self.diastolic_bp) {
            errors.push(format!(
                "Diastolic BP {} out of range [40, 150]",
                self.diastolic_bp
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> RawPatientInput {
        RawPatientInput {
            age_years: 30,
            gender: Gender::Male,
            height_cm: 170,
            weight_kg: 70,
            systolic_bp: 120,
            diastolic_bp: 80,
            cholesterol_level: MarkerLevel::Normal,
            glucose_level: MarkerLevel::Normal,
            smokes: false,
            drinks_alcohol: false,
            physically_active: true,
        }
    }

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::Female.code(), 1);
        assert_eq!(Gender::Male.code(), 2);
        assert_eq!(Gender::try_from(1).unwrap(), Gender::Female);
        assert_eq!(Gender::try_from(2).unwrap(), Gender::Male);
    }

    #[test]
    fn test_gender_unmapped_code() {
        let err = Gender::try_from(0).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::UnmappedCategory {
                field: "gender",
                value: 0
            }
        ));
        assert!(Gender::try_from(3).is_err());
    }

    #[test]
    fn test_marker_level_codes() {
        assert_eq!(MarkerLevel::Normal.code(), 1);
        assert_eq!(MarkerLevel::AboveNormal.code(), 2);
        assert_eq!(MarkerLevel::WellAboveNormal.code(), 3);

        for code in 1..=3u8 {
            let level = MarkerLevel::from_code("cholesterol", code).unwrap();
            assert_eq!(level.code(), code);
        }
    }

    #[test]
    fn test_marker_level_unmapped_code() {
        assert!(MarkerLevel::from_code("gluc", 0).is_err());
        assert!(MarkerLevel::from_code("gluc", 4).is_err());
    }

    #[test]
    fn test_validation_accepts_domain() {
        assert!(baseline().validate().is_ok());

        // Domain minima
        let min = RawPatientInput {
            age_years: 1,
            height_cm: 100,
            weight_kg: 30,
            systolic_bp: 80,
            diastolic_bp: 40,
            ..baseline()
        };
        assert!(min.validate().is_ok());
    }

    #[test]
    fn test_validation_flags_every_out_of_domain_field() {
        let bad = RawPatientInput {
            age_years: 0,
            height_cm: 99,
            weight_kg: 201,
            systolic_bp: 79,
            diastolic_bp: 151,
            ..baseline()
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.len(), 5);
    }
}
