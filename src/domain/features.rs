//! Feature derivation: raw patient input to the model's feature schema.
//!
//! The trained classifier expects the exact named columns of the cardio
//! training set, including two engineered features (`age` as a day-count
//! and `BMI`). Derivation is a pure function with no I/O.

use serde::{Deserialize, Serialize};

use super::patient::RawPatientInput;

/// Errors raised during feature derivation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeatureError {
    /// A categorical field carried a code outside its enum. Structurally
    /// impossible once input has been parsed into `RawPatientInput`; raised
    /// at the collector boundary when decoding integer codes.
    #[error("Unmapped category code {value} for field '{field}'")]
    UnmappedCategory { field: &'static str, value: u8 },

    /// Degenerate numeric input that would produce a non-finite derived
    /// feature (e.g. zero height).
    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),
}

/// Column names the classifier was trained on, in training-set order.
pub const FEATURE_NAMES: [&str; 13] = [
    "age",
    "gender",
    "height",
    "weight",
    "ap_hi",
    "ap_lo",
    "cholesterol",
    "gluc",
    "smoke",
    "alco",
    "active",
    "age_years",
    "BMI",
];

/// The exact feature record the classifier was trained on.
///
/// Thirteen named fields: the eleven raw attributes (categoricals as their
/// canonical integer codes) plus the derived day-count age and BMI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalFeatureRecord {
    /// Age as a day-count proxy: `age_years * 365`. Not calendar-accurate,
    /// matching the training-time convention.
    pub age: i64,

    /// Gender code (1 = female, 2 = male)
    pub gender: u8,

    /// Height in cm
    pub height: u32,

    /// Weight in kg
    pub weight: u32,

    /// Systolic blood pressure in mmHg
    pub ap_hi: u32,

    /// Diastolic blood pressure in mmHg
    pub ap_lo: u32,

    /// Cholesterol level code (1-3)
    pub cholesterol: u8,

    /// Glucose level code (1-3)
    pub gluc: u8,

    /// Smoking flag (0/1)
    pub smoke: u8,

    /// Alcohol flag (0/1)
    pub alco: u8,

    /// Physical activity flag (0/1)
    pub active: u8,

    /// Raw age in years, kept alongside the derived day-count
    pub age_years: u32,

    /// Body Mass Index: `weight_kg / (height_cm / 100)^2`, full double
    /// precision, no rounding before classification.
    pub bmi: f64,
}

impl CanonicalFeatureRecord {
    /// The record as (column name, value) pairs in training-set order.
    ///
    /// The model adapter resolves its expected columns against these names;
    /// it must never rely on positional order.
    #[must_use]
    pub fn named_values(&self) -> [(&'static str, f64); 13] {
        [
            ("age", self.age as f64),
            ("gender", f64::from(self.gender)),
            ("height", f64::from(self.height)),
            ("weight", f64::from(self.weight)),
            ("ap_hi", f64::from(self.ap_hi)),
            ("ap_lo", f64::from(self.ap_lo)),
            ("cholesterol", f64::from(self.cholesterol)),
            ("gluc", f64::from(self.gluc)),
            ("smoke", f64::from(self.smoke)),
            ("alco", f64::from(self.alco)),
            ("active", f64::from(self.active)),
            ("age_years", f64::from(self.age_years)),
            ("BMI", self.bmi),
        ]
    }

    /// Look up a single column value by its training-set name.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.named_values()
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }
}

/// Build the canonical feature record from raw patient input.
///
/// Pure and total over the documented input domain: categorical codes come
/// from exhaustive enum matches, `age` is plain integer arithmetic, and the
/// BMI guard covers degenerate heights that the domain bounds already
/// exclude.
///
/// # Errors
/// Returns `FeatureError::InvalidMeasurement` if the derived BMI would be
/// non-finite.
pub fn build(raw: &RawPatientInput) -> Result<CanonicalFeatureRecord, FeatureError> {
    if raw.height_cm == 0 {
        return Err(FeatureError::InvalidMeasurement(
            "height must be non-zero to derive BMI".to_string(),
        ));
    }

    let height_m = f64::from(raw.height_cm) / 100.0;
    let bmi = f64::from(raw.weight_kg) / (height_m * height_m);
    if !bmi.is_finite() {
        return Err(FeatureError::InvalidMeasurement(format!(
            "BMI is not finite for height={} weight={}",
            raw.height_cm, raw.weight_kg
        )));
    }

    Ok(CanonicalFeatureRecord {
        age: i64::from(raw.age_years) * 365,
        gender: raw.gender.code(),
        height: raw.height_cm,
        weight: raw.weight_kg,
        ap_hi: raw.systolic_bp,
        ap_lo: raw.diastolic_bp,
        cholesterol: raw.cholesterol_level.code(),
        gluc: raw.glucose_level.code(),
        smoke: u8::from(raw.smokes),
        alco: u8::from(raw.drinks_alcohol),
        active: u8::from(raw.physically_active),
        age_years: raw.age_years,
        bmi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::{Gender, MarkerLevel};

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
    fn test_build_reference_patient() {
        let record = build(&baseline()).expect("Should build");

        assert_eq!(record.age, 10950); // 30 * 365
        assert_eq!(record.gender, 2);
        assert_eq!(record.height, 170);
        assert_eq!(record.weight, 70);
        assert_eq!(record.ap_hi, 120);
        assert_eq!(record.ap_lo, 80);
        assert_eq!(record.cholesterol, 1);
        assert_eq!(record.gluc, 1);
        assert_eq!(record.smoke, 0);
        assert_eq!(record.alco, 0);
        assert_eq!(record.active, 1);
        assert_eq!(record.age_years, 30);
        // 70 / 1.7^2
        assert!((record.bmi - 24.221_453_287_197_235).abs() < 1e-12);
    }

    #[test]
    fn test_named_values_match_training_schema() {
        let record = build(&baseline()).expect("Should build");
        let named = record.named_values();

        assert_eq!(named.len(), FEATURE_NAMES.len());
        for ((name, value), expected) in named.iter().zip(FEATURE_NAMES.iter()) {
            assert_eq!(name, expected);
            assert!(value.is_finite());
        }
        assert_eq!(record.value_of("BMI"), Some(record.bmi));
        assert_eq!(record.value_of("ap_hi"), Some(120.0));
        assert_eq!(record.value_of("nonexistent"), None);
    }

    #[test]
    fn test_boundary_minimum_input() {
        let min = RawPatientInput {
            age_years: 1,
            height_cm: 100,
            weight_kg: 30,
            ..baseline()
        };
        let record = build(&min).expect("Minimum domain input must build");

        assert_eq!(record.age, 365);
        assert!((record.bmi - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let degenerate = RawPatientInput {
            height_cm: 0,
            ..baseline()
        };
        let err = build(&degenerate).unwrap_err();
        assert!(matches!(err, FeatureError::InvalidMeasurement(_)));
    }

    #[test]
    fn test_no_non_finite_values_across_domain_corners() {
        for age_years in [1, 120] {
            for height_cm in [100, 250] {
                for weight_kg in [30, 200] {
                    let input = RawPatientInput {
                        age_years,
                        height_cm,
                        weight_kg,
                        ..baseline()
                    };
                    let record = build(&input).expect("Domain input must build");
                    for (_, value) in record.named_values() {
                        assert!(value.is_finite());
                    }
                }
            }
        }
    }

    #[test]
    fn test_lifestyle_flags_encode_to_bits() {
        let input = RawPatientInput {
            smokes: true,
            drinks_alcohol: true,
            physically_active: false,
            ..baseline()
        };
        let record = build(&input).expect("Should build");
        assert_eq!(record.smoke, 1);
        assert_eq!(record.alco, 1);
        assert_eq!(record.active, 0);
    }
}
