//! Console front-end: input collection and result rendering.
//!
//! A line-oriented stand-in for the form UI. Prompts for each clinical
//! field with the documented domain bounds and defaults, echoes a patient
//! summary, and renders the verdict with the risk probability.
//!
//! Parsing is separated from I/O so the prompt logic is unit-testable.

use std::io::{BufRead, Write};

use crate::application::AssessmentService;
use crate::domain::{Gender, MarkerLevel, RawPatientInput, RiskAssessment, RiskClass};
use crate::ports::RiskModel;
use crate::Result;

/// Parse a bounded integer field, falling back to `default` on empty input.
fn parse_bounded(input: &str, min: u32, max: u32, default: u32) -> std::result::Result<u32, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    let value: u32 = trimmed
        .parse()
        .map_err(|_| format!("'{trimmed}' is not a whole number"))?;
    if !(min..=max).contains(&value) {
        return Err(format!("{value} out of range [{min}, {max}]"));
    }
    Ok(value)
}

/// Parse a categorical code field, falling back to `default` on empty input.
fn parse_code(input: &str, default: u8) -> std::result::Result<u8, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse()
        .map_err(|_| format!("'{trimmed}' is not a valid code"))
}

/// Interactive console application around the assessment service.
pub struct ConsoleApp<M>
where
    M: RiskModel,
{
    service: AssessmentService<M>,
}

impl<M> ConsoleApp<M>
where
    M: RiskModel,
{
    /// Create a new console application.
    pub fn new(service: AssessmentService<M>) -> Self {
        Self { service }
    }

    /// Run the interaction loop: one patient record per round.
    ///
    /// # Errors
    /// Returns error on I/O failure; assessment errors are displayed and
    /// the loop continues with the next patient.
    pub fn run(&self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        writeln!(output, "Cardiovascular Disease (CVD) Risk Prediction")?;
        writeln!(output, "============================================")?;

        loop {
            let patient = self.collect(input, output)?;
            self.render_summary(output, &patient)?;

            match self.service.assess(&patient) {
                Ok(assessment) => self.render_verdict(output, &assessment)?,
                // No fallback verdict: show the error and move on.
                Err(e) => writeln!(output, "\nPrediction failed: {e}")?,
            }

            write!(output, "\nAssess another patient? [y/N] ")?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 || !line.trim().eq_ignore_ascii_case("y") {
                break;
            }
            writeln!(output)?;
        }

        Ok(())
    }

    /// Prompt for the eleven raw fields.
    fn collect(
        &self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<RawPatientInput> {
        writeln!(output, "\nEnter patient information (blank keeps default):")?;

        let age_years = self.prompt_bounded(input, output, "Age (years)", 1, 120, 30)?;
        let gender = self.prompt_gender(input, output)?;
        let height_cm = self.prompt_bounded(input, output, "Height (cm)", 100, 250, 170)?;
        let weight_kg = self.prompt_bounded(input, output, "Weight (kg)", 30, 200, 70)?;
        let systolic_bp =
            self.prompt_bounded(input, output, "Systolic BP (ap_hi)", 80, 250, 120)?;
        let diastolic_bp =
            self.prompt_bounded(input, output, "Diastolic BP (ap_lo)", 40, 150, 80)?;
        let cholesterol_level =
            self.prompt_marker(input, output, "Cholesterol level", "cholesterol")?;
        let glucose_level = self.prompt_marker(input, output, "Glucose level", "gluc")?;
        let smokes = self.prompt_flag(input, output, "Does the patient smoke?")?;
        let drinks_alcohol =
            self.prompt_flag(input, output, "Does the patient consume alcohol?")?;
        let physically_active =
            self.prompt_flag(input, output, "Is the patient physically active?")?;

        Ok(RawPatientInput {
            age_years,
            gender,
            height_cm,
            weight_kg,
            systolic_bp,
            diastolic_bp,
            cholesterol_level,
            glucose_level,
            smokes,
            drinks_alcohol,
            physically_active,
        })
    }

    fn prompt_bounded(
        &self,
        input: &mut impl BufRead,
        output: &mut impl Write,
        label: &str,
        min: u32,
        max: u32,
        default: u32,
    ) -> Result<u32> {
        loop {
            write!(output, "{label} [{min}-{max}] (default {default}): ")?;
            output.flush()?;
            let line = read_line(input)?;
            match parse_bounded(&line, min, max, default) {
                Ok(value) => return Ok(value),
                Err(msg) => writeln!(output, "  {msg}")?,
            }
        }
    }

    fn prompt_gender(
        &self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<Gender> {
        loop {
            write!(output, "Gender [1=Female, 2=Male] (default 2): ")?;
            output.flush()?;
            let line = read_line(input)?;
            match parse_code(&line, 2) {
                Ok(code) => match Gender::try_from(code) {
                    Ok(gender) => return Ok(gender),
                    Err(e) => writeln!(output, "  {e}")?,
                },
                Err(msg) => writeln!(output, "  {msg}")?,
            }
        }
    }

    fn prompt_marker(
        &self,
        input: &mut impl BufRead,
        output: &mut impl Write,
        label: &str,
        field: &'static str,
    ) -> Result<MarkerLevel> {
        loop {
            write!(
                output,
                "{label} [1=Normal, 2=Above normal, 3=Well above normal] (default 1): "
            )?;
            output.flush()?;
            let line = read_line(input)?;
            match parse_code(&line, 1) {
                Ok(code) => match MarkerLevel::from_code(field, code) {
                    Ok(level) => return Ok(level),
                    Err(e) => writeln!(output, "  {e}")?,
                },
                Err(msg) => writeln!(output, "  {msg}")?,
            }
        }
    }

    fn prompt_flag(
        &self,
        input: &mut impl BufRead,
        output: &mut impl Write,
        label: &str,
    ) -> Result<bool> {
        loop {
            write!(output, "{label} [0=No, 1=Yes] (default 0): ")?;
            output.flush()?;
            let line = read_line(input)?;
            match parse_code(&line, 0) {
                Ok(0) => return Ok(false),
                Ok(1) => return Ok(true),
                Ok(other) => writeln!(output, "  {other} must be 0 or 1")?,
                Err(msg) => writeln!(output, "  {msg}")?,
            }
        }
    }

    fn render_summary(&self, output: &mut impl Write, patient: &RawPatientInput) -> Result<()> {
        writeln!(output, "\nPatient summary:")?;
        writeln!(
            output,
            "  age={}y gender={:?} height={}cm weight={}kg bp={}/{}",
            patient.age_years,
            patient.gender,
            patient.height_cm,
            patient.weight_kg,
            patient.systolic_bp,
            patient.diastolic_bp
        )?;
        writeln!(
            output,
            "  cholesterol={:?} glucose={:?} smoke={} alcohol={} active={}",
            patient.cholesterol_level,
            patient.glucose_level,
            patient.smokes,
            patient.drinks_alcohol,
            patient.physically_active
        )?;
        Ok(())
    }

    fn render_verdict(&self, output: &mut impl Write, assessment: &RiskAssessment) -> Result<()> {
        writeln!(output, "\nPrediction outcome:")?;
        writeln!(output, "  {}", assessment.result.risk_class.description())?;
        writeln!(
            output,
            "  Estimated risk probability: {}",
            assessment.result.probability_percent()
        )?;
        let note = match assessment.result.risk_class {
            RiskClass::AtRisk => {
                "Further medical examination is recommended for accurate clinical assessment."
            }
            RiskClass::NotAtRisk => {
                "This prediction is based on the model's analysis and should not replace \
                 professional medical diagnosis."
            }
        };
        writeln!(output, "  Note: {note}")?;
        Ok(())
    }
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::logistic::{ExportedCalibratedModel, LogisticModel};
    use crate::domain::FEATURE_NAMES;
    use std::io::Cursor;
    use std::sync::Arc;

    fn create_app() -> ConsoleApp<LogisticModel> {
        let exported = ExportedCalibratedModel {
            feature_names: FEATURE_NAMES.iter().map(|s| (*s).to_string()).collect(),
            scaler_mean: vec![
                19468.0, 1.35, 164.4, 74.2, 128.8, 81.3, 1.37, 1.23, 0.09, 0.05, 0.80, 53.3,
                27.56,
            ],
            scaler_std: vec![
                2467.0, 0.48, 8.2, 14.4, 16.7, 9.6, 0.68, 0.57, 0.28, 0.23, 0.40, 6.76, 6.09,
            ],
            coefficients: vec![
                0.35, 0.02, -0.05, 0.10, 0.95, 0.18, 0.38, -0.06, -0.02, -0.05, -0.10, 0.35,
                0.15,
            ],
            intercept: -0.12,
            decision_threshold: 0.5,
        };
        let model = LogisticModel::from_exported(exported).expect("Model should build");
        ConsoleApp::new(AssessmentService::new(Arc::new(model)))
    }

    #[test]
    fn test_parse_bounded() {
        assert_eq!(parse_bounded("", 1, 120, 30), Ok(30));
        assert_eq!(parse_bounded(" 45 \n", 1, 120, 30), Ok(45));
        assert!(parse_bounded("121", 1, 120, 30).is_err());
        assert!(parse_bounded("abc", 1, 120, 30).is_err());
    }

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("\n", 1), Ok(1));
        assert_eq!(parse_code("3", 1), Ok(3));
        assert!(parse_code("x", 1).is_err());
    }

    #[test]
    fn test_full_session_with_defaults() {
        let app = create_app();
        // Eleven blank prompts accept every default, then decline a second round.
        let mut input = Cursor::new("\n".repeat(11) + "n\n");
        let mut output = Vec::new();

        app.run(&mut input, &mut output).expect("Session should run");

        let transcript = String::from_utf8(output).expect("utf8");
        assert!(transcript.contains("Patient summary:"));
        assert!(transcript.contains("Prediction outcome:"));
        assert!(transcript.contains("Estimated risk probability:"));
    }

    #[test]
    fn test_invalid_entry_is_reprompted() {
        let app = create_app();
        // First age entry is out of domain, second is accepted; the
        // remaining ten prompts take defaults.
        let mut input = Cursor::new("500\n55\n".to_string() + &"\n".repeat(10) + "n\n");
        let mut output = Vec::new();

        app.run(&mut input, &mut output).expect("Session should run");

        let transcript = String::from_utf8(output).expect("utf8");
        assert!(transcript.contains("500 out of range [1, 120]"));
        assert!(transcript.contains("age=55y"));
    }

    #[test]
    fn test_unmapped_category_is_reported() {
        let app = create_app();
        // Gender code 7 is outside the enum; re-prompt accepts 1.
        let mut input = Cursor::new("\n7\n1\n".to_string() + &"\n".repeat(9) + "n\n");
        let mut output = Vec::new();

        app.run(&mut input, &mut output).expect("Session should run");

        let transcript = String::from_utf8(output).expect("utf8");
        assert!(transcript.contains("Unmapped category code 7 for field 'gender'"));
        assert!(transcript.contains("gender=Female"));
    }
}
