//! cvdrisk: Cardiovascular disease risk prediction.
//!
//! Main entry point for the console application.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cvdrisk::adapters::logistic::LogisticModel;
use cvdrisk::application::AssessmentService;
use cvdrisk::console::ConsoleApp;

/// Default location of the trained classifier artifact.
const DEFAULT_MODEL_PATH: &str = "models/cvd_model.json";

fn main() -> Result<()> {
    // Logs go to stderr so the prompts on stdout stay clean.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let model_path = std::env::var("CVDRISK_MODEL_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));

    tracing::info!("Starting cvdrisk...");

    // A missing or corrupt artifact is fatal: no request can be served.
    let model = LogisticModel::load(&model_path)
        .with_context(|| format!("Cannot serve predictions without {}", model_path.display()))?;

    let service = AssessmentService::new(Arc::new(model));
    let app = ConsoleApp::new(service);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app.run(&mut stdin.lock(), &mut stdout.lock())?;

    tracing::info!("cvdrisk shutdown complete.");
    Ok(())
}
