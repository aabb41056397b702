//! Neuroscreen: Alzheimer's disease risk screening.
//!
//! Reads one patient record as JSON on stdin, runs it through the
//! prediction pipeline, and prints the assessment. Artifact paths come
//! from `neuroscreen.toml` when present.

use std::io::Read;
use std::path::Path;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use neuroscreen::adapters::ArtifactLoader;
use neuroscreen::application::InferenceService;
use neuroscreen::config::ArtifactConfig;
use neuroscreen::domain::PatientRecord;

const CONFIG_PATH: &str = "neuroscreen.toml";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting neuroscreen...");

    let config = ArtifactConfig::load_or_default(Path::new(CONFIG_PATH))?;
    let loader = ArtifactLoader::new(config);

    // Load both artifacts up front so a broken deployment fails here, not
    // on the first patient-facing request.
    loader.preload()?;

    let service = InferenceService::new(loader.scaler()?, loader.classifier()?);

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let record: PatientRecord = serde_json::from_str(&input)?;

    let assessment = service.predict(&record)?;

    println!("{}", assessment.message);
    if let Some(disclaimer) = assessment.disclaimer {
        println!("Warning: {disclaimer}");
    }

    tracing::info!("Neuroscreen shutdown complete.");
    Ok(())
}
