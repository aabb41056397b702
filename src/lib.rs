//! # Neuroscreen
//!
//! Alzheimer's disease risk screening from patient-reported clinical and
//! lifestyle indicators.
//!
//! This crate provides:
//! - Validation of sixteen patient-reported input fields against fixed ranges
//! - Assembly of the inputs into the feature vector the model was trained on
//! - Min-max normalization and binary classification via pre-trained artifacts
//! - A risk assessment result carrying a mandatory disclaimer when risk is
//!   predicted
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (PatientRecord, feature ranges, RiskLabel)
//! - `ports`: Trait definitions for the model seam (Transformer, Classifier)
//! - `adapters`: Concrete artifact implementations (JSON-exported scaler and
//!   classifier, artifact loading and caching)
//! - `application`: The inference pipeline orchestrating domain and ports
//! - `config`: Artifact file locations

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::InferenceService;
pub use domain::{PatientRecord, RiskAssessment, RiskLabel};

/// Result type for Neuroscreen operations
pub type Result<T> = std::result::Result<T, NeuroscreenError>;

/// Main error type for Neuroscreen
#[derive(Debug, thiserror::Error)]
pub enum NeuroscreenError {
    #[error("Artifact loading failed: {0}")]
    Artifact(#[from] adapters::ArtifactError),

    #[error("Invalid patient record: {0}")]
    Record(#[from] domain::RecordError),

    #[error("Model evaluation failed: {0}")]
    Model(#[from] ports::ModelError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
