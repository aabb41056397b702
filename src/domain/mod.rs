//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external dependencies.
//! All types are serializable and implement strict validation.

mod assessment;
mod patient;

pub use assessment::{RiskAssessment, RiskLabel, DISCLAIMER};
pub use patient::{FeatureRange, PatientRecord, RecordError, FEATURE_ORDER, FEATURE_RANGES};
