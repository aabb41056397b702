//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement the
//! inference pipeline.

mod inference;

pub use inference::InferenceService;
