//! Ports layer: Trait definitions for the model seam.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the inference pipeline and whatever concrete model format backs
//! it. Any artifact that can transform and classify a fixed-length feature
//! vector can be substituted behind these contracts.

mod classifier;
mod transformer;

pub use classifier::Classifier;
pub use transformer::Transformer;

/// Errors raised at the model seam.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("feature shape mismatch: expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("feature at column {column} is not a finite number")]
    NonFinite { column: usize },
}
