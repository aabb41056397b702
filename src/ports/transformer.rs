//! Transformer port: Trait for feature normalization.

use super::ModelError;

/// Trait for the forward feature transform.
///
/// Implementations map a raw feature vector into the numeric range the
/// classifier was trained on. The transform is fitted at training time and
/// read-only at runtime; there is no inverse or refit path.
pub trait Transformer: Send + Sync {
    /// Number of feature columns the transform was fitted on.
    fn num_features(&self) -> usize;

    /// Normalize a raw feature vector, preserving length and order.
    ///
    /// # Errors
    /// Returns `ModelError::ShapeMismatch` if the input length disagrees
    /// with the fitted column count, or `ModelError::NonFinite` if any
    /// value is NaN or infinite.
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError>;
}
