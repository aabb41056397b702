//! Inference service: Orchestrates the risk prediction pipeline.
//!
//! One validated patient record in, one risk assessment out:
//! - Defensive range validation
//! - Feature vector assembly in trained column order
//! - Forward scaler transform
//! - Binary classification
//! - Label-to-assessment mapping

use std::sync::Arc;

use crate::domain::{PatientRecord, RiskAssessment};
use crate::ports::{Classifier, Transformer};

/// Service for running risk predictions.
///
/// Pure and stateless: the same record against the same artifacts always
/// yields the same label. The artifact handles are shared read-only; no
/// locking is needed per prediction.
pub struct InferenceService<T, C>
where
    T: Transformer,
    C: Classifier,
{
    transformer: Arc<T>,
    classifier: Arc<C>,
}

impl<T, C> InferenceService<T, C>
where
    T: Transformer,
    C: Classifier,
{
    /// Create a new inference service over loaded artifacts.
    #[must_use]
    pub fn new(transformer: Arc<T>, classifier: Arc<C>) -> Self {
        Self {
            transformer,
            classifier,
        }
    }

    /// Run the prediction pipeline on one patient record.
    ///
    /// A record that cannot be processed returns an error; it is never
    /// coerced into a "not at risk" label.
    ///
    /// # Errors
    /// Returns `RecordError` for out-of-range input and `ModelError` for a
    /// record/artifact shape disagreement.
    pub fn predict(&self, record: &PatientRecord) -> crate::Result<RiskAssessment> {
        record.validate()?;

        let raw = record.to_vector();
        tracing::debug!("Assembled feature vector ({} features)", raw.len());

        let normalized = self.transformer.transform(&raw)?;
        tracing::debug!("Normalized feature vector");

        let label = self.classifier.predict(&normalized)?;

        let assessment = RiskAssessment::new(label);
        tracing::info!("Prediction complete: label={}", assessment.label);
        Ok(assessment)
    }

    /// Build a record from loosely-typed form output and predict.
    ///
    /// # Errors
    /// Returns `RecordError::MissingField` before any model call when a
    /// required field is absent.
    pub fn predict_fields<'a, I>(&self, fields: I) -> crate::Result<RiskAssessment>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let record = PatientRecord::from_fields(fields)?;
        self.predict(&record)
    }
}
