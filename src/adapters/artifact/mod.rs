//! Artifact adapter: Pre-trained scaler and classifier loaded from JSON.
//!
//! The training pipeline exports both artifacts as JSON documents carrying
//! their fitted parameters together with the feature names they were fitted
//! on. Loading verifies the parameter lengths agree and that the recorded
//! feature order matches `FEATURE_ORDER`; a silently reordered export would
//! otherwise corrupt every prediction.
//!
//! `ArtifactLoader` owns the two cached handles. Each artifact is read from
//! disk at most once per loader, no matter how many threads race on the
//! first access.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ArtifactConfig;
use crate::domain::{RiskLabel, FEATURE_ORDER};
use crate::ports::{Classifier, ModelError, Transformer};

/// Errors raised while loading artifacts from storage.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found at {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("artifact {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ArtifactError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ArtifactError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_str(&content).map_err(|e| ArtifactError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn corrupt(path: &Path, reason: impl Into<String>) -> ArtifactError {
    ArtifactError::Corrupt {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

fn check_feature_names(names: &[String], path: &Path) -> Result<(), ArtifactError> {
    if names.len() != FEATURE_ORDER.len() {
        return Err(corrupt(
            path,
            format!(
                "expected {} feature names, got {}",
                FEATURE_ORDER.len(),
                names.len()
            ),
        ));
    }
    if names.iter().map(String::as_str).ne(FEATURE_ORDER) {
        return Err(corrupt(path, "feature names do not match the trained column order"));
    }
    Ok(())
}

/// Min-max feature scaler fitted at training time.
///
/// Forward transform only: `(x - data_min) / (data_max - data_min)` per
/// column. Parameters are fixed; there is no mutation path after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub feature_names: Vec<String>,
    pub data_min: Vec<f64>,
    pub data_max: Vec<f64>,
}

impl MinMaxScaler {
    /// Load and sanity-check a scaler artifact.
    ///
    /// # Errors
    /// Returns `ArtifactError::NotFound` if the path is missing, or
    /// `ArtifactError::Corrupt` if deserialization or a post-load sanity
    /// check fails.
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let scaler: Self = read_json(path)?;

        check_feature_names(&scaler.feature_names, path)?;
        if scaler.data_min.len() != scaler.feature_names.len()
            || scaler.data_max.len() != scaler.feature_names.len()
        {
            return Err(corrupt(
                path,
                "parameter lengths do not match feature_names length",
            ));
        }
        for (i, (lo, hi)) in scaler.data_min.iter().zip(&scaler.data_max).enumerate() {
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(corrupt(path, format!("invalid bounds at column {i}")));
            }
        }

        tracing::info!(
            "Loaded scaler from {:?} (n_features={})",
            path,
            scaler.feature_names.len()
        );
        Ok(scaler)
    }
}

impl Transformer for MinMaxScaler {
    fn num_features(&self) -> usize {
        self.data_min.len()
    }

    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        if features.len() != self.data_min.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.data_min.len(),
                actual: features.len(),
            });
        }

        let mut out = Vec::with_capacity(features.len());
        for (column, (&x, (&lo, &hi))) in features
            .iter()
            .zip(self.data_min.iter().zip(&self.data_max))
            .enumerate()
        {
            if !x.is_finite() {
                return Err(ModelError::NonFinite { column });
            }
            let span = hi - lo;
            // A constant training column carries no signal; map it to 0.
            out.push(if span == 0.0 { 0.0 } else { (x - lo) / span });
        }
        Ok(out)
    }
}

fn default_threshold() -> f64 {
    0.5
}

/// Logistic regression classifier fitted at training time.
///
/// Computes `sigmoid(w . x + b)` over the normalized vector and thresholds
/// it into a hard label. The probability stays internal; the deployed
/// contract is binary-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticClassifier {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl LogisticClassifier {
    /// Load and sanity-check a classifier artifact.
    ///
    /// # Errors
    /// Returns `ArtifactError::NotFound` if the path is missing, or
    /// `ArtifactError::Corrupt` if deserialization or a post-load sanity
    /// check fails.
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let model: Self = read_json(path)?;

        check_feature_names(&model.feature_names, path)?;
        if model.coefficients.len() != model.feature_names.len() {
            return Err(corrupt(
                path,
                "coefficient length does not match feature_names length",
            ));
        }
        if model.coefficients.iter().any(|w| !w.is_finite()) || !model.intercept.is_finite() {
            return Err(corrupt(path, "non-finite model parameter"));
        }
        if !(model.threshold > 0.0 && model.threshold < 1.0) {
            return Err(corrupt(
                path,
                format!("decision threshold {} outside (0, 1)", model.threshold),
            ));
        }

        tracing::info!(
            "Loaded classifier from {:?} (n_features={}, threshold={})",
            path,
            model.feature_names.len(),
            model.threshold
        );
        Ok(model)
    }
}

impl Classifier for LogisticClassifier {
    fn num_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<RiskLabel, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        let mut z = self.intercept;
        for (column, (&x, &w)) in features.iter().zip(&self.coefficients).enumerate() {
            if !x.is_finite() {
                return Err(ModelError::NonFinite { column });
            }
            z += w * x;
        }

        let probability = 1.0 / (1.0 + (-z).exp());
        Ok(if probability >= self.threshold {
            RiskLabel::AtRisk
        } else {
            RiskLabel::NotAtRisk
        })
    }
}

/// Load-once cache for the two pre-trained artifacts.
///
/// Constructed once at startup and injected wherever prediction happens, so
/// tests can substitute fixture artifacts without touching global state.
/// Each artifact is deserialized at most once per loader; concurrent first
/// accesses all observe the same shared handle.
pub struct ArtifactLoader {
    config: ArtifactConfig,
    scaler: Mutex<Option<Arc<MinMaxScaler>>>,
    classifier: Mutex<Option<Arc<LogisticClassifier>>>,
}

impl ArtifactLoader {
    /// Create a loader over the configured artifact paths. Nothing is read
    /// until the first access (or an explicit `preload`).
    #[must_use]
    pub fn new(config: ArtifactConfig) -> Self {
        Self {
            config,
            scaler: Mutex::new(None),
            classifier: Mutex::new(None),
        }
    }

    /// Get the shared scaler handle, reading it from storage on first use.
    ///
    /// # Errors
    /// Returns `ArtifactError` if the artifact cannot be loaded. Failures
    /// are not cached; a later call retries the read.
    pub fn scaler(&self) -> Result<Arc<MinMaxScaler>, ArtifactError> {
        // A poisoned slot holds either None or a fully loaded handle, so
        // the lock is safe to reclaim.
        let mut slot = self.scaler.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(scaler) = slot.as_ref() {
            return Ok(Arc::clone(scaler));
        }
        let loaded = Arc::new(MinMaxScaler::from_path(&self.config.scaler_path)?);
        *slot = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Get the shared classifier handle, reading it from storage on first use.
    ///
    /// # Errors
    /// Returns `ArtifactError` if the artifact cannot be loaded. Failures
    /// are not cached; a later call retries the read.
    pub fn classifier(&self) -> Result<Arc<LogisticClassifier>, ArtifactError> {
        let mut slot = self
            .classifier
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(classifier) = slot.as_ref() {
            return Ok(Arc::clone(classifier));
        }
        let loaded = Arc::new(LogisticClassifier::from_path(&self.config.model_path)?);
        *slot = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Eagerly load both artifacts so failures surface at startup rather
    /// than on the first user-facing request.
    ///
    /// # Errors
    /// Returns the first artifact failure encountered.
    pub fn preload(&self) -> Result<(), ArtifactError> {
        self.scaler()?;
        self.classifier()?;
        Ok(())
    }
}
