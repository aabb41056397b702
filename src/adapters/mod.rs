//! Adapters layer: Concrete implementations of ports.
//!
//! - `artifact`: JSON-exported scaler and classifier artifacts produced by
//!   the training pipeline, plus the load-once artifact cache

pub mod artifact;

pub use artifact::{ArtifactError, ArtifactLoader, LogisticClassifier, MinMaxScaler};
