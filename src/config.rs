//! Artifact location configuration.
//!
//! The artifact file paths are the only configuration surface of the
//! pipeline. They can be overridden via a small TOML file; every field has
//! a default pointing at the bundled `models/` directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Locations of the two pre-trained artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactConfig {
    /// Path to the serialized feature scaler
    pub scaler_path: PathBuf,

    /// Path to the serialized classifier
    pub model_path: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            scaler_path: PathBuf::from("models/minmax_scaler.json"),
            model_path: PathBuf::from("models/classifier.json"),
        }
    }
}

impl ArtifactConfig {
    /// Read configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `ConfigError::Read` if the file cannot be read, or
    /// `ConfigError::Parse` if it is not valid configuration TOML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    /// Returns an error only for a file that exists but cannot be loaded.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_bundled_models() {
        let config = ArtifactConfig::default();
        assert_eq!(config.scaler_path, PathBuf::from("models/minmax_scaler.json"));
        assert_eq!(config.model_path, PathBuf::from("models/classifier.json"));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let dir = tempfile::tempdir().expect("Should create tempdir");
        let path = dir.path().join("neuroscreen.toml");
        std::fs::write(
            &path,
            "scaler_path = \"artifacts/scaler.json\"\nmodel_path = \"artifacts/model.json\"\n",
        )
        .expect("Should write config");

        let config = ArtifactConfig::from_file(&path).expect("Should parse");
        assert_eq!(config.scaler_path, PathBuf::from("artifacts/scaler.json"));
        assert_eq!(config.model_path, PathBuf::from("artifacts/model.json"));
    }

    #[test]
    fn test_load_or_default_with_missing_file() {
        let config = ArtifactConfig::load_or_default(Path::new("does/not/exist.toml"))
            .expect("Should fall back");
        assert_eq!(config, ArtifactConfig::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let dir = tempfile::tempdir().expect("Should create tempdir");
        let path = dir.path().join("neuroscreen.toml");
        std::fs::write(&path, "scaler_path = \"s.json\"\nextra = 1\n")
            .expect("Should write config");

        assert!(matches!(
            ArtifactConfig::from_file(&path).expect_err("Should fail"),
            ConfigError::Parse { .. }
        ));
    }
}
