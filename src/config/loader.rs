//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading reporting
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::TimeStamp;
use crate::store::InMemoryStampStore;

use super::types::{ReportingConfig, StampsFile};

/// Loads and provides access to reporting configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── reporting.yaml   # Correction policy and respite threshold
/// └── stamps.yaml      # Optional seed stamps for the in-memory store
/// ```
///
/// # Example
///
/// ```no_run
/// use stamp_reports::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Cutoff: {}", loader.config().correction.next_day_cutoff);
/// let store = loader.stamp_store();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ReportingConfig,
    stamps: Vec<TimeStamp>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `reporting.yaml` is missing, or if either file
    /// contains invalid YAML. A missing `stamps.yaml` yields no seed stamps.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let config = Self::load_yaml::<ReportingConfig>(&path.join("reporting.yaml"))?;

        let stamps_path = path.join("stamps.yaml");
        let stamps = if stamps_path.exists() {
            Self::load_yaml::<StampsFile>(&stamps_path)?.stamps
        } else {
            Vec::new()
        };

        info!(
            path = %path.display(),
            stamps = stamps.len(),
            "Loaded reporting configuration"
        );

        Ok(Self { config, stamps })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the reporting configuration.
    pub fn config(&self) -> &ReportingConfig {
        &self.config
    }

    /// Returns the seed stamps in file order.
    pub fn stamps(&self) -> &[TimeStamp] {
        &self.stamps
    }

    /// Builds an in-memory store holding the seed stamps.
    pub fn stamp_store(&self) -> InMemoryStampStore {
        InMemoryStampStore::new(self.stamps.clone())
    }
}
