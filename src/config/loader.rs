//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading ledger
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineMetadata, LedgerConfig, WorkingDayPolicy};

/// Loads and provides access to ledger configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml   # Metadata (name, version, locale)
/// └── policy.yaml   # Expected hours, night premium, working-day policy
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded policy: {} {}", loader.metadata().name, loader.metadata().version);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LedgerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any policy value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let engine = Self::load_yaml::<EngineConfig>(&path.join("policy.yaml"))?;
        metadata.validate()?;
        engine.validate()?;

        Ok(Self {
            config: LedgerConfig::new(metadata, engine),
        })
    }

    /// Builds a loader from already-constructed parts, validating the policy.
    pub fn from_parts(metadata: EngineMetadata, engine: EngineConfig) -> EngineResult<Self> {
        metadata.validate()?;
        engine.validate()?;
        Ok(Self {
            config: LedgerConfig::new(metadata, engine),
        })
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

    /// Returns the underlying configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Returns the deployment metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the policy configuration handed to the engine.
    pub fn engine(&self) -> &EngineConfig {
        self.config.engine()
    }

    /// Returns the configured working-day policy.
    pub fn working_day_policy(&self) -> WorkingDayPolicy {
        self.config.engine().working_days.policy
    }
}
