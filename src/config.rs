//! Validator configuration
//!
//! Controls how a validation pass treats its diagnostics. Loadable from TOML
//! with the `config-file` feature:
//!
//! ```toml
//! warnings_as_errors = false
//! stop_on_first_error = false
//! suppress = ["sequence-configured"]
//! ```

use crate::validation::diagnostics::DiagnosticCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Configuration for a validation pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Report warnings with error severity
    pub warnings_as_errors: bool,

    /// Stop collecting after the first error
    pub stop_on_first_error: bool,

    /// Diagnostic codes that are never reported
    pub suppress: Vec<DiagnosticCode>,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::default()
    }

    pub fn is_suppressed(&self, code: DiagnosticCode) -> bool {
        self.suppress.contains(&code)
    }

    #[cfg(feature = "config-file")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    #[cfg(feature = "config-file")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded validator config from {}", path.display());
        Ok(config)
    }
}

/// Builder for ValidatorConfig
#[derive(Debug, Default)]
pub struct ValidatorConfigBuilder {
    config: ValidatorConfig,
}

impl ValidatorConfigBuilder {
    pub fn warnings_as_errors(mut self, enabled: bool) -> Self {
        self.config.warnings_as_errors = enabled;
        self
    }

    pub fn stop_on_first_error(mut self, enabled: bool) -> Self {
        self.config.stop_on_first_error = enabled;
        self
    }

    pub fn suppress(mut self, code: DiagnosticCode) -> Self {
        if !self.config.suppress.contains(&code) {
            self.config.suppress.push(code);
        }
        self
    }

    pub fn build(self) -> ValidatorConfig {
        self.config
    }
}
