//! Model loading functionality
//!
//! Loads model documents (YAML or JSON) and runs them through the same
//! conventions as the builder, so a loaded model validates exactly like one
//! declared in code.
//!
//! ```yaml
//! entity_types:
//!   - name: Animal
//!     table: { name: Animals, schema: pet }
//!     properties:
//!       - { name: Id, value_type: int32 }
//!       - { name: Name, value_type: string }
//! sequences:
//!   - name: Fibonacci
//! ```

use crate::builder::{ModelBuildError, ModelBuilder};
use crate::models::Model;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors loading a model document
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read model file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported model file extension: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse {format} model: {message}")]
    Parse {
        format: ModelFormat,
        message: String,
    },

    #[error("Invalid model: {0}")]
    Build(#[from] ModelBuildError),
}

/// Model document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Yaml,
    Json,
}

impl ModelFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(ModelFormat::Yaml),
            "json" => Some(ModelFormat::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelFormat::Yaml => f.write_str("YAML"),
            ModelFormat::Json => f.write_str("JSON"),
        }
    }
}

/// Loads models from documents
pub struct ModelLoader;

impl ModelLoader {
    /// Parse a model document and apply conventions
    pub fn parse_str(content: &str, format: ModelFormat) -> Result<Model, LoadError> {
        let declared: Model = match format {
            ModelFormat::Yaml => serde_yaml::from_str(content).map_err(|e| LoadError::Parse {
                format,
                message: e.to_string(),
            })?,
            ModelFormat::Json => serde_json::from_str(content).map_err(|e| LoadError::Parse {
                format,
                message: e.to_string(),
            })?,
        };
        Ok(ModelBuilder::from_model(declared).build()?)
    }

    /// Load a model file, choosing the format by extension
    pub fn load_file(path: impl AsRef<Path>) -> Result<Model, LoadError> {
        let path = path.as_ref();
        let format = ModelFormat::from_path(path)
            .ok_or_else(|| LoadError::UnsupportedFormat(path.display().to_string()))?;
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let model = Self::parse_str(&content, format)?;
        info!(
            "Loaded {} entity types, {} relationships and {} sequences from {}",
            model.entity_types.len(),
            model.relationships.len(),
            model.sequences.len(),
            path.display()
        );
        Ok(model)
    }
}
