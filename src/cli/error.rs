//! CLI error types

use crate::config::ConfigError;
use crate::model::LoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to format output: {0}")]
    Output(String),
}
