//! Validate command implementation

use crate::cli::error::CliError;
use crate::cli::output::{OutputFormat, format_json_output, format_text_output};
use crate::config::ValidatorConfig;
use crate::model::ModelLoader;
use crate::validation::ModelValidator;
use std::path::PathBuf;

/// Arguments for the validate command
pub struct ValidateArgs {
    /// Model document (.yaml, .yml or .json)
    pub model: PathBuf,
    /// Validator configuration file (TOML)
    pub config: Option<PathBuf>,
    /// Output format
    pub format: OutputFormat,
    /// Escalate warnings regardless of the config file
    pub warnings_as_errors: bool,
}

/// Handle the validate command
///
/// Returns the formatted output and whether the model is valid.
pub fn handle_validate(args: &ValidateArgs) -> Result<(String, bool), CliError> {
    let mut config = match &args.config {
        Some(path) => ValidatorConfig::load(path)?,
        None => ValidatorConfig::default(),
    };
    if args.warnings_as_errors {
        config.warnings_as_errors = true;
    }

    let model = ModelLoader::load_file(&args.model)?;
    let report = ModelValidator::sqlite().with_config(config).validate(&model);

    let output = match args.format {
        OutputFormat::Text => format_text_output(&args.model.display().to_string(), &report),
        OutputFormat::Json => {
            format_json_output(&report).map_err(|e| CliError::Output(e.to_string()))?
        }
    };

    Ok((output, !report.has_errors()))
}
