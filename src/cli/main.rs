//! sqlite-model-validate: validate a model document for the SQLite provider

use clap::Parser;
use sqlite_model_validation::cli::commands::validate::{ValidateArgs, handle_validate};
use sqlite_model_validation::cli::output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sqlite-model-validate", version, about = "Validate a schema model for the SQLite provider")]
struct Cli {
    /// Model document (.yaml, .yml or .json)
    model: PathBuf,

    /// Validator configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    warnings_as_errors: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let args = ValidateArgs {
        model: cli.model,
        config: cli.config,
        format: cli.format,
        warnings_as_errors: cli.warnings_as_errors,
    };

    let (output, valid) = handle_validate(&args)?;
    print!("{}", output);

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
