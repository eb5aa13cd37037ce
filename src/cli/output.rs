//! Output formatting for CLI

use crate::validation::{Severity, ValidationReport};
use clap::ValueEnum;
use serde::Serialize;

/// How diagnostics are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    errors: usize,
    warnings: usize,
    diagnostics: &'a [crate::validation::Diagnostic],
}

/// Format a report as human-readable text
pub fn format_text_output(model_name: &str, report: &ValidationReport) -> String {
    let mut output = String::new();

    for diagnostic in report.diagnostics() {
        let marker = match diagnostic.severity {
            Severity::Error => "❌",
            Severity::Warning => "⚠️ ",
        };
        output.push_str(&format!("{} {}\n", marker, diagnostic));
    }

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    if errors == 0 {
        output.push_str(&format!(
            "✅ {} is valid ({} warning(s))\n",
            model_name, warnings
        ));
    } else {
        output.push_str(&format!(
            "\n{} is invalid: {} error(s), {} warning(s)\n",
            model_name, errors, warnings
        ));
    }

    output
}

/// Format a report as JSON
pub fn format_json_output(report: &ValidationReport) -> Result<String, serde_json::Error> {
    let json = JsonReport {
        valid: !report.has_errors(),
        errors: report.errors().count(),
        warnings: report.warnings().count(),
        diagnostics: report.diagnostics(),
    };
    serde_json::to_string_pretty(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::DiagnosticCode;

    fn sample_report() -> ValidationReport {
        let mut report = ValidationReport::new();
        report.report(DiagnosticCode::SequenceConfigured, "no sequences".to_string());
        report
    }

    #[test]
    fn test_text_output_for_valid_model() {
        let output = format_text_output("pets.yaml", &sample_report());
        assert!(output.contains("warning[sequence-configured]: no sequences"));
        assert!(output.contains("pets.yaml is valid (1 warning(s))"));
    }

    #[test]
    fn test_json_output() {
        let output = format_json_output(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["warnings"], 1);
        assert_eq!(value["diagnostics"][0]["code"], "sequence-configured");
        assert_eq!(value["diagnostics"][0]["severity"], "warning");
    }
}
