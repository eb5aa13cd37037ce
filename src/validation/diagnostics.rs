//! Diagnostics produced by model validation
//!
//! Rules report into a [`ValidationReport`] instead of failing on the first
//! problem, so a single pass shows everything wrong with a model. The report
//! applies the [`ValidatorConfig`] (suppression, escalation, fail-fast) and
//! logs every diagnostic it keeps.

use crate::config::ValidatorConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{error, warn};

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The model is usable but part of its configuration is unsupported
    Warning,
    /// The model is invalid
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// Identifies the rule outcome behind a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    EntityRequiresKey,
    IncompatibleTableNoRelationship,
    DuplicateColumnDataTypeMismatch,
    DuplicateColumnNullabilityMismatch,
    DuplicateColumnMaxLengthMismatch,
    DuplicateColumnComputedSqlMismatch,
    DuplicateColumnDefaultSqlMismatch,
    SchemaConfigured,
    SequenceConfigured,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::EntityRequiresKey => "entity-requires-key",
            DiagnosticCode::IncompatibleTableNoRelationship => "incompatible-table-no-relationship",
            DiagnosticCode::DuplicateColumnDataTypeMismatch => "duplicate-column-data-type-mismatch",
            DiagnosticCode::DuplicateColumnNullabilityMismatch => {
                "duplicate-column-nullability-mismatch"
            }
            DiagnosticCode::DuplicateColumnMaxLengthMismatch => {
                "duplicate-column-max-length-mismatch"
            }
            DiagnosticCode::DuplicateColumnComputedSqlMismatch => {
                "duplicate-column-computed-sql-mismatch"
            }
            DiagnosticCode::DuplicateColumnDefaultSqlMismatch => {
                "duplicate-column-default-sql-mismatch"
            }
            DiagnosticCode::SchemaConfigured => "schema-configured",
            DiagnosticCode::SequenceConfigured => "sequence-configured",
        }
    }

    /// Severity before any configured escalation
    pub fn default_severity(self) -> Severity {
        match self {
            DiagnosticCode::SchemaConfigured | DiagnosticCode::SequenceConfigured => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

/// Returned when a validated model still has errors
#[derive(Debug, Clone, Error)]
#[error("model validation failed with {} error(s): {}", error_count(.errors), first_message(.errors))]
pub struct ModelValidationError {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

fn error_count(errors: &[Diagnostic]) -> usize {
    errors.len()
}

fn first_message(errors: &[Diagnostic]) -> &str {
    errors.first().map(|d| d.message.as_str()).unwrap_or_default()
}

/// Collects diagnostics from a validation pass
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
    config: ValidatorConfig,
    halted: bool,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            diagnostics: Vec::new(),
            config,
            halted: false,
        }
    }

    /// Record a diagnostic with the code's default severity
    ///
    /// Suppressed codes are dropped, warnings are escalated when configured,
    /// and once fail-fast has seen an error nothing further is kept.
    pub fn report(&mut self, code: DiagnosticCode, message: String) {
        if self.halted || self.config.is_suppressed(code) {
            return;
        }

        let mut severity = code.default_severity();
        if severity == Severity::Warning && self.config.warnings_as_errors {
            severity = Severity::Error;
        }

        match severity {
            Severity::Error => error!(target: "model_validation", code = %code, "{}", message),
            Severity::Warning => warn!(target: "model_validation", code = %code, "{}", message),
        }

        self.diagnostics.push(Diagnostic {
            code,
            severity,
            message,
        });

        if severity == Severity::Error && self.config.stop_on_first_error {
            self.halted = true;
        }
    }

    /// Whether fail-fast stopped collection
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Warnings when the model is valid, every diagnostic otherwise
    pub fn into_result(self) -> Result<Vec<Diagnostic>, ModelValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) = self
            .diagnostics
            .into_iter()
            .partition(|d| d.severity == Severity::Error);

        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ModelValidationError { errors, warnings })
        }
    }
}
