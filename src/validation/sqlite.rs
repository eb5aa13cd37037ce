//! SQLite provider rules
//!
//! SQLite has neither schemas nor sequences. Models that configure them are
//! still usable, so both are reported as warnings.

use super::diagnostics::{DiagnosticCode, ValidationReport};
use super::messages;
use super::validator::{ValidationContext, ValidationRule};
use crate::models::Model;

/// Warns about every entity type mapped to a schema, whether explicitly or
/// through the model's default schema. Derived types inherit their root's
/// schema and are reported on their own.
pub struct SchemaRule;

impl ValidationRule for SchemaRule {
    fn name(&self) -> &'static str {
        "schemas"
    }

    fn validate(&self, model: &Model, _context: &ValidationContext<'_>, report: &mut ValidationReport) {
        for entity_type in &model.entity_types {
            if let Some(schema) = model.table_of(entity_type).schema {
                report.report(
                    DiagnosticCode::SchemaConfigured,
                    messages::schema_configured(&entity_type.name, &schema),
                );
            }
        }
    }
}

/// Warns about every sequence in the model
pub struct SequenceRule;

impl ValidationRule for SequenceRule {
    fn name(&self) -> &'static str {
        "sequences"
    }

    fn validate(&self, model: &Model, _context: &ValidationContext<'_>, report: &mut ValidationReport) {
        for sequence in &model.sequences {
            report.report(
                DiagnosticCode::SequenceConfigured,
                messages::sequence_configured(&sequence.name),
            );
        }
    }
}
