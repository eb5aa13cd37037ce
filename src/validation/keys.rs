//! Primary key validation

use super::diagnostics::{DiagnosticCode, ValidationReport};
use super::messages;
use super::validator::{ValidationContext, ValidationRule};
use crate::models::Model;

/// Every hierarchy root needs a primary key; derived types inherit it
pub struct KeyRule;

impl ValidationRule for KeyRule {
    fn name(&self) -> &'static str {
        "keys"
    }

    fn validate(&self, model: &Model, _context: &ValidationContext<'_>, report: &mut ValidationReport) {
        for entity_type in model.entity_types.iter().filter(|e| e.is_root()) {
            if entity_type.primary_key.is_empty() {
                report.report(
                    DiagnosticCode::EntityRequiresKey,
                    messages::entity_requires_key(&entity_type.name),
                );
            }
        }
    }
}
