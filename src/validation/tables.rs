//! Shared table validation
//!
//! More than one hierarchy may map to the same table only when the
//! hierarchies are linked one-to-one through their primary keys.

use super::diagnostics::{DiagnosticCode, ValidationReport};
use super::messages;
use super::relationships::PrimaryKeyLinks;
use super::validator::{ValidationContext, ValidationRule};
use crate::models::{EntityType, Model};

/// Rejects unrelated hierarchies sharing a table
pub struct SharedTableRule;

impl ValidationRule for SharedTableRule {
    fn name(&self) -> &'static str {
        "shared-tables"
    }

    fn validate(&self, model: &Model, _context: &ValidationContext<'_>, report: &mut ValidationReport) {
        for (table, entity_types) in model.tables() {
            let roots: Vec<&EntityType> = entity_types.into_iter().filter(|e| e.is_root()).collect();
            let Some((first, others)) = roots.split_first() else {
                continue;
            };
            if others.is_empty() {
                continue;
            }

            let links = PrimaryKeyLinks::for_roots(model, &roots);
            for other in others {
                if !links.is_linked(&first.name, &other.name) {
                    report.report(
                        DiagnosticCode::IncompatibleTableNoRelationship,
                        messages::incompatible_table_no_relationship(
                            &table.to_string(),
                            &other.name,
                            &first.name,
                        ),
                    );
                }
            }
        }
    }
}
