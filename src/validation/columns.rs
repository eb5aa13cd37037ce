//! Duplicate column validation
//!
//! Properties of all entity types mapped to one table end up as columns of
//! that table. Base types are visited before their derived types, then
//! declaration order. Two properties with the same column name must agree on how the
//! column is defined. Each colliding pair is reported at most once, for the
//! first difference found in the order: store type, nullability, max length,
//! computed SQL, default SQL.

use super::diagnostics::{DiagnosticCode, ValidationReport};
use super::messages;
use super::validator::{ValidationContext, ValidationRule};
use crate::models::{EntityType, Model, Property};
use std::collections::HashMap;

/// A property as it appears in a table
struct ColumnSource<'a> {
    entity_type: &'a EntityType,
    property: &'a Property,
    store_type: String,
    nullable: bool,
}

/// Compares properties that share a column name within a table
pub struct DuplicateColumnRule {
    check_max_length: bool,
}

impl DuplicateColumnRule {
    pub fn new() -> Self {
        Self {
            check_max_length: true,
        }
    }

    /// Skip the max length comparison, for providers without
    /// length-constrained types
    pub fn ignore_max_length(mut self) -> Self {
        self.check_max_length = false;
        self
    }

    fn compare(
        &self,
        previous: &ColumnSource<'_>,
        current: &ColumnSource<'_>,
        table: &str,
    ) -> Option<(DiagnosticCode, String)> {
        let e1 = previous.entity_type.name.as_str();
        let p1 = previous.property.name.as_str();
        let e2 = current.entity_type.name.as_str();
        let p2 = current.property.name.as_str();
        let column = current.property.column_name();

        if !previous.store_type.eq_ignore_ascii_case(&current.store_type) {
            return Some((
                DiagnosticCode::DuplicateColumnDataTypeMismatch,
                messages::duplicate_column_name_data_type_mismatch(
                    e1,
                    p1,
                    e2,
                    p2,
                    column,
                    table,
                    &previous.store_type,
                    &current.store_type,
                ),
            ));
        }

        if previous.nullable != current.nullable {
            return Some((
                DiagnosticCode::DuplicateColumnNullabilityMismatch,
                messages::duplicate_column_name_nullability_mismatch(e1, p1, e2, p2, column, table),
            ));
        }

        if self.check_max_length && previous.property.max_length != current.property.max_length {
            return Some((
                DiagnosticCode::DuplicateColumnMaxLengthMismatch,
                messages::duplicate_column_name_max_length_mismatch(
                    e1,
                    p1,
                    e2,
                    p2,
                    column,
                    table,
                    &display_option(previous.property.max_length),
                    &display_option(current.property.max_length),
                ),
            ));
        }

        if previous.property.computed_sql != current.property.computed_sql {
            return Some((
                DiagnosticCode::DuplicateColumnComputedSqlMismatch,
                messages::duplicate_column_name_computed_sql_mismatch(
                    e1,
                    p1,
                    e2,
                    p2,
                    column,
                    table,
                    previous.property.computed_sql.as_deref().unwrap_or_default(),
                    current.property.computed_sql.as_deref().unwrap_or_default(),
                ),
            ));
        }

        if previous.property.default_sql != current.property.default_sql {
            return Some((
                DiagnosticCode::DuplicateColumnDefaultSqlMismatch,
                messages::duplicate_column_name_default_sql_mismatch(
                    e1,
                    p1,
                    e2,
                    p2,
                    column,
                    table,
                    previous.property.default_sql.as_deref().unwrap_or_default(),
                    current.property.default_sql.as_deref().unwrap_or_default(),
                ),
            ));
        }

        None
    }
}

impl Default for DuplicateColumnRule {
    fn default() -> Self {
        Self::new()
    }
}

fn display_option(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl ValidationRule for DuplicateColumnRule {
    fn name(&self) -> &'static str {
        "duplicate-columns"
    }

    fn validate(&self, model: &Model, context: &ValidationContext<'_>, report: &mut ValidationReport) {
        for (table, mut entity_types) in model.tables() {
            // Base types first, siblings in declaration order
            entity_types.sort_by_key(|e| model.base_chain(e).len());
            let table_name = table.to_string();
            let mut columns: HashMap<&str, Vec<ColumnSource<'_>>> = HashMap::new();

            for entity_type in entity_types {
                for property in &entity_type.properties {
                    let current = ColumnSource {
                        entity_type,
                        property,
                        store_type: context.type_mapper.store_type(property),
                        nullable: model.is_column_nullable(entity_type, property),
                    };

                    let sources = columns.entry(property.column_name()).or_default();
                    for previous in sources.iter() {
                        if let Some((code, message)) = self.compare(previous, &current, &table_name) {
                            report.report(code, message);
                        }
                    }
                    sources.push(current);
                }
            }
        }
    }
}
