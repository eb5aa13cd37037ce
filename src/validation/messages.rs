//! Diagnostic message templates
//!
//! Every diagnostic text is produced here so callers and tests can build the
//! exact expected string from the same parameters.

fn duplicate_column_prefix(
    entity_type1: &str,
    property1: &str,
    entity_type2: &str,
    property2: &str,
    column: &str,
    table: &str,
) -> String {
    format!(
        "'{}.{}' and '{}.{}' are both mapped to column '{}' in '{}'",
        entity_type1, property1, entity_type2, property2, column, table
    )
}

#[allow(clippy::too_many_arguments)]
pub fn duplicate_column_name_data_type_mismatch(
    entity_type1: &str,
    property1: &str,
    entity_type2: &str,
    property2: &str,
    column: &str,
    table: &str,
    data_type1: &str,
    data_type2: &str,
) -> String {
    format!(
        "{} but are configured to use different data types ('{}' and '{}').",
        duplicate_column_prefix(entity_type1, property1, entity_type2, property2, column, table),
        data_type1,
        data_type2
    )
}

pub fn duplicate_column_name_nullability_mismatch(
    entity_type1: &str,
    property1: &str,
    entity_type2: &str,
    property2: &str,
    column: &str,
    table: &str,
) -> String {
    format!(
        "{} but are configured with different nullability.",
        duplicate_column_prefix(entity_type1, property1, entity_type2, property2, column, table)
    )
}

#[allow(clippy::too_many_arguments)]
pub fn duplicate_column_name_max_length_mismatch(
    entity_type1: &str,
    property1: &str,
    entity_type2: &str,
    property2: &str,
    column: &str,
    table: &str,
    max_length1: &str,
    max_length2: &str,
) -> String {
    format!(
        "{} but are configured with different maximum lengths ('{}' and '{}').",
        duplicate_column_prefix(entity_type1, property1, entity_type2, property2, column, table),
        max_length1,
        max_length2
    )
}

#[allow(clippy::too_many_arguments)]
pub fn duplicate_column_name_computed_sql_mismatch(
    entity_type1: &str,
    property1: &str,
    entity_type2: &str,
    property2: &str,
    column: &str,
    table: &str,
    value1: &str,
    value2: &str,
) -> String {
    format!(
        "{} but are configured to use different computed values ('{}' and '{}').",
        duplicate_column_prefix(entity_type1, property1, entity_type2, property2, column, table),
        value1,
        value2
    )
}

#[allow(clippy::too_many_arguments)]
pub fn duplicate_column_name_default_sql_mismatch(
    entity_type1: &str,
    property1: &str,
    entity_type2: &str,
    property2: &str,
    column: &str,
    table: &str,
    value1: &str,
    value2: &str,
) -> String {
    format!(
        "{} but are configured to use different default values ('{}' and '{}').",
        duplicate_column_prefix(entity_type1, property1, entity_type2, property2, column, table),
        value1,
        value2
    )
}

pub fn entity_requires_key(entity_type: &str) -> String {
    format!(
        "The entity type '{}' requires a primary key to be defined.",
        entity_type
    )
}

pub fn incompatible_table_no_relationship(
    table: &str,
    entity_type: &str,
    other_entity_type: &str,
) -> String {
    format!(
        "Cannot use table '{}' for entity type '{}' since there is no relationship between its primary key and the primary key of entity type '{}'.",
        table, entity_type, other_entity_type
    )
}

pub fn schema_configured(entity_type: &str, schema: &str) -> String {
    format!(
        "The entity type '{}' is configured to use schema '{}'. SQLite does not support schemas. This configuration will be ignored by the SQLite provider.",
        entity_type, schema
    )
}

pub fn sequence_configured(sequence: &str) -> String {
    format!(
        "The model was configured with the database sequence '{}'. SQLite does not support sequences.",
        sequence
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_mismatch_text() {
        assert_eq!(
            duplicate_column_name_data_type_mismatch(
                "Animal", "Id", "Animal", "Name", "Name", "Animal", "INTEGER", "TEXT"
            ),
            "'Animal.Id' and 'Animal.Name' are both mapped to column 'Name' in 'Animal' but are configured to use different data types ('INTEGER' and 'TEXT')."
        );
    }

    #[test]
    fn test_sequence_configured_text() {
        assert_eq!(
            sequence_configured("Fibonacci"),
            "The model was configured with the database sequence 'Fibonacci'. SQLite does not support sequences."
        );
    }
}
