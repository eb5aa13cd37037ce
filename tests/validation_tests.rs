//! Model validation tests

use sqlite_model_validation::builder::ModelBuilder;
use sqlite_model_validation::config::ValidatorConfig;
use sqlite_model_validation::models::{Model, ValueType};
use sqlite_model_validation::type_mapping::SqliteTypeMapper;
use sqlite_model_validation::validation::messages;
use sqlite_model_validation::validation::{DiagnosticCode, ModelValidator, Severity};

/// Animal { Id, Name }
fn add_animal(builder: &mut ModelBuilder) {
    builder.entity("Animal").property("Id", ValueType::Int32);
    builder.entity("Animal").property("Name", ValueType::String);
}

/// Cat : Animal { Breed, Type: string, Identity } and Dog : Animal { Breed, Type: int, Identity }
fn add_cat_and_dog(builder: &mut ModelBuilder) {
    builder.entity("Cat").has_base_type("Animal");
    builder.entity("Cat").property("Breed", ValueType::String);
    builder.entity("Cat").property("Type", ValueType::String);
    builder.entity("Cat").property("Identity", ValueType::Int32);

    builder.entity("Dog").has_base_type("Animal");
    builder.entity("Dog").property("Breed", ValueType::String);
    builder.entity("Dog").property("Type", ValueType::Int32);
    builder.entity("Dog").property("Identity", ValueType::Int32);
}

/// A and B { Id, P0..P3: nullable int }
fn add_a_and_b(builder: &mut ModelBuilder) {
    for entity in ["A", "B"] {
        builder.entity(entity).property("Id", ValueType::Int32);
        for property in ["P0", "P1", "P2", "P3"] {
            builder
                .entity(entity)
                .property(property, ValueType::Int32)
                .is_required(false);
        }
    }
}

fn verify_error(expected: String, model: &Model) {
    let report = ModelValidator::sqlite().validate(model);
    assert_eq!(report.diagnostics().len(), 1, "{:?}", report.diagnostics());
    let diagnostic = &report.diagnostics()[0];
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.message, expected);
}

fn verify_warning(expected: String, model: &Model) {
    let report = ModelValidator::sqlite().validate(model);
    assert_eq!(report.diagnostics().len(), 1, "{:?}", report.diagnostics());
    let diagnostic = &report.diagnostics()[0];
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.message, expected);
}

mod sqlite_validation_tests {
    use super::*;

    #[test]
    fn test_detects_duplicate_column_names() {
        let mut builder = ModelBuilder::new();
        add_animal(&mut builder);
        builder
            .entity("Animal")
            .property("Id", ValueType::Int32)
            .has_column_name("Name");
        let model = builder.build().unwrap();

        verify_error(
            messages::duplicate_column_name_data_type_mismatch(
                "Animal", "Id", "Animal", "Name", "Name", "Animal", "INTEGER", "TEXT",
            ),
            &model,
        );
    }

    #[test]
    fn test_duplicate_column_message_text() {
        let mut builder = ModelBuilder::new();
        add_animal(&mut builder);
        builder
            .entity("Animal")
            .property("Id", ValueType::Int32)
            .has_column_name("Name");
        let model = builder.build().unwrap();

        let report = ModelValidator::sqlite().validate(&model);
        assert_eq!(
            report.diagnostics()[0].message,
            "'Animal.Id' and 'Animal.Name' are both mapped to column 'Name' in 'Animal' but are configured to use different data types ('INTEGER' and 'TEXT')."
        );
        assert_eq!(
            report.diagnostics()[0].code,
            DiagnosticCode::DuplicateColumnDataTypeMismatch
        );
    }

    #[test]
    fn test_detects_duplicate_columns_in_derived_types_with_different_types() {
        let mut builder = ModelBuilder::new();
        add_animal(&mut builder);
        add_cat_and_dog(&mut builder);
        let model = builder.build().unwrap();

        verify_error(
            messages::duplicate_column_name_data_type_mismatch(
                "Cat", "Type", "Dog", "Type", "Type", "Animal", "TEXT", "INTEGER",
            ),
            &model,
        );
    }

    #[test]
    fn test_ignores_duplicate_column_names_within_hierarchy_with_different_max_length() {
        let mut builder = ModelBuilder::new();
        add_animal(&mut builder);
        builder.entity("Cat").has_base_type("Animal");
        builder
            .entity("Cat")
            .property("Breed", ValueType::String)
            .has_max_length(30);
        builder.entity("Dog").has_base_type("Animal");
        builder
            .entity("Dog")
            .property("Breed", ValueType::String)
            .has_max_length(15);
        let model = builder.build().unwrap();

        assert!(ModelValidator::sqlite().validate(&model).is_empty());

        let relational = ModelValidator::relational(SqliteTypeMapper::new()).validate(&model);
        assert_eq!(relational.diagnostics().len(), 1);
        assert_eq!(
            relational.diagnostics()[0].code,
            DiagnosticCode::DuplicateColumnMaxLengthMismatch
        );
    }

    #[test]
    fn test_detects_incompatible_shared_columns_with_shared_table() {
        let mut builder = ModelBuilder::new();
        add_a_and_b(&mut builder);
        builder
            .entity("A")
            .has_one("B")
            .with_one()
            .is_required(true)
            .has_foreign_key("A", &["Id"])
            .has_principal_key("B", &["Id"]);
        builder
            .entity("A")
            .property("P0", ValueType::Int32)
            .has_column_type("someInt");
        builder.entity("A").to_table("Table");
        builder.entity("B").to_table("Table");
        let model = builder.build().unwrap();

        verify_error(
            messages::duplicate_column_name_data_type_mismatch(
                "A", "P0", "B", "P0", "P0", "Table", "someInt", "INTEGER",
            ),
            &model,
        );
    }

    #[test]
    fn test_detects_schemas() {
        let mut builder = ModelBuilder::new();
        add_animal(&mut builder);
        builder.entity("Animal").to_table_with_schema("Animals", "pet");
        let model = builder.build().unwrap();

        verify_warning(messages::schema_configured("Animal", "pet"), &model);
    }

    #[test]
    fn test_detects_schemas_on_derived_types() {
        let mut builder = ModelBuilder::new();
        add_animal(&mut builder);
        builder.entity("Animal").to_table_with_schema("Animals", "pet");
        builder.entity("Cat").has_base_type("Animal");
        builder.entity("Cat").property("Breed", ValueType::String);
        let model = builder.build().unwrap();

        let report = ModelValidator::sqlite().validate(&model);
        let messages_seen: Vec<&str> = report.diagnostics().iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages_seen,
            vec![
                messages::schema_configured("Animal", "pet").as_str(),
                messages::schema_configured("Cat", "pet").as_str(),
            ]
        );
    }

    #[test]
    fn test_base_type_property_comes_first_when_derived_type_is_declared_first() {
        let mut builder = ModelBuilder::new();
        builder.entity("Cat").has_base_type("Animal");
        builder
            .entity("Cat")
            .property("Tag", ValueType::String)
            .has_column_name("Id");
        builder.entity("Animal").property("Id", ValueType::Int32);
        let model = builder.build().unwrap();

        verify_error(
            messages::duplicate_column_name_data_type_mismatch(
                "Animal", "Id", "Cat", "Tag", "Id", "Animal", "INTEGER", "TEXT",
            ),
            &model,
        );
    }

    #[test]
    fn test_detects_sequences() {
        let mut builder = ModelBuilder::new();
        builder.has_sequence("Fibonacci");
        let model = builder.build().unwrap();

        verify_warning(messages::sequence_configured("Fibonacci"), &model);
    }

    #[test]
    fn test_passes_on_duplicate_column_names_with_same_store_type() {
        let mut builder = ModelBuilder::new();
        add_animal(&mut builder);
        builder
            .entity("Animal")
            .property("Nickname", ValueType::String)
            .has_column_name("Name");
        builder.entity("Cat").has_base_type("Animal");
        builder.entity("Cat").property("Breed", ValueType::String);
        builder.entity("Dog").has_base_type("Animal");
        builder.entity("Dog").property("Breed", ValueType::String);
        let model = builder.build().unwrap();

        let report = ModelValidator::sqlite().validate(&model);
        assert!(report.is_empty(), "{:?}", report.diagnostics());
    }

    #[test]
    fn test_default_schema_warns_for_each_hierarchy() {
        let mut builder = ModelBuilder::new();
        builder.has_default_schema("app");
        add_animal(&mut builder);
        builder.entity("Owner").property("Id", ValueType::Int32);
        let model = builder.build().unwrap();

        let report = ModelValidator::sqlite().validate(&model);
        let messages_seen: Vec<&str> = report.diagnostics().iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages_seen,
            vec![
                messages::schema_configured("Animal", "app").as_str(),
                messages::schema_configured("Owner", "app").as_str(),
            ]
        );
    }
}

mod relational_validation_tests {
    use super::*;

    #[test]
    fn test_detects_missing_key() {
        let mut builder = ModelBuilder::new();
        builder.entity("Log").property("Message", ValueType::String);
        let model = builder.build().unwrap();

        verify_error(messages::entity_requires_key("Log"), &model);
    }

    #[test]
    fn test_detects_shared_table_without_relationship() {
        let mut builder = ModelBuilder::new();
        add_a_and_b(&mut builder);
        builder.entity("A").to_table("Table");
        builder.entity("B").to_table("Table");
        let model = builder.build().unwrap();

        verify_error(
            messages::incompatible_table_no_relationship("Table", "B", "A"),
            &model,
        );
    }

    #[test]
    fn test_shared_table_needs_primary_key_link() {
        let mut builder = ModelBuilder::new();
        add_a_and_b(&mut builder);
        builder.entity("A").property("BId", ValueType::Int32);
        builder
            .entity("A")
            .has_one("B")
            .with_one()
            .has_foreign_key("A", &["BId"]);
        builder.entity("A").to_table("Table");
        builder.entity("B").to_table("Table");
        let model = builder.build().unwrap();

        verify_error(
            messages::incompatible_table_no_relationship("Table", "B", "A"),
            &model,
        );
    }

    #[test]
    fn test_reports_every_problem_in_one_pass() {
        let mut builder = ModelBuilder::new();
        add_animal(&mut builder);
        add_cat_and_dog(&mut builder);
        builder.entity("Animal").to_table_with_schema("Animals", "pet");
        builder.entity("Log").property("Message", ValueType::String);
        builder.has_sequence("Fibonacci");
        let model = builder.build().unwrap();

        let report = ModelValidator::sqlite().validate(&model);
        let codes: Vec<DiagnosticCode> = report.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(
            codes,
            vec![
                DiagnosticCode::EntityRequiresKey,
                DiagnosticCode::DuplicateColumnDataTypeMismatch,
                DiagnosticCode::SchemaConfigured,
                DiagnosticCode::SchemaConfigured,
                DiagnosticCode::SchemaConfigured,
                DiagnosticCode::SequenceConfigured,
            ]
        );

        let err = report.into_result().unwrap_err();
        assert_eq!(err.errors.len(), 2);
        assert_eq!(err.warnings.len(), 4);
    }
}

mod config_tests {
    use super::*;

    fn schema_and_sequence_model() -> Model {
        let mut builder = ModelBuilder::new();
        add_animal(&mut builder);
        builder.entity("Animal").to_table_with_schema("Animals", "pet");
        builder.has_sequence("Fibonacci");
        builder.build().unwrap()
    }

    #[test]
    fn test_warnings_only_model_is_valid() {
        let warnings = ModelValidator::sqlite()
            .validate(&schema_and_sequence_model())
            .into_result()
            .unwrap();
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_warnings_as_errors() {
        let config = ValidatorConfig::builder().warnings_as_errors(true).build();
        let report = ModelValidator::sqlite()
            .with_config(config)
            .validate(&schema_and_sequence_model());

        assert_eq!(report.errors().count(), 2);
        assert!(report.into_result().is_err());
    }

    #[test]
    fn test_suppressed_sequence_warning() {
        let config = ValidatorConfig::builder()
            .suppress(DiagnosticCode::SequenceConfigured)
            .build();
        let report = ModelValidator::sqlite()
            .with_config(config)
            .validate(&schema_and_sequence_model());

        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(report.diagnostics()[0].code, DiagnosticCode::SchemaConfigured);
    }

    #[test]
    fn test_stop_on_first_error_skips_later_rules() {
        let mut builder = ModelBuilder::new();
        builder.entity("Log").property("Message", ValueType::String);
        builder.entity("Audit").property("Message", ValueType::String);
        builder.has_sequence("Fibonacci");
        let model = builder.build().unwrap();

        let config = ValidatorConfig::builder().stop_on_first_error(true).build();
        let report = ModelValidator::sqlite().with_config(config).validate(&model);

        assert!(report.is_halted());
        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(
            report.diagnostics()[0].message,
            messages::entity_requires_key("Log")
        );
    }
}
