//! Model validator
//!
//! A validator is a rule table plus the provider's type mapper. Each rule
//! walks the model and reports into a shared [`ValidationReport`]; rules run
//! in table order.

use super::columns::DuplicateColumnRule;
use super::diagnostics::ValidationReport;
use super::keys::KeyRule;
use super::sqlite::{SchemaRule, SequenceRule};
use super::tables::SharedTableRule;
use crate::config::ValidatorConfig;
use crate::models::Model;
use crate::type_mapping::{SqliteTypeMapper, TypeMapper};
use tracing::{debug, info};

/// What a rule can see besides the model
pub struct ValidationContext<'a> {
    pub type_mapper: &'a dyn TypeMapper,
}

/// A single model validation rule
pub trait ValidationRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn validate(&self, model: &Model, context: &ValidationContext<'_>, report: &mut ValidationReport);
}

/// Validates a model against a table of rules
pub struct ModelValidator {
    rules: Vec<Box<dyn ValidationRule>>,
    type_mapper: Box<dyn TypeMapper>,
    config: ValidatorConfig,
}

impl ModelValidator {
    /// Validator with no rules
    pub fn new(type_mapper: impl TypeMapper + 'static) -> Self {
        Self {
            rules: Vec::new(),
            type_mapper: Box::new(type_mapper),
            config: ValidatorConfig::default(),
        }
    }

    /// Relational rules: keys, shared tables and duplicate columns
    pub fn relational(type_mapper: impl TypeMapper + 'static) -> Self {
        Self::new(type_mapper)
            .with_rule(KeyRule)
            .with_rule(SharedTableRule)
            .with_rule(DuplicateColumnRule::new())
    }

    /// SQLite rules
    ///
    /// SQLite has no length-constrained types, so duplicate columns are not
    /// compared by max length. Schemas and sequences are reported as
    /// unsupported.
    pub fn sqlite() -> Self {
        Self::new(SqliteTypeMapper::new())
            .with_rule(KeyRule)
            .with_rule(SharedTableRule)
            .with_rule(DuplicateColumnRule::new().ignore_max_length())
            .with_rule(SchemaRule)
            .with_rule(SequenceRule)
    }

    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Names of the rules, in the order they run
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn validate(&self, model: &Model) -> ValidationReport {
        info!(
            "Validating model with {} entity types and {} sequences against {} rules",
            model.entity_types.len(),
            model.sequences.len(),
            self.rules.len()
        );

        let context = ValidationContext {
            type_mapper: self.type_mapper.as_ref(),
        };
        let mut report = ValidationReport::with_config(self.config.clone());

        for rule in &self.rules {
            if report.is_halted() {
                debug!("Stopping before rule '{}' after the first error", rule.name());
                break;
            }
            debug!("Running rule '{}'", rule.name());
            rule.validate(model, &context, &mut report);
        }

        info!(
            "Validation finished with {} errors and {} warnings",
            report.errors().count(),
            report.warnings().count()
        );
        report
    }
}

impl Default for ModelValidator {
    fn default() -> Self {
        Self::sqlite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::diagnostics::DiagnosticCode;

    struct AlwaysWarn;

    impl ValidationRule for AlwaysWarn {
        fn name(&self) -> &'static str {
            "always-warn"
        }

        fn validate(&self, _model: &Model, _context: &ValidationContext<'_>, report: &mut ValidationReport) {
            report.report(DiagnosticCode::SequenceConfigured, "custom".to_string());
        }
    }

    #[test]
    fn test_rule_tables() {
        assert_eq!(
            ModelValidator::sqlite().rule_names(),
            vec!["keys", "shared-tables", "duplicate-columns", "schemas", "sequences"]
        );
        assert_eq!(
            ModelValidator::relational(SqliteTypeMapper::new()).rule_names(),
            vec!["keys", "shared-tables", "duplicate-columns"]
        );
    }

    #[test]
    fn test_custom_rule_runs() {
        let validator = ModelValidator::new(SqliteTypeMapper::new()).with_rule(AlwaysWarn);
        let report = validator.validate(&Model::new());
        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(report.diagnostics()[0].message, "custom");
    }

    #[test]
    fn test_empty_model_is_valid() {
        let report = ModelValidator::sqlite().validate(&Model::new());
        assert!(report.is_empty());
    }
}
