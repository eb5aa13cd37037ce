//! SQLite Model Validation - schema model validation for the SQLite provider
//!
//! Provides:
//! - A declarative model builder with conventions (keys, hierarchies, shadow foreign keys)
//! - Store type mapping for SQLite
//! - A rule-table model validator reporting errors and warnings
//! - Model document loading (YAML/JSON)
//! - Validator configuration

pub mod builder;
pub mod cli;
pub mod config;
pub mod model;
pub mod models;
pub mod type_mapping;
pub mod validation;

// Re-export commonly used types
pub use builder::{ModelBuildError, ModelBuilder};
pub use config::{ConfigError, ValidatorConfig};
pub use model::{LoadError, ModelFormat, ModelLoader};
pub use type_mapping::{SqliteTypeMapper, TypeMapper};
pub use validation::{
    Diagnostic, DiagnosticCode, ModelValidationError, ModelValidator, Severity, ValidationReport,
    ValidationRule,
};

// Re-export models
pub use models::enums::*;
pub use models::{EntityType, Model, Property, Relationship, Sequence, TableMapping};
