//! Validation functionality
//!
//! Provides validation logic for:
//! - Primary keys (every hierarchy needs one)
//! - Shared tables (unrelated hierarchies must be linked through their keys)
//! - Duplicate columns (same column name, same definition)
//! - SQLite provider support (schemas and sequences)

pub mod columns;
pub mod diagnostics;
pub mod keys;
pub mod messages;
pub mod relationships;
pub mod sqlite;
pub mod tables;
pub mod validator;

pub use columns::DuplicateColumnRule;
pub use diagnostics::{Diagnostic, DiagnosticCode, ModelValidationError, Severity, ValidationReport};
pub use keys::KeyRule;
pub use sqlite::{SchemaRule, SequenceRule};
pub use tables::SharedTableRule;
pub use validator::{ModelValidator, ValidationContext, ValidationRule};
