//! Property model

use super::enums::ValueType;
use serde::{Deserialize, Serialize};

/// Property of an entity type, mapped to a single column
///
/// The column name defaults to the property name. The store type is resolved
/// by the validator's type mapper unless `column_type` is set.
///
/// # Example
///
/// ```rust
/// use sqlite_model_validation::models::{Property, ValueType};
///
/// let property = Property::new("Name".to_string(), ValueType::String);
/// assert_eq!(property.column_name(), "Name");
/// assert!(property.is_nullable());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub name: String,
    pub value_type: ValueType,
    /// Explicit column name; the property name is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    /// Explicit store type, e.g. `"someInt"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
    /// Explicit nullability; falls back to the value type's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_sql: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sql: Option<String>,
    /// Created by a convention rather than declared
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub shadow: bool,
}

impl Property {
    pub fn new(name: String, value_type: ValueType) -> Self {
        Self {
            name,
            value_type,
            column_name: None,
            column_type: None,
            nullable: None,
            max_length: None,
            computed_sql: None,
            default_sql: None,
            shadow: false,
        }
    }

    pub fn column_name(&self) -> &str {
        self.column_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
            .unwrap_or_else(|| self.value_type.is_nullable_by_default())
    }
}
