//! Entity type model

use super::property::Property;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical table an entity type maps to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableMapping {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl TableMapping {
    pub fn new(name: impl Into<String>, schema: Option<String>) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

impl fmt::Display for TableMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Entity type - a logical, table-backed type
///
/// Holds only the properties it declares itself. Inherited properties, the
/// effective table and the primary key of derived types are resolved through
/// [`Model`](super::Model).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Primary key property names, in key order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primary_key: Vec<String>,
    /// Explicit table mapping; only valid on hierarchy roots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableMapping>,
}

impl EntityType {
    pub fn new(name: String) -> Self {
        Self {
            name,
            base_type: None,
            properties: Vec::new(),
            primary_key: Vec::new(),
            table: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.base_type.is_none()
    }

    /// Find a property declared on this entity type (not on its base types)
    pub fn declared_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub(crate) fn declared_property_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.properties.iter_mut().find(|p| p.name == name)
    }
}
