//! Store type mapping
//!
//! Resolves the physical store type of a property's column. An explicit
//! column type always wins; otherwise the property's value type is mapped by
//! the provider's [`TypeMapper`].

use crate::models::{Property, ValueType};

/// Maps value types to provider store types
pub trait TypeMapper: Send + Sync {
    /// Store type for a value type with no explicit column type
    fn map_value_type(&self, value_type: ValueType, max_length: Option<u32>) -> String;

    /// Store type of a property's column
    fn store_type(&self, property: &Property) -> String {
        match &property.column_type {
            Some(column_type) => column_type.clone(),
            None => self.map_value_type(property.value_type, property.max_length),
        }
    }
}

/// SQLite type mapper
///
/// SQLite only knows the storage classes `INTEGER`, `REAL`, `TEXT` and
/// `BLOB`, and has no length-constrained types, so the max length is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteTypeMapper;

impl SqliteTypeMapper {
    pub fn new() -> Self {
        Self
    }
}

impl TypeMapper for SqliteTypeMapper {
    fn map_value_type(&self, value_type: ValueType, _max_length: Option<u32>) -> String {
        let store_type = match value_type {
            ValueType::Bool
            | ValueType::Byte
            | ValueType::Int16
            | ValueType::Int32
            | ValueType::Int64 => "INTEGER",
            ValueType::Single | ValueType::Double => "REAL",
            ValueType::Decimal
            | ValueType::Char
            | ValueType::String
            | ValueType::DateTime
            | ValueType::DateTimeOffset
            | ValueType::TimeSpan => "TEXT",
            ValueType::Guid | ValueType::Bytes => "BLOB",
        };
        store_type.to_string()
    }
}
