//! Enumerations shared by the model types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type of a property, independent of any store.
///
/// The store type of a column is derived from this by a
/// [`TypeMapper`](crate::type_mapping::TypeMapper) unless the property carries
/// an explicit column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Bool,
    Byte,
    Int16,
    Int32,
    Int64,
    Single,
    Double,
    Decimal,
    Char,
    String,
    Guid,
    DateTime,
    DateTimeOffset,
    TimeSpan,
    Bytes,
}

impl ValueType {
    /// Whether a property of this type accepts `NULL` when nothing else is configured.
    ///
    /// Reference-like values (strings and byte arrays) are nullable, everything
    /// else is required.
    pub fn is_nullable_by_default(self) -> bool {
        matches!(self, ValueType::String | ValueType::Bytes)
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Byte => "byte",
            ValueType::Int16 => "int16",
            ValueType::Int32 => "int32",
            ValueType::Int64 => "int64",
            ValueType::Single => "single",
            ValueType::Double => "double",
            ValueType::Decimal => "decimal",
            ValueType::Char => "char",
            ValueType::String => "string",
            ValueType::Guid => "guid",
            ValueType::DateTime => "date_time",
            ValueType::DateTimeOffset => "date_time_offset",
            ValueType::TimeSpan => "time_span",
            ValueType::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Relationship cardinality between principal and dependent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    OneToOne,
    #[default]
    OneToMany,
}
