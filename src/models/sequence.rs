//! Database sequence model

use super::enums::ValueType;
use serde::{Deserialize, Serialize};

fn default_start() -> i64 {
    1
}

fn default_increment() -> i64 {
    1
}

fn default_value_type() -> ValueType {
    ValueType::Int64
}

/// Named database sequence, independent of any entity type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sequence {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default = "default_start")]
    pub start_value: i64,
    #[serde(default = "default_increment")]
    pub increment_by: i64,
    #[serde(default = "default_value_type")]
    pub value_type: ValueType,
}

impl Sequence {
    pub fn new(name: String) -> Self {
        Self {
            name,
            schema: None,
            start_value: default_start(),
            increment_by: default_increment(),
            value_type: default_value_type(),
        }
    }
}
