//! Relationship model

use super::enums::Cardinality;
use serde::{Deserialize, Serialize};

/// Foreign-key relationship between a principal and a dependent entity type
///
/// An empty `principal_key` stands for the principal's primary key. The
/// conventions pass fills it in, and creates a shadow foreign key for
/// one-to-many relationships that do not name one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Relationship {
    pub principal: String,
    pub dependent: String,
    #[serde(default)]
    pub cardinality: Cardinality,
    /// Foreign key property names on the dependent
    #[serde(default)]
    pub foreign_key: Vec<String>,
    /// Referenced property names on the principal
    #[serde(default)]
    pub principal_key: Vec<String>,
    #[serde(default)]
    pub required: bool,
}

impl Relationship {
    pub fn new(principal: String, dependent: String, cardinality: Cardinality) -> Self {
        Self {
            principal,
            dependent,
            cardinality,
            foreign_key: Vec::new(),
            principal_key: Vec::new(),
            required: false,
        }
    }

    pub fn is_unique(&self) -> bool {
        self.cardinality == Cardinality::OneToOne
    }
}
