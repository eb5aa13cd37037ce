//! Models module
//!
//! Defines the schema graph the validator works on: entity types with their
//! properties and table mappings, relationships, and sequences.

pub mod data_model;
pub mod entity;
pub mod enums;
pub mod property;
pub mod relationship;
pub mod sequence;

pub use data_model::Model;
pub use entity::{EntityType, TableMapping};
pub use enums::*;
pub use property::Property;
pub use relationship::Relationship;
pub use sequence::Sequence;
