//! Error types for model building

use thiserror::Error;

/// Errors raised while turning declarations into a [`Model`](crate::models::Model)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelBuildError {
    #[error("Entity type '{0}' is declared more than once")]
    DuplicateEntityType(String),

    #[error("Sequence '{0}' is declared more than once")]
    DuplicateSequence(String),

    #[error("Entity type '{0}' is not part of the model")]
    UnknownEntityType(String),

    #[error("Entity type '{entity}' derives from unknown entity type '{base}'")]
    UnknownBaseType { entity: String, base: String },

    #[error("Entity type '{0}' is part of an inheritance cycle")]
    CyclicInheritance(String),

    #[error("Property '{property}' is not declared on entity type '{entity}' or its base types")]
    UnknownProperty { entity: String, property: String },

    #[error("Property '{property}' is declared more than once in the hierarchy of entity type '{entity}'")]
    DuplicateProperty { entity: String, property: String },

    #[error("Property '{entity}.{property}' was redeclared as '{requested}' but is '{existing}'")]
    ConflictingPropertyType {
        entity: String,
        property: String,
        existing: String,
        requested: String,
    },

    #[error("Entity type '{0}' is a derived type and cannot be mapped to its own table")]
    TableOnDerivedType(String),

    #[error("Entity type '{0}' is a derived type and cannot declare a primary key")]
    KeyOnDerivedType(String),

    #[error("Principal entity type '{0}' has no primary key to reference")]
    MissingPrincipalKey(String),

    #[error("The one-to-one relationship between '{principal}' and '{dependent}' needs an explicit foreign key")]
    MissingForeignKey { principal: String, dependent: String },

    #[error("Foreign key on '{dependent}' has {foreign_key} properties but the principal key on '{principal}' has {principal_key}")]
    ForeignKeyArity {
        principal: String,
        dependent: String,
        foreign_key: usize,
        principal_key: usize,
    },

    #[error("Entity type '{entity}' is not an end of the relationship between '{principal}' and '{dependent}'")]
    NotARelationshipEnd {
        entity: String,
        principal: String,
        dependent: String,
    },
}
