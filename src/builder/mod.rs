//! Declarative model builder
//!
//! Accumulates entity type, property, relationship and sequence declarations
//! and turns them into a [`Model`] through the [`conventions`] pass.
//!
//! # Example
//!
//! ```rust
//! use sqlite_model_validation::builder::ModelBuilder;
//! use sqlite_model_validation::models::ValueType;
//!
//! let mut builder = ModelBuilder::new();
//! builder.entity("Animal").property("Id", ValueType::Int32);
//! builder.entity("Animal").property("Name", ValueType::String);
//! builder.entity("Animal").to_table_with_schema("Animals", "pet");
//! builder.has_sequence("Fibonacci");
//!
//! let model = builder.build().unwrap();
//! assert_eq!(model.entity_types[0].primary_key, vec!["Id".to_string()]);
//! ```

pub mod conventions;
pub mod error;

pub use error::ModelBuildError;

use crate::models::{
    Cardinality, EntityType, Model, Property, Relationship, Sequence, TableMapping, ValueType,
};

/// Builder for a [`Model`]
///
/// Declaration errors that can only be detected on the spot (such as
/// redeclaring a property with another type) are recorded and returned by
/// [`build`](ModelBuilder::build); everything else is checked by the
/// conventions pass.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: Model,
    errors: Vec<ModelBuildError>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from already declared entity types, relationships and sequences
    pub fn from_model(model: Model) -> Self {
        Self {
            model,
            errors: Vec::new(),
        }
    }

    /// Declarations made so far, before conventions
    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn has_default_schema(&mut self, schema: &str) -> &mut Self {
        self.model.default_schema = Some(schema.to_string());
        self
    }

    /// Configure an entity type, declaring it on first use
    pub fn entity(&mut self, name: &str) -> EntityTypeBuilder<'_> {
        let index = match self.model.entity_types.iter().position(|e| e.name == name) {
            Some(index) => index,
            None => {
                self.model.entity_types.push(EntityType::new(name.to_string()));
                self.model.entity_types.len() - 1
            }
        };
        EntityTypeBuilder {
            builder: self,
            index,
        }
    }

    /// Configure a sequence, declaring it on first use
    pub fn has_sequence(&mut self, name: &str) -> SequenceBuilder<'_> {
        let index = match self.model.sequences.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.model.sequences.push(Sequence::new(name.to_string()));
                self.model.sequences.len() - 1
            }
        };
        SequenceBuilder {
            sequence: &mut self.model.sequences[index],
        }
    }

    /// Apply conventions and return the finished model
    pub fn build(mut self) -> Result<Model, ModelBuildError> {
        if !self.errors.is_empty() {
            return Err(self.errors.remove(0));
        }
        conventions::apply(self.model)
    }
}

/// Configures a single entity type
pub struct EntityTypeBuilder<'a> {
    builder: &'a mut ModelBuilder,
    index: usize,
}

impl<'a> EntityTypeBuilder<'a> {
    fn entity_type(&mut self) -> &mut EntityType {
        &mut self.builder.model.entity_types[self.index]
    }

    pub fn has_base_type(mut self, base: &str) -> Self {
        self.entity_type().base_type = Some(base.to_string());
        self
    }

    /// Configure a property, declaring it on first use
    pub fn property(mut self, name: &str, value_type: ValueType) -> PropertyBuilder<'a> {
        let entity_type = self.entity_type();
        let property = match entity_type.properties.iter().position(|p| p.name == name) {
            Some(position) => {
                let existing = entity_type.properties[position].value_type;
                if existing != value_type {
                    let error = ModelBuildError::ConflictingPropertyType {
                        entity: entity_type.name.clone(),
                        property: name.to_string(),
                        existing: existing.to_string(),
                        requested: value_type.to_string(),
                    };
                    self.builder.errors.push(error);
                }
                position
            }
            None => {
                entity_type
                    .properties
                    .push(Property::new(name.to_string(), value_type));
                entity_type.properties.len() - 1
            }
        };
        PropertyBuilder {
            builder: self.builder,
            entity: self.index,
            property,
        }
    }

    pub fn has_key(mut self, properties: &[&str]) -> Self {
        self.entity_type().primary_key = properties.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn to_table(mut self, name: &str) -> Self {
        self.entity_type().table = Some(TableMapping::new(name, None));
        self
    }

    pub fn to_table_with_schema(mut self, name: &str, schema: &str) -> Self {
        self.entity_type().table = Some(TableMapping::new(name, Some(schema.to_string())));
        self
    }

    /// Start a relationship in which this entity type references one `other`
    pub fn has_one(self, other: &str) -> NavigationBuilder<'a> {
        NavigationBuilder {
            name: self.builder.model.entity_types[self.index].name.clone(),
            builder: self.builder,
            other: other.to_string(),
        }
    }
}

/// Configures a single property
pub struct PropertyBuilder<'a> {
    builder: &'a mut ModelBuilder,
    entity: usize,
    property: usize,
}

impl PropertyBuilder<'_> {
    fn property(&mut self) -> &mut Property {
        &mut self.builder.model.entity_types[self.entity].properties[self.property]
    }

    pub fn has_column_name(mut self, name: &str) -> Self {
        self.property().column_name = Some(name.to_string());
        self
    }

    pub fn has_column_type(mut self, store_type: &str) -> Self {
        self.property().column_type = Some(store_type.to_string());
        self
    }

    pub fn is_required(mut self, required: bool) -> Self {
        self.property().nullable = Some(!required);
        self
    }

    pub fn has_max_length(mut self, max_length: u32) -> Self {
        self.property().max_length = Some(max_length);
        self
    }

    pub fn has_computed_column_sql(mut self, sql: &str) -> Self {
        self.property().computed_sql = Some(sql.to_string());
        self
    }

    pub fn has_default_value_sql(mut self, sql: &str) -> Self {
        self.property().default_sql = Some(sql.to_string());
        self
    }
}

/// Chooses the inverse side of a reference navigation
pub struct NavigationBuilder<'a> {
    builder: &'a mut ModelBuilder,
    name: String,
    other: String,
}

impl<'a> NavigationBuilder<'a> {
    /// One-to-one. The dependent end is settled by
    /// [`has_foreign_key`](RelationshipBuilder::has_foreign_key); until then
    /// the declaring entity type is the dependent.
    pub fn with_one(self) -> RelationshipBuilder<'a> {
        self.push(Cardinality::OneToOne)
    }

    /// One-to-many: the declaring entity type is the dependent
    pub fn with_many(self) -> RelationshipBuilder<'a> {
        self.push(Cardinality::OneToMany)
    }

    fn push(self, cardinality: Cardinality) -> RelationshipBuilder<'a> {
        let relationships = &mut self.builder.model.relationships;
        relationships.push(Relationship::new(self.other, self.name, cardinality));
        let index = relationships.len() - 1;
        RelationshipBuilder {
            builder: self.builder,
            index,
        }
    }
}

/// Configures a single relationship
pub struct RelationshipBuilder<'a> {
    builder: &'a mut ModelBuilder,
    index: usize,
}

impl RelationshipBuilder<'_> {
    fn relationship(&mut self) -> &mut Relationship {
        &mut self.builder.model.relationships[self.index]
    }

    /// Make `entity` the dependent end, with the given foreign key properties
    pub fn has_foreign_key(mut self, entity: &str, properties: &[&str]) -> Self {
        self.orient(entity, false);
        self.relationship().foreign_key = properties.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Make `entity` the principal end, referencing the given key properties
    pub fn has_principal_key(mut self, entity: &str, properties: &[&str]) -> Self {
        self.orient(entity, true);
        self.relationship().principal_key = properties.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn is_required(mut self, required: bool) -> Self {
        self.relationship().required = required;
        self
    }

    fn orient(&mut self, entity: &str, as_principal: bool) {
        let relationship = &mut self.builder.model.relationships[self.index];
        let (same_end, other_end) = if as_principal {
            (&relationship.principal, &relationship.dependent)
        } else {
            (&relationship.dependent, &relationship.principal)
        };

        if same_end == entity {
            return;
        }
        if other_end == entity && relationship.is_unique() {
            std::mem::swap(&mut relationship.principal, &mut relationship.dependent);
            std::mem::swap(&mut relationship.foreign_key, &mut relationship.principal_key);
            return;
        }

        let error = ModelBuildError::NotARelationshipEnd {
            entity: entity.to_string(),
            principal: relationship.principal.clone(),
            dependent: relationship.dependent.clone(),
        };
        self.builder.errors.push(error);
    }
}

/// Configures a single sequence
pub struct SequenceBuilder<'a> {
    sequence: &'a mut Sequence,
}

impl SequenceBuilder<'_> {
    pub fn in_schema(self, schema: &str) -> Self {
        self.sequence.schema = Some(schema.to_string());
        self
    }

    pub fn starts_at(self, start_value: i64) -> Self {
        self.sequence.start_value = start_value;
        self
    }

    pub fn increments_by(self, increment_by: i64) -> Self {
        self.sequence.increment_by = increment_by;
        self
    }

    pub fn of_type(self, value_type: ValueType) -> Self {
        self.sequence.value_type = value_type;
        self
    }
}
