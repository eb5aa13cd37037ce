//! Schema model - the normalized graph the validator walks

use super::entity::{EntityType, TableMapping};
use super::property::Property;
use super::relationship::Relationship;
use super::sequence::Sequence;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Schema model: entity types, relationships and sequences
///
/// Entity types are kept in declaration order; every query that groups them
/// (tables, hierarchies) preserves that order so diagnostics come out
/// deterministically.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Model {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_schema: Option<String>,
    #[serde(default)]
    pub entity_types: Vec<EntityType>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub sequences: Vec<Sequence>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity_type(&self, name: &str) -> Option<&EntityType> {
        self.entity_types.iter().find(|e| e.name == name)
    }

    pub(crate) fn entity_type_mut(&mut self, name: &str) -> Option<&mut EntityType> {
        self.entity_types.iter_mut().find(|e| e.name == name)
    }

    pub fn sequence(&self, name: &str) -> Option<&Sequence> {
        self.sequences.iter().find(|s| s.name == name)
    }

    /// Base type chain of an entity type, root first and the type itself last
    ///
    /// Stops at a missing base type or at a repeated name, so a model that
    /// skipped the conventions pass cannot loop forever.
    pub fn base_chain<'a>(&'a self, entity_type: &'a EntityType) -> Vec<&'a EntityType> {
        let mut chain = vec![entity_type];
        let mut current = entity_type;
        while let Some(base_name) = &current.base_type {
            match self.entity_type(base_name) {
                Some(base) if !chain.iter().any(|e| e.name == base.name) => {
                    chain.push(base);
                    current = base;
                }
                _ => break,
            }
        }
        chain.reverse();
        chain
    }

    pub fn root_of<'a>(&'a self, entity_type: &'a EntityType) -> &'a EntityType {
        self.base_chain(entity_type)[0]
    }

    /// Direct derived types of the named entity type
    pub fn derived_types<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a EntityType> + 'a {
        self.entity_types
            .iter()
            .filter(move |e| e.base_type.as_deref() == Some(name))
    }

    pub fn has_derived_types(&self, name: &str) -> bool {
        self.derived_types(name).next().is_some()
    }

    /// All properties of an entity type, inherited ones first
    pub fn properties<'a>(&'a self, entity_type: &'a EntityType) -> Vec<&'a Property> {
        self.base_chain(entity_type)
            .into_iter()
            .flat_map(|e| e.properties.iter())
            .collect()
    }

    /// Find a property on the entity type or any of its base types
    pub fn find_property<'a>(&'a self, entity_type: &'a EntityType, name: &str) -> Option<&'a Property> {
        self.base_chain(entity_type)
            .into_iter()
            .find_map(|e| e.declared_property(name))
    }

    /// Primary key property names; derived types use their root's key
    pub fn primary_key<'a>(&'a self, entity_type: &'a EntityType) -> &'a [String] {
        &self.root_of(entity_type).primary_key
    }

    /// Effective table of an entity type
    ///
    /// Derived types share their root's table. Without an explicit mapping the
    /// root's name is the table name; the model's default schema fills in a
    /// missing schema.
    pub fn table_of(&self, entity_type: &EntityType) -> TableMapping {
        let root = self.root_of(entity_type);
        match &root.table {
            Some(table) => TableMapping {
                name: table.name.clone(),
                schema: table.schema.clone().or_else(|| self.default_schema.clone()),
            },
            None => TableMapping::new(root.name.clone(), self.default_schema.clone()),
        }
    }

    /// Entity types grouped by physical table, in declaration order
    pub fn tables(&self) -> Vec<(TableMapping, Vec<&EntityType>)> {
        let mut groups: Vec<(TableMapping, Vec<&EntityType>)> = Vec::new();
        let mut index: HashMap<TableMapping, usize> = HashMap::new();

        for entity_type in &self.entity_types {
            let table = self.table_of(entity_type);
            match index.get(&table) {
                Some(&i) => groups[i].1.push(entity_type),
                None => {
                    index.insert(table.clone(), groups.len());
                    groups.push((table, vec![entity_type]));
                }
            }
        }

        groups
    }

    /// Whether a property's column accepts `NULL`
    ///
    /// Columns of properties declared on a derived type are nullable, since
    /// rows of sibling types leave them empty.
    pub fn is_column_nullable(&self, entity_type: &EntityType, property: &Property) -> bool {
        if property.is_nullable() {
            return true;
        }
        self.base_chain(entity_type)
            .into_iter()
            .find(|e| e.declared_property(&property.name).is_some())
            .is_some_and(|declaring| !declaring.is_root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValueType;

    fn animal_model() -> Model {
        let mut animal = EntityType::new("Animal".to_string());
        animal.properties.push(Property::new("Id".to_string(), ValueType::Int32));
        animal.properties.push(Property::new("Name".to_string(), ValueType::String));
        animal.primary_key = vec!["Id".to_string()];

        let mut cat = EntityType::new("Cat".to_string());
        cat.base_type = Some("Animal".to_string());
        cat.properties.push(Property::new("Breed".to_string(), ValueType::String));

        let mut kitten = EntityType::new("Kitten".to_string());
        kitten.base_type = Some("Cat".to_string());
        kitten.properties.push(Property::new("Age".to_string(), ValueType::Int32));

        Model {
            entity_types: vec![animal, cat, kitten],
            ..Model::default()
        }
    }

    #[test]
    fn test_base_chain_and_properties() {
        let model = animal_model();
        let kitten = model.entity_type("Kitten").unwrap();

        let chain: Vec<&str> = model.base_chain(kitten).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(chain, vec!["Animal", "Cat", "Kitten"]);

        let properties: Vec<&str> = model.properties(kitten).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(properties, vec!["Id", "Name", "Breed", "Age"]);

        assert_eq!(model.primary_key(kitten), ["Id".to_string()]);
    }

    #[test]
    fn test_derived_types_share_root_table() {
        let mut model = animal_model();
        model.default_schema = Some("main".to_string());

        let tables = model.tables();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].0, TableMapping::new("Animal", Some("main".to_string())));
        assert_eq!(tables[0].1.len(), 3);
    }

    #[test]
    fn test_derived_columns_are_nullable() {
        let model = animal_model();
        let kitten = model.entity_type("Kitten").unwrap();
        let id = model.find_property(kitten, "Id").unwrap();
        let age = model.find_property(kitten, "Age").unwrap();

        assert!(!model.is_column_nullable(kitten, id));
        assert!(model.is_column_nullable(kitten, age));
    }

    #[test]
    fn test_base_chain_survives_cycles() {
        let mut a = EntityType::new("A".to_string());
        a.base_type = Some("B".to_string());
        let mut b = EntityType::new("B".to_string());
        b.base_type = Some("A".to_string());
        let model = Model {
            entity_types: vec![a, b],
            ..Model::default()
        };

        let a = model.entity_type("A").unwrap();
        assert_eq!(model.base_chain(a).len(), 2);
    }
}
