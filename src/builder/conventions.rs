//! Model conventions
//!
//! Normalizes declared entity types, relationships and sequences into a model
//! the validator can walk: resolves hierarchies, discovers keys, adds
//! discriminators and shadow foreign keys, and rejects declarations that
//! cannot form a schema graph.

use super::error::ModelBuildError;
use crate::models::{Cardinality, Model, Property, ValueType};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Name of the discriminator property added to hierarchy roots
pub const DISCRIMINATOR_PROPERTY: &str = "Discriminator";

/// Apply all conventions to a model of raw declarations
pub fn apply(mut model: Model) -> Result<Model, ModelBuildError> {
    check_unique_names(&model)?;
    check_hierarchies(&model)?;
    add_discriminators(&mut model);
    check_unique_properties(&model)?;
    discover_keys(&mut model)?;
    resolve_relationships(&mut model)?;

    debug!(
        "Applied conventions to model with {} entity types, {} relationships and {} sequences",
        model.entity_types.len(),
        model.relationships.len(),
        model.sequences.len()
    );

    Ok(model)
}

fn check_unique_names(model: &Model) -> Result<(), ModelBuildError> {
    let mut seen = HashSet::new();
    for entity_type in &model.entity_types {
        if !seen.insert(entity_type.name.as_str()) {
            return Err(ModelBuildError::DuplicateEntityType(entity_type.name.clone()));
        }
    }

    let mut seen = HashSet::new();
    for sequence in &model.sequences {
        let key = (sequence.schema.as_deref(), sequence.name.as_str());
        if !seen.insert(key) {
            return Err(ModelBuildError::DuplicateSequence(sequence.name.clone()));
        }
    }

    Ok(())
}

/// Base types must exist, must not form a cycle, and only roots may be mapped
/// to a table
fn check_hierarchies(model: &Model) -> Result<(), ModelBuildError> {
    let mut graph = DiGraph::<&str, ()>::new();
    let node_map: HashMap<&str, NodeIndex> = model
        .entity_types
        .iter()
        .map(|e| (e.name.as_str(), graph.add_node(e.name.as_str())))
        .collect();

    for entity_type in &model.entity_types {
        let Some(base) = &entity_type.base_type else {
            continue;
        };
        let Some(&base_node) = node_map.get(base.as_str()) else {
            return Err(ModelBuildError::UnknownBaseType {
                entity: entity_type.name.clone(),
                base: base.clone(),
            });
        };
        graph.add_edge(node_map[entity_type.name.as_str()], base_node, ());
    }

    if let Err(cycle) = toposort(&graph, None) {
        return Err(ModelBuildError::CyclicInheritance(
            graph[cycle.node_id()].to_string(),
        ));
    }

    for entity_type in &model.entity_types {
        if !entity_type.is_root() {
            if entity_type.table.is_some() {
                return Err(ModelBuildError::TableOnDerivedType(entity_type.name.clone()));
            }
            if !entity_type.primary_key.is_empty() {
                return Err(ModelBuildError::KeyOnDerivedType(entity_type.name.clone()));
            }
        }
    }

    Ok(())
}

/// Roots with derived types get a required string discriminator, unless the
/// hierarchy already declares one
fn add_discriminators(model: &mut Model) {
    let roots: Vec<String> = model
        .entity_types
        .iter()
        .filter(|e| e.is_root() && model.has_derived_types(&e.name))
        .filter(|root| {
            !model.entity_types.iter().any(|e| {
                model.root_of(e).name == root.name
                    && e.declared_property(DISCRIMINATOR_PROPERTY).is_some()
            })
        })
        .map(|e| e.name.clone())
        .collect();

    for root in roots {
        if let Some(entity_type) = model.entity_type_mut(&root) {
            let mut discriminator =
                Property::new(DISCRIMINATOR_PROPERTY.to_string(), ValueType::String);
            discriminator.nullable = Some(false);
            discriminator.shadow = true;
            entity_type.properties.push(discriminator);
            debug!("Added discriminator to hierarchy root '{}'", root);
        }
    }
}

fn check_unique_properties(model: &Model) -> Result<(), ModelBuildError> {
    for entity_type in &model.entity_types {
        let mut seen = HashSet::new();
        for property in model.properties(entity_type) {
            if !seen.insert(property.name.as_str()) {
                return Err(ModelBuildError::DuplicateProperty {
                    entity: entity_type.name.clone(),
                    property: property.name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Roots without a declared key use `Id` or `<Entity>Id`. Key properties are
/// always required.
fn discover_keys(model: &mut Model) -> Result<(), ModelBuildError> {
    for entity_type in model.entity_types.iter_mut().filter(|e| e.is_root()) {
        if entity_type.primary_key.is_empty() {
            let type_id = format!("{}Id", entity_type.name);
            let discovered = entity_type
                .properties
                .iter()
                .find(|p| p.name == "Id")
                .or_else(|| entity_type.properties.iter().find(|p| p.name == type_id))
                .map(|p| p.name.clone());
            if let Some(name) = discovered {
                entity_type.primary_key = vec![name];
            }
        }

        for key_property in entity_type.primary_key.clone() {
            match entity_type.declared_property_mut(&key_property) {
                Some(property) => property.nullable = Some(false),
                None => {
                    return Err(ModelBuildError::UnknownProperty {
                        entity: entity_type.name.clone(),
                        property: key_property,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Fill in principal keys and one-to-many shadow foreign keys, and check both
/// ends of every relationship
fn resolve_relationships(model: &mut Model) -> Result<(), ModelBuildError> {
    for index in 0..model.relationships.len() {
        let relationship = model.relationships[index].clone();

        let principal = model
            .entity_type(&relationship.principal)
            .ok_or_else(|| ModelBuildError::UnknownEntityType(relationship.principal.clone()))?;
        let dependent = model
            .entity_type(&relationship.dependent)
            .ok_or_else(|| ModelBuildError::UnknownEntityType(relationship.dependent.clone()))?;

        let principal_key = if relationship.principal_key.is_empty() {
            let key = model.primary_key(principal).to_vec();
            if key.is_empty() {
                return Err(ModelBuildError::MissingPrincipalKey(principal.name.clone()));
            }
            key
        } else {
            relationship.principal_key.clone()
        };

        let mut principal_key_types = Vec::with_capacity(principal_key.len());
        for name in &principal_key {
            let property = model.find_property(principal, name).ok_or_else(|| {
                ModelBuildError::UnknownProperty {
                    entity: principal.name.clone(),
                    property: name.clone(),
                }
            })?;
            principal_key_types.push(property.value_type);
        }

        let mut shadow_properties = Vec::new();
        let foreign_key = if relationship.foreign_key.is_empty() {
            if relationship.cardinality == Cardinality::OneToOne {
                return Err(ModelBuildError::MissingForeignKey {
                    principal: relationship.principal.clone(),
                    dependent: relationship.dependent.clone(),
                });
            }
            let mut names = Vec::with_capacity(principal_key.len());
            for (key_name, value_type) in principal_key.iter().zip(&principal_key_types) {
                let name = format!("{}{}", principal.name, key_name);
                if model.find_property(dependent, &name).is_none() {
                    let mut shadow = Property::new(name.clone(), *value_type);
                    shadow.nullable = Some(!relationship.required);
                    shadow.shadow = true;
                    shadow_properties.push(shadow);
                }
                names.push(name);
            }
            names
        } else {
            for name in &relationship.foreign_key {
                if model.find_property(dependent, name).is_none() {
                    return Err(ModelBuildError::UnknownProperty {
                        entity: dependent.name.clone(),
                        property: name.clone(),
                    });
                }
            }
            relationship.foreign_key.clone()
        };

        if foreign_key.len() != principal_key.len() {
            return Err(ModelBuildError::ForeignKeyArity {
                principal: relationship.principal.clone(),
                dependent: relationship.dependent.clone(),
                foreign_key: foreign_key.len(),
                principal_key: principal_key.len(),
            });
        }

        if !shadow_properties.is_empty() {
            debug!(
                "Added {} shadow foreign key properties to '{}'",
                shadow_properties.len(),
                relationship.dependent
            );
            if let Some(dependent) = model.entity_type_mut(&relationship.dependent) {
                dependent.properties.extend(shadow_properties);
            }
        }

        let resolved = &mut model.relationships[index];
        resolved.principal_key = principal_key;
        resolved.foreign_key = foreign_key;
    }
    Ok(())
}
