//! Relationship analysis
//!
//! Finds relationships that link two entity types through their primary keys
//! and answers reachability questions over them. Unrelated entity types may
//! only share a table when such links connect them (table splitting).

use crate::models::{EntityType, Model, Relationship};
use petgraph::algo::has_path_connecting;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Whether a relationship is one-to-one from the dependent's primary key to
/// the principal's primary key
pub fn is_primary_key_link(model: &Model, relationship: &Relationship) -> bool {
    if !relationship.is_unique() {
        return false;
    }
    let (Some(principal), Some(dependent)) = (
        model.entity_type(&relationship.principal),
        model.entity_type(&relationship.dependent),
    ) else {
        return false;
    };

    let principal_key = model.primary_key(principal);
    let dependent_key = model.primary_key(dependent);
    !dependent_key.is_empty()
        && relationship.foreign_key.as_slice() == dependent_key
        && relationship.principal_key.as_slice() == principal_key
}

/// Undirected graph of hierarchy roots joined by primary key links
pub struct PrimaryKeyLinks<'a> {
    graph: UnGraph<&'a str, ()>,
    node_map: HashMap<&'a str, NodeIndex>,
}

impl<'a> PrimaryKeyLinks<'a> {
    /// Build the graph over the given roots, keeping only links between them
    pub fn for_roots(model: &'a Model, roots: &[&'a EntityType]) -> Self {
        let mut graph = UnGraph::<&'a str, ()>::new_undirected();
        let mut node_map = HashMap::new();
        for root in roots {
            node_map
                .entry(root.name.as_str())
                .or_insert_with(|| graph.add_node(root.name.as_str()));
        }

        for relationship in &model.relationships {
            if !is_primary_key_link(model, relationship) {
                continue;
            }
            let (Some(principal), Some(dependent)) = (
                model.entity_type(&relationship.principal),
                model.entity_type(&relationship.dependent),
            ) else {
                continue;
            };
            let principal_root = model.root_of(principal).name.as_str();
            let dependent_root = model.root_of(dependent).name.as_str();
            if let (Some(&a), Some(&b)) = (node_map.get(principal_root), node_map.get(dependent_root)) {
                graph.add_edge(a, b, ());
            }
        }

        Self { graph, node_map }
    }

    /// Whether two roots are connected through a chain of links
    pub fn is_linked(&self, from: &str, to: &str) -> bool {
        match (self.node_map.get(from), self.node_map.get(to)) {
            (Some(&a), Some(&b)) => has_path_connecting(&self.graph, a, b, None),
            _ => false,
        }
    }
}
