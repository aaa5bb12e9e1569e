use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// Directed graph over candidate-module names.
///
/// An edge `A -> B` means A's code references at least one name defined in B.
/// Self-edges are never created. Cycles are permitted at this layer; they are
/// a signal for later import reorganization, not an error.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    nodes: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module node; idempotent.
    pub fn add_module(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.nodes.get(name) {
            return index;
        }
        let index = self.graph.add_node(name.to_string());
        self.nodes.insert(name.to_string(), index);
        index
    }

    /// Add a dependency edge. Returns false for self-edges, duplicate edges,
    /// and endpoints that were never added as modules.
    pub fn add_dependency(&mut self, from: &str, to: &str) -> bool {
        if from == to {
            return false;
        }
        let (Some(&source), Some(&target)) = (self.nodes.get(from), self.nodes.get(to)) else {
            return false;
        };
        if self.graph.find_edge(source, target).is_some() {
            return false;
        }
        self.graph.add_edge(source, target, ());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Module names in insertion order.
    pub fn module_names(&self) -> Vec<String> {
        self.graph
            .node_indices()
            .map(|i| self.graph[i].clone())
            .collect()
    }

    /// Direct dependencies of a module, sorted for deterministic output.
    pub fn dependencies_of(&self, name: &str) -> Vec<String> {
        let Some(&index) = self.nodes.get(name) else {
            return Vec::new();
        };
        let mut deps: Vec<String> = self
            .graph
            .neighbors_directed(index, Direction::Outgoing)
            .map(|i| self.graph[i].clone())
            .collect();
        deps.sort();
        deps
    }

    /// All edges as (from, to) pairs in insertion order.
    pub fn edges(&self) -> Vec<(String, String)> {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()].clone(), self.graph[e.target()].clone()))
            .collect()
    }

    pub fn has_dependency(&self, from: &str, to: &str) -> bool {
        match (self.nodes.get(from), self.nodes.get(to)) {
            (Some(&source), Some(&target)) => self.graph.find_edge(source, target).is_some(),
            _ => false,
        }
    }
}
