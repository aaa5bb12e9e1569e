//! Dependency graph construction over candidate modules.

use crate::core::graph::DependencyGraph;
use crate::core::types::ModuleInfo;

use super::names::{self, NameExtraction};

/// Build the directed module dependency graph: edge A -> B whenever A
/// references a name that B defines.
///
/// Each fragment is parsed exactly once and its name sets cached before the
/// pairwise comparison; with n modules the comparison itself stays O(n²),
/// acceptable because module counts are tens, not thousands.
pub fn build_dependency_graph(modules: &[ModuleInfo]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for module in modules {
        graph.add_module(&module.name);
    }

    let referenced: Vec<NameExtraction> = modules
        .iter()
        .map(|m| names::referenced_names(&m.content))
        .collect();
    let defined: Vec<NameExtraction> = modules
        .iter()
        .map(|m| names::defined_names(&m.content))
        .collect();

    for (module, extraction) in modules.iter().zip(&referenced) {
        if extraction.is_degraded() {
            eprintln!(
                "Warning: module '{}' failed to parse in isolation; using identifier-scan fallback",
                module.name
            );
        }
    }

    for (i, module) in modules.iter().enumerate() {
        for (j, other) in modules.iter().enumerate() {
            if i == j {
                continue;
            }
            if !referenced[i].names().is_disjoint(defined[j].names()) {
                graph.add_dependency(&module.name, &other.name);
            }
        }
    }

    graph
}
