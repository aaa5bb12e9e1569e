//! Import reorganization between generated modules, including circular
//! dependency resolution.

use std::collections::BTreeMap;

use crate::core::graph::DependencyGraph;
use crate::core::types::ModuleInfo;

/// Map each module to the sibling modules it must import, taken from its
/// direct dependencies, then break any import cycles.
pub fn reorganize_imports(
    modules: &[ModuleInfo],
    graph: &DependencyGraph,
) -> BTreeMap<String, Vec<String>> {
    let order: Vec<String> = modules.iter().map(|m| m.name.clone()).collect();
    let mut module_imports: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for name in &order {
        module_imports.insert(name.clone(), graph.dependencies_of(name));
    }

    resolve_circular_dependencies(&mut module_imports, &order);
    module_imports
}

/// Detect cycles by depth-first search over an adjacency matrix and break
/// each one by removing the edge whose source module has the fewest recorded
/// dependencies. A deliberately simple tie-break, not a minimal
/// feedback-arc-set solver; downstream consumers rely on its reproducible
/// choice.
fn resolve_circular_dependencies(
    module_imports: &mut BTreeMap<String, Vec<String>>,
    order: &[String],
) {
    let n = order.len();
    let index_of: BTreeMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let mut matrix = vec![vec![false; n]; n];
    for (module, imports) in module_imports.iter() {
        if let Some(&i) = index_of.get(module.as_str()) {
            for import in imports {
                if let Some(&j) = index_of.get(import.as_str()) {
                    matrix[i][j] = true;
                }
            }
        }
    }

    let mut visited = vec![false; n];
    let mut recursion_stack = vec![false; n];
    let mut cycles: Vec<Vec<String>> = Vec::new();

    for i in 0..n {
        if !visited[i] {
            dfs(
                i,
                vec![order[i].clone()],
                &matrix,
                order,
                &mut visited,
                &mut recursion_stack,
                &mut cycles,
            );
        }
    }

    for cycle in &cycles {
        break_cycle(cycle, module_imports);
    }
}

fn dfs(
    node: usize,
    path: Vec<String>,
    matrix: &[Vec<bool>],
    order: &[String],
    visited: &mut [bool],
    recursion_stack: &mut [bool],
    cycles: &mut Vec<Vec<String>>,
) {
    visited[node] = true;
    recursion_stack[node] = true;

    for neighbor in 0..order.len() {
        if !matrix[node][neighbor] {
            continue;
        }
        if recursion_stack[neighbor] {
            let mut cycle = path.clone();
            cycle.push(order[neighbor].clone());
            if !cycles.contains(&cycle) {
                cycles.push(cycle);
            }
        } else if !visited[neighbor] {
            let mut next_path = path.clone();
            next_path.push(order[neighbor].clone());
            dfs(
                neighbor,
                next_path,
                matrix,
                order,
                visited,
                recursion_stack,
                cycles,
            );
        }
    }

    recursion_stack[node] = false;
}

/// Remove the weakest link: the edge out of the cycle member with the fewest
/// recorded dependencies.
fn break_cycle(cycle: &[String], module_imports: &mut BTreeMap<String, Vec<String>>) {
    if cycle.len() < 2 {
        return;
    }

    let mut min_imports = usize::MAX;
    let mut weakest = (cycle[0].clone(), cycle[1].clone());

    for i in 0..cycle.len() {
        let from = &cycle[i];
        let to = &cycle[(i + 1) % cycle.len()];
        let count = module_imports.get(from).map(Vec::len).unwrap_or(0);
        if count < min_imports {
            min_imports = count;
            weakest = (from.clone(), to.clone());
        }
    }

    if let Some(imports) = module_imports.get_mut(&weakest.0) {
        imports.retain(|name| name != &weakest.1);
    }
}
