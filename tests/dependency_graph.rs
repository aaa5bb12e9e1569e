use modsplit::analyzer::dependencies::build_dependency_graph;
use modsplit::core::graph::DependencyGraph;
use modsplit::core::types::ModuleInfo;

fn module(name: &str, content: &str) -> ModuleInfo {
    ModuleInfo::new(name.to_string(), 0, 0, content.to_string())
}

#[test]
fn reference_to_defined_name_creates_directed_edge() {
    let modules = vec![
        module("caller", "result = helper(x)"),
        module("callee", "def helper(x):\n    return x"),
    ];

    let graph = build_dependency_graph(&modules);
    assert!(graph.has_dependency("caller", "callee"));
    assert!(!graph.has_dependency("callee", "caller"));
}

#[test]
fn no_self_edges_ever() {
    let modules = vec![
        module("alpha", "def helper(x):\n    return helper(x - 1)"),
        module("beta", "value = helper(3)"),
    ];

    let graph = build_dependency_graph(&modules);
    for (from, to) in graph.edges() {
        assert_ne!(from, to);
    }
    assert!(!graph.has_dependency("alpha", "alpha"));
    assert!(graph.has_dependency("beta", "alpha"));
}

#[test]
fn cycles_are_permitted_at_this_layer() {
    let modules = vec![
        module("first", "def ping():\n    return pong()"),
        module("second", "def pong():\n    return ping()"),
    ];

    let graph = build_dependency_graph(&modules);
    assert!(graph.has_dependency("first", "second"));
    assert!(graph.has_dependency("second", "first"));
}

#[test]
fn unrelated_modules_stay_disconnected() {
    let modules = vec![
        module("one", "def f(a):\n    return a"),
        module("two", "def g(b):\n    return b"),
    ];

    let graph = build_dependency_graph(&modules);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn graph_construction_is_deterministic() {
    let modules = vec![
        module("a", "x = shared()\ny = other()"),
        module("b", "def shared():\n    return 1"),
        module("c", "def other():\n    return 2"),
    ];

    let first = build_dependency_graph(&modules);
    let second = build_dependency_graph(&modules);
    assert_eq!(first.edges(), second.edges());
    assert_eq!(first.module_names(), second.module_names());
}

#[test]
fn graph_wrapper_rejects_self_and_unknown_edges() {
    let mut graph = DependencyGraph::new();
    graph.add_module("a");
    graph.add_module("b");

    assert!(!graph.add_dependency("a", "a"));
    assert!(!graph.add_dependency("a", "missing"));
    assert!(graph.add_dependency("a", "b"));
    // Duplicate edges collapse
    assert!(!graph.add_dependency("a", "b"));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.dependencies_of("a"), vec!["b".to_string()]);
}
