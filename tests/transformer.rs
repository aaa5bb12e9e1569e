use std::collections::BTreeMap;
use std::path::Path;

use modsplit::core::graph::DependencyGraph;
use modsplit::core::types::{
    AnalysisResult, ClassInfo, FileInfo, FunctionInfo, ModuleInfo,
};
use modsplit::transformer::filesystem::{
    clean_output_directory, generate_files, DEFAULT_KEEP_PATTERNS,
};
use modsplit::transformer::imports::reorganize_imports;
use modsplit::transformer::{generate_package_structure, transform_code};

fn module(name: &str, content: &str) -> ModuleInfo {
    let mut module = ModuleInfo::new(name.to_string(), 0, 0, content.to_string());
    module.purpose = format!("Handles {name} operations");
    module
}

fn sample_analysis() -> AnalysisResult {
    let mut alpha = module("alpha", "\"\"\"\nAlpha things.\n\"\"\"\ndef run(x):\n    return beta_helper(x)\n");
    alpha.docstring = Some("Alpha things.".to_string());
    alpha.purpose = "Alpha things.".to_string();
    alpha.functions.push(FunctionInfo {
        name: "run".to_string(),
        line: 4,
        args: vec!["x".to_string()],
        docstring: String::new(),
    });

    let mut beta = module("beta", "class BetaHelper:\n    pass\n");
    beta.classes.push(ClassInfo {
        name: "BetaHelper".to_string(),
        line: 1,
        methods: Vec::new(),
        docstring: String::new(),
    });

    let notes = module("notes", "# just commentary\n");

    let mut graph = DependencyGraph::new();
    graph.add_module("alpha");
    graph.add_module("beta");
    graph.add_module("notes");
    graph.add_dependency("alpha", "beta");

    AnalysisResult {
        modules: vec![alpha, beta, notes],
        dependencies: graph,
        symbols: BTreeMap::new(),
        file_info: FileInfo {
            path: "/tmp/original.py".to_string(),
            size: 123,
            name: "original.py".to_string(),
            stem: "original".to_string(),
        },
    }
}

#[test]
fn package_structure_contains_init_readme_and_module_files() {
    let analysis = sample_analysis();
    let result = generate_package_structure(&analysis, Path::new("/tmp/out"), "mypkg");

    assert_eq!(result.package_name, "mypkg");
    assert_eq!(result.files.len(), 5);

    let paths: Vec<String> = result
        .files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert!(paths.contains(&"__init__.py".to_string()));
    assert!(paths.contains(&"README.md".to_string()));
    assert!(paths.contains(&"alpha.py".to_string()));

    assert_eq!(result.module_map["alpha"], "alpha.py");
}

#[test]
fn init_reexports_only_modules_with_exports() {
    let analysis = sample_analysis();
    let result = generate_package_structure(&analysis, Path::new("/tmp/out"), "mypkg");

    let init = result
        .files
        .iter()
        .find(|f| f.path.ends_with("__init__.py"))
        .unwrap();
    assert!(init.content.contains("from .alpha import *"));
    assert!(init.content.contains("from .beta import *"));
    // `notes` exposes nothing and is not re-exported
    assert!(!init.content.contains("from .notes import *"));
}

#[test]
fn readme_lists_every_module_with_purpose() {
    let analysis = sample_analysis();
    let result = generate_package_structure(&analysis, Path::new("/tmp/out"), "mypkg");

    let readme = result
        .files
        .iter()
        .find(|f| f.path.ends_with("README.md"))
        .unwrap();
    assert!(readme.content.contains("# mypkg"));
    assert!(readme.content.contains("- **alpha**: Alpha things."));
    assert!(readme.content.contains("- **notes**: Handles notes operations"));
    assert!(readme.content.contains("from mypkg import alpha"));
}

#[test]
fn module_file_drops_original_docstring_and_adds_header_and_imports() {
    let analysis = sample_analysis();
    let result = generate_package_structure(&analysis, Path::new("/tmp/out"), "mypkg");

    let alpha = result
        .files
        .iter()
        .find(|f| f.path.ends_with("alpha.py"))
        .unwrap();

    // Standardized header with title and purpose
    assert!(alpha.content.starts_with("\"\"\"\nAlpha - Alpha things."));
    // Original leading docstring removed, code kept
    assert!(alpha.content.contains("def run(x):"));
    assert!(!alpha.content.contains("Alpha things.\n\"\"\"\ndef run"));
    // Sibling import for the dependency on beta
    assert!(alpha.content.contains("from .beta import *"));
}

#[test]
fn transform_code_derives_package_name_and_output_dir() {
    let analysis = sample_analysis();
    let result = transform_code(&analysis, None, None);
    assert_eq!(result.package_name, "original");
    assert_eq!(result.output_path, Path::new("/tmp/original"));
}

#[test]
fn reorganize_imports_breaks_cycles_deterministically() {
    let modules = vec![
        module("a", "def f():\n    return g()\n"),
        module("b", "def g():\n    return f()\n"),
    ];
    let mut graph = DependencyGraph::new();
    graph.add_module("a");
    graph.add_module("b");
    graph.add_dependency("a", "b");
    graph.add_dependency("b", "a");

    let imports = reorganize_imports(&modules, &graph);
    // The cycle is broken by removing the edge out of the module with the
    // fewest dependencies; first in order wins the tie.
    assert!(imports["a"].is_empty());
    assert_eq!(imports["b"], vec!["a".to_string()]);
}

#[test]
fn reorganize_imports_keeps_acyclic_dependencies() {
    let modules = vec![module("a", ""), module("b", ""), module("c", "")];
    let mut graph = DependencyGraph::new();
    graph.add_module("a");
    graph.add_module("b");
    graph.add_module("c");
    graph.add_dependency("a", "b");
    graph.add_dependency("a", "c");

    let imports = reorganize_imports(&modules, &graph);
    assert_eq!(imports["a"], vec!["b".to_string(), "c".to_string()]);
    assert!(imports["b"].is_empty());
    assert!(imports["c"].is_empty());
}

#[test]
fn generate_files_dry_run_reports_without_writing() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("pkg");
    let analysis = sample_analysis();
    let result = generate_package_structure(&analysis, &out, "pkg");

    let reported = generate_files(&result, true).unwrap();
    assert_eq!(reported.len(), 5);
    assert!(reported.iter().all(|line| line.starts_with("[DRY RUN]")));
    assert!(!out.exists());
}

#[test]
fn generate_files_writes_package_to_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("pkg");
    let analysis = sample_analysis();
    let result = generate_package_structure(&analysis, &out, "pkg");

    let written = generate_files(&result, false).unwrap();
    assert_eq!(written.len(), 5);
    assert!(out.join("__init__.py").exists());
    assert!(out.join("alpha.py").exists());

    let alpha = std::fs::read_to_string(out.join("alpha.py")).unwrap();
    assert!(alpha.contains("def run(x):"));
}

#[test]
fn clean_output_directory_respects_keep_patterns() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("pkg");
    std::fs::create_dir_all(&out).unwrap();
    std::fs::write(out.join("__init__.py"), "init").unwrap();
    std::fs::write(out.join("stale.py"), "old").unwrap();

    let removed = clean_output_directory(&out, DEFAULT_KEEP_PATTERNS, false).unwrap();
    assert_eq!(removed.len(), 1);
    assert!(out.join("__init__.py").exists());
    assert!(!out.join("stale.py").exists());
}

#[test]
fn clean_missing_directory_is_a_no_op() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("never");
    let removed = clean_output_directory(&missing, DEFAULT_KEEP_PATTERNS, false).unwrap();
    assert!(removed.is_empty());
}
