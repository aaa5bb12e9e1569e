//! Rendering of analysis results: a human-readable text report and a JSON
//! document for programmatic consumption. Pure formatting, no decisions.

use anyhow::Result;
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::core::types::{AnalysisResult, ImportKind, SymbolEntry};

/// Print the text report to stdout.
pub fn print_analysis_report(results: &AnalysisResult) {
    print!("{}", render_analysis_report(results));
}

/// Render the text report: module list with purpose, 1-based line ranges,
/// functions and classes, then dependency edges, then grouped imports.
pub fn render_analysis_report(results: &AnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Analysis Report for {}", results.file_info.path);
    let _ = writeln!(out, "Found {} potential modules:", results.modules.len());

    for (i, module) in results.modules.iter().enumerate() {
        let _ = writeln!(out, "\n{}. {}", i + 1, module.name);
        let _ = writeln!(out, "   Purpose: {}", module.purpose);
        let _ = writeln!(
            out,
            "   Lines: {}-{}",
            module.start_line + 1,
            module.end_line + 1
        );
        if !module.functions.is_empty() {
            let names: Vec<&str> = module.functions.iter().map(|f| f.name.as_str()).collect();
            let _ = writeln!(out, "   Functions: {}", names.join(", "));
        }
        if !module.classes.is_empty() {
            let names: Vec<&str> = module.classes.iter().map(|c| c.name.as_str()).collect();
            let _ = writeln!(out, "   Classes: {}", names.join(", "));
        }
    }

    if results.dependencies.edge_count() > 0 {
        let _ = writeln!(out, "\nDependency Graph:");
        for name in results.dependencies.module_names() {
            let deps = results.dependencies.dependencies_of(&name);
            if deps.is_empty() {
                let _ = writeln!(out, "   {name} (no dependencies)");
            } else {
                let _ = writeln!(out, "   {name} -> {}", deps.join(", "));
            }
        }
    }

    if !results.symbols.is_empty() {
        let _ = writeln!(out, "\nImports:");
        for (source, names) in group_imports(&results.symbols) {
            if source.is_empty() {
                let _ = writeln!(out, "   Direct imports: {}", names.join(", "));
            } else {
                let _ = writeln!(out, "   From {source}: {}", names.join(", "));
            }
        }
    }

    out
}

/// Group from-import names by their source module, each group sorted.
/// Plain `import` statements collapse into a single direct group, keyed by
/// the empty string so it sorts first.
fn group_imports(symbols: &BTreeMap<String, SymbolEntry>) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (local_name, entry) in symbols {
        let key = match entry.kind {
            ImportKind::Import => String::new(),
            ImportKind::ImportFrom => entry.source.clone(),
        };
        groups.entry(key).or_default().push(local_name.clone());
    }
    for names in groups.values_mut() {
        names.sort();
    }
    groups
}

/// Render the analysis as a JSON document: modules, dependency edges,
/// symbols, and file metadata.
pub fn render_json_report(results: &AnalysisResult) -> Result<String> {
    let edges: Vec<_> = results
        .dependencies
        .edges()
        .into_iter()
        .map(|(from, to)| json!({ "from": from, "to": to }))
        .collect();

    let document = json!({
        "file_info": results.file_info,
        "modules": results.modules,
        "dependencies": edges,
        "symbols": results.symbols,
    });

    Ok(serde_json::to_string_pretty(&document)?)
}
