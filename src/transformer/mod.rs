//! Package generation: turns an analysis result into the file set of a
//! modular package, with one file per module plus `__init__.py` and README.

pub mod filesystem;
pub mod imports;

use std::collections::BTreeMap;
use std::path::Path;

use crate::core::config::module_emoji;
use crate::core::types::{AnalysisResult, GeneratedFile, ModuleInfo, TransformationResult};
use crate::core::utils::{derive_output_dir, derive_package_name, to_title_words};
use crate::parsing;

/// Transform analysis results into a package layout, deriving the output
/// directory and package name from the source path when not supplied.
pub fn transform_code(
    analysis: &AnalysisResult,
    output_dir: Option<&Path>,
    package_name: Option<&str>,
) -> TransformationResult {
    let source_path = Path::new(&analysis.file_info.path);
    let package_name = package_name
        .map(|n| n.to_string())
        .unwrap_or_else(|| derive_package_name(source_path));
    let output_path = output_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| derive_output_dir(source_path, Some(&package_name)));

    generate_package_structure(analysis, &output_path, &package_name)
}

/// Generate the complete package structure from analysis results.
pub fn generate_package_structure(
    analysis: &AnalysisResult,
    output_path: &Path,
    package_name: &str,
) -> TransformationResult {
    let mut files = Vec::with_capacity(analysis.modules.len() + 2);
    let mut module_map = BTreeMap::new();

    // Sibling imports per module, with any dependency cycles already broken.
    let module_imports = imports::reorganize_imports(&analysis.modules, &analysis.dependencies);

    files.push(GeneratedFile {
        path: output_path.join("__init__.py"),
        content: generate_package_init(analysis, package_name),
    });
    files.push(GeneratedFile {
        path: output_path.join("README.md"),
        content: generate_readme(analysis, package_name),
    });

    for module in &analysis.modules {
        let file_name = format!("{}.py", module.name);
        let siblings = module_imports
            .get(&module.name)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        files.push(GeneratedFile {
            path: output_path.join(&file_name),
            content: generate_module_file(module, package_name, siblings),
        });
        module_map.insert(module.name.clone(), file_name);
    }

    TransformationResult {
        output_path: output_path.to_path_buf(),
        files,
        package_name: package_name.to_string(),
        module_map,
    }
}

/// Package `__init__.py`: header docstring plus a re-export line for every
/// module that exposes at least one function or class.
fn generate_package_init(analysis: &AnalysisResult, package_name: &str) -> String {
    let source_name = &analysis.file_info.name;
    let exports: Vec<String> = analysis
        .modules
        .iter()
        .filter(|m| m.has_exports())
        .map(|m| format!("from .{} import *", m.name))
        .collect();

    format!(
        "\"\"\"\n{package_name} - Modular version of {source_name}\n\nGenerated from {source_name}\n\"\"\"\n\n{}\n",
        exports.join("\n")
    )
}

fn generate_readme(analysis: &AnalysisResult, package_name: &str) -> String {
    let source_name = &analysis.file_info.name;

    let mut module_list = String::new();
    for module in &analysis.modules {
        module_list.push_str(&format!("- **{}**: {}\n", module.name, module.purpose));
    }

    let example_import = analysis
        .modules
        .iter()
        .find(|m| m.has_exports())
        .or_else(|| analysis.modules.first())
        .map(|m| m.name.clone())
        .unwrap_or_else(|| "module".to_string());

    format!(
        "# {package_name}\n\nModular version of `{source_name}`.\n\n## Modules\n\n{module_list}\n## Usage\n\n```python\nfrom {package_name} import {example_import}\n```\n\nGenerated from `{source_name}`.\n"
    )
}

/// One generated module file: the slice content with its original leading
/// docstring removed, a standardized header docstring prepended, and imports
/// for the sibling modules it depends on.
fn generate_module_file(module: &ModuleInfo, package_name: &str, siblings: &[String]) -> String {
    let emoji = module_emoji(&module.name, &module.purpose);
    let title = to_title_words(&module.name);

    // The docstring's first line already appears as the purpose; carry only
    // the remainder into the header body.
    let description = module
        .docstring
        .as_ref()
        .map(|d| d.lines().skip(1).collect::<Vec<_>>().join("\n").trim().to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format!("Functionality extracted from {package_name}."));

    let header = format!(
        "\"\"\"\n{title} - {purpose} {emoji}\n\n{description}\n\"\"\"",
        purpose = module.purpose
    );

    let mut imports = String::new();
    for sibling in siblings {
        imports.push_str(&format!("from .{sibling} import *\n"));
    }
    if !imports.is_empty() {
        imports.push('\n');
    }

    let content = remove_leading_docstring(&module.content);
    format!("{header}\n\n{imports}{}\n", content.trim_start_matches('\n'))
}

/// Drop a module-level docstring when the slice starts with one. A slice
/// that fails to parse is passed through untouched.
fn remove_leading_docstring(content: &str) -> String {
    let Some(tree) = parsing::parse_fragment_clean(content) else {
        return content.to_string();
    };
    let root = tree.root_node();
    let Some(first) = root.named_child(0) else {
        return content.to_string();
    };
    if first.kind() != "expression_statement" {
        return content.to_string();
    }
    let is_docstring = first
        .child(0)
        .map(|node| node.kind() == "string")
        .unwrap_or(false);
    if !is_docstring {
        return content.to_string();
    }

    let end_row = first.end_position().row;
    content
        .split('\n')
        .skip(end_row + 1)
        .collect::<Vec<_>>()
        .join("\n")
}
