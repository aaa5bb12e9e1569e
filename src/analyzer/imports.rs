//! Import analysis: builds the symbol table of imported names.

use std::collections::BTreeMap;
use tree_sitter::Node as TSNode;

use crate::core::types::{ImportKind, SymbolEntry};
use crate::parsing::{extract_text, SourceUnit};

/// Walk all import statements and record kind, source, alias, and line,
/// keyed by the effective local name. A later import of the same local name
/// overwrites the earlier one.
pub fn analyze_imports(unit: &SourceUnit) -> BTreeMap<String, SymbolEntry> {
    let mut symbols = BTreeMap::new();
    collect(&unit.tree.root_node(), unit.text.as_bytes(), &mut symbols);
    symbols
}

fn collect(node: &TSNode, source: &[u8], symbols: &mut BTreeMap<String, SymbolEntry>) {
    match node.kind() {
        "import_statement" => process_import(node, source, symbols),
        "import_from_statement" => process_import_from(node, source, symbols),
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(&child, source, symbols);
    }
}

/// `import module` and `import module as alias`.
fn process_import(node: &TSNode, source: &[u8], symbols: &mut BTreeMap<String, SymbolEntry>) {
    let line = node.start_position().row + 1;
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "dotted_name" => {
                let module = extract_text(&child, source).to_string();
                symbols.insert(
                    module.clone(),
                    SymbolEntry {
                        kind: ImportKind::Import,
                        source: module,
                        name: None,
                        alias: None,
                        line,
                    },
                );
            }
            "aliased_import" => {
                if let Some((module, alias)) = split_aliased(&child, source) {
                    symbols.insert(
                        alias.clone(),
                        SymbolEntry {
                            kind: ImportKind::Import,
                            source: module,
                            name: None,
                            alias: Some(alias),
                            line,
                        },
                    );
                }
            }
            _ => {}
        }
    }
}

/// `from module import name [as alias], ...` including relative modules and
/// wildcard imports.
fn process_import_from(node: &TSNode, source: &[u8], symbols: &mut BTreeMap<String, SymbolEntry>) {
    let line = node.start_position().row + 1;
    let Some(module_node) = node.child_by_field_name("module_name") else {
        return;
    };
    let module = extract_text(&module_node, source).to_string();

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.id() == module_node.id() {
            continue;
        }
        match child.kind() {
            "dotted_name" => {
                let name = extract_text(&child, source).to_string();
                symbols.insert(
                    name.clone(),
                    SymbolEntry {
                        kind: ImportKind::ImportFrom,
                        source: module.clone(),
                        name: Some(name),
                        alias: None,
                        line,
                    },
                );
            }
            "aliased_import" => {
                if let Some((name, alias)) = split_aliased(&child, source) {
                    symbols.insert(
                        alias.clone(),
                        SymbolEntry {
                            kind: ImportKind::ImportFrom,
                            source: module.clone(),
                            name: Some(name),
                            alias: Some(alias),
                            line,
                        },
                    );
                }
            }
            "wildcard_import" => {
                symbols.insert(
                    "*".to_string(),
                    SymbolEntry {
                        kind: ImportKind::ImportFrom,
                        source: module.clone(),
                        name: Some("*".to_string()),
                        alias: None,
                        line,
                    },
                );
            }
            _ => {}
        }
    }
}

fn split_aliased(node: &TSNode, source: &[u8]) -> Option<(String, String)> {
    let name = node.child_by_field_name("name")?;
    let alias = node.child_by_field_name("alias")?;
    Some((
        extract_text(&name, source).to_string(),
        extract_text(&alias, source).to_string(),
    ))
}
