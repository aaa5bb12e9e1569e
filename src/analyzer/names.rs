//! Definition and reference set extraction for code fragments.
//!
//! `defined_names` collects the identifiers a fragment binds; `referenced_names`
//! collects the identifiers it reads or calls. The intersection of one module's
//! references with another's definitions drives dependency edges. This is a
//! heuristic over syntax, not data-flow analysis: tuple unpacking, subscript
//! and attribute targets are not tracked as definitions.

use regex::Regex;
use std::collections::BTreeSet;
use tree_sitter::Node as TSNode;

use crate::parsing::{self, extract_text, is_field};

/// Name set extracted from a fragment, carrying whether the fragment parsed.
///
/// `Degraded` marks a fragment that failed to parse in isolation, where the
/// set is a best-effort fallback (a raw identifier scan for references, empty
/// for definitions). Callers can distinguish "no names found" from "parse
/// failed" for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameExtraction {
    Parsed(BTreeSet<String>),
    Degraded(BTreeSet<String>),
}

impl NameExtraction {
    pub fn names(&self) -> &BTreeSet<String> {
        match self {
            NameExtraction::Parsed(names) | NameExtraction::Degraded(names) => names,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, NameExtraction::Degraded(_))
    }
}

/// Identifiers used in a load context: bare variable reads, call targets, and
/// the root object of attribute access (`obj` in `obj.attr`, never `attr`).
pub fn referenced_names(fragment: &str) -> NameExtraction {
    match parsing::parse_fragment_clean(fragment) {
        Some(tree) => {
            let mut names = BTreeSet::new();
            collect_references(&tree.root_node(), fragment.as_bytes(), &mut names);
            NameExtraction::Parsed(names)
        }
        None => NameExtraction::Degraded(identifier_scan(fragment)),
    }
}

/// Identifiers bound by a fragment: function and class definition names plus
/// simple (optionally annotated) assignment targets.
pub fn defined_names(fragment: &str) -> NameExtraction {
    match parsing::parse_fragment_clean(fragment) {
        Some(tree) => {
            let mut names = BTreeSet::new();
            collect_definitions(&tree.root_node(), fragment.as_bytes(), &mut names);
            NameExtraction::Parsed(names)
        }
        None => NameExtraction::Degraded(BTreeSet::new()),
    }
}

fn collect_references(node: &TSNode, source: &[u8], names: &mut BTreeSet<String>) {
    if node.kind() == "identifier" && is_load_context(node) {
        let text = extract_text(node, source);
        if !text.is_empty() {
            names.insert(text.to_string());
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_references(&child, source, names);
    }
}

/// Approximate Python's load/store distinction from the identifier's parent.
fn is_load_context(node: &TSNode) -> bool {
    let Some(parent) = node.parent() else {
        return true;
    };
    match parent.kind() {
        // Only the root object of `obj.attr` counts as a reference
        "attribute" => is_field(&parent, "object", node),
        // Binding positions
        "function_definition" | "class_definition" => !is_field(&parent, "name", node),
        "assignment" | "augmented_assignment" | "for_statement" | "for_in_clause" => {
            !is_field(&parent, "left", node)
        }
        "parameters" | "lambda_parameters" | "typed_parameter" | "list_splat_pattern"
        | "dictionary_splat_pattern" | "pattern_list" | "tuple_pattern" | "list_pattern"
        | "as_pattern_target" | "global_statement" | "nonlocal_statement" => false,
        "default_parameter" | "typed_default_parameter" => is_field(&parent, "value", node),
        "keyword_argument" => is_field(&parent, "value", node),
        // Import machinery binds names rather than reading them
        "import_statement" | "import_from_statement" | "dotted_name" | "aliased_import"
        | "relative_import" | "wildcard_import" => false,
        _ => true,
    }
}

fn collect_definitions(node: &TSNode, source: &[u8], names: &mut BTreeSet<String>) {
    match node.kind() {
        "function_definition" | "class_definition" => {
            if let Some(name) = node.child_by_field_name("name") {
                names.insert(extract_text(&name, source).to_string());
            }
        }
        // Covers annotated assignments too; the grammar keeps them as
        // `assignment` with a `type` field.
        "assignment" => {
            if let Some(left) = node.child_by_field_name("left") {
                if left.kind() == "identifier" {
                    names.insert(extract_text(&left, source).to_string());
                }
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_definitions(&child, source, names);
    }
}

/// Raw identifier scan used when a fragment cannot be parsed.
fn identifier_scan(fragment: &str) -> BTreeSet<String> {
    match Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*\b") {
        Ok(pattern) => pattern
            .find_iter(fragment)
            .map(|m| m.as_str().to_string())
            .collect(),
        Err(_) => BTreeSet::new(),
    }
}
