//! Semantic purpose extraction: one human-readable line per candidate module,
//! plus top-level function and class signatures.

use regex::Regex;
use tree_sitter::Node as TSNode;

use crate::core::config::PurposeIndicators;
use crate::core::types::{ClassInfo, FunctionInfo, ModuleInfo};
use crate::core::utils::{capitalize, to_title_words};
use crate::parsing::{self, extract_docstring, extract_text, unwrap_decorated};

pub struct SemanticAnalyzer<'a> {
    indicators: &'a PurposeIndicators,
    docstring: Regex,
    comment: Regex,
}

impl<'a> SemanticAnalyzer<'a> {
    pub fn new(indicators: &'a PurposeIndicators) -> Result<Self, regex::Error> {
        Ok(Self {
            indicators,
            docstring: Regex::new(r#"(?s)"""(.*?)""""#)?,
            comment: Regex::new(r"# ([A-Za-z].*)")?,
        })
    }

    /// Enrich every module in place with purpose, docstring, and signatures.
    /// A module slice that fails to parse degrades to empty signature lists;
    /// it never aborts the run.
    pub fn annotate(&self, modules: &mut [ModuleInfo]) {
        for module in modules.iter_mut() {
            self.annotate_module(module);
        }
    }

    fn annotate_module(&self, module: &mut ModuleInfo) {
        if let Some(tree) = parsing::parse_fragment_clean(&module.content) {
            let source = module.content.as_bytes();
            let root = tree.root_node();
            module.functions = extract_functions(&root, source);
            module.classes = extract_classes(&root, source);
        }

        if let Some(captures) = self.docstring.captures(&module.content) {
            let docstring = captures[1].trim().to_string();
            module.purpose = docstring
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            module.docstring = Some(docstring);
        } else if let Some(captures) = self.comment.captures(&module.content) {
            module.purpose = captures[1].trim().to_string();
        } else {
            module.purpose = self.infer_purpose(&module.content, &module.name);
        }
    }

    /// Naming/content heuristics for modules without documentation.
    fn infer_purpose(&self, content: &str, name: &str) -> String {
        if let Some(category) = self.indicators.category_for(name) {
            return format!(
                "{} module for {}",
                capitalize(category),
                name.replace('_', " ")
            );
        }

        if content.contains("class") && content.contains("def __init__") {
            return format!("Defines the {} entity", to_title_words(name));
        }
        if content.matches("def ").count() > 3 {
            return format!("Provides {} functionality", name.replace('_', " "));
        }
        format!("Handles {} operations", name.replace('_', " "))
    }
}

/// Ordered top-level function signatures of a parsed slice.
fn extract_functions(root: &TSNode, source: &[u8]) -> Vec<FunctionInfo> {
    let mut functions = Vec::new();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        let definition = unwrap_decorated(child);
        if definition.kind() != "function_definition" {
            continue;
        }
        if let Some(name) = definition.child_by_field_name("name") {
            functions.push(FunctionInfo {
                name: extract_text(&name, source).to_string(),
                line: definition.start_position().row + 1,
                args: parameter_names(&definition, source),
                docstring: extract_docstring(&definition, source).unwrap_or_default(),
            });
        }
    }
    functions
}

/// Ordered top-level class signatures of a parsed slice.
fn extract_classes(root: &TSNode, source: &[u8]) -> Vec<ClassInfo> {
    let mut classes = Vec::new();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        let definition = unwrap_decorated(child);
        if definition.kind() != "class_definition" {
            continue;
        }
        if let Some(name) = definition.child_by_field_name("name") {
            classes.push(ClassInfo {
                name: extract_text(&name, source).to_string(),
                line: definition.start_position().row + 1,
                methods: method_names(&definition, source),
                docstring: extract_docstring(&definition, source).unwrap_or_default(),
            });
        }
    }
    classes
}

fn parameter_names(definition: &TSNode, source: &[u8]) -> Vec<String> {
    let Some(parameters) = definition.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let mut names = Vec::new();
    let mut cursor = parameters.walk();
    for param in parameters.named_children(&mut cursor) {
        match param.kind() {
            "identifier" => names.push(extract_text(&param, source).to_string()),
            "typed_parameter" => {
                if let Some(inner) = parsing::find_child_by_kind(&param, "identifier") {
                    names.push(extract_text(&inner, source).to_string());
                }
            }
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = param.child_by_field_name("name") {
                    names.push(extract_text(&name, source).to_string());
                }
            }
            // *args / **kwargs are intentionally excluded
            _ => {}
        }
    }
    names
}

fn method_names(class_definition: &TSNode, source: &[u8]) -> Vec<String> {
    let Some(body) = class_definition.child_by_field_name("body") else {
        return Vec::new();
    };
    let mut methods = Vec::new();
    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        let definition = unwrap_decorated(child);
        if definition.kind() == "function_definition" {
            if let Some(name) = definition.child_by_field_name("name") {
                methods.push(extract_text(&name, source).to_string());
            }
        }
    }
    methods
}
