//! Python syntax tree loading and shared tree helpers.
//!
//! Every later stage works from one [`SourceUnit`]: the raw text, the derived
//! line array, and the parsed tree. Fragment parsing is also routed through
//! here so degradation on malformed slices is handled in one place.

use tree_sitter::{Node as TSNode, Parser, Tree};

/// Build a parser for the Python grammar.
pub fn new_parser() -> Result<Parser, tree_sitter::LanguageError> {
    let mut parser = Parser::new();
    parser.set_language(tree_sitter_python::language())?;
    Ok(parser)
}

/// Parse a code fragment, tolerating failure. Returns `None` when the parser
/// cannot be initialized or produces no tree at all; a tree with error nodes
/// is still returned so callers can decide how far to trust it.
pub fn parse_fragment(source: &str) -> Option<Tree> {
    let mut parser = new_parser().ok()?;
    parser.parse(source, None)
}

/// Parse a fragment and keep the tree only when it parsed cleanly.
pub fn parse_fragment_clean(source: &str) -> Option<Tree> {
    parse_fragment(source).filter(|tree| !tree.root_node().has_error())
}

/// The full input to one analysis run. Immutable once loaded.
#[derive(Debug)]
pub struct SourceUnit {
    pub text: String,
    pub lines: Vec<String>,
    pub tree: Tree,
}

impl SourceUnit {
    pub fn new(text: String, tree: Tree) -> Self {
        let lines = text.split('\n').map(str::to_string).collect();
        Self { text, lines, tree }
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }
}

pub fn extract_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.byte_range()]).unwrap_or("")
}

pub fn find_child_by_kind<'a>(node: &'a TSNode, kind: &str) -> Option<TSNode<'a>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Unwrap `decorated_definition` nodes down to the definition they wrap.
pub fn unwrap_decorated<'a>(node: TSNode<'a>) -> TSNode<'a> {
    if node.kind() == "decorated_definition" {
        if let Some(definition) = node.child_by_field_name("definition") {
            return definition;
        }
    }
    node
}

/// Leading docstring of a function or class definition: the first statement
/// of its body when that statement is a triple-quoted string.
pub fn extract_docstring(definition: &TSNode, source: &[u8]) -> Option<String> {
    let body = definition.child_by_field_name("body")?;
    let first = body.named_child(0)?;
    if first.kind() != "expression_statement" {
        return None;
    }
    let string_node = first.child(0)?;
    if string_node.kind() != "string" {
        return None;
    }
    let text = extract_text(&string_node, source);
    if text.starts_with("\"\"\"") || text.starts_with("'''") {
        Some(
            text.trim_matches(|c| c == '"' || c == '\'')
                .trim()
                .to_string(),
        )
    } else {
        None
    }
}

/// True when `node` is the child filling the named field of `parent`.
pub fn is_field(parent: &TSNode, field: &str, node: &TSNode) -> bool {
    parent
        .child_by_field_name(field)
        .map(|child| child.id() == node.id())
        .unwrap_or(false)
}
