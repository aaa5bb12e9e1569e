use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::graph::DependencyGraph;

/// Options controlling one refactoring run.
#[derive(Debug, Clone, Default)]
pub struct RefactorOptions {
    pub source_path: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub package_name: Option<String>,
    pub analyze_only: bool,
    pub dry_run: bool,
    pub verbose: bool,
}

/// Metadata about the analyzed source file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileInfo {
    pub path: String,
    pub size: u64,
    pub name: String,
    pub stem: String,
}

/// One top-level function found inside a module slice.
///
/// `line` is 1-based and relative to the slice, matching parser row numbering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionInfo {
    pub name: String,
    pub line: usize,
    pub args: Vec<String>,
    pub docstring: String,
}

/// One top-level class found inside a module slice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassInfo {
    pub name: String,
    pub line: usize,
    pub methods: Vec<String>,
    pub docstring: String,
}

/// One heuristically detected logical code region, destined to become its
/// own output file.
///
/// `start_line` and `end_line` are 0-based inclusive indices into the source
/// line array. Ranges across one analysis run never overlap. The candidate is
/// created by boundary detection and enriched in place by semantic analysis;
/// it is never mutated after the analysis phase completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub content: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub docstring: Option<String>,
    #[serde(default)]
    pub functions: Vec<FunctionInfo>,
    #[serde(default)]
    pub classes: Vec<ClassInfo>,
}

impl ModuleInfo {
    pub fn new(name: String, start_line: usize, end_line: usize, content: String) -> Self {
        Self {
            name,
            start_line,
            end_line,
            content,
            purpose: String::new(),
            docstring: None,
            functions: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// A module is exported from the generated package only when it exposes
    /// at least one function or class.
    pub fn has_exports(&self) -> bool {
        !self.functions.is_empty() || !self.classes.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImportKind {
    Import,
    ImportFrom,
}

/// One imported name from the original file, keyed in the symbol table by its
/// effective local name (alias when present, else the imported name).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolEntry {
    pub kind: ImportKind,
    pub source: String,
    /// Imported name, present for `from module import name` entries only.
    pub name: Option<String>,
    pub alias: Option<String>,
    pub line: usize,
}

/// Unified result of one analysis run, consumed by the transformer and the
/// reporter. Downstream consumers treat this schema as contract.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub modules: Vec<ModuleInfo>,
    pub dependencies: DependencyGraph,
    pub symbols: BTreeMap<String, SymbolEntry>,
    pub file_info: FileInfo,
}

/// One file the transformer intends to write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Results of package generation, ready for the filesystem writer.
#[derive(Debug, Clone)]
pub struct TransformationResult {
    pub output_path: PathBuf,
    pub files: Vec<GeneratedFile>,
    pub package_name: String,
    pub module_map: BTreeMap<String, String>,
}
