//! Analysis pipeline: parse source, build the import symbol table, detect
//! boundaries, construct the dependency graph, attach semantic purpose.

pub mod boundaries;
pub mod dependencies;
pub mod imports;
pub mod names;
pub mod semantics;

pub use boundaries::BoundaryDetector;
pub use names::NameExtraction;
pub use semantics::SemanticAnalyzer;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::config::{BoundaryPatterns, PurposeIndicators};
use crate::core::types::{AnalysisResult, FileInfo};
use crate::parsing::{self, SourceUnit};

/// Fatal conditions that abort an analysis run. Per-fragment parse failures
/// are not represented here; they degrade the affected module and the run
/// continues.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("source file not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("source file is not parseable as Python: {0}")]
    Unparseable(PathBuf),
    #[error("failed to load Python grammar: {0}")]
    Grammar(String),
    #[error("invalid detection table: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Analyzer for a single source file, holding the detection tables for the
/// run. Tables are built once and injected into the stages that use them.
#[derive(Debug)]
pub struct CodeAnalyzer {
    source_path: PathBuf,
    source_code: String,
    patterns: BoundaryPatterns,
    indicators: PurposeIndicators,
}

impl CodeAnalyzer {
    pub fn new(source_path: &Path) -> Result<Self, AnalyzeError> {
        let patterns = BoundaryPatterns::standard()?;
        Self::with_tables(source_path, patterns, PurposeIndicators::standard())
    }

    pub fn with_tables(
        source_path: &Path,
        patterns: BoundaryPatterns,
        indicators: PurposeIndicators,
    ) -> Result<Self, AnalyzeError> {
        if !source_path.exists() {
            return Err(AnalyzeError::SourceNotFound(source_path.to_path_buf()));
        }
        let source_code = fs::read_to_string(source_path).map_err(|source| AnalyzeError::Read {
            path: source_path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            source_path: source_path.to_path_buf(),
            source_code,
            patterns,
            indicators,
        })
    }

    /// Run the full pipeline and assemble the unified result.
    pub fn analyze(&self) -> Result<AnalysisResult, AnalyzeError> {
        let unit = self.load_source_unit()?;

        let symbols = imports::analyze_imports(&unit);

        let detector = BoundaryDetector::new(&self.patterns)?;
        let mut modules = detector.detect(&unit);

        let dependencies = dependencies::build_dependency_graph(&modules);

        let semantic = SemanticAnalyzer::new(&self.indicators)?;
        semantic.annotate(&mut modules);

        Ok(AnalysisResult {
            modules,
            dependencies,
            symbols,
            file_info: self.file_info(),
        })
    }

    /// The whole file must parse; a malformed input aborts the run with no
    /// partial result.
    fn load_source_unit(&self) -> Result<SourceUnit, AnalyzeError> {
        let mut parser =
            parsing::new_parser().map_err(|e| AnalyzeError::Grammar(e.to_string()))?;
        let tree = parser
            .parse(&self.source_code, None)
            .ok_or_else(|| AnalyzeError::Unparseable(self.source_path.clone()))?;
        if tree.root_node().has_error() {
            return Err(AnalyzeError::Unparseable(self.source_path.clone()));
        }
        Ok(SourceUnit::new(self.source_code.clone(), tree))
    }

    fn file_info(&self) -> FileInfo {
        let size = fs::metadata(&self.source_path).map(|m| m.len()).unwrap_or(0);
        FileInfo {
            path: self.source_path.to_string_lossy().to_string(),
            size,
            name: self
                .source_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            stem: self
                .source_path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Analyze a Python source file for structural insights.
pub fn analyze_code(source_path: &Path) -> Result<AnalysisResult, AnalyzeError> {
    CodeAnalyzer::new(source_path)?.analyze()
}
