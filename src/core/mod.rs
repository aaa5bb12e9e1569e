pub mod config;
pub mod graph;
pub mod types;
pub mod utils;

pub use config::{BoundaryPatterns, PurposeIndicators};
pub use graph::DependencyGraph;
pub use types::{
    AnalysisResult, ClassInfo, FileInfo, FunctionInfo, GeneratedFile, ImportKind, ModuleInfo,
    RefactorOptions, SymbolEntry, TransformationResult,
};
