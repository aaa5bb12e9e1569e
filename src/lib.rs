//! # MODSPLIT
//!
//! Heuristic splitter that reorganizes a monolithic Python file into a
//! modular package.
//!
//! MODSPLIT parses one source file, detects natural module boundaries from
//! comment dividers and top-level definitions, infers each candidate module's
//! purpose, maps the dependencies between candidates, and emits a package:
//! one file per module, an `__init__.py` re-exporting public symbols, and a
//! generated README.
//!
//! ## Pipeline
//!
//! - **Analyzer**: boundary detection, name extraction, dependency graph,
//!   semantic purpose
//! - **Transformer**: package generation, import reorganization, file writing
//! - **Reporter**: text and JSON renderings of the analysis
//!
//! The analysis is best-effort by design: no scope resolution, no semantic
//! guarantee that the generated package behaves identically to the input.

pub mod analyzer;
pub mod core;
pub mod parsing;
pub mod reporter;
pub mod transformer;
