//! Pyscout - static inspection engine for Python projects.
//!
//! Pyscout parses `.py` files with tree-sitter, extracts declared symbols
//! and references, and answers cross-file navigation queries: where a
//! function is called, where it is defined, what one file declares, and
//! what a whole project contains. Queries are stateless and re-read the
//! project on every call, so results always match the files on disk.
//!
//! # Architecture
//!
//! - `analysis`: per-file parsing and fact extraction (tree-sitter)
//! - `project`: Python file discovery with a fixed exclusion set
//! - `query`: cross-file aggregation behind [`ProjectAnalyzer`]
//! - `report`: deterministic text and JSON rendering
//! - `cli`: the `pyscout` command-line surface
//! - `error`: the query-boundary error type

pub mod analysis;
pub mod cli;
pub mod error;
pub mod project;
pub mod query;
pub mod report;

pub use analysis::{
    extract_declarations, extract_file_facts, extract_imports, find_calls, parse_source,
    parse_source_file, CallSite, ClassRecord, Declarations, FileFacts, FunctionRecord, Import,
    NodeKind, ParseFailure, ParsedSource,
};
pub use error::ScoutError;
pub use project::{python_files, EXCLUDED_DIRS};
pub use query::{
    FileSummary, FileUsages, OverviewReport, ProjectAnalyzer, SignatureReport, StructureReport,
    UsageReport,
};
pub use report::{render_json, render_overview, render_signatures, render_structure, render_usages};
