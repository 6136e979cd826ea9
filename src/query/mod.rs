//! Cross-file queries over a project tree.
//!
//! Each query enumerates the project's Python files, analyzes them in
//! parallel, and aggregates per-file results in path order, so the
//! parallelism is never observable in the output. Queries are stateless:
//! nothing is cached between calls, and results always reflect the files
//! as they are on disk at query time.

mod overview;
mod signatures;
mod structure;
mod usages;

pub use overview::{FileSummary, OverviewReport};
pub use signatures::SignatureReport;
pub use structure::StructureReport;
pub use usages::{FileUsages, UsageReport};

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::analysis::{parse_source_file, ParsedSource};
use crate::error::ScoutError;

/// Entry point for project-wide queries.
#[derive(Debug, Clone)]
pub struct ProjectAnalyzer {
    root: PathBuf,
}

impl ProjectAnalyzer {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Find every call to `function` across the project.
    pub fn find_usages(&self, function: &str) -> Result<UsageReport, ScoutError> {
        usages::find_usages(&self.root, function)
    }

    /// Find every definition of `function` across the project.
    pub fn find_signatures(&self, function: &str) -> Result<SignatureReport, ScoutError> {
        signatures::find_signatures(&self.root, function)
    }

    /// Describe the imports, classes, and functions of one file.
    pub fn file_structure(&self, file: &Path) -> Result<StructureReport, ScoutError> {
        structure::file_structure(&self.root, file)
    }

    /// Summarize every Python file in the project.
    pub fn project_overview(&self) -> Result<OverviewReport, ScoutError> {
        overview::project_overview(&self.root)
    }
}

/// Parse a file for an aggregate query. Failures are logged and the file
/// skipped, so one broken file cannot hide the rest of the project.
pub(crate) fn parse_or_skip(path: &Path) -> Option<ParsedSource> {
    match parse_source_file(path) {
        Ok(src) => Some(src),
        Err(err) => {
            debug!("skipping {}: {}", path.display(), err);
            None
        }
    }
}

/// Root-relative display path used in every report.
pub(crate) fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
