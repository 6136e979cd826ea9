//! Error types for project queries.

use std::path::PathBuf;

use thiserror::Error;

use crate::analysis::ParseFailure;

/// Errors surfaced at the query boundary.
///
/// Per-file parse failures inside project-wide queries are not errors:
/// the file is skipped and the query continues. Only conditions that
/// invalidate a query as a whole are represented here. An empty result
/// set is a successful query, never an error.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// The project root does not exist or cannot be reached.
    #[error("project root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The target of a single-file query does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The target of a single-file query exists but cannot be analyzed.
    #[error("cannot analyze {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseFailure,
    },

    /// File enumeration failed at the project root.
    #[error("failed to read project tree: {0}")]
    Walk(#[from] walkdir::Error),
}
