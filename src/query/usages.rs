//! Find every call to a named function across the project.

use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::{find_calls, CallSite};
use crate::error::ScoutError;
use crate::project::python_files;

use super::{parse_or_skip, relative_display};

/// Calls to one function within one file, in line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileUsages {
    pub file: String,
    pub calls: Vec<CallSite>,
}

/// All calls to one function across a project. Files without matches are
/// omitted; an empty `files` list is the no-results outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageReport {
    pub function: String,
    pub total: usize,
    pub files: Vec<FileUsages>,
}

pub(crate) fn find_usages(root: &Path, function: &str) -> Result<UsageReport, ScoutError> {
    let paths = python_files(root)?;

    let mut files: Vec<FileUsages> = paths
        .par_iter()
        .filter_map(|path| {
            let src = parse_or_skip(path)?;
            let calls = find_calls(&src, function);
            if calls.is_empty() {
                return None;
            }
            Some(FileUsages {
                file: relative_display(root, path),
                calls,
            })
        })
        .collect();

    // Sort by path for deterministic ordering
    files.sort_by(|a, b| a.file.cmp(&b.file));
    let total = files.iter().map(|f| f.calls.len()).sum();

    Ok(UsageReport {
        function: function.to_string(),
        total,
        files,
    })
}
