//! Per-file declaration counts for a whole project.

use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::extract_declarations;
use crate::error::ScoutError;
use crate::project::python_files;

use super::{parse_or_skip, relative_display};

/// Declaration counts for one file. Methods are counted separately from
/// free functions, so the three counts never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub file: String,
    pub classes: usize,
    pub functions: usize,
    pub methods: usize,
}

impl FileSummary {
    /// `2 class(es), 1 function(s)` with zero counts left out, or `empty`
    /// when there is nothing to report.
    pub fn summary_text(&self) -> String {
        let mut parts = Vec::new();
        if self.classes > 0 {
            parts.push(format!("{} class(es)", self.classes));
        }
        if self.functions > 0 {
            parts.push(format!("{} function(s)", self.functions));
        }
        if self.methods > 0 {
            parts.push(format!("{} method(s)", self.methods));
        }
        if parts.is_empty() {
            "empty".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Summary of every Python file under a project root, in path order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewReport {
    pub file_count: usize,
    pub files: Vec<FileSummary>,
}

pub(crate) fn project_overview(root: &Path) -> Result<OverviewReport, ScoutError> {
    let paths = python_files(root)?;

    let mut files: Vec<FileSummary> = paths
        .par_iter()
        .map(|path| {
            let file = relative_display(root, path);
            match parse_or_skip(path) {
                Some(src) => {
                    let decls = extract_declarations(&src);
                    let methods = decls.functions.iter().filter(|f| f.is_method).count();
                    FileSummary {
                        file,
                        classes: decls.classes.len(),
                        functions: decls.functions.len() - methods,
                        methods,
                    }
                }
                // Files that fail to parse are still listed, with no counts.
                None => FileSummary {
                    file,
                    classes: 0,
                    functions: 0,
                    methods: 0,
                },
            }
        })
        .collect();

    // Sort by path for deterministic ordering
    files.sort_by(|a, b| a.file.cmp(&b.file));
    let file_count = files.len();

    Ok(OverviewReport { file_count, files })
}
