//! Find every definition of a named function across the project.

use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::{extract_declarations, FunctionRecord};
use crate::error::ScoutError;
use crate::project::python_files;

use super::{parse_or_skip, relative_display};

/// All definitions of one function name across a project, sorted by path
/// and then declaration order. Methods and free functions both match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureReport {
    pub function: String,
    pub matches: Vec<FunctionRecord>,
}

pub(crate) fn find_signatures(root: &Path, function: &str) -> Result<SignatureReport, ScoutError> {
    let paths = python_files(root)?;

    let mut per_file: Vec<(String, Vec<FunctionRecord>)> = paths
        .par_iter()
        .filter_map(|path| {
            let src = parse_or_skip(path)?;
            let rel = relative_display(root, path);
            let hits: Vec<FunctionRecord> = extract_declarations(&src)
                .functions
                .into_iter()
                .filter(|f| f.name == function)
                .map(|mut f| {
                    f.file = rel.clone();
                    f
                })
                .collect();
            if hits.is_empty() {
                None
            } else {
                Some((rel, hits))
            }
        })
        .collect();

    // Sort by path for deterministic ordering
    per_file.sort_by(|a, b| a.0.cmp(&b.0));
    let matches = per_file.into_iter().flat_map(|(_, hits)| hits).collect();

    Ok(SignatureReport {
        function: function.to_string(),
        matches,
    })
}
