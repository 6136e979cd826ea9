//! Describe the imports and declarations of a single file.

use std::path::Path;

use serde::Serialize;

use crate::analysis::{
    extract_file_facts, parse_source_file, ClassRecord, FunctionRecord, Import,
};
use crate::error::ScoutError;

use super::relative_display;

/// The imports, classes, and non-method functions of one file. Methods
/// appear only through their class record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureReport {
    pub file: String,
    pub imports: Vec<Import>,
    pub classes: Vec<ClassRecord>,
    pub functions: Vec<FunctionRecord>,
}

pub(crate) fn file_structure(root: &Path, file: &Path) -> Result<StructureReport, ScoutError> {
    let full = if file.is_absolute() {
        file.to_path_buf()
    } else {
        root.join(file)
    };
    if !full.exists() {
        // Report the path as the caller gave it.
        return Err(ScoutError::FileNotFound(file.to_path_buf()));
    }

    let src = parse_source_file(&full).map_err(|source| ScoutError::Parse {
        path: full.clone(),
        source,
    })?;

    let display = relative_display(root, &full);
    let mut facts = extract_file_facts(&src);
    facts.relocate(&display);

    let functions: Vec<FunctionRecord> = facts.free_functions().cloned().collect();

    Ok(StructureReport {
        file: display,
        imports: facts.imports,
        classes: facts.classes,
        functions,
    })
}
