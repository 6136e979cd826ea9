//! Single-file source analysis.
//!
//! Everything here works on one file at a time: parse it, then read facts
//! out of the tree. The query layer aggregates facts across files.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ Python File  │────▶│ ParsedSource │────▶│ FileFacts     │
//! └──────────────┘     │ (tree-sitter)│     │ (functions,   │
//!                      └──────────────┘     │  classes,     │
//!                                           │  imports)     │
//!                                           └───────────────┘
//! ```

pub mod declarations;
pub mod facts;
pub mod references;
pub mod source;

pub use declarations::{extract_declarations, Declarations};
pub use facts::{CallSite, ClassRecord, FileFacts, FunctionRecord, Import};
pub use references::{extract_imports, find_calls};
pub use source::{parse_source, parse_source_file, NodeKind, ParseFailure, ParsedSource};

/// Extract the full fact bundle for one parsed file.
pub fn extract_file_facts(src: &ParsedSource) -> FileFacts {
    let decls = extract_declarations(src);
    FileFacts {
        functions: decls.functions,
        classes: decls.classes,
        imports: extract_imports(src),
    }
}
