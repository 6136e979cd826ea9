//! Parsing of Python source files into syntax trees.
//!
//! This module is the only place that talks to tree-sitter kind strings
//! for statement-level dispatch: everything else classifies nodes through
//! [`NodeKind`] and reads text through [`ParsedSource`].

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tree_sitter::{Language, Node, Parser};

/// Why a file produced no usable syntax tree.
///
/// Project-wide queries treat every variant the same way (skip the file);
/// single-file queries surface the failure to the caller.
#[derive(Error, Debug)]
pub enum ParseFailure {
    /// The file could not be read, or is not valid UTF-8.
    #[error("cannot read file: {0}")]
    Unreadable(#[from] std::io::Error),

    /// The Python grammar could not be loaded into the parser.
    #[error("failed to load grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// The parser returned no tree at all.
    #[error("parser produced no syntax tree")]
    NoTree,

    /// The tree contains error nodes; the file is not valid Python.
    #[error("source contains syntax errors")]
    Syntax,
}

/// A parsed file: tree, source text, and origin path.
///
/// The source is kept alongside the tree so extractors can resolve node
/// text and physical lines without re-reading the file.
pub struct ParsedSource {
    /// The tree-sitter parse tree.
    pub tree: tree_sitter::Tree,
    /// The file content the tree was parsed from.
    pub source: String,
    /// Where the content came from (used for record paths and errors).
    pub path: PathBuf,
}

impl ParsedSource {
    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// Get the trimmed physical source line (1-based).
    ///
    /// Lines that cannot be retrieved yield a `<line N>` placeholder so a
    /// single odd location never fails an entire query.
    pub fn line_text(&self, line: usize) -> String {
        line.checked_sub(1)
            .and_then(|idx| self.source.lines().nth(idx))
            .map(|text| text.trim().to_string())
            .unwrap_or_else(|| format!("<line {}>", line))
    }

    /// 1-based line of a node's first character.
    pub fn line_of(&self, node: Node) -> usize {
        node.start_position().row + 1 // tree-sitter is 0-indexed
    }
}

/// The node kinds the extraction passes distinguish.
///
/// Classification is total: every tree-sitter node maps to exactly one
/// variant, and traversals match on the full set so a new variant cannot
/// be added without revisiting each walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `def` (plain or `async`).
    Function,
    /// `class`.
    Class,
    /// A decorator wrapper around a function or class definition.
    Decorated,
    /// A call expression.
    Call,
    /// `import module`.
    Import,
    /// `from module import name`.
    ImportFrom,
    /// Anything else; traversals descend through these.
    Other,
}

impl NodeKind {
    /// Classify a tree-sitter node.
    pub fn of(node: Node) -> Self {
        match node.kind() {
            "function_definition" => NodeKind::Function,
            "class_definition" => NodeKind::Class,
            "decorated_definition" => NodeKind::Decorated,
            "call" => NodeKind::Call,
            "import_statement" => NodeKind::Import,
            "import_from_statement" => NodeKind::ImportFrom,
            _ => NodeKind::Other,
        }
    }
}

/// Read and parse one Python file.
pub fn parse_source_file(path: &Path) -> Result<ParsedSource, ParseFailure> {
    let source = fs::read_to_string(path)?;
    parse_source(source, path.to_path_buf())
}

/// Parse Python source that is already in memory.
///
/// A tree containing error nodes is rejected whole: partial trees would
/// silently drop declarations, and callers expect a file to either parse
/// or be skipped.
pub fn parse_source(source: String, path: PathBuf) -> Result<ParsedSource, ParseFailure> {
    let language: Language = tree_sitter_python::LANGUAGE.into();
    let mut parser = Parser::new();
    parser.set_language(&language)?;

    let tree = parser.parse(&source, None).ok_or(ParseFailure::NoTree)?;
    if tree.root_node().has_error() {
        return Err(ParseFailure::Syntax);
    }

    Ok(ParsedSource { tree, source, path })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> ParsedSource {
        parse_source(source.to_string(), PathBuf::from("test.py")).unwrap()
    }

    #[test]
    fn test_parses_valid_source() {
        let src = parse("def main():\n    pass\n");
        assert!(!src.tree.root_node().has_error());
        assert_eq!(src.path, PathBuf::from("test.py"));
    }

    #[test]
    fn test_rejects_invalid_syntax() {
        let err = parse_source("def broken(:\n".to_string(), PathBuf::from("bad.py"));
        assert!(matches!(err, Err(ParseFailure::Syntax)));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = parse_source_file(Path::new("/nonexistent/never.py"));
        assert!(matches!(err, Err(ParseFailure::Unreadable(_))));
    }

    #[test]
    fn test_non_utf8_file_is_unreadable() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("latin1.py");
        fs::write(&path, [0x64, 0x65, 0x66, 0x20, 0xff, 0xfe]).unwrap();

        let err = parse_source_file(&path);
        assert!(matches!(err, Err(ParseFailure::Unreadable(_))));
    }

    #[test]
    fn test_classifies_node_kinds() {
        let src = parse(
            "import os\nfrom sys import path\n\n@wraps\ndef f():\n    g()\n\nclass C:\n    pass\n",
        );
        let root = src.tree.root_node();

        let mut cursor = root.walk();
        let kinds: Vec<NodeKind> = root
            .named_children(&mut cursor)
            .map(NodeKind::of)
            .collect();

        assert_eq!(
            kinds,
            vec![
                NodeKind::Import,
                NodeKind::ImportFrom,
                NodeKind::Decorated,
                NodeKind::Class,
            ]
        );
    }

    #[test]
    fn test_line_text_trims_and_falls_back() {
        let src = parse("def f():\n    y = call()  \n");
        assert_eq!(src.line_text(2), "y = call()");
        assert_eq!(src.line_text(99), "<line 99>");
        assert_eq!(src.line_text(0), "<line 0>");
    }
}
