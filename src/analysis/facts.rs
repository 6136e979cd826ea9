//! Record types extracted from Python source files.
//!
//! All records are plain value data: produced in one pass over a parse
//! tree, never mutated afterwards, and free of references back into the
//! tree, so the tree can be dropped as soon as extraction finishes.

use std::fmt;

use serde::Serialize;

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    /// The declared name.
    pub name: String,
    /// Path of the file the declaration lives in.
    pub file: String,
    /// 1-based line of the `def` keyword.
    pub line: usize,
    /// Positional parameter names in declaration order, `self` included.
    /// Keyword-only parameters and `*`/`**` catch-alls are not recorded.
    pub params: Vec<String>,
    /// Full text of a leading string-literal statement, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Whether the declaration sits directly in a class body.
    pub is_method: bool,
    /// The enclosing class. Set exactly when `is_method` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl FunctionRecord {
    /// Render the declaration as `name(a, b)`.
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, self.params.join(", "))
    }
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRecord {
    pub name: String,
    pub file: String,
    /// 1-based line of the `class` keyword.
    pub line: usize,
    /// Method names at the immediate class-body level, declaration order.
    /// Methods of nested classes belong to the nested class only.
    pub methods: Vec<String>,
    /// Base classes as written in source: simple names or dotted forms.
    pub bases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

/// One call expression that matched a usages query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallSite {
    /// 1-based line of the call expression.
    pub line: usize,
    /// Trimmed source line, or a `<line N>` placeholder.
    pub text: String,
}

/// A module import, either form.
///
/// Aliased imports record the real module name rather than the alias,
/// and relative-import dots are preserved as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Import {
    /// `import module`.
    Direct { module: String },
    /// `from module import name`, one record per imported name.
    From { module: String, name: String },
}

impl Import {
    pub fn is_direct(&self) -> bool {
        matches!(self, Import::Direct { .. })
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Import::Direct { module } => write!(f, "import {}", module),
            Import::From { module, name } => write!(f, "from {} import {}", module, name),
        }
    }
}

/// Everything extracted from a single file.
#[derive(Debug, Clone, Default)]
pub struct FileFacts {
    /// Functions and methods, declaration order.
    pub functions: Vec<FunctionRecord>,
    /// Classes, declaration order.
    pub classes: Vec<ClassRecord>,
    /// Imports, appearance order, duplicates kept.
    pub imports: Vec<Import>,
}

impl FileFacts {
    /// Rewrite every record's file path, used once a query has decided
    /// how the file should be displayed (root-relative, normally).
    pub fn relocate(&mut self, file: &str) {
        for func in &mut self.functions {
            func.file = file.to_string();
        }
        for class in &mut self.classes {
            class.file = file.to_string();
        }
    }

    /// Functions that are not methods, in declaration order.
    pub fn free_functions(&self) -> impl Iterator<Item = &FunctionRecord> {
        self.functions.iter().filter(|f| !f.is_method)
    }

    /// Count of method declarations.
    pub fn method_count(&self) -> usize {
        self.functions.iter().filter(|f| f.is_method).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_formatting() {
        let func = FunctionRecord {
            name: "greet".to_string(),
            file: "app.py".to_string(),
            line: 3,
            params: vec!["self".to_string(), "name".to_string()],
            doc: None,
            is_method: true,
            class_name: Some("Greeter".to_string()),
        };
        assert_eq!(func.signature(), "greet(self, name)");
    }

    #[test]
    fn test_import_display() {
        let direct = Import::Direct {
            module: "os.path".to_string(),
        };
        let from = Import::From {
            module: ".".to_string(),
            name: "models".to_string(),
        };
        assert_eq!(direct.to_string(), "import os.path");
        assert_eq!(from.to_string(), "from . import models");
    }

    #[test]
    fn test_facts_partition_methods() {
        let method = FunctionRecord {
            name: "m".to_string(),
            file: "a.py".to_string(),
            line: 2,
            params: vec![],
            doc: None,
            is_method: true,
            class_name: Some("C".to_string()),
        };
        let free = FunctionRecord {
            name: "f".to_string(),
            file: "a.py".to_string(),
            line: 8,
            params: vec![],
            doc: None,
            is_method: false,
            class_name: None,
        };
        let facts = FileFacts {
            functions: vec![method, free],
            classes: vec![],
            imports: vec![],
        };

        assert_eq!(facts.method_count(), 1);
        let free_names: Vec<&str> = facts.free_functions().map(|f| f.name.as_str()).collect();
        assert_eq!(free_names, vec!["f"]);
    }
}
