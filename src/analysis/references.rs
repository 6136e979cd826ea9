//! Reference extraction: call sites and import statements.

use tree_sitter::Node;

use crate::analysis::facts::{CallSite, Import};
use crate::analysis::source::{NodeKind, ParsedSource};

/// Every call to `target` anywhere in the file, in source order.
///
/// Matching is by callee name alone: `helper(...)`, `obj.helper(...)` and
/// `pkg.mod.helper(...)` all count as calls to `helper`, and parentheses
/// around the callee are looked through. Calls through subscripts or other
/// computed expressions have no name and never match.
pub fn find_calls(src: &ParsedSource, target: &str) -> Vec<CallSite> {
    let mut calls = Vec::new();
    collect_calls(src, src.tree.root_node(), target, &mut calls);
    calls
}

fn collect_calls(src: &ParsedSource, node: Node, target: &str, calls: &mut Vec<CallSite>) {
    if NodeKind::of(node) == NodeKind::Call && callee_name(src, node) == Some(target) {
        let line = src.line_of(node);
        calls.push(CallSite {
            line,
            text: src.line_text(line),
        });
    }
    // Arguments can contain further calls, so always keep descending.
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_calls(src, child, target, calls);
    }
}

fn callee_name<'a>(src: &'a ParsedSource, call: Node) -> Option<&'a str> {
    let mut function = call.child_by_field_name("function")?;
    // Parentheses around the callee do not change what is being called.
    while function.kind() == "parenthesized_expression" {
        let mut cursor = function.walk();
        function = function
            .named_children(&mut cursor)
            .find(|n| n.kind() != "comment")?;
    }
    match function.kind() {
        "identifier" => Some(src.node_text(function)),
        "attribute" => function
            .child_by_field_name("attribute")
            .map(|attr| src.node_text(attr)),
        _ => None,
    }
}

/// Every import in the file, in source order, as written. Aliases resolve
/// to the real module name (`import numpy as np` records `numpy`), and
/// repeated imports are repeated in the result.
pub fn extract_imports(src: &ParsedSource) -> Vec<Import> {
    let mut imports = Vec::new();
    collect_imports(src, src.tree.root_node(), &mut imports);
    imports
}

fn collect_imports(src: &ParsedSource, node: Node, imports: &mut Vec<Import>) {
    match NodeKind::of(node) {
        NodeKind::Import => {
            let mut cursor = node.walk();
            for name in node.children_by_field_name("name", &mut cursor) {
                if let Some(module) = import_target(src, name) {
                    imports.push(Import::Direct { module });
                }
            }
        }
        NodeKind::ImportFrom => {
            // For relative imports the module is kept as written: `.`, `..pkg`.
            let module = node
                .child_by_field_name("module_name")
                .map(|m| src.node_text(m).to_string())
                .unwrap_or_default();
            let mut name_cursor = node.walk();
            for name in node.children_by_field_name("name", &mut name_cursor) {
                if let Some(name) = import_target(src, name) {
                    imports.push(Import::From {
                        module: module.clone(),
                        name,
                    });
                }
            }
            // `from m import *` has no name field, only a wildcard child.
            let mut wild_cursor = node.walk();
            for child in node.named_children(&mut wild_cursor) {
                if child.kind() == "wildcard_import" {
                    imports.push(Import::From {
                        module: module.clone(),
                        name: "*".to_string(),
                    });
                }
            }
        }
        _ => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                collect_imports(src, child, imports);
            }
        }
    }
}

fn import_target(src: &ParsedSource, node: Node) -> Option<String> {
    match node.kind() {
        "dotted_name" => Some(src.node_text(node).to_string()),
        "aliased_import" => node
            .child_by_field_name("name")
            .map(|name| src.node_text(name).to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::source::parse_source;
    use std::path::PathBuf;

    fn parse(source: &str) -> ParsedSource {
        parse_source(source.to_string(), PathBuf::from("test.py")).unwrap()
    }

    #[test]
    fn test_matches_bare_and_attribute_calls_by_name() {
        let src = parse(
            r#"
result = helper(1)
obj.helper(2)
helper_factory()
pkg.mod.helper(3)
"#,
        );

        let calls = find_calls(&src, "helper");
        let lines: Vec<usize> = calls.iter().map(|c| c.line).collect();
        assert_eq!(lines, vec![2, 3, 5]);
        assert_eq!(calls[0].text, "result = helper(1)");
    }

    #[test]
    fn test_attribute_chain_matches_final_segment_only() {
        let src = parse("a.b.c()\n");

        assert_eq!(find_calls(&src, "c").len(), 1);
        assert!(find_calls(&src, "b").is_empty());
        assert!(find_calls(&src, "a").is_empty());
    }

    #[test]
    fn test_nested_and_indented_calls_are_found() {
        let src = parse(
            r#"
def run():
    if True:
        outer(inner())
"#,
        );

        assert_eq!(find_calls(&src, "outer").len(), 1);
        let inner = find_calls(&src, "inner");
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].line, 4);
        assert_eq!(inner[0].text, "outer(inner())");
    }

    #[test]
    fn test_parenthesized_callees_match_by_inner_name() {
        let src = parse("(helper)(1)\n((obj.helper))(2)\n");

        let calls = find_calls(&src, "helper");
        let lines: Vec<usize> = calls.iter().map(|c| c.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }

    #[test]
    fn test_computed_callees_have_no_name() {
        let src = parse("handlers[0]()\n(lambda: 1)()\n");

        assert!(find_calls(&src, "handlers").is_empty());
    }

    #[test]
    fn test_imports_kept_in_source_order_as_written() {
        let src = parse(
            r#"
import os
import numpy as np
from pathlib import Path, PurePath
from . import sibling
from ..pkg import thing
from os import *
import a.b.c
"#,
        );

        let imports = extract_imports(&src);
        let expected = vec![
            Import::Direct {
                module: "os".to_string(),
            },
            Import::Direct {
                module: "numpy".to_string(),
            },
            Import::From {
                module: "pathlib".to_string(),
                name: "Path".to_string(),
            },
            Import::From {
                module: "pathlib".to_string(),
                name: "PurePath".to_string(),
            },
            Import::From {
                module: ".".to_string(),
                name: "sibling".to_string(),
            },
            Import::From {
                module: "..pkg".to_string(),
                name: "thing".to_string(),
            },
            Import::From {
                module: "os".to_string(),
                name: "*".to_string(),
            },
            Import::Direct {
                module: "a.b.c".to_string(),
            },
        ];
        assert_eq!(imports, expected);
    }

    #[test]
    fn test_nested_and_repeated_imports_are_kept() {
        let src = parse(
            r#"
import os

def f():
    import os
"#,
        );

        let imports = extract_imports(&src);
        assert_eq!(imports.len(), 2);
        assert!(imports.iter().all(|i| i.is_direct()));
    }
}
