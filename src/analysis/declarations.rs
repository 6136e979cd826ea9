//! Declaration extraction: functions, methods, and classes.

use tree_sitter::Node;

use crate::analysis::facts::{ClassRecord, FunctionRecord};
use crate::analysis::source::{NodeKind, ParsedSource};

/// All declarations found in one file, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Declarations {
    pub functions: Vec<FunctionRecord>,
    pub classes: Vec<ClassRecord>,
}

/// Walk the whole tree and collect every declaration at any depth.
///
/// The traversal threads the enclosing-class stack through the recursion:
/// a function is a method exactly when the statement list it appears in is
/// the immediate body of a class. A function nested inside another function
/// is never a method, even when that outer function is one; a class nested
/// anywhere starts a fresh method scope for its own body.
pub fn extract_declarations(src: &ParsedSource) -> Declarations {
    let mut decls = Declarations::default();
    let mut class_stack = Vec::new();
    walk(src, src.tree.root_node(), &mut class_stack, false, &mut decls);
    decls
}

fn walk(
    src: &ParsedSource,
    node: Node,
    class_stack: &mut Vec<String>,
    in_class_body: bool,
    decls: &mut Declarations,
) {
    match NodeKind::of(node) {
        NodeKind::Function => {
            let class_name = if in_class_body {
                class_stack.last().cloned()
            } else {
                None
            };
            if let Some(func) = function_record(src, node, class_name) {
                decls.functions.push(func);
            }
            if let Some(body) = node.child_by_field_name("body") {
                descend(src, body, class_stack, false, decls);
            }
        }
        NodeKind::Class => {
            if let Some(class) = class_record(src, node) {
                let name = class.name.clone();
                decls.classes.push(class);
                class_stack.push(name);
                if let Some(body) = node.child_by_field_name("body") {
                    descend(src, body, class_stack, true, decls);
                }
                class_stack.pop();
            }
        }
        // Decorators wrap the definition without changing what it is.
        NodeKind::Decorated => {
            if let Some(inner) = node.child_by_field_name("definition") {
                walk(src, inner, class_stack, in_class_body, decls);
            }
        }
        NodeKind::Call | NodeKind::Import | NodeKind::ImportFrom | NodeKind::Other => {
            descend(src, node, class_stack, false, decls);
        }
    }
}

fn descend(
    src: &ParsedSource,
    node: Node,
    class_stack: &mut Vec<String>,
    in_class_body: bool,
    decls: &mut Declarations,
) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(src, child, class_stack, in_class_body, decls);
    }
}

fn function_record(
    src: &ParsedSource,
    node: Node,
    class_name: Option<String>,
) -> Option<FunctionRecord> {
    let name = node.child_by_field_name("name")?;
    let params = node
        .child_by_field_name("parameters")
        .map(|p| parameter_names(src, p))
        .unwrap_or_default();
    let doc = node
        .child_by_field_name("body")
        .and_then(|body| docstring(src, body));

    Some(FunctionRecord {
        name: src.node_text(name).to_string(),
        file: src.path.to_string_lossy().to_string(),
        line: src.line_of(node),
        params,
        doc,
        is_method: class_name.is_some(),
        class_name,
    })
}

fn class_record(src: &ParsedSource, node: Node) -> Option<ClassRecord> {
    let name = node.child_by_field_name("name")?;
    let bases = node
        .child_by_field_name("superclasses")
        .map(|s| base_names(src, s))
        .unwrap_or_default();
    let body = node.child_by_field_name("body");
    let methods = body.map(|b| method_names(src, b)).unwrap_or_default();
    let doc = body.and_then(|b| docstring(src, b));

    Some(ClassRecord {
        name: src.node_text(name).to_string(),
        file: src.path.to_string_lossy().to_string(),
        line: src.line_of(node),
        methods,
        bases,
        doc,
    })
}

/// Positional parameter names, stopping where the keyword-only section
/// starts (`*` or `*args`). `**` catch-alls never contribute.
fn parameter_names(src: &ParsedSource, parameters: Node) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = parameters.walk();
    for child in parameters.children(&mut cursor) {
        match child.kind() {
            "identifier" => names.push(src.node_text(child).to_string()),
            "typed_parameter" => match child.named_child(0) {
                Some(inner) if inner.kind() == "identifier" => {
                    names.push(src.node_text(inner).to_string());
                }
                _ => break,
            },
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = child.child_by_field_name("name") {
                    if name.kind() == "identifier" {
                        names.push(src.node_text(name).to_string());
                    }
                }
            }
            "list_splat_pattern" | "dictionary_splat_pattern" | "keyword_separator" => break,
            _ => {}
        }
    }
    names
}

/// Method names at the immediate class-body level, decorated defs included.
fn method_names(src: &ParsedSource, body: Node) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = body.walk();
    for child in body.children(&mut cursor) {
        let def = match NodeKind::of(child) {
            NodeKind::Function => Some(child),
            NodeKind::Decorated => child
                .child_by_field_name("definition")
                .filter(|inner| NodeKind::of(*inner) == NodeKind::Function),
            _ => None,
        };
        if let Some(def) = def {
            if let Some(name) = def.child_by_field_name("name") {
                names.push(src.node_text(name).to_string());
            }
        }
    }
    names
}

/// Base classes as written: plain identifiers and dotted attribute forms.
/// Subscripted and keyword bases are not recorded.
fn base_names(src: &ParsedSource, superclasses: Node) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = superclasses.walk();
    for child in superclasses.named_children(&mut cursor) {
        match child.kind() {
            "identifier" | "attribute" => names.push(src.node_text(child).to_string()),
            _ => {}
        }
    }
    names
}

/// A leading string-literal statement is the docstring. The full content
/// is kept; trimming to a summary line is a rendering decision.
///
/// Only plain string literals qualify: a leading f-string or bytes
/// literal is not a docstring. Adjacent literals fold into a single
/// docstring, the same way the language folds them into one value.
fn docstring(src: &ParsedSource, body: Node) -> Option<String> {
    let mut stmt_cursor = body.walk();
    let first = body
        .named_children(&mut stmt_cursor)
        .find(|n| n.kind() != "comment")?;
    if first.kind() != "expression_statement" {
        return None;
    }
    let expr = first.named_child(0)?;

    let content = match expr.kind() {
        "string" => string_literal_text(src, expr)?,
        "concatenated_string" => {
            let mut content = String::new();
            let mut part_cursor = expr.walk();
            for part in expr.named_children(&mut part_cursor) {
                if part.kind() == "string" {
                    content.push_str(&string_literal_text(src, part)?);
                }
            }
            content
        }
        _ => return None,
    };
    if content.is_empty() {
        None
    } else {
        Some(content)
    }
}

/// Content of one plain string literal. An `f`/`b` prefix or any
/// interpolation makes the literal non-plain; raw and unicode prefixes
/// are fine.
fn string_literal_text(src: &ParsedSource, string: Node) -> Option<String> {
    let mut content = String::new();
    let mut piece_cursor = string.walk();
    for piece in string.named_children(&mut piece_cursor) {
        match piece.kind() {
            "string_start" => {
                let prefix = src.node_text(piece);
                if prefix.chars().any(|c| matches!(c, 'f' | 'F' | 'b' | 'B')) {
                    return None;
                }
            }
            "interpolation" => return None,
            "string_content" => content.push_str(src.node_text(piece)),
            _ => {}
        }
    }
    Some(content)
}
