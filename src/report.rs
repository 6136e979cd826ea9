//! Output formatting for query reports.
//!
//! Supports two output formats:
//! - Text: plain line-oriented output for terminals and grepping
//! - JSON: structured output for programmatic consumption
//!
//! Every renderer is a pure function from a report to a `String` without a
//! trailing newline. Rendering the same report twice yields identical
//! bytes: no color, no timestamps, no terminal detection.

use serde::Serialize;

use crate::query::{OverviewReport, SignatureReport, StructureReport, UsageReport};

// =============================================================================
// Text format
// =============================================================================

/// Render a usage report: one section per file, call sites in line order.
pub fn render_usages(report: &UsageReport) -> String {
    if report.files.is_empty() {
        return format!("No usages found for function '{}'", report.function);
    }

    let mut lines = vec![format!(
        "Found {} usage(s) of function '{}':",
        report.total, report.function
    )];
    for file in &report.files {
        lines.push(String::new());
        lines.push(format!("{}:", file.file));
        for call in &file.calls {
            lines.push(format!("  line {}: {}", call.line, call.text));
        }
    }
    lines.join("\n")
}

/// Render a signature report: one block per matching definition.
pub fn render_signatures(report: &SignatureReport) -> String {
    if report.matches.is_empty() {
        return format!("No function named '{}' found", report.function);
    }

    let mut lines = vec![format!(
        "Found {} definition(s) of '{}':",
        report.matches.len(),
        report.function
    )];
    for func in &report.matches {
        lines.push(String::new());
        lines.push(format!("{}:{}", func.file, func.line));
        if let Some(class) = &func.class_name {
            lines.push(format!("  method of class '{}'", class));
        }
        lines.push(format!("  def {}", func.signature()));
        if let Some(doc) = &func.doc {
            // First non-blank line stands in for the whole docstring.
            if let Some(first) = doc.lines().map(str::trim).find(|l| !l.is_empty()) {
                lines.push(format!("  {}", first));
            }
        }
    }
    lines.join("\n")
}

/// Render a structure report. Sections with no entries are omitted.
pub fn render_structure(report: &StructureReport) -> String {
    let mut lines = vec![format!("File structure: {}", report.file)];

    if !report.imports.is_empty() {
        lines.push(String::new());
        lines.push("Imports:".to_string());
        for import in report.imports.iter().filter(|i| i.is_direct()) {
            lines.push(format!("  {}", import));
        }
        for import in report.imports.iter().filter(|i| !i.is_direct()) {
            lines.push(format!("  {}", import));
        }
    }

    if !report.classes.is_empty() {
        lines.push(String::new());
        lines.push("Classes:".to_string());
        for class in &report.classes {
            let name = if class.bases.is_empty() {
                class.name.clone()
            } else {
                format!("{}({})", class.name, class.bases.join(", "))
            };
            let methods = if class.methods.is_empty() {
                "no methods".to_string()
            } else {
                format!("methods: {}", class.methods.join(", "))
            };
            lines.push(format!("  {} - {}", name, methods));
        }
    }

    if !report.functions.is_empty() {
        lines.push(String::new());
        lines.push("Functions:".to_string());
        for func in &report.functions {
            lines.push(format!("  {} - line {}", func.signature(), func.line));
        }
    }

    lines.join("\n")
}

/// Render an overview report: one line per file, path-sorted by the query.
pub fn render_overview(report: &OverviewReport) -> String {
    let mut lines = vec![format!(
        "Project overview: {} Python file(s)",
        report.file_count
    )];
    if !report.files.is_empty() {
        lines.push(String::new());
        for file in &report.files {
            lines.push(format!("  {} - {}", file.file, file.summary_text()));
        }
    }
    lines.join("\n")
}

// =============================================================================
// JSON format
// =============================================================================

/// Render any report as pretty-printed JSON.
pub fn render_json<T: Serialize>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
