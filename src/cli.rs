//! Command-line interface for pyscout.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::ScoutError;
use crate::query::ProjectAnalyzer;
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NOT_FOUND: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Static inspection for Python projects.
///
/// Pyscout parses a project's Python files and answers navigation queries
/// about them: where a function is called, where it is defined, what a
/// file declares, and what the project contains. Output is deterministic
/// and available as plain text or JSON.
#[derive(Parser)]
#[command(name = "pyscout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find every call to a function across the project
    Usages(UsagesArgs),
    /// Find every definition of a function across the project
    Signatures(SignaturesArgs),
    /// Show the imports, classes, and functions of one file
    Structure(StructureArgs),
    /// Summarize every Python file in the project
    Overview(OverviewArgs),
}

/// Arguments for the usages command.
#[derive(Parser)]
pub struct UsagesArgs {
    /// Function name to search for
    pub function: String,

    /// Project root directory
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Arguments for the signatures command.
#[derive(Parser)]
pub struct SignaturesArgs {
    /// Function name to look up
    pub function: String,

    /// Project root directory
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Arguments for the structure command.
#[derive(Parser)]
pub struct StructureArgs {
    /// Python file to inspect, relative to the root or absolute
    pub file: PathBuf,

    /// Project root directory
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Arguments for the overview command.
#[derive(Parser)]
pub struct OverviewArgs {
    /// Project root directory
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Run the usages command.
pub fn run_usages(args: &UsagesArgs) -> anyhow::Result<i32> {
    if !check_format(&args.format) {
        return Ok(EXIT_ERROR);
    }

    let analyzer = ProjectAnalyzer::new(&args.root);
    let report = match analyzer.find_usages(&args.function) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(exit_code(&e));
        }
    };

    if args.format == "json" {
        println!("{}", report::render_json(&report)?);
    } else {
        println!("{}", report::render_usages(&report));
    }
    Ok(EXIT_SUCCESS)
}

/// Run the signatures command.
pub fn run_signatures(args: &SignaturesArgs) -> anyhow::Result<i32> {
    if !check_format(&args.format) {
        return Ok(EXIT_ERROR);
    }

    let analyzer = ProjectAnalyzer::new(&args.root);
    let report = match analyzer.find_signatures(&args.function) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(exit_code(&e));
        }
    };

    if args.format == "json" {
        println!("{}", report::render_json(&report)?);
    } else {
        println!("{}", report::render_signatures(&report));
    }
    Ok(EXIT_SUCCESS)
}

/// Run the structure command.
pub fn run_structure(args: &StructureArgs) -> anyhow::Result<i32> {
    if !check_format(&args.format) {
        return Ok(EXIT_ERROR);
    }

    let analyzer = ProjectAnalyzer::new(&args.root);
    let report = match analyzer.file_structure(&args.file) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(exit_code(&e));
        }
    };

    if args.format == "json" {
        println!("{}", report::render_json(&report)?);
    } else {
        println!("{}", report::render_structure(&report));
    }
    Ok(EXIT_SUCCESS)
}

/// Run the overview command.
pub fn run_overview(args: &OverviewArgs) -> anyhow::Result<i32> {
    if !check_format(&args.format) {
        return Ok(EXIT_ERROR);
    }

    let analyzer = ProjectAnalyzer::new(&args.root);
    let report = match analyzer.project_overview() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(exit_code(&e));
        }
    };

    if args.format == "json" {
        println!("{}", report::render_json(&report)?);
    } else {
        println!("{}", report::render_overview(&report));
    }
    Ok(EXIT_SUCCESS)
}

/// Validate the format flag shared by every command.
fn check_format(format: &str) -> bool {
    if format != "text" && format != "json" {
        eprintln!("Error: invalid format {:?}, must be 'text' or 'json'", format);
        return false;
    }
    true
}

/// Exit code for a failed query. A missing or unparseable target is
/// distinguishable from an invalid invocation.
fn exit_code(err: &ScoutError) -> i32 {
    match err {
        ScoutError::FileNotFound(_) | ScoutError::Parse { .. } => EXIT_NOT_FOUND,
        ScoutError::RootNotFound(_) | ScoutError::Walk(_) => EXIT_ERROR,
    }
}
