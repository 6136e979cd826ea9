//! Pyscout CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pyscout::cli::{self, Cli, Commands, EXIT_ERROR};

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Usages(args) => run(cli::run_usages(&args)),
        Commands::Signatures(args) => run(cli::run_signatures(&args)),
        Commands::Structure(args) => run(cli::run_structure(&args)),
        Commands::Overview(args) => run(cli::run_overview(&args)),
    };

    std::process::exit(exit_code);
}

fn run(result: anyhow::Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Diagnostics go to stderr so report output stays clean on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
