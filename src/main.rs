//! xref - Token cross-referencing and spell checking for text files
//!
//! xref provides:
//! - A cross reference of every token: files and line numbers it appears on
//! - Dictionary spell checking of tokens, with optional splitting of
//!   composite identifiers (`camelCase`, `snake_case`)
//! - Plain text, json and jsonl reports with optional statistics

use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod scan;
mod spell;

/// Exit status for fatal errors (bad word list, unreadable file list)
const EXIT_FATAL: u8 = 2;

fn init_tracing(verbose: bool, no_color: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("XREF_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.no_color);

    match cli::run(cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            // Printed directly so XREF_LOG can't silence it
            eprintln!("xref: {:#}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
