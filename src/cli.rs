//! Shared driver for the line-oriented command-line tools
//!
//! Every executable reads one expression per stdin line, writes one
//! transformed result per input line to stdout, and exits non-zero only
//! when an input fails to parse. Blank lines and `#` comments are skipped.

use crate::expression::BoolExpr;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Initialize the logger, forcing debug level when `verbose` is set
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

/// Run `transform` over every expression on stdin
pub fn run_lines<F>(transform: F) -> ExitCode
where
    F: Fn(&BoolExpr) -> String,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match BoolExpr::parse(trimmed) {
            Ok(expr) => {
                let _ = writeln!(out, "{}", transform(&expr));
            }
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
