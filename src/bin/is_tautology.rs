//! Tautology test, one expression per stdin line
//!
//! Prints the constant `1` for tautologies and `0` otherwise.

use clap::Parser;
use mccluskey_logic::{cli, Cover};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "is_tautology")]
#[command(about = "Test Boolean expressions for tautology, one per line")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);
    cli::run_lines(|expr| {
        let tautological = Cover::from_expr(expr).is_tautology();
        if tautological { "1" } else { "0" }.to_string()
    })
}
