//! Canonical conjunctive form, one expression per stdin line

use clap::Parser;
use mccluskey_logic::cli;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "std_conj")]
#[command(about = "Rewrite Boolean expressions in canonical conjunctive form, one per line")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);
    cli::run_lines(|expr| expr.std_conj().to_string())
}
