//! Truth tables, one expression per stdin line
//!
//! Each input line produces a table block: a header row with the variable
//! names, then one row per assignment with the function value last.

use clap::Parser;
use mccluskey_logic::cli;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "truth_tbl")]
#[command(about = "Print the truth table of each Boolean expression, one per line")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);
    cli::run_lines(|expr| expr.truth_table().to_string())
}
