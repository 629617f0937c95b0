//! Boolean complement, one expression per stdin line

use clap::Parser;
use mccluskey_logic::{cli, Cover};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "complement")]
#[command(about = "Complement Boolean expressions, one per line")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);
    cli::run_lines(|expr| Cover::from_expr(expr).complement().to_expr().to_string())
}
