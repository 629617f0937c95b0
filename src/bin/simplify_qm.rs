//! Quine-McCluskey minimization, one expression per stdin line

use clap::Parser;
use mccluskey_logic::{cli, qm, MinimizeConfig};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "simplify_qm")]
#[command(about = "Minimize Boolean expressions with Quine-McCluskey, one per line")]
struct Args {
    /// Wall-clock budget for prime selection, in milliseconds
    #[arg(long, value_name = "MS")]
    deadline: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);
    let config = MinimizeConfig {
        petrick_deadline: args.deadline.map(Duration::from_millis),
    };
    cli::run_lines(|expr| qm::minimize_with_config(expr, &config).to_string())
}
