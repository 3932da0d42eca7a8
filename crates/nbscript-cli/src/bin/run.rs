//! nbscript-run - run a converted script, or any script, by path.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use nbscript_cli::run::{self, DEFAULT_SCRIPT};
use nbscript_cli::logging;

#[derive(Parser)]
#[command(name = "nbscript-run")]
#[command(about = "Run a script as the program entry point")]
#[command(version)]
struct Cli {
    /// Path to the script to run
    #[arg(short, long, default_value = DEFAULT_SCRIPT)]
    script: PathBuf,

    /// Interpreter to run the script with (default: python3, then python)
    #[arg(short, long)]
    interpreter: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Arguments passed through to the script
    #[arg(last = true)]
    args: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    run::execute(&cli.script, cli.interpreter.as_deref(), &cli.args)
}
