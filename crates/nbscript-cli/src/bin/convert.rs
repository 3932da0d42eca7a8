//! nbscript-convert - turn a Jupyter notebook into runnable scripts.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use nbscript_cli::{convert, logging};
use nbscript_sync::DEFAULT_OUTPUT_DIR;

#[derive(Parser)]
#[command(name = "nbscript-convert")]
#[command(about = "Convert a Jupyter notebook into runnable scripts, split at headings")]
#[command(version)]
struct Cli {
    /// Path to the notebook (.ipynb file)
    notebook: PathBuf,

    /// Directory the scripts are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    convert::execute(&cli.notebook, &cli.output_dir)
}
