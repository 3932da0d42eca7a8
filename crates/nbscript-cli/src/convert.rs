//! Convert command implementation.
//!
//! Converts a .ipynb notebook into scripts and lists the files created.

use std::path::Path;
use std::process::ExitCode;

use nbscript_sync::{SyncError, convert_notebook};

/// Exit code when the notebook path does not exist.
pub const NOTEBOOK_NOT_FOUND_EXIT: u8 = 3;

/// Execute the convert command.
pub fn execute(notebook_path: &Path, out_dir: &Path) -> anyhow::Result<ExitCode> {
    let created = match convert_notebook(notebook_path, out_dir) {
        Ok(created) => created,
        Err(SyncError::NotFound(path)) => {
            println!("Notebook not found: {}", path.display());
            return Ok(ExitCode::from(NOTEBOOK_NOT_FOUND_EXIT));
        }
        Err(e) => return Err(e.into()),
    };

    println!("Created files:");
    for path in &created {
        println!(" - {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}
