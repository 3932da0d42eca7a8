//! Notebook to script conversion.
//!
//! Turns a Jupyter `.ipynb` notebook into plain runnable scripts, splitting
//! at markdown headings.
//!
//! # Architecture
//!
//! ```text
//! notebook.ipynb ──► Notebook ──► segment() ──► Vec<Section> ──► render_scripts() ──► scripts/*.py
//!                                                                        │
//!                                                                        ▼
//!                                                         colab_converted.py  or  step_NN_<slug>.py
//! ```

mod error;
mod ipynb;
mod segment;
mod slug;
mod writer;

pub use error::{SyncError, SyncResult};
pub use ipynb::{Cell, CellType, Notebook};
pub use segment::{Layout, MAIN_SECTION, SegmentState, Section, heading_title, segment};
pub use slug::slugify;
pub use writer::{COMBINED_FILE_NAME, ScriptFile, render_scripts, step_file_name, write_scripts};

use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "scripts";

/// Convert a notebook file into scripts under `out_dir`.
///
/// Returns the paths of the files written.
pub fn convert_notebook(
    notebook_path: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
) -> SyncResult<Vec<PathBuf>> {
    let notebook_path = notebook_path.as_ref();
    let out_dir = out_dir.as_ref();

    let notebook = Notebook::read_from_file(notebook_path)?;
    let sections = segment(&notebook.cells);
    let files = render_scripts(&sections, out_dir);
    let created = write_scripts(&files, out_dir)?;

    tracing::info!(
        "Converted {} → {} ({} cells, {} sections, {:?})",
        notebook_path.display(),
        out_dir.display(),
        notebook.cells.len(),
        sections.len(),
        Layout::for_sections(&sections)
    );

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_missing_notebook() {
        let temp = tempfile::TempDir::new().unwrap();
        let out_dir = temp.path().join("scripts");

        let err = convert_notebook(temp.path().join("missing.ipynb"), &out_dir).unwrap_err();

        assert!(matches!(err, SyncError::NotFound(_)));
        assert!(!out_dir.exists(), "nothing should be written");
    }
}
