//! Jupyter notebook (.ipynb) loading.
//!
//! Only the parts of the format the converter consumes are modelled. Absent
//! or `null` fields are defaulted here so the rest of the pipeline never
//! deals with structural absence.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{SyncError, SyncResult};

/// A Jupyter notebook, reduced to its cells.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Notebook {
    /// Notebook cells, in document order
    #[serde(default)]
    pub cells: Vec<Cell>,
}

/// A single notebook cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Cell {
    /// Cell type
    #[serde(default)]
    pub cell_type: CellType,

    /// Cell source, one entry per line (newline terminators preserved)
    #[serde(default, deserialize_with = "deserialize_source")]
    pub source: Vec<String>,
}

/// Type of cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    /// Markdown prose
    Markdown,
    /// Executable code
    Code,
    /// Raw cells, unknown types and cells without a type
    #[default]
    #[serde(other)]
    Other,
}

/// `source` is a list of lines in nbformat 4, but a single string is
/// also valid JSON for the field and shows up in hand-written notebooks.
#[derive(Deserialize)]
#[serde(untagged)]
enum SourceRepr {
    Lines(Vec<String>),
    Text(String),
}

fn deserialize_source<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let source = Option::<SourceRepr>::deserialize(deserializer)?;
    Ok(match source {
        None => Vec::new(),
        Some(SourceRepr::Lines(lines)) => lines,
        Some(SourceRepr::Text(text)) => text.split_inclusive('\n').map(str::to_string).collect(),
    })
}

impl Notebook {
    /// Parse a notebook from JSON text.
    ///
    /// The document and each cell must be JSON objects; arrays would
    /// otherwise be accepted positionally by the derived impls.
    pub fn from_json(json: &str) -> SyncResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Some(object) = value.as_object() else {
            return Err(SyncError::InvalidNotebook(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        };

        if let Some(cells) = object.get("cells").and_then(Value::as_array) {
            if let Some((index, cell)) = cells.iter().enumerate().find(|(_, c)| !c.is_object()) {
                return Err(SyncError::InvalidNotebook(format!(
                    "cell {} is {}, expected a JSON object",
                    index,
                    json_kind(cell)
                )));
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Read a notebook from a file.
    ///
    /// A missing path is reported as [`SyncError::NotFound`] before any read
    /// is attempted.
    pub fn read_from_file(path: impl AsRef<Path>) -> SyncResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SyncError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| SyncError::ReadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let notebook = Self::from_json(&content)?;

        tracing::debug!("Loaded {} ({} cells)", path.display(), notebook.cells.len());
        Ok(notebook)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Cell {
    /// Create a cell from source lines.
    pub fn new(cell_type: CellType, source: &[&str]) -> Self {
        Self {
            cell_type,
            source: source.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Source lines with trailing newlines stripped.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.source.iter().map(|line| line.trim_end_matches('\n'))
    }
}
