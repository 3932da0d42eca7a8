//! Splitting notebook cells into script sections.
//!
//! Markdown cells whose first non-blank line is a level 1-3 heading start a
//! new section. Everything else is appended to the section in progress:
//! markdown as `# ` comments, code verbatim, each cell followed by one empty
//! separator line.
//!
//! The segmenter is a fold over the cell sequence:
//!
//! ```text
//! SegmentState::new() ──push(cell)──► ... ──push(cell)──► finish() ──► Vec<Section>
//! ```

use crate::ipynb::{Cell, CellType};

/// Title of the section that collects everything before the first heading.
pub const MAIN_SECTION: &str = "main";

/// Heading prefixes that start a new section. Deeper levels are prose.
const HEADING_PREFIXES: [&str; 3] = ["# ", "## ", "### "];

/// A named run of script lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section title (heading text without `#` markers)
    pub title: String,

    /// Output lines, without newline terminators
    pub lines: Vec<String>,
}

/// How sections are laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Everything in one file
    Combined,
    /// One file per section
    Split,
}

impl Layout {
    /// Pick the layout for a list of sections.
    pub fn for_sections(sections: &[Section]) -> Self {
        if sections.len() <= 1 {
            Layout::Combined
        } else {
            Layout::Split
        }
    }
}

/// Accumulator for the segmenting fold.
#[derive(Debug, Clone)]
pub struct SegmentState {
    sections: Vec<Section>,
    title: String,
    buffer: Vec<String>,
}

impl SegmentState {
    /// Start with no sections and an empty buffer titled [`MAIN_SECTION`].
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            title: MAIN_SECTION.to_string(),
            buffer: Vec::new(),
        }
    }

    /// Consume one cell.
    pub fn push(mut self, cell: &Cell) -> Self {
        match cell.cell_type {
            CellType::Markdown => {
                let heading = cell
                    .lines()
                    .find(|line| !line.trim().is_empty())
                    .and_then(heading_title);

                if let Some(title) = heading {
                    self.flush();
                    tracing::debug!("Section boundary: {}", title);
                    self.title = title;
                    self.buffer.extend(
                        cell.lines()
                            .filter(|line| !line.trim().is_empty())
                            .map(comment),
                    );
                } else {
                    self.buffer.extend(cell.lines().map(comment));
                }
                self.buffer.push(String::new());
            }
            CellType::Code => {
                if !cell.source.is_empty() {
                    self.buffer.extend(cell.lines().map(str::to_string));
                    self.buffer.push(String::new());
                }
            }
            CellType::Other => {}
        }
        self
    }

    /// Flush the trailing section and return all sections in order.
    pub fn finish(mut self) -> Vec<Section> {
        self.flush();
        self.sections
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        self.sections.push(Section {
            title: self.title.clone(),
            lines: std::mem::take(&mut self.buffer),
        });
    }
}

impl Default for SegmentState {
    fn default() -> Self {
        Self::new()
    }
}

/// Split cells into sections.
pub fn segment(cells: &[Cell]) -> Vec<Section> {
    cells
        .iter()
        .fold(SegmentState::new(), SegmentState::push)
        .finish()
}

/// Return the heading text if `line` is a level 1-3 markdown heading.
///
/// `"## Load data"` gives `Some("Load data")`; `"#### Detail"` gives `None`.
pub fn heading_title(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if !HEADING_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        return None;
    }
    Some(trimmed.trim_start_matches('#').trim().to_string())
}

fn comment(line: &str) -> String {
    format!("# {}", line)
}
