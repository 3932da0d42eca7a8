//! Rendering sections into script files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SyncError, SyncResult};
use crate::segment::{Layout, MAIN_SECTION, Section};
use crate::slug::slugify;

/// File name used when the notebook is not split.
pub const COMBINED_FILE_NAME: &str = "colab_converted.py";

/// First line of every generated script.
const GENERATED_HEADER: &str = "# Converted from notebook";

/// A rendered script, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFile {
    /// File name within the output directory
    pub name: String,

    /// Full file contents
    pub contents: String,
}

/// Render sections into script files.
///
/// `out_dir` only feeds the usage hint in each header; nothing is written.
pub fn render_scripts(sections: &[Section], out_dir: &Path) -> Vec<ScriptFile> {
    match Layout::for_sections(sections) {
        Layout::Combined => vec![render_combined(sections.first(), out_dir)],
        Layout::Split => sections
            .iter()
            .enumerate()
            .map(|(i, section)| render_step(i + 1, section, out_dir))
            .collect(),
    }
}

/// File name for the `index`-th (1-based) section in split mode.
pub fn step_file_name(index: usize, title: &str) -> String {
    let slug = slugify(title);
    let slug = if slug.is_empty() {
        format!("{:02}", index)
    } else {
        slug
    };
    format!("step_{:02}_{}.py", index, slug)
}

fn render_combined(section: Option<&Section>, out_dir: &Path) -> ScriptFile {
    let name = COMBINED_FILE_NAME.to_string();
    let mut contents = format!(
        "{}\n# To run: python {}\n\n",
        GENERATED_HEADER,
        run_hint(out_dir, &name)
    );

    if let Some(section) = section {
        if !section.title.is_empty() && section.title != MAIN_SECTION {
            contents.push_str(&format!("# Section: {}\n\n", section.title));
        }
        push_lines(&mut contents, &section.lines);
    }

    ScriptFile { name, contents }
}

fn render_step(index: usize, section: &Section, out_dir: &Path) -> ScriptFile {
    let name = step_file_name(index, &section.title);
    let mut contents = format!(
        "{}\n# Section: {}\n# To run: python {}\n\n",
        GENERATED_HEADER,
        section.title,
        run_hint(out_dir, &name)
    );
    push_lines(&mut contents, &section.lines);

    ScriptFile { name, contents }
}

fn push_lines(contents: &mut String, lines: &[String]) {
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
}

fn run_hint(out_dir: &Path, name: &str) -> String {
    out_dir.join(name).display().to_string()
}

/// Write rendered scripts into `out_dir`, creating it if needed.
///
/// Existing files with the same name are overwritten. Returns the written
/// paths in order.
pub fn write_scripts(files: &[ScriptFile], out_dir: &Path) -> SyncResult<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|e| SyncError::WriteError {
        path: out_dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut created = Vec::with_capacity(files.len());
    for file in files {
        let path = out_dir.join(&file.name);
        fs::write(&path, &file.contents).map_err(|e| SyncError::WriteError {
            path: path.clone(),
            message: e.to_string(),
        })?;
        tracing::debug!("Wrote {} ({} bytes)", path.display(), file.contents.len());
        created.push(path);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, lines: &[&str]) -> Section {
        Section {
            title: title.to_string(),
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_step_file_name() {
        assert_eq!(step_file_name(1, "Intro"), "step_01_intro.py");
        assert_eq!(step_file_name(2, "Step Two"), "step_02_step-two.py");
        assert_eq!(step_file_name(12, "Step 1: Load Data"), "step_12_step-1-load-data.py");
        assert_eq!(step_file_name(3, "!!!"), "step_03_03.py");
    }

    #[test]
    fn test_render_empty_notebook() {
        let files = render_scripts(&[], Path::new("scripts"));

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, COMBINED_FILE_NAME);
        assert_eq!(
            files[0].contents,
            "# Converted from notebook\n# To run: python scripts/colab_converted.py\n\n"
        );
    }

    #[test]
    fn test_render_combined_main_has_no_section_line() {
        let files = render_scripts(&[section("main", &["x = 1", ""])], Path::new("scripts"));

        assert_eq!(files.len(), 1);
        assert_eq!(
            files[0].contents,
            "# Converted from notebook\n# To run: python scripts/colab_converted.py\n\nx = 1\n\n"
        );
    }

    #[test]
    fn test_render_combined_titled_section() {
        let files = render_scripts(&[section("Only", &["# # Only", ""])], Path::new("scripts"));

        assert_eq!(files[0].name, COMBINED_FILE_NAME);
        assert_eq!(
            files[0].contents,
            "# Converted from notebook\n# To run: python scripts/colab_converted.py\n\n\
             # Section: Only\n\n# # Only\n\n"
        );
    }

    #[test]
    fn test_render_split() {
        let sections = vec![
            section("Intro", &["# # Intro", "", "print(1)", ""]),
            section("Step Two", &["print(2)", ""]),
        ];
        let files = render_scripts(&sections, Path::new("scripts"));

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "step_01_intro.py");
        assert_eq!(
            files[0].contents,
            "# Converted from notebook\n# Section: Intro\n\
             # To run: python scripts/step_01_intro.py\n\n# # Intro\n\nprint(1)\n\n"
        );
        assert_eq!(files[1].name, "step_02_step-two.py");
        assert!(files[1].contents.contains("# Section: Step Two\n"));
    }

    #[test]
    fn test_write_scripts_creates_dir_and_overwrites() {
        let temp = tempfile::TempDir::new().unwrap();
        let out_dir = temp.path().join("nested").join("scripts");
        let files = vec![ScriptFile {
            name: "a.py".to_string(),
            contents: "first\n".to_string(),
        }];

        let created = write_scripts(&files, &out_dir).unwrap();
        assert_eq!(created, vec![out_dir.join("a.py")]);

        let files = vec![ScriptFile {
            name: "a.py".to_string(),
            contents: "second\n".to_string(),
        }];
        write_scripts(&files, &out_dir).unwrap();
        assert_eq!(fs::read_to_string(out_dir.join("a.py")).unwrap(), "second\n");
    }
}
