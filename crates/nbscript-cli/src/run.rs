//! Run command implementation.
//!
//! Executes a script as the program entry point by handing it to its
//! interpreter directly, in a fresh child process.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, ExitStatus};

use anyhow::Context;

/// Script run when none is given.
pub const DEFAULT_SCRIPT: &str = "scripts/colab_notebook.py";

/// Exit code when the script path does not exist.
pub const SCRIPT_NOT_FOUND_EXIT: u8 = 2;

/// Interpreters tried, in order, when none is given.
const DEFAULT_INTERPRETERS: [&str; 2] = ["python3", "python"];

/// Execute the run command.
///
/// The runner's exit code is the script's exit code.
pub fn execute(
    script: &Path,
    interpreter: Option<&str>,
    args: &[String],
) -> anyhow::Result<ExitCode> {
    if !script.exists() {
        println!("Script not found: {}", script.display());
        return Ok(ExitCode::from(SCRIPT_NOT_FOUND_EXIT));
    }

    let interpreter = resolve_interpreter(interpreter)?;
    tracing::debug!(
        "Running {} with {} ({} args)",
        script.display(),
        interpreter.display(),
        args.len()
    );

    let status = entry_point_command(&interpreter, script, args)
        .status()
        .with_context(|| format!("Failed to start {}", interpreter.display()))?;

    tracing::debug!("Script exited with {}", status);
    Ok(ExitCode::from(exit_code(status)))
}

/// Find the interpreter binary, either the one requested or a Python on `PATH`.
pub fn resolve_interpreter(requested: Option<&str>) -> anyhow::Result<PathBuf> {
    match requested {
        Some(name) => {
            which::which(name).with_context(|| format!("Interpreter not found: {}", name))
        }
        None => DEFAULT_INTERPRETERS
            .iter()
            .find_map(|name| which::which(name).ok())
            .with_context(|| {
                format!(
                    "No interpreter found on PATH (tried {})",
                    DEFAULT_INTERPRETERS.join(", ")
                )
            }),
    }
}

/// Build the command that runs `script` as its interpreter's main program.
///
/// Passing the path as the program argument is direct invocation, so the
/// script's own entry-point guard (`if __name__ == "__main__":`) holds.
fn entry_point_command(interpreter: &Path, script: &Path, args: &[String]) -> Command {
    let mut cmd = Command::new(interpreter);
    cmd.arg(script).args(args);
    cmd
}

/// Map a child's exit status onto a process exit code.
///
/// Children killed by a signal have no code and map to 1.
fn exit_code(status: ExitStatus) -> u8 {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_point_command_args() {
        let args = vec!["--flag".to_string(), "value".to_string()];
        let cmd = entry_point_command(Path::new("/usr/bin/python3"), Path::new("step.py"), &args);

        assert_eq!(cmd.get_program(), "/usr/bin/python3");
        let got: Vec<_> = cmd.get_args().collect();
        assert_eq!(got, vec!["step.py", "--flag", "value"]);
    }

    #[test]
    fn test_resolve_unknown_interpreter() {
        let err = resolve_interpreter(Some("definitely-not-an-interpreter-xyz")).unwrap_err();
        assert!(err.to_string().contains("Interpreter not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_explicit_interpreter() {
        let path = resolve_interpreter(Some("sh")).unwrap();
        assert!(path.ends_with("sh"));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_mapping() {
        use std::os::unix::process::ExitStatusExt;

        assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code(ExitStatus::from_raw(7 << 8)), 7);
        // SIGKILL
        assert_eq!(exit_code(ExitStatus::from_raw(9)), 1);
    }

    #[test]
    fn test_missing_script_not_executed() {
        // A bogus interpreter would fail resolution, so reaching Ok proves
        // the runner stopped before resolving or spawning anything.
        let code = execute(
            Path::new("/nonexistent/script.py"),
            Some("definitely-not-an-interpreter-xyz"),
            &[],
        )
        .unwrap();
        assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::from(SCRIPT_NOT_FOUND_EXIT)));
    }
}
