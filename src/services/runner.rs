use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

#[derive(thiserror::Error, Debug)]
pub enum FlowError {
    #[error("cannot open log file {path}: {source}")]
    Log {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },
    #[error("{program} exited with {status}")]
    Exited { program: String, status: ExitStatus },
}

impl FlowError {
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            FlowError::Exited { status, .. } => status.code(),
            _ => None,
        }
    }
}

/// Runs `program` in `cwd` and waits for it, sending stdout and stderr into
/// `log_path` (truncated first). No timeout is applied.
pub fn run_logged(
    program: &Path,
    args: &[String],
    cwd: &Path,
    log_path: &Path,
) -> Result<(), FlowError> {
    let log_err = |source| FlowError::Log {
        path: log_path.to_path_buf(),
        source,
    };
    let mut stdout = File::create(log_path).map_err(log_err)?;
    let stderr = stdout.try_clone().map_err(log_err)?;

    let program_name = program.display().to_string();
    tracing::info!(program = %program_name, ?args, cwd = %cwd.display(), "launching tool");

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout.try_clone().map_err(log_err)?))
        .stderr(Stdio::from(stderr))
        .status();

    let status = match status {
        Ok(s) => s,
        Err(source) => {
            if let Err(e) = writeln!(stdout, "failed to launch {}: {}", program_name, source) {
                tracing::warn!(
                    path = %log_path.display(),
                    error = %e,
                    "could not record launch failure in log"
                );
            }
            return Err(FlowError::Launch {
                program: program_name,
                source,
            });
        }
    };

    tracing::info!(program = %program_name, %status, "tool finished");
    if status.success() {
        Ok(())
    } else {
        Err(FlowError::Exited {
            program: program_name,
            status,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::{run_logged, FlowError};
    use crate::services::toolchain::test_support::write_stub;
    use tempfile::TempDir;

    #[test]
    fn failing_tool_reports_exit_code_and_keeps_log() {
        let tmp = TempDir::new().expect("temp dir");
        let tool = write_stub(&tmp.path().join("bin"), "openroad", "echo routing failed >&2\nexit 1");
        let log = tmp.path().join("run.log");

        let err = run_logged(&tool, &[], tmp.path(), &log).expect_err("should fail");
        assert!(matches!(err, FlowError::Exited { .. }));
        assert_eq!(err.exit_code(), Some(1));
        let text = std::fs::read_to_string(&log).expect("log");
        assert!(text.contains("routing failed"));
    }

    #[test]
    fn successful_tool_captures_both_streams() {
        let tmp = TempDir::new().expect("temp dir");
        let tool = write_stub(
            &tmp.path().join("bin"),
            "openroad",
            "echo \"args: $*\"\necho warn >&2\nexit 0",
        );
        let log = tmp.path().join("run.log");
        std::fs::write(&log, "previous run output\n").expect("seed log");

        run_logged(&tool, &["-no_splash".to_string(), "x.tcl".to_string()], tmp.path(), &log)
            .expect("tool ok");
        let text = std::fs::read_to_string(&log).expect("log");
        assert!(text.contains("args: -no_splash x.tcl"));
        assert!(text.contains("warn"));
        assert!(!text.contains("previous run output"));
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let tmp = TempDir::new().expect("temp dir");
        let log = tmp.path().join("run.log");
        let err = run_logged(&tmp.path().join("nope"), &[], tmp.path(), &log)
            .expect_err("should fail");
        assert!(matches!(err, FlowError::Launch { .. }));
        let text = std::fs::read_to_string(&log).expect("log");
        assert!(text.contains("failed to launch"));
    }

    #[test]
    fn tool_runs_in_the_given_directory() {
        let tmp = TempDir::new().expect("temp dir");
        let tool = write_stub(&tmp.path().join("bin"), "openroad", "echo hi > marker.txt");
        let work = tmp.path().join("work");
        std::fs::create_dir_all(&work).expect("mkdir");
        run_logged(&tool, &[], &work, &tmp.path().join("run.log")).expect("tool ok");
        assert!(work.join("marker.txt").exists());
    }
}
