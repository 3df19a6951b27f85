//! External command execution.
//!
//! The single seam between manifest orchestration and the outside
//! world: a [`CommandRunner`] runs one command to completion and
//! reports success or failure. Everything above this trait is pure
//! argument-list construction.

use std::process::{Command, Stdio};

use tracing::debug;

/// Why a command invocation failed.
#[derive(Debug)]
pub enum ExecFailure {
    /// The program could not be started (missing binary, permissions).
    Spawn(std::io::Error),
    /// The program ran and exited non-zero. `code` is -1 when the
    /// child was killed by a signal and no exit code exists.
    Exit { code: i32, stderr: String },
}

/// Runs one external command to completion.
///
/// `argv[0]` is the program; the rest are its arguments. A zero exit
/// status is success; anything else is a failure that must be
/// surfaced, never swallowed.
pub trait CommandRunner {
    fn run(&self, argv: &[String]) -> std::result::Result<(), ExecFailure>;
}

/// Production runner backed by `std::process::Command`.
///
/// Blocks until the child exits. Output is captured so the tool's
/// stderr can be attached to the error on failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostRunner;

impl CommandRunner for HostRunner {
    fn run(&self, argv: &[String]) -> std::result::Result<(), ExecFailure> {
        let program = argv.first().ok_or_else(|| {
            ExecFailure::Spawn(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "empty command line",
            ))
        })?;

        debug!(command = %argv.join(" "), "exec");

        let output = Command::new(program)
            .args(&argv[1..])
            .stdin(Stdio::null())
            .output()
            .map_err(ExecFailure::Spawn)?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ExecFailure::Exit {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_success() {
        let runner = HostRunner;
        let result = runner.run(&["true".to_string()]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_nonzero_exit() {
        let runner = HostRunner;
        let result = runner.run(&[
            "sh".to_string(),
            "-c".to_string(),
            "echo oops >&2; exit 7".to_string(),
        ]);
        match result {
            Err(ExecFailure::Exit { code, stderr }) => {
                assert_eq!(code, 7);
                assert_eq!(stderr, "oops");
            }
            other => panic!("expected Exit failure, got {:?}", other),
        }
    }

    #[test]
    fn test_run_missing_binary() {
        let runner = HostRunner;
        let result = runner.run(&["manifestctl-no-such-binary".to_string()]);
        assert!(matches!(result, Err(ExecFailure::Spawn(_))));
    }

    #[test]
    fn test_run_empty_argv() {
        let runner = HostRunner;
        let result = runner.run(&[]);
        assert!(matches!(result, Err(ExecFailure::Spawn(_))));
    }
}
