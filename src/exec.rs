//! External tool invocation.
//!
//! The documentation builder and the archiver are opaque collaborators: this
//! module runs them and maps non-zero exits to [`ToolError`]. Commands depend
//! on the [`Executor`] trait so tests can substitute a stub that records
//! invocations instead of spawning real processes.

use std::path::Path;
use std::process::{Command, Output};

use crate::error::ToolError;

/// Result of a command execution.
#[derive(Debug)]
pub struct ExecResult {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Whether the command exited zero.
    pub success: bool,
    /// Exit code, if the process terminated normally.
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Abstraction over process execution, implemented by [`SystemExecutor`] in
/// production and by recording stubs in tests.
pub trait Executor: std::fmt::Debug {
    /// Run a program in `dir` and fail if it exits non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Spawn`] if the program cannot be started and
    /// [`ToolError::Failed`] if it exits non-zero.
    fn run_in(&self, dir: &Path, program: &str, args: &[&str]) -> Result<ExecResult, ToolError>;

    /// Check if a program is available on `PATH`.
    fn which(&self, program: &str) -> bool;
}

/// [`Executor`] backed by [`std::process::Command`].
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run_in(&self, dir: &Path, program: &str, args: &[&str]) -> Result<ExecResult, ToolError> {
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|source| ToolError::Spawn {
                tool: program.to_string(),
                source,
            })?;
        let result = ExecResult::from(output);
        if result.success {
            Ok(result)
        } else {
            Err(ToolError::Failed {
                tool: program.to_string(),
                code: result.code.unwrap_or(-1),
                stderr: result.stderr.trim().to_string(),
            })
        }
    }

    fn which(&self, program: &str) -> bool {
        #[cfg(target_os = "windows")]
        let check = Command::new("where").arg(program).output();

        #[cfg(not(target_os = "windows"))]
        let check = Command::new("which").arg(program).output();

        check.is_ok_and(|o| o.status.success())
    }
}
