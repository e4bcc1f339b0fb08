// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed test project and a recording executor
// so each integration test can set up an isolated environment without
// repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use docmake::commands::Context;
use docmake::config::Settings;
use docmake::error::ToolError;
use docmake::exec::{ExecResult, Executor};
use docmake::logging::Logger;

/// Documentation configuration file used by the stamping scenarios: one
/// top-level assignment per stamped key plus five unrelated lines.
pub const SAMPLE_CONF: &str = "\
# Configuration file for the documentation builder.\n\
import os\n\
import sys\n\
project = \"Old\"\n\
copyright = \"2010, Someone, X\"\n\
author = \"Someone\"\n\
extensions = []\n\
html_theme = \"alabaster\"\n";

/// Write the minimal project layout required by the orchestrator into `root`.
///
/// Creates:
/// - `docmake.toml` — project/author names (Recursion / Kim Vallée)
/// - `src/conf.py`  — [`SAMPLE_CONF`]
/// - `src/cell.py`  — a placeholder source module
/// - `README.md`
pub fn setup_project(root: &Path) {
    std::fs::create_dir_all(root.join("src")).expect("create src dir");
    std::fs::write(
        root.join("docmake.toml"),
        "[project]\nname = \"Recursion\"\nauthor = \"Kim Vallée\"\n",
    )
    .expect("write docmake.toml");
    std::fs::write(root.join("src/conf.py"), SAMPLE_CONF).expect("write conf.py");
    std::fs::write(root.join("src/cell.py"), "class Cell:\n    pass\n").expect("write cell.py");
    std::fs::write(root.join("README.md"), "# Recursion\n").expect("write README.md");
}

/// One recorded external invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Working directory the program was launched from.
    pub dir: PathBuf,
    /// Program name.
    pub program: String,
    /// Program arguments.
    pub args: Vec<String>,
}

/// Stub executor that records invocations instead of spawning processes.
///
/// `which()` returns the configured `which_result` value; `run_in` succeeds
/// with empty output unless `fail_with_code` is set.
#[derive(Debug)]
pub struct RecordingExecutor {
    /// All `run_in` invocations, in order.
    pub calls: Mutex<Vec<Invocation>>,
    /// Value returned by `which()` regardless of program name.
    pub which_result: bool,
    /// When set, every `run_in` fails with this exit code.
    pub fail_with_code: Option<i32>,
}

impl Default for RecordingExecutor {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            which_result: true,
            fail_with_code: None,
        }
    }
}

impl RecordingExecutor {
    /// Programs invoked so far, in order.
    pub fn programs(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("calls lock")
            .iter()
            .map(|c| c.program.clone())
            .collect()
    }
}

impl Executor for RecordingExecutor {
    fn run_in(&self, dir: &Path, program: &str, args: &[&str]) -> Result<ExecResult, ToolError> {
        self.calls.lock().expect("calls lock").push(Invocation {
            dir: dir.to_path_buf(),
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        });
        if let Some(code) = self.fail_with_code {
            return Err(ToolError::Failed {
                tool: program.to_string(),
                code,
                stderr: "stub failure".to_string(),
            });
        }
        Ok(ExecResult {
            stdout: String::new(),
            stderr: String::new(),
            success: true,
            code: Some(0),
        })
    }

    fn which(&self, _program: &str) -> bool {
        self.which_result
    }
}

/// An isolated test project backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct ProjectFixture {
    /// Temporary directory containing the test project.
    pub root: tempfile::TempDir,
    /// Executor shared with any [`Context`] built from this fixture.
    pub executor: Arc<RecordingExecutor>,
}

impl ProjectFixture {
    /// Create a fixture with the minimal project layout.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        setup_project(root.path());
        Self {
            root,
            executor: Arc::new(RecordingExecutor::default()),
        }
    }

    /// Create a fixture whose executor reports tools as unavailable or
    /// failing.
    pub fn with_executor(executor: RecordingExecutor) -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        setup_project(root.path());
        Self {
            root,
            executor: Arc::new(executor),
        }
    }

    /// Path to the project root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Path to the documentation configuration file.
    pub fn conf_path(&self) -> PathBuf {
        self.root.path().join("src/conf.py")
    }

    /// Load settings from the fixture's `docmake.toml`.
    pub fn settings(&self) -> Settings {
        Settings::load(self.root.path(), None, None).expect("load settings")
    }

    /// Build a command [`Context`] over this fixture.
    pub fn context(&self, dry_run: bool) -> Context {
        Context::new(
            self.settings(),
            Arc::clone(&self.executor) as Arc<dyn Executor>,
            Logger,
            dry_run,
        )
    }
}
