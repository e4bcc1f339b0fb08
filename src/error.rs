//! Domain-specific error types for the build orchestrator.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors (e.g., [`StampError`], [`ToolError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! DocmakeError
//! ├── Config(ConfigError) — docmake.toml loading, root resolution
//! ├── Stamp(StampError)   — configuration-file rewriting
//! └── Tool(ToolError)     — external builder/archiver invocations
//! ```

use thiserror::Error;

/// Top-level error type for the build orchestrator.
///
/// Aggregates domain-specific sub-errors and is convertible to
/// [`anyhow::Error`] for use at CLI command boundaries.
#[derive(Error, Debug)]
pub enum DocmakeError {
    /// Settings-related error (parsing, root resolution, I/O).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Metadata stamping error (missing or unwritable target file).
    #[error("Stamp error: {0}")]
    Stamp(#[from] StampError),

    /// External tool error (builder or archiver unavailable or failed).
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),
}

/// Errors that arise from settings loading and project-root resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The project root could not be determined.
    #[error("cannot determine project root. Use --root or set DOCMAKE_ROOT")]
    RootNotFound,

    /// The settings file contains a syntax error that prevents parsing.
    #[error("Invalid TOML in {file}: {message}")]
    InvalidSyntax {
        /// Path to the file that failed to parse.
        file: String,
        /// Parser diagnostic.
        message: String,
    },

    /// An I/O error occurred while reading the settings file.
    #[error("IO error reading settings file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise from stamping the documentation configuration file.
#[derive(Error, Debug)]
pub enum StampError {
    /// The target configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    NotFound {
        /// Path of the missing file.
        path: String,
    },

    /// Reading or rewriting the target file failed.
    #[error("IO error stamping {path}: {source}")]
    Io {
        /// Path of the file being stamped.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise from external tool invocations.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The required tool is not present on `PATH`.
    #[error("Required tool '{0}' not found on PATH")]
    Unavailable(String),

    /// The tool ran but exited non-zero; the exit status is propagated.
    #[error("{tool} failed (exit {code}): {stderr}")]
    Failed {
        /// Name of the tool that failed.
        tool: String,
        /// Exit code, or `-1` if terminated by signal.
        code: i32,
        /// Trimmed stderr output from the tool.
        stderr: String,
    },

    /// The tool could not be spawned at all.
    #[error("failed to execute {tool}: {source}")]
    Spawn {
        /// Name of the tool that could not be started.
        tool: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
