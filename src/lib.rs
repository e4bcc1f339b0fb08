//! Documentation build orchestrator.
//!
//! Reproduces a Makefile-driven documentation workflow as a small CLI with
//! four operations: `clean` (sweep generated artifacts), `author` (stamp
//! project/author metadata into the documentation configuration file), `doc`
//! (stamp, then run the external HTML builder), and `archive` (clean, then
//! tarball the project tree).
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]** — `docmake.toml` settings and project-root resolution
//! - **[`stamp`]** — the metadata stamper over line-oriented config documents
//! - **[`exec`]** / **[`fsops`]** — external tool invocation and clean primitives
//! - **[`commands`]** — top-level subcommand orchestration
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod fsops;
pub mod logging;
pub mod stamp;
