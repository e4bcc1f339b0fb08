//! Top-level subcommand orchestration.

pub mod archive;
pub mod author;
pub mod clean;
pub mod doc;

use std::sync::Arc;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::config::{self, Settings};
use crate::exec::{Executor, SystemExecutor};
use crate::logging::Logger;

/// Shared state for one command invocation.
///
/// Encapsulates root resolution, settings loading, and the executor handle so
/// each command does not repeat the boilerplate. Tests build a `Context`
/// directly with a stub executor via [`Context::new`].
#[derive(Debug)]
pub struct Context {
    /// Resolved build settings.
    pub settings: Settings,
    /// Process executor for the external builder and archiver.
    pub executor: Arc<dyn Executor>,
    /// Logger shared by all steps of the command.
    pub log: Logger,
    /// Preview mode: log intended changes without applying them.
    pub dry_run: bool,
}

impl Context {
    /// Resolve the project root, load `docmake.toml`, and wire the system
    /// executor.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be determined or the settings file
    /// fails to load.
    pub fn init(global: &GlobalOpts, log: Logger) -> Result<Self> {
        let root = config::resolve_root(global.root.as_deref())?;

        log.stage("Loading settings");
        let settings = Settings::load(
            &root,
            global.project.as_deref(),
            global.author.as_deref(),
        )?;
        log.info(&format!(
            "project: {} ({})",
            settings.project, settings.author
        ));
        log.debug(&format!("root: {}", settings.root.display()));
        log.debug(&format!("conf: {}", settings.conf.display()));

        Ok(Self {
            settings,
            executor: Arc::new(SystemExecutor),
            log,
            dry_run: global.dry_run,
        })
    }

    /// Build a context from parts (used by integration tests).
    #[must_use]
    pub fn new(settings: Settings, executor: Arc<dyn Executor>, log: Logger, dry_run: bool) -> Self {
        Self {
            settings,
            executor,
            log,
            dry_run,
        }
    }
}
