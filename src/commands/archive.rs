//! The `archive` command: clean, then tarball the whole project tree.

use anyhow::Result;

use super::{Context, clean};
use crate::error::ToolError;

/// External archiver invoked to produce the compressed tarball.
pub const ARCHIVER: &str = "tar";

/// Run the archive command.
///
/// Cleans the tree first so generated artifacts never end up in the archive,
/// then invokes [`ARCHIVER`] from the project root. The archive itself is
/// excluded from the tarball.
///
/// # Errors
///
/// Returns an error if cleaning fails, the archiver is not on `PATH`, or the
/// archiver exits non-zero.
pub fn run(ctx: &Context) -> Result<()> {
    clean::run(ctx)?;

    ctx.log.stage("Creating project archive");

    if !ctx.executor.which(ARCHIVER) {
        return Err(ToolError::Unavailable(ARCHIVER.to_string()).into());
    }

    let archive = ctx.settings.archive.display().to_string();
    let exclude = ctx
        .settings
        .archive
        .file_name()
        .map_or_else(|| archive.clone(), |name| name.to_string_lossy().to_string());

    if ctx.dry_run {
        ctx.log
            .dry_run(&format!("would run {ARCHIVER} czf {archive} ."));
        return Ok(());
    }

    ctx.executor.run_in(
        &ctx.settings.root,
        ARCHIVER,
        &["czf", &archive, "--exclude", &exclude, "."],
    )?;
    ctx.log.info(&format!("created {archive}"));

    Ok(())
}
