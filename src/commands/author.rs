//! The `author` command: stamp project/author metadata into the
//! documentation configuration file.

use anyhow::Result;

use super::Context;
use crate::stamp;

/// Run the author command.
///
/// # Errors
///
/// Returns an error if the configuration file is missing or cannot be
/// rewritten. A key with no matching assignment line is not an error; it is
/// reported as skipped.
pub fn run(ctx: &Context) -> Result<()> {
    ctx.log.stage("Stamping documentation metadata");

    if ctx.dry_run {
        ctx.log.dry_run(&format!(
            "would stamp {} with project \"{}\" and author \"{}\"",
            ctx.settings.conf.display(),
            ctx.settings.project,
            ctx.settings.author
        ));
        return Ok(());
    }

    let report = stamp::stamp_file(&ctx.settings.conf, &ctx.settings.project, &ctx.settings.author)?;

    for key in &report.stamped {
        ctx.log.info(&format!("stamped {key}"));
    }
    for key in &report.skipped {
        ctx.log
            .debug(&format!("no top-level {key} assignment, skipped"));
    }

    Ok(())
}
