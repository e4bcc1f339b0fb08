//! The `clean` command: sweep generated artifacts from the project tree.

use anyhow::Result;

use super::Context;
use crate::fsops;

/// Run the clean command.
///
/// Removes editor backup files, bytecode cache directories, the generated
/// documentation directory, and any existing archive. Absent targets are
/// skipped, so a clean tree cleans successfully.
///
/// # Errors
///
/// Returns an error if an existing target cannot be removed.
pub fn run(ctx: &Context) -> Result<()> {
    ctx.log.stage("Cleaning generated artifacts");

    if ctx.dry_run {
        ctx.log.dry_run(&format!(
            "would remove backup files and {} directories under {}",
            fsops::CACHE_DIR_NAME,
            ctx.settings.root.display()
        ));
        ctx.log
            .dry_run(&format!("would remove {}", ctx.settings.doc.display()));
        ctx.log
            .dry_run(&format!("would remove {}", ctx.settings.archive.display()));
        return Ok(());
    }

    let backups = fsops::remove_backup_files(&ctx.settings.root)?;
    ctx.log.debug(&format!("removed {backups} backup file(s)"));

    let caches = fsops::remove_cache_dirs(&ctx.settings.root)?;
    ctx.log.debug(&format!("removed {caches} cache directory(ies)"));

    if fsops::remove_dir_if_exists(&ctx.settings.doc)? {
        ctx.log
            .info(&format!("removed {}", ctx.settings.doc.display()));
    }
    if fsops::remove_file_if_exists(&ctx.settings.archive)? {
        ctx.log
            .info(&format!("removed {}", ctx.settings.archive.display()));
    }

    Ok(())
}
