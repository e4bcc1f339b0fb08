//! The `doc` command: stamp metadata, then build HTML documentation with the
//! external builder.

use anyhow::Result;

use super::{Context, author};

/// External documentation builder invoked against the source directory.
pub const BUILDER: &str = "sphinx-build";

/// Run the doc command.
///
/// Stamps the configuration file first so the generated pages carry the
/// configured project/author metadata, then invokes [`BUILDER`] to produce
/// HTML output in the configured documentation directory.
///
/// # Errors
///
/// Returns an error if stamping fails or the builder exits non-zero; the
/// builder's failure is propagated unmodified.
pub fn run(ctx: &Context) -> Result<()> {
    author::run(ctx)?;

    ctx.log.stage("Building HTML documentation");

    let source = ctx.settings.source.display().to_string();
    let doc = ctx.settings.doc.display().to_string();

    if ctx.dry_run {
        ctx.log
            .dry_run(&format!("would run {BUILDER} -b html {source} {doc}"));
        return Ok(());
    }

    let result = ctx
        .executor
        .run_in(&ctx.settings.root, BUILDER, &["-b", "html", &source, &doc])?;
    for line in result.stdout.lines() {
        ctx.log.debug(line);
    }
    ctx.log.info(&format!("documentation written to {doc}"));

    Ok(())
}
