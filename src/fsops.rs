//! Filesystem primitives for the `clean` operation.
//!
//! Every removal helper is a no-op when its target is already absent, so the
//! `clean` command succeeds regardless of how much of the tree has been
//! generated.

use anyhow::{Context as _, Result};
use std::path::Path;

/// Suffix of editor backup files swept by [`remove_backup_files`].
pub const BACKUP_SUFFIX: &str = "~";

/// Name of the bytecode cache directories swept by [`remove_cache_dirs`].
pub const CACHE_DIR_NAME: &str = "__pycache__";

/// Remove a file if it exists. Returns `true` if something was removed.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    std::fs::remove_file(path).with_context(|| format!("removing {}", path.display()))?;
    Ok(true)
}

/// Remove a directory tree if it exists. Returns `true` if something was
/// removed.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be removed.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }
    std::fs::remove_dir_all(path).with_context(|| format!("removing {}", path.display()))?;
    Ok(true)
}

/// Recursively remove every file under `root` whose name ends with
/// [`BACKUP_SUFFIX`]. Returns the number of files removed.
///
/// # Errors
///
/// Returns an error if a directory cannot be read or a matching file cannot
/// be removed.
pub fn remove_backup_files(root: &Path) -> Result<usize> {
    sweep(root, &mut |entry| {
        let path = entry.path();
        if path.is_file()
            && entry
                .file_name()
                .to_string_lossy()
                .ends_with(BACKUP_SUFFIX)
        {
            std::fs::remove_file(&path).with_context(|| format!("removing {}", path.display()))?;
            return Ok(Swept::File);
        }
        Ok(Swept::None)
    })
}

/// Recursively remove every directory under `root` named [`CACHE_DIR_NAME`].
/// Returns the number of directories removed.
///
/// # Errors
///
/// Returns an error if a directory cannot be read or removed.
pub fn remove_cache_dirs(root: &Path) -> Result<usize> {
    sweep(root, &mut |entry| {
        let path = entry.path();
        if path.is_dir() && entry.file_name() == CACHE_DIR_NAME {
            std::fs::remove_dir_all(&path)
                .with_context(|| format!("removing {}", path.display()))?;
            return Ok(Swept::Dir);
        }
        Ok(Swept::None)
    })
}

/// What a sweep callback did with a directory entry.
enum Swept {
    /// Entry removed; it was a file, keep scanning its siblings.
    File,
    /// Entry removed along with its subtree; do not recurse into it.
    Dir,
    /// Entry untouched; recurse if it is a directory.
    None,
}

/// Walk the tree under `root`, invoking `visit` on each entry and counting
/// removals. Missing roots count as an empty sweep.
fn sweep(root: &Path, visit: &mut dyn FnMut(&std::fs::DirEntry) -> Result<Swept>) -> Result<usize> {
    if !root.is_dir() {
        return Ok(0);
    }
    let mut removed = 0;
    for entry in
        std::fs::read_dir(root).with_context(|| format!("reading directory {}", root.display()))?
    {
        let entry = entry.with_context(|| format!("reading entry in {}", root.display()))?;
        match visit(&entry)? {
            Swept::File | Swept::Dir => removed += 1,
            Swept::None => {
                let path = entry.path();
                if path.is_dir() {
                    removed += sweep(&path, visit)?;
                }
            }
        }
    }
    Ok(removed)
}
