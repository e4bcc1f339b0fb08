//! Build settings loading and project-root resolution.
//!
//! The project name and author name consumed by the stamper, plus the paths
//! the four operations act on, live in a `docmake.toml` file at the project
//! root:
//!
//! ```toml
//! [project]
//! name = "Recursion"
//! author = "Kim Vallée"
//!
//! [paths]                  # optional, defaults shown
//! conf = "src/conf.py"
//! source = "src"
//! doc = "doc"
//! archive = "recursion.tar.gz"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Name of the settings file that marks the project root.
pub const SETTINGS_FILE: &str = "docmake.toml";

/// Default documentation configuration file, relative to the root.
const DEFAULT_CONF: &str = "src/conf.py";

/// Default documentation source directory, relative to the root.
const DEFAULT_SOURCE: &str = "src";

/// Default documentation output directory, relative to the root.
const DEFAULT_DOC: &str = "doc";

/// Resolved build settings for one project.
///
/// All paths are absolute (joined onto `root`).
#[derive(Debug, Clone)]
pub struct Settings {
    /// Project root directory.
    pub root: PathBuf,
    /// Project name stamped into the `project` assignment.
    pub project: String,
    /// Author name stamped into the `copyright` and `author` assignments.
    pub author: String,
    /// Documentation configuration file targeted by stamping.
    pub conf: PathBuf,
    /// Source directory handed to the documentation builder.
    pub source: PathBuf,
    /// Output directory for generated HTML documentation.
    pub doc: PathBuf,
    /// Archive file produced by the `archive` operation.
    pub archive: PathBuf,
}

/// On-disk shape of `docmake.toml`.
#[derive(Debug, Deserialize)]
struct SettingsFile {
    project: ProjectSection,
    #[serde(default)]
    paths: PathsSection,
}

#[derive(Debug, Deserialize)]
struct ProjectSection {
    name: String,
    author: String,
}

#[derive(Debug, Default, Deserialize)]
struct PathsSection {
    conf: Option<PathBuf>,
    source: Option<PathBuf>,
    doc: Option<PathBuf>,
    archive: Option<PathBuf>,
}

impl Settings {
    /// Load settings from `<root>/docmake.toml`.
    ///
    /// `project_override` and `author_override` take precedence over the file
    /// (CLI `--project` / `--author`).
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file is missing, unreadable, or not
    /// valid TOML.
    pub fn load(
        root: &Path,
        project_override: Option<&str>,
        author_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let path = root.join(SETTINGS_FILE);
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file: SettingsFile = toml::from_str(&text).map_err(|e| ConfigError::InvalidSyntax {
            file: path.display().to_string(),
            message: e.to_string(),
        })?;

        let project = project_override.map_or(file.project.name, String::from);
        let author = author_override.map_or(file.project.author, String::from);

        let default_archive = PathBuf::from(format!("{}.tar.gz", project.to_lowercase()));
        let paths = file.paths;
        Ok(Self {
            root: root.to_path_buf(),
            conf: root.join(paths.conf.unwrap_or_else(|| PathBuf::from(DEFAULT_CONF))),
            source: root.join(paths.source.unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE))),
            doc: root.join(paths.doc.unwrap_or_else(|| PathBuf::from(DEFAULT_DOC))),
            archive: root.join(paths.archive.unwrap_or(default_archive)),
            project,
            author,
        })
    }
}

/// Resolve the project root directory from CLI arguments or auto-detection.
///
/// Order: explicit `--root` flag, the `DOCMAKE_ROOT` environment variable,
/// then the current directory if it contains [`SETTINGS_FILE`].
///
/// # Errors
///
/// Returns [`ConfigError::RootNotFound`] if no candidate contains a settings
/// file.
pub fn resolve_root(flag: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(root) = flag {
        return dunce::canonicalize(root).map_err(|source| ConfigError::Io {
            path: root.display().to_string(),
            source,
        });
    }

    if let Ok(root) = std::env::var("DOCMAKE_ROOT") {
        return Ok(PathBuf::from(root));
    }

    if let Ok(cwd) = std::env::current_dir()
        && cwd.join(SETTINGS_FILE).exists()
    {
        return Ok(cwd);
    }

    Err(ConfigError::RootNotFound)
}
