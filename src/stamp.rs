//! Metadata stamping for the documentation configuration file.
//!
//! The documentation builder reads three top-level assignments from its
//! configuration file: `project`, `copyright`, and `author`. Stamping rewrites
//! the first matching line for each key to a fixed quoted literal derived from
//! the configured project and author names, leaving every other line
//! byte-identical. A key with no matching line is skipped silently; no line is
//! ever inserted.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::StampError;

/// Year written into the stamped `copyright` line.
const COPYRIGHT_YEAR: &str = "2017";

/// Institution written into the stamped `copyright` line.
const INSTITUTION: &str = "Univ. Lille1";

/// The three assignment keys recognised by the stamper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampKey {
    /// `project = "<ProjectName>"`
    Project,
    /// `copyright = "<year>, <AuthorName>, <institution>"`
    Copyright,
    /// `author = "<AuthorName>"`
    Author,
}

impl StampKey {
    /// All keys, in the order they are reported.
    pub const ALL: [Self; 3] = [Self::Project, Self::Copyright, Self::Author];

    /// The assignment token this key matches at the start of a line.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Copyright => "copyright",
            Self::Author => "author",
        }
    }

    /// The full replacement line (without terminator) for this key.
    #[must_use]
    pub fn replacement(self, project: &str, author: &str) -> String {
        match self {
            Self::Project => format!("project = \"{project}\""),
            Self::Copyright => {
                format!("copyright = \"{COPYRIGHT_YEAR}, {author}, {INSTITUTION}\"")
            }
            Self::Author => format!("author = \"{author}\""),
        }
    }
}

impl fmt::Display for StampKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Outcome of a stamping pass: which keys were rewritten and which had no
/// matching assignment line.
#[derive(Debug, Default)]
pub struct StampReport {
    /// Keys whose assignment line was replaced.
    pub stamped: Vec<StampKey>,
    /// Keys with no matching line in the document (skipped, by policy).
    pub skipped: Vec<StampKey>,
}

/// An ordered sequence of text lines read from a configuration file.
///
/// Lines keep their original terminators (`\n`, `\r\n`, or none on the final
/// line) so that rendering an unmodified document reproduces the input
/// byte-for-byte.
#[derive(Debug)]
pub struct ConfigDocument {
    lines: Vec<Line>,
}

/// One line of the document: content plus its original terminator.
#[derive(Debug)]
struct Line {
    content: String,
    terminator: &'static str,
}

impl ConfigDocument {
    /// Parse a document from raw file contents, preserving line terminators.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let lines = text
            .split_inclusive('\n')
            .map(|raw| {
                if let Some(stripped) = raw.strip_suffix("\r\n") {
                    Line {
                        content: stripped.to_string(),
                        terminator: "\r\n",
                    }
                } else if let Some(stripped) = raw.strip_suffix('\n') {
                    Line {
                        content: stripped.to_string(),
                        terminator: "\n",
                    }
                } else {
                    Line {
                        content: raw.to_string(),
                        terminator: "",
                    }
                }
            })
            .collect();
        Self { lines }
    }

    /// Number of lines in the document.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Render the document back to text, reproducing original terminators.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.content);
            out.push_str(line.terminator);
        }
        out
    }

    /// Replace the first assignment line for each key with its fixed literal.
    ///
    /// A line matches a key iff it starts (column 0) with the key token,
    /// followed by optional spaces or tabs and an equals sign. Indented or
    /// nested occurrences never match. Lines other than the first match per
    /// key are left untouched, preserving order and content exactly.
    pub fn stamp(&mut self, project: &str, author: &str) -> StampReport {
        let mut report = StampReport::default();
        for key in StampKey::ALL {
            let hit = self
                .lines
                .iter_mut()
                .find(|line| is_assignment(&line.content, key.token()));
            match hit {
                Some(line) => {
                    line.content = key.replacement(project, author);
                    report.stamped.push(key);
                }
                None => report.skipped.push(key),
            }
        }
        report
    }
}

/// Whether `line` is a top-level assignment of `key` (key token at column 0,
/// then optional spaces/tabs, then `=`).
fn is_assignment(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .map(|rest| rest.trim_start_matches([' ', '\t']))
        .and_then(|rest| rest.strip_prefix('='))
        .is_some()
}

/// Stamp the configuration file at `path` in place.
///
/// Reads the whole document, performs one replacement pass, and writes the
/// rewritten document back as a single write. Nothing is written when the file
/// cannot be read.
///
/// # Errors
///
/// Returns [`StampError::NotFound`] if the file does not exist, or
/// [`StampError::Io`] for any other read or write failure.
pub fn stamp_file(path: &Path, project: &str, author: &str) -> Result<StampReport, StampError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            StampError::NotFound {
                path: path.display().to_string(),
            }
        } else {
            StampError::Io {
                path: path.display().to_string(),
                source,
            }
        }
    })?;

    let mut doc = ConfigDocument::parse(&text);
    let report = doc.stamp(project, author);

    std::fs::write(path, doc.render()).map_err(|source| StampError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(report)
}
