//! Project path resolution.

use crate::constants::paths;
use crate::error::{Error, Result};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Absolute project root: the directory holding this crate's manifest.
///
/// Fixed at compile time, so it does not depend on the caller's working
/// directory.
pub fn project_root() -> Result<PathBuf> {
    Ok(std::path::absolute(env!("CARGO_MANIFEST_DIR"))?)
}

/// Filesystem locations, all absolute and derived from one root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPaths {
    /// Project root.
    pub project_root: PathBuf,
    /// Input directory.
    pub input_dir: PathBuf,
    /// Output directory.
    pub output_dir: PathBuf,
    /// Primary macro-data workbook.
    pub data_file: PathBuf,
    /// Market-index workbook.
    pub nasdaq_file: PathBuf,
    /// Events workbook.
    pub events_file: PathBuf,
    /// Log file. Computed only; never created here.
    pub log_file: PathBuf,
}

impl ProjectPaths {
    /// Derive every path from `root`, making it absolute first.
    ///
    /// Touches nothing on disk.
    pub fn resolve(root: &Path) -> Result<Self> {
        let project_root = std::path::absolute(root)?;
        let input_dir = project_root.join(paths::INPUT_DIR);
        let output_dir = project_root.join(paths::OUTPUT_DIR);

        Ok(Self {
            data_file: input_dir.join(paths::DATA_FILE),
            nasdaq_file: input_dir.join(paths::NASDAQ_FILE),
            events_file: input_dir.join(paths::EVENTS_FILE),
            log_file: output_dir.join(paths::LOG_FILE),
            project_root,
            input_dir,
            output_dir,
        })
    }

    /// Create the input and output directories if absent.
    ///
    /// Only those two directories are ever created: a missing project root
    /// is an error, not something to build.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.input_dir, &self.output_dir] {
            match std::fs::create_dir(dir) {
                Ok(()) => debug!("Created directory: {}", dir.display()),
                // A concurrent loader may have won the race
                Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => {
                    debug!("Directory exists: {}", dir.display());
                }
                Err(e) => {
                    return Err(Error::DirectoryCreate {
                        path: dir.clone(),
                        source: e,
                    });
                }
            }
        }
        Ok(())
    }

    /// Every path attribute, labelled.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Path)> {
        [
            ("project_root", self.project_root.as_path()),
            ("input_dir", self.input_dir.as_path()),
            ("output_dir", self.output_dir.as_path()),
            ("data_file", self.data_file.as_path()),
            ("nasdaq_file", self.nasdaq_file.as_path()),
            ("events_file", self.events_file.as_path()),
            ("log_file", self.log_file.as_path()),
        ]
        .into_iter()
    }
}

/// Join `filename` onto `dir`.
///
/// Traversal segments are passed through untouched; only names the
/// filesystem cannot represent are rejected.
pub(crate) fn join_file(dir: &Path, filename: &str) -> Result<PathBuf> {
    if filename.is_empty() {
        return Err(Error::InvalidFileName {
            filename: filename.to_string(),
            reason: "file name is empty",
        });
    }
    if filename.contains('\0') {
        return Err(Error::InvalidFileName {
            filename: filename.escape_default().to_string(),
            reason: "file name contains a NUL byte",
        });
    }
    Ok(dir.join(filename))
}
