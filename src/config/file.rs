//! Parameters file loading.

use crate::config::Parameters;
use crate::error::{Error, Result};
use std::path::Path;

/// Load parameter groups from a TOML file.
///
/// The file must exist; a missing file is a read error, never a silent
/// fallback to defaults. Groups and fields absent from the file keep their
/// defaults.
pub fn load_parameters_file(path: &Path) -> Result<Parameters> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}
