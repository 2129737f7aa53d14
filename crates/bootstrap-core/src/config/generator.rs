//! Default configuration document

use crate::error::ConfigError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// The document written when no config file exists yet
pub const DEFAULT_CONFIG: &str = include_str!("../../config/default.json");

/// Write the default config to `path` unless a file is already there.
///
/// Returns `true` when the file was created. Parent directories are created
/// as needed. An existing file is never touched.
pub fn write_default_if_missing(path: &Path) -> Result<bool, ConfigError> {
    let create_err = |source| ConfigError::Create {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(create_err)?;
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => {
            fill_new_file(path, file, DEFAULT_CONFIG.as_bytes()).map_err(create_err)?;
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(create_err(e)),
    }
}

/// Write `contents` into a file just created at `path`. On failure the
/// partial file is removed so the next run writes the default again.
fn fill_new_file(path: &Path, mut file: impl Write, contents: &[u8]) -> std::io::Result<()> {
    let written = file.write_all(contents).and_then(|()| file.flush());
    if written.is_err() {
        drop(file);
        if let Err(e) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove partial config");
        }
    }
    written
}
