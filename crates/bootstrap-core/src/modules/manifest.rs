//! Module manifest types and parsing

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the manifest inside a module folder
pub const MANIFEST_FILE: &str = "module.json";

/// Per-module manifest (`modules/<name>/module.json`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleManifest {
    pub module: ModuleSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleSection {
    /// Script to load, relative to the module folder
    pub entry_script: String,

    /// Setting names the module reads from global scope
    #[serde(default)]
    pub possible_settings: Vec<String>,
}

impl ModuleManifest {
    /// Read the manifest from a module folder. `Ok(None)` when there is none.
    pub fn read(module_dir: &Path) -> Result<Option<Self>, ManifestError> {
        let path = module_dir.join(MANIFEST_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ManifestError::Read { path, source }),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| ManifestError::Parse { path, source })
    }

    pub fn entry_script(&self) -> &str {
        &self.module.entry_script
    }

    pub fn possible_settings(&self) -> &[String] {
        &self.module.possible_settings
    }
}
