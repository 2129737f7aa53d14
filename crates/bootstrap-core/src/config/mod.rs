//! Framework configuration file types and loading

pub mod generator;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

pub use generator::{write_default_if_missing, DEFAULT_CONFIG};

/// Config path used when the caller doesn't supply one, relative to the workspace root
pub const DEFAULT_CONFIG_PATH: &str = "configs/framework.json";

/// Branch or tag used for git modules that don't name one
pub const DEFAULT_MODULE_VERSION: &str = "main";

/// Root of the framework config document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkConfigFile {
    pub framework: FrameworkConfig,
    pub dependencies: Dependencies,
}

/// Framework identity and its entry point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkConfig {
    pub name: String,
    pub version: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub description: String,

    /// Script under `scripts/` the launcher invokes last
    pub entry_script: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(default)]
    pub packages: Vec<PackageRequirement>,

    #[serde(default)]
    pub git: Vec<GitModuleDescriptor>,
}

/// A package the framework needs, pinned to an exact version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRequirement {
    pub name: String,
    pub version: String,
}

/// A git repository mirrored into `modules/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitModuleDescriptor {
    pub url: String,

    /// Branch or tag to clone and pull
    #[serde(default = "default_module_version")]
    pub version: String,

    /// Every other key on the entry. Offered to the module as global settings.
    #[serde(flatten)]
    pub settings: BTreeMap<String, Value>,
}

fn default_module_version() -> String {
    DEFAULT_MODULE_VERSION.to_string()
}

impl GitModuleDescriptor {
    /// Look up a setting value as a string.
    ///
    /// Strings are returned as-is, numbers and booleans are stringified.
    /// `Err` carries the raw value when it can't be used as a setting.
    pub fn setting(&self, name: &str) -> Option<Result<String, &Value>> {
        self.settings.get(name).map(|value| match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(other),
        })
    }
}

/// Load the config at `path`, writing the built-in default first if the file is missing
pub fn load_or_create(path: &Path) -> Result<FrameworkConfigFile, ConfigError> {
    if write_default_if_missing(path)? {
        tracing::info!(path = %path.display(), "wrote default config");
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: FrameworkConfigFile =
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        framework = %config.framework.name,
        version = %config.framework.version,
        packages = config.dependencies.packages.len(),
        modules = config.dependencies.git.len(),
        "loaded config"
    );

    Ok(config)
}
