//! Typed errors for the pieces callers need to tell apart

use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a usable framework config. Always fatal for a run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to create default config at {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure of an external tool invocation (git, pwsh)
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} {action} failed with exit code {status}:\n{output}", status = display_code(.code))]
    Failed {
        tool: String,
        action: String,
        code: Option<i32>,
        output: String,
    },
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none (terminated by signal)".to_string(), |c| c.to_string())
}

/// Problems reading a module's `module.json`
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
