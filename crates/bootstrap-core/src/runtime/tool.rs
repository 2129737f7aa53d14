//! Generic management of the external CLI tools the bootstrapper drives
//!
//! Provides a reusable abstraction for checking that a tool is on PATH,
//! reading its version and running it with captured output.

use crate::error::ToolError;
use std::ffi::OsStr;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Configuration for a CLI tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "git")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Argument that makes the tool print its version
    pub version_arg: &'static str,
    /// URL to the installation documentation
    pub docs_url: &'static str,
}

/// Captured result of a successful tool run
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// Stdout and stderr joined, trimmed, for diagnostics
    pub fn combined(&self) -> String {
        combine(&self.stdout, &self.stderr)
    }
}

fn combine(stdout: &str, stderr: &str) -> String {
    match (stdout.trim(), stderr.trim()) {
        ("", err) => err.to_string(),
        (out, "") => out.to_string(),
        (out, err) => format!("{}\n{}", out, err),
    }
}

/// Manager for checking and running CLI tools
#[derive(Debug, Clone)]
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    /// Create a new tool manager with the given configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Get the tool configuration
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Check if the tool is installed and available in PATH
    pub fn is_installed(&self) -> bool {
        std::process::Command::new("which")
            .arg(self.config.name)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Get the installed tool version (if available)
    pub fn get_version(&self) -> Option<String> {
        std::process::Command::new(self.config.name)
            .arg(self.config.version_arg)
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .map(|s| s.trim().to_string())
                } else {
                    None
                }
            })
    }

    /// Run the tool to completion and capture its output.
    ///
    /// `action` names the operation in error messages ("clone", "install").
    /// A non-zero exit status is an error carrying the code and the output.
    pub async fn run<I, S>(
        &self,
        action: &str,
        args: I,
    ) -> Result<ToolOutput, ToolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = TokioCommand::new(self.config.name);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::debug!(tool = self.config.name, action, "running external tool");

        let output = command.output().await.map_err(|source| ToolError::Spawn {
            tool: self.config.name.to_string(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            let output = ToolOutput { stdout, stderr };
            tracing::debug!(tool = self.config.name, action, output = %output.combined(), "tool finished");
            Ok(output)
        } else {
            Err(ToolError::Failed {
                tool: self.config.name.to_string(),
                action: action.to_string(),
                code: output.status.code(),
                output: combine(&stdout, &stderr),
            })
        }
    }
}

/// Pre-configured tool manager for git
pub fn git_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        name: "git",
        display_name: "Git",
        version_arg: "--version",
        docs_url: "https://git-scm.com/downloads",
    })
}

/// Pre-configured tool manager for PowerShell
pub fn pwsh_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        name: "pwsh",
        display_name: "PowerShell",
        version_arg: "-Version",
        docs_url: "https://learn.microsoft.com/powershell/scripting/install/installing-powershell",
    })
}
