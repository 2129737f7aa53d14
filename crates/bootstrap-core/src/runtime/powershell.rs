//! Package management through the PowerShell module gallery

use super::tool::{pwsh_tool, ToolManager};
use crate::error::ToolError;

/// Host package manager used for framework package requirements
#[allow(async_fn_in_trait)]
pub trait PackageManager {
    /// Whether any version of the package is available locally
    async fn is_available(&self, name: &str) -> bool;

    /// Install exactly `version` of the package for the current user
    async fn install(&self, name: &str, version: &str) -> Result<(), ToolError>;
}

/// `PackageManager` backed by `pwsh` and PowerShellGet
#[derive(Debug, Clone)]
pub struct PowerShellGallery {
    tool: ToolManager,
}

impl PowerShellGallery {
    pub fn new() -> Self {
        Self { tool: pwsh_tool() }
    }

    async fn command(&self, action: &str, script: &str) -> Result<(), ToolError> {
        self.tool
            .run(
                action,
                ["-NoProfile", "-NonInteractive", "-Command", script],
            )
            .await?;
        Ok(())
    }
}

impl Default for PowerShellGallery {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageManager for PowerShellGallery {
    async fn is_available(&self, name: &str) -> bool {
        self.command("module check", &availability_script(name))
            .await
            .is_ok()
    }

    async fn install(&self, name: &str, version: &str) -> Result<(), ToolError> {
        self.command("install", &install_script(name, version)).await
    }
}

/// Quote a value as a PowerShell single-quoted string literal
pub(crate) fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn availability_script(name: &str) -> String {
    format!(
        "if (Get-Module -ListAvailable -Name {}) {{ exit 0 }} else {{ exit 1 }}",
        quote(name)
    )
}

fn install_script(name: &str, version: &str) -> String {
    format!(
        "Install-Module -Name {} -RequiredVersion {} -Scope CurrentUser -Force -ErrorAction Stop",
        quote(name),
        quote(version)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_doubles_single_quotes() {
        assert_eq!(quote("plain"), "'plain'");
        assert_eq!(quote("it's"), "'it''s'");
    }

    #[test]
    fn test_install_script_pins_version_and_user_scope() {
        let script = install_script("Pester", "5.5.0");
        assert!(script.contains("-Name 'Pester'"));
        assert!(script.contains("-RequiredVersion '5.5.0'"));
        assert!(script.contains("-Scope CurrentUser"));
    }

    #[test]
    fn test_availability_script_ignores_version() {
        let script = availability_script("Pester");
        assert!(script.contains("Get-Module -ListAvailable -Name 'Pester'"));
        assert!(!script.contains("RequiredVersion"));
    }
}
