//! Preflight detection for the tools a run shells out to

use super::tool::{git_tool, pwsh_tool, ToolManager};

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
    pub docs_url: &'static str,
}

fn check_tool(tool: &ToolManager) -> RuntimeInfo {
    let config = tool.config();
    let available = tool.is_installed();
    RuntimeInfo {
        name: config.display_name,
        version: if available { tool.get_version() } else { None },
        available,
        docs_url: config.docs_url,
    }
}

/// Check if git is available
pub fn check_git() -> RuntimeInfo {
    check_tool(&git_tool())
}

/// Check if PowerShell is available
pub fn check_pwsh() -> RuntimeInfo {
    check_tool(&pwsh_tool())
}

/// Check every tool a run needs. Advisory only: a missing tool is reported,
/// and the per-item operations that depend on it fail and get reported later.
pub fn check_tools() -> Vec<RuntimeInfo> {
    let results = vec![check_git(), check_pwsh()];

    for info in &results {
        match (info.available, &info.version) {
            (true, Some(version)) => tracing::debug!(tool = info.name, %version, "tool available"),
            (true, None) => tracing::debug!(tool = info.name, "tool available, version unknown"),
            (false, _) => tracing::warn!(
                tool = info.name,
                docs = info.docs_url,
                "tool not found on PATH; dependent steps will fail"
            ),
        }
    }

    results
}
