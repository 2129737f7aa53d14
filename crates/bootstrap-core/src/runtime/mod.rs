//! External tool detection and invocation
//!
//! This module provides:
//! - Generic tool management (PATH checks, versions, captured runs)
//! - Preflight detection of git and PowerShell
//! - The `SourceControl` and `PackageManager` seams used by the workflow

pub mod check;
pub mod git;
pub mod powershell;
pub mod tool;

pub use check::{check_git, check_pwsh, check_tools, RuntimeInfo};
pub use git::{GitCli, SourceControl};
pub use powershell::{PackageManager, PowerShellGallery};
pub use tool::{ToolConfig, ToolManager, ToolOutput};
