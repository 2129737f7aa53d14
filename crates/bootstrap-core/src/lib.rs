//! Bootstrap Core - Shared library for setting up framework workspaces
//!
//! This library turns a declarative JSON config into a ready-to-run
//! automation framework workspace: a fixed directory layout, installed
//! packages, git modules mirrored under `modules/`, and a generated launcher
//! script that wires them together.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Scaffolding, config loading, package installs,
//!   module sync/prune and launcher rendering
//! - **Layer 2: Workflow Orchestration** - `Bootstrapper`, generic over the
//!   `PackageManager` and `SourceControl` it drives
//! - **Layer 3: Tools** - `ToolManager` wrappers around `git` and `pwsh`
//!
//! # Example Usage
//!
//! ```ignore
//! use bootstrap_core::{Bootstrapper, GitCli, PowerShell, PowerShellGallery, Workspace};
//!
//! let boot = Bootstrapper::new(
//!     Workspace::new("."),
//!     PowerShellGallery::new(),
//!     GitCli::new(),
//!     PowerShell,
//! );
//! let report = boot.run("configs/framework.json".as_ref()).await?;
//! bootstrap_core::print_summary(&report);
//! ```

pub mod config;
pub mod error;
pub mod launcher;
pub mod modules;
pub mod packages;
pub mod runtime;
pub mod summary;
pub mod workflow;
pub mod workspace;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use config::{FrameworkConfig, FrameworkConfigFile, DEFAULT_CONFIG_PATH};
pub use error::{ConfigError, ManifestError, ToolError};
pub use launcher::{Directive, LauncherPlan, PowerShell, ScriptDialect};
pub use modules::{RequiredModules, SyncOutcome};
pub use runtime::{check_tools, GitCli, PackageManager, PowerShellGallery, SourceControl};
pub use summary::print_summary;
pub use workflow::{Bootstrapper, RunReport};
pub use workspace::Workspace;
