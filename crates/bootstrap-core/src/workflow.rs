//! The end-to-end bootstrap run

use crate::config::{self, FrameworkConfigFile};
use crate::launcher::{LauncherPlan, ScriptDialect};
use crate::modules::{self, PruneReport, SyncReport};
use crate::packages::{self, PackageReport};
use crate::runtime::{PackageManager, SourceControl};
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Everything a run did, for the summary and for callers
#[derive(Debug)]
pub struct RunReport {
    pub config_path: PathBuf,
    pub config: FrameworkConfigFile,
    pub created_dirs: Vec<&'static str>,
    pub packages: PackageReport,
    pub modules: SyncReport,
    pub pruned: PruneReport,
    pub plan: LauncherPlan,
    pub launcher_path: PathBuf,
}

/// Bootstraps a workspace with a given package manager and source control
pub struct Bootstrapper<P, S, D> {
    workspace: Workspace,
    packages: P,
    scm: S,
    dialect: D,
}

impl<P, S, D> Bootstrapper<P, S, D>
where
    P: PackageManager,
    S: SourceControl,
    D: ScriptDialect,
{
    pub fn new(workspace: Workspace, packages: P, scm: S, dialect: D) -> Self {
        Self {
            workspace,
            packages,
            scm,
            dialect,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Run every step in order.
    ///
    /// Only scaffolding, config loading and writing the launcher can fail the
    /// run. Package and module problems end up in the report.
    pub async fn run(&self, config_path: &Path) -> Result<RunReport> {
        let created_dirs = self.workspace.scaffold()?;

        let config_path = self.workspace.resolve(config_path);
        let config = config::load_or_create(&config_path)?;

        let entry = self
            .workspace
            .scripts_dir()
            .join(&config.framework.entry_script);
        if !entry.exists() {
            tracing::warn!(script = %entry.display(), "framework entry script not found; the launcher will fail until it exists");
        }

        let packages =
            packages::install_packages(&self.packages, &config.dependencies.packages).await;

        let modules_dir = self.workspace.modules_dir();
        let modules =
            modules::sync_modules(&self.scm, &modules_dir, &config.dependencies.git).await;

        let pruned = modules::prune_stale(&modules_dir, &modules.required);

        let plan = LauncherPlan::new(
            &config.framework,
            packages.imports.clone(),
            modules.modules.clone(),
        );
        let launcher_path = self.workspace.launcher_path();
        plan.write(&self.dialect, &launcher_path)
            .context("Failed to generate launcher")?;

        Ok(RunReport {
            config_path,
            config,
            created_dirs,
            packages,
            modules,
            pruned,
            plan,
            launcher_path,
        })
    }
}
