//! In-memory stand-ins for the external tools

use crate::error::ToolError;
use crate::runtime::{PackageManager, SourceControl};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

fn failure(tool: &str, action: &str) -> ToolError {
    ToolError::Failed {
        tool: tool.to_string(),
        action: action.to_string(),
        code: Some(1),
        output: format!("simulated {} failure", action),
    }
}

#[derive(Debug, Default)]
pub struct FakePackageManager {
    available: RefCell<BTreeSet<String>>,
    failing: BTreeSet<String>,
    installs: RefCell<Vec<(String, String)>>,
}

impl FakePackageManager {
    pub fn with_available(names: &[&str]) -> Self {
        let pm = Self::default();
        pm.available
            .borrow_mut()
            .extend(names.iter().map(|n| n.to_string()));
        pm
    }

    pub fn failing(mut self, names: &[&str]) -> Self {
        self.failing.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn installs(&self) -> Vec<(String, String)> {
        self.installs.borrow().clone()
    }
}

impl PackageManager for FakePackageManager {
    async fn is_available(&self, name: &str) -> bool {
        self.available.borrow().contains(name)
    }

    async fn install(&self, name: &str, version: &str) -> Result<(), ToolError> {
        self.installs
            .borrow_mut()
            .push((name.to_string(), version.to_string()));
        if self.failing.contains(name) {
            return Err(failure("pwsh", "install"));
        }
        self.available.borrow_mut().insert(name.to_string());
        Ok(())
    }
}

/// A recorded source control call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Clone { url: String, branch: String, dest: PathBuf },
    Pull { dest: PathBuf, branch: String },
}

/// Fake git. A successful clone creates the destination folder and, when one
/// is registered for the url, writes a `module.json` into it. A failing clone
/// leaves a partial folder behind, like an interrupted real clone.
#[derive(Debug, Default)]
pub struct FakeSourceControl {
    manifests: Vec<(String, String)>,
    failing_clones: BTreeSet<String>,
    failing_pulls: BTreeSet<PathBuf>,
    calls: RefCell<Vec<GitCall>>,
}

impl FakeSourceControl {
    pub fn with_manifest(mut self, url: &str, manifest: &str) -> Self {
        self.manifests.push((url.to_string(), manifest.to_string()));
        self
    }

    pub fn failing_clone(mut self, url: &str) -> Self {
        self.failing_clones.insert(url.to_string());
        self
    }

    pub fn failing_pull(mut self, dest: &Path) -> Self {
        self.failing_pulls.insert(dest.to_path_buf());
        self
    }

    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.borrow().clone()
    }
}

impl SourceControl for FakeSourceControl {
    async fn clone_repo(&self, url: &str, branch: &str, dest: &Path) -> Result<(), ToolError> {
        self.calls.borrow_mut().push(GitCall::Clone {
            url: url.to_string(),
            branch: branch.to_string(),
            dest: dest.to_path_buf(),
        });

        std::fs::create_dir_all(dest.join(".git")).map_err(|source| ToolError::Spawn {
            tool: "git".to_string(),
            source,
        })?;
        if self.failing_clones.contains(url) {
            return Err(failure("git", "clone"));
        }
        if let Some((_, manifest)) = self.manifests.iter().find(|(u, _)| u == url) {
            std::fs::write(dest.join("module.json"), manifest).map_err(|source| {
                ToolError::Spawn {
                    tool: "git".to_string(),
                    source,
                }
            })?;
        }
        Ok(())
    }

    async fn pull(&self, dest: &Path, branch: &str) -> Result<(), ToolError> {
        self.calls.borrow_mut().push(GitCall::Pull {
            dest: dest.to_path_buf(),
            branch: branch.to_string(),
        });
        if self.failing_pulls.contains(dest) {
            return Err(failure("git", "pull"));
        }
        Ok(())
    }
}
