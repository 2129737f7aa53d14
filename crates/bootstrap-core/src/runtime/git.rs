//! Source control operations used to mirror modules

use super::tool::{git_tool, ToolManager};
use crate::error::ToolError;
use std::ffi::OsString;
use std::path::Path;

/// Clone and update operations on a module checkout
#[allow(async_fn_in_trait)]
pub trait SourceControl {
    /// Clone `url` at `branch` into `dest`. `dest` must not exist yet.
    async fn clone_repo(&self, url: &str, branch: &str, dest: &Path) -> Result<(), ToolError>;

    /// Pull `branch` from origin into the existing checkout at `dest`
    async fn pull(&self, dest: &Path, branch: &str) -> Result<(), ToolError>;
}

/// `SourceControl` backed by the git CLI
#[derive(Debug, Clone)]
pub struct GitCli {
    tool: ToolManager,
}

impl GitCli {
    pub fn new() -> Self {
        Self { tool: git_tool() }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceControl for GitCli {
    async fn clone_repo(&self, url: &str, branch: &str, dest: &Path) -> Result<(), ToolError> {
        self.tool
            .run("clone", clone_args(url, branch, dest))
            .await?;
        Ok(())
    }

    async fn pull(&self, dest: &Path, branch: &str) -> Result<(), ToolError> {
        self.tool
            .run("pull", pull_args(dest, branch))
            .await?;
        Ok(())
    }
}

/// Clone a single named branch or tag into `dest`
fn clone_args(url: &str, branch: &str, dest: &Path) -> Vec<OsString> {
    vec![
        "clone".into(),
        "--branch".into(),
        branch.into(),
        url.into(),
        dest.as_os_str().to_owned(),
    ]
}

/// Pull with an explicit git dir and work tree so the current directory
/// never matters.
fn pull_args(dest: &Path, branch: &str) -> Vec<OsString> {
    let mut git_dir = OsString::from("--git-dir=");
    git_dir.push(dest.join(".git"));
    let mut work_tree = OsString::from("--work-tree=");
    work_tree.push(dest);

    vec![
        git_dir,
        work_tree,
        "pull".into(),
        "origin".into(),
        branch.into(),
    ]
}
