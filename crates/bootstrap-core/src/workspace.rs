//! Workspace directory layout

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const SCRIPTS_DIR: &str = "scripts";
pub const MODULES_DIR: &str = "modules";
pub const CONFIGS_DIR: &str = "configs";
pub const LOGS_DIR: &str = "logs";
pub const TESTS_DIR: &str = "tests";

/// Directories every workspace has, in creation order
pub const LAYOUT: &[&str] = &[SCRIPTS_DIR, MODULES_DIR, CONFIGS_DIR, LOGS_DIR, TESTS_DIR];

/// Generated launcher, relative to the workspace root
pub const LAUNCHER_FILE: &str = "launcher.ps1";

/// A framework workspace rooted at a directory
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn modules_dir(&self) -> PathBuf {
        self.root.join(MODULES_DIR)
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join(SCRIPTS_DIR)
    }

    pub fn launcher_path(&self) -> PathBuf {
        self.root.join(LAUNCHER_FILE)
    }

    /// Resolve a config path given on the command line against the root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Create any missing layout directories. Returns the ones created.
    pub fn scaffold(&self) -> Result<Vec<&'static str>> {
        let mut created = Vec::new();
        for name in LAYOUT {
            let dir = self.root.join(name);
            if dir.is_dir() {
                continue;
            }
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
            tracing::info!(dir = %dir.display(), "created directory");
            created.push(*name);
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold_creates_layout_once() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::new(dir.path());

        let created = workspace.scaffold().unwrap();
        assert_eq!(created, LAYOUT.to_vec());
        for name in LAYOUT {
            assert!(dir.path().join(name).is_dir());
        }

        assert!(workspace.scaffold().unwrap().is_empty());
    }

    #[test]
    fn test_scaffold_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(SCRIPTS_DIR)).unwrap();
        std::fs::write(dir.path().join(SCRIPTS_DIR).join("main.ps1"), "Write-Host hi").unwrap();

        let created = Workspace::new(dir.path()).scaffold().unwrap();
        assert!(!created.contains(&SCRIPTS_DIR));
        assert!(dir.path().join(SCRIPTS_DIR).join("main.ps1").exists());
    }

    #[test]
    fn test_resolve_relative_config_path() {
        let workspace = Workspace::new("/srv/work");
        assert_eq!(
            workspace.resolve(Path::new("configs/framework.json")),
            PathBuf::from("/srv/work/configs/framework.json")
        );
        assert_eq!(
            workspace.resolve(Path::new("/etc/framework.json")),
            PathBuf::from("/etc/framework.json")
        );
    }
}
