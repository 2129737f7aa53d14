//! Launcher script generation
//!
//! The launcher is modeled as a list of [`Directive`] records collected by the
//! package installer and module synchronizer. Rendering to script text happens
//! in one place, through a [`ScriptDialect`].

pub mod dialect;

use crate::workspace::{MODULES_DIR, SCRIPTS_DIR};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub use dialect::{PowerShell, ScriptDialect};

/// One statement of the launcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Import an installed package
    Import { package: String },
    /// Set a global setting consumed by modules
    Assign { name: String, value: String },
    /// Dot-source a module entry script (path relative to the workspace root)
    Load { script: PathBuf },
    /// Run the framework entry script (path relative to the workspace root)
    Invoke { script: PathBuf },
}

impl Directive {
    pub fn import(package: impl Into<String>) -> Self {
        Self::Import {
            package: package.into(),
        }
    }

    /// Global setting assignment. The setting name is uppercased.
    pub fn assign(name: &str, value: impl Into<String>) -> Self {
        Self::Assign {
            name: name.to_uppercase(),
            value: value.into(),
        }
    }

    /// Load `entry_script` from inside the module folder `module`
    pub fn load(module: &str, entry_script: &str) -> Self {
        Self::Load {
            script: Path::new(MODULES_DIR)
                .join(module)
                .join(relative_script(entry_script)),
        }
    }

    /// Invoke `entry_script` from the scripts folder
    pub fn invoke(entry_script: &str) -> Self {
        Self::Invoke {
            script: Path::new(SCRIPTS_DIR).join(relative_script(entry_script)),
        }
    }
}

/// Entry scripts always live under their base folder; a leading separator
/// would make `join` replace the base.
fn relative_script(entry_script: &str) -> &str {
    let trimmed = entry_script.trim_start_matches(['/', '\\']);
    if trimmed.len() != entry_script.len() {
        tracing::warn!(
            entry_script,
            "entry script is absolute, resolving it under its base folder"
        );
    }
    trimmed
}

/// Directives contributed by one synchronized module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDirectives {
    pub module: String,
    /// Setting assignments followed by the entry-script load
    pub directives: Vec<Directive>,
}

/// Global settings handed to modules, keyed by uppercased name.
/// Later assignments of the same name replace earlier ones.
pub type SettingsContext = BTreeMap<String, String>;

/// Everything needed to render a launcher
#[derive(Debug, Clone)]
pub struct LauncherPlan {
    framework: String,
    version: String,
    imports: Vec<Directive>,
    modules: Vec<ModuleDirectives>,
    entry: Directive,
}

impl LauncherPlan {
    pub fn new(
        framework: &crate::config::FrameworkConfig,
        imports: Vec<Directive>,
        modules: Vec<ModuleDirectives>,
    ) -> Self {
        Self {
            framework: framework.name.clone(),
            version: framework.version.clone(),
            imports,
            modules,
            entry: Directive::invoke(&framework.entry_script),
        }
    }

    /// Directives in launcher order: imports, per-module blocks, framework entry
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.imports
            .iter()
            .chain(self.modules.iter().flat_map(|m| m.directives.iter()))
            .chain(std::iter::once(&self.entry))
    }

    /// The global settings the launcher will assign
    pub fn settings(&self) -> SettingsContext {
        self.directives()
            .filter_map(|d| match d {
                Directive::Assign { name, value } => Some((name.clone(), value.clone())),
                _ => None,
            })
            .collect()
    }

    /// Render the full launcher text
    pub fn render(&self, dialect: &impl ScriptDialect) -> String {
        let mut sections: Vec<Vec<String>> = Vec::new();
        sections.push(self.imports.iter().map(|d| dialect.render(d)).collect());
        for module in &self.modules {
            sections.push(module.directives.iter().map(|d| dialect.render(d)).collect());
        }
        sections.push(vec![dialect.render(&self.entry)]);

        let body = sections
            .into_iter()
            .filter(|lines| !lines.is_empty())
            .map(|lines| lines.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "{}\n{}\n",
            dialect.header(&self.framework, &self.version),
            body
        )
    }

    /// Render and overwrite the launcher at `path`
    pub fn write(&self, dialect: &impl ScriptDialect, path: &Path) -> Result<()> {
        let text = self.render(dialect);
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write launcher: {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote launcher");
        Ok(())
    }
}
