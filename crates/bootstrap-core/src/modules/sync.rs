//! Cloning and updating git modules

use super::manifest::ModuleManifest;
use super::name::derive_folder_name;
use super::RequiredModules;
use crate::config::GitModuleDescriptor;
use crate::launcher::{Directive, ModuleDirectives};
use crate::runtime::SourceControl;
use std::path::Path;

/// Terminal state of one descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Cloned or pulled successfully
    Synced,
    /// Clone or pull failed. `kept` is true when an existing checkout stays on disk.
    Failed { reason: String, kept: bool },
    /// No folder name could be derived from the url
    Skipped { reason: String },
}

/// What happened to one git descriptor
#[derive(Debug, Clone)]
pub struct ModuleReport {
    pub url: String,
    pub name: Option<String>,
    pub outcome: SyncOutcome,
}

/// Result of synchronizing every git descriptor
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Modules that must stay on disk; input to pruning
    pub required: RequiredModules,
    /// Launcher directives per synced module, in processing order
    pub modules: Vec<ModuleDirectives>,
    pub outcomes: Vec<ModuleReport>,
}

impl SyncReport {
    fn record(&mut self, url: &str, name: Option<&str>, outcome: SyncOutcome) {
        self.outcomes.push(ModuleReport {
            url: url.to_string(),
            name: name.map(str::to_string),
            outcome,
        });
    }

    /// Replace any earlier block for the same folder. Last descriptor wins.
    fn set_directives(&mut self, name: &str, directives: Option<Vec<Directive>>) {
        self.modules.retain(|m| m.module != name);
        if let Some(directives) = directives {
            self.modules.push(ModuleDirectives {
                module: name.to_string(),
                directives,
            });
        }
    }
}

/// Clone or pull every descriptor into `modules_dir`, in order.
///
/// Per descriptor:
/// - folder absent: clone. On failure the partial folder is removed and the
///   module is not required.
/// - folder present: pull. On failure the folder is kept and the module stays
///   required.
///
/// Synced modules with a manifest contribute setting assignments and an
/// entry-script load to the launcher.
pub async fn sync_modules<S: SourceControl>(
    scm: &S,
    modules_dir: &Path,
    descriptors: &[GitModuleDescriptor],
) -> SyncReport {
    let mut report = SyncReport::default();

    for descriptor in descriptors {
        let Some(name) = derive_folder_name(&descriptor.url) else {
            tracing::warn!(url = %descriptor.url, "cannot derive a module folder from url; skipping");
            report.record(
                &descriptor.url,
                None,
                SyncOutcome::Skipped {
                    reason: "no folder name in url".to_string(),
                },
            );
            continue;
        };

        if report.outcomes.iter().any(|o| o.name.as_deref() == Some(name.as_str())) {
            tracing::warn!(module = %name, url = %descriptor.url, "module folder collides with an earlier entry; last entry wins");
        }

        let dest = modules_dir.join(&name);
        let outcome = if dest.exists() {
            tracing::info!(module = %name, branch = %descriptor.version, "updating module");
            match scm.pull(&dest, &descriptor.version).await {
                Ok(()) => SyncOutcome::Synced,
                Err(e) => {
                    tracing::error!(module = %name, error = %e, "module update failed; keeping existing checkout");
                    report.required.insert(&name);
                    report.set_directives(&name, None);
                    SyncOutcome::Failed {
                        reason: e.to_string(),
                        kept: true,
                    }
                }
            }
        } else {
            tracing::info!(module = %name, url = %descriptor.url, branch = %descriptor.version, "cloning module");
            match scm.clone_repo(&descriptor.url, &descriptor.version, &dest).await {
                Ok(()) => SyncOutcome::Synced,
                Err(e) => {
                    tracing::error!(module = %name, error = %e, "module clone failed");
                    remove_partial_clone(&dest);
                    report.required.remove(&name);
                    report.set_directives(&name, None);
                    SyncOutcome::Failed {
                        reason: e.to_string(),
                        kept: false,
                    }
                }
            }
        };

        if outcome == SyncOutcome::Synced {
            report.required.insert(&name);
            let directives = manifest_directives(&name, &dest, descriptor);
            report.set_directives(&name, directives);
        }
        report.record(&descriptor.url, Some(name.as_str()), outcome);
    }

    report
}

fn remove_partial_clone(dest: &Path) {
    if !dest.exists() {
        return;
    }
    if let Err(e) = std::fs::remove_dir_all(dest) {
        tracing::warn!(path = %dest.display(), error = %e, "failed to remove partial clone");
    }
}

/// Directives for a synced module, or `None` when it has no usable manifest
fn manifest_directives(
    name: &str,
    dest: &Path,
    descriptor: &GitModuleDescriptor,
) -> Option<Vec<Directive>> {
    let manifest = match ModuleManifest::read(dest) {
        Ok(Some(manifest)) => manifest,
        Ok(None) => {
            tracing::debug!(module = %name, "no module manifest");
            return None;
        }
        Err(e) => {
            tracing::warn!(module = %name, error = %e, "ignoring module manifest");
            return None;
        }
    };

    let mut directives = Vec::new();
    for setting in manifest.possible_settings() {
        match descriptor.setting(setting) {
            Some(Ok(value)) => directives.push(Directive::assign(setting, value)),
            Some(Err(value)) => tracing::warn!(
                module = %name,
                setting = %setting,
                %value,
                "setting value must be a string, number or boolean; ignoring"
            ),
            None => {}
        }
    }
    directives.push(Directive::load(name, manifest.entry_script()));
    Some(directives)
}
