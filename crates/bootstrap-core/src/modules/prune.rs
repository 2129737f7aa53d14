//! Removal of module folders that are no longer required

use super::RequiredModules;
use std::path::Path;
use walkdir::WalkDir;

/// Folders removed, and folders that could not be removed, by one prune pass
#[derive(Debug, Clone, Default)]
pub struct PruneReport {
    pub removed: Vec<String>,
    pub failed: Vec<(String, String)>,
}

/// Delete every directory directly under `modules_dir` that is not in `required`.
///
/// Plain files are left alone. Deletion failures are reported, not returned as errors.
pub fn prune_stale(modules_dir: &Path, required: &RequiredModules) -> PruneReport {
    let mut report = PruneReport::default();

    let entries = WalkDir::new(modules_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %modules_dir.display(), error = %e, "cannot list modules directory");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if required.contains(&name) {
            continue;
        }

        tracing::info!(module = %name, "removing stale module");
        match std::fs::remove_dir_all(entry.path()) {
            Ok(()) => report.removed.push(name),
            Err(e) => {
                tracing::error!(module = %name, error = %e, "failed to remove stale module");
                report.failed.push((name, e.to_string()));
            }
        }
    }

    report
}
