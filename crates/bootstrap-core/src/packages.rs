//! Package installation for framework requirements

use crate::config::PackageRequirement;
use crate::launcher::Directive;
use crate::runtime::PackageManager;
use std::collections::BTreeSet;

/// Result of processing every package requirement
#[derive(Debug, Clone, Default)]
pub struct PackageReport {
    /// One `Import` per usable package, in processing order
    pub imports: Vec<Directive>,
    /// Packages that could not be installed this run
    pub failed: BTreeSet<String>,
}

/// Collapse duplicate names. The last declaration wins and keeps the
/// position of its last occurrence.
fn dedup_last_wins(requirements: &[PackageRequirement]) -> Vec<&PackageRequirement> {
    let mut seen = BTreeSet::new();
    let mut kept: Vec<_> = requirements
        .iter()
        .rev()
        .filter(|&req| seen.insert(req.name.as_str()))
        .collect();
    kept.reverse();
    kept
}

/// Make sure each required package is available, installing missing ones
/// at their pinned version. Failures are recorded and never stop the loop.
pub async fn install_packages<P: PackageManager>(
    manager: &P,
    requirements: &[PackageRequirement],
) -> PackageReport {
    let mut report = PackageReport::default();
    let unique = dedup_last_wins(requirements);
    if unique.len() != requirements.len() {
        tracing::warn!(
            duplicates = requirements.len() - unique.len(),
            "duplicate package names in config; last declaration wins"
        );
    }

    for req in unique {
        if manager.is_available(&req.name).await {
            tracing::debug!(package = %req.name, "package already available");
        } else {
            tracing::info!(package = %req.name, version = %req.version, "installing package");
            if let Err(e) = manager.install(&req.name, &req.version).await {
                tracing::error!(package = %req.name, version = %req.version, error = %e, "package install failed");
                report.failed.insert(req.name.clone());
                continue;
            }
        }
        report.imports.push(Directive::import(&req.name));
    }

    report
}
