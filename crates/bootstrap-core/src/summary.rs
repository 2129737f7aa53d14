//! Operator-facing summary of a run

use crate::modules::SyncOutcome;
use crate::workflow::RunReport;
use colored::Colorize;

/// Print what a run did. Per-item failures are listed so the operator can act on them.
pub fn print_summary(report: &RunReport) {
    let framework = &report.config.framework;
    println!();
    println!(
        "{}",
        format!("Bootstrapped {} {}", framework.name, framework.version)
            .cyan()
            .bold()
    );
    println!();

    println!("  {} {}", "Config:".dimmed(), report.config_path.display());
    if !report.created_dirs.is_empty() {
        println!(
            "  {} {}",
            "Created:".dimmed(),
            report.created_dirs.join(", ")
        );
    }

    let imported = report.packages.imports.len();
    println!("  {} {} imported", "Packages:".dimmed(), imported);
    for name in &report.packages.failed {
        println!("    {} {} (install failed)", "x".red(), name);
    }

    println!(
        "  {} {} required",
        "Modules:".dimmed(),
        report.modules.required.len()
    );
    for module in &report.modules.outcomes {
        let label = module.name.as_deref().unwrap_or(&module.url);
        match &module.outcome {
            SyncOutcome::Synced => println!("    {} {}", "->".green(), label),
            SyncOutcome::Failed { reason, kept } => {
                let note = if *kept {
                    "update failed, keeping existing copy"
                } else {
                    "clone failed"
                };
                println!("    {} {} ({})", "x".red(), label, note);
                if let Some(first) = reason.lines().next() {
                    println!("      {}", first.dimmed());
                }
            }
            SyncOutcome::Skipped { reason } => {
                println!("    {} {} ({})", "-".yellow(), label, reason)
            }
        }
    }

    for name in &report.pruned.removed {
        println!("  {} {}", "Removed stale module:".dimmed(), name);
    }
    for (name, error) in &report.pruned.failed {
        println!("  {} {}: {}", "Could not remove:".red(), name, error);
    }

    println!();
    println!(
        "{} {}",
        "Launcher written to".green().bold(),
        report.launcher_path.display()
    );
}
