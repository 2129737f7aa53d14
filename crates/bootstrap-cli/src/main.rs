//! Bootstrap CLI - Sets up a framework workspace from its JSON config

use anyhow::Result;
use bootstrap_core::{
    Bootstrapper, GitCli, PowerShell, PowerShellGallery, Workspace, DEFAULT_CONFIG_PATH,
};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bootstrap")]
#[command(about = "Bootstrap a framework workspace: packages, git modules and launcher script")]
#[command(version)]
pub struct Args {
    /// Path to the framework config (created with defaults if missing)
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Narrate every step
    #[arg(short, long)]
    pub verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        eprintln!();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);

    println!("{}", "Checking tools...".dimmed());
    for tool in bootstrap_core::check_tools() {
        match (tool.available, tool.version) {
            (true, Some(version)) => println!("  {} {} ({})", "->".green(), tool.name, version),
            (true, None) => println!("  {} {}", "->".green(), tool.name),
            (false, _) => println!(
                "  {} {} not found, see {}",
                "x".yellow(),
                tool.name,
                tool.docs_url
            ),
        }
    }

    let workspace = Workspace::new(std::env::current_dir()?);
    let bootstrapper = Bootstrapper::new(
        workspace,
        PowerShellGallery::new(),
        GitCli::new(),
        PowerShell,
    );

    let report = bootstrapper.run(&args.config).await?;
    bootstrap_core::print_summary(&report);

    if args.verbose {
        for (name, value) in report.plan.settings() {
            tracing::debug!(setting = %name, %value, "module setting");
        }
    }

    Ok(())
}
