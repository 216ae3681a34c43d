mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::config::PartialAppConfig;
use crate::error::{CliError, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    if let Err(e) = run_app(cli) {
        error!("Analysis failed: {}", e);
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(e.exit_code());
    }
    if !quiet {
        eprintln!("✅ Analysis completed successfully.");
    }
}

/// Picks the run log path, refusing to touch the filesystem when no INPUT was given.
fn resolve_log_file(cli: &Cli, partial_config: &Result<PartialAppConfig>) -> Result<PathBuf> {
    if cli.input.is_none() {
        return Err(CliError::InputMissing);
    }
    Ok(match partial_config {
        Ok(partial) => partial.log_file(cli),
        Err(_) => PartialAppConfig::default().log_file(cli),
    })
}

fn run_app(cli: Cli) -> Result<()> {
    let partial_config = PartialAppConfig::from_cli(&cli);
    let log_file = resolve_log_file(&cli, &partial_config)?;
    logging::setup_logging(cli.verbose, cli.quiet, &log_file)?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!(
        "GOAT v{} starting up. Run log: {}",
        env!("CARGO_PKG_VERSION"),
        log_file.display()
    );
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let app_config = partial_config?.merge_with_cli(&cli)?;
    debug!("Resolved configuration: {:?}", &app_config);

    commands::analyze::run(&app_config, cli.quiet)?;

    info!("✅ Analysis completed successfully.");
    Ok(())
}
