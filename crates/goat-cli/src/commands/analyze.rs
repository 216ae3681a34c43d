use crate::config::models::AppConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use goat::core::io::report::write_report;
use goat::engine::progress::ProgressReporter;
use goat::workflows;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

pub fn run(config: &AppConfig, quiet: bool) -> Result<()> {
    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Analyzing Gaussian log {:?}", &config.input_path);
    let report = workflows::analyze::run(&config.input_path, &config.core_config, &reporter)?;

    info!(
        "Total mass of model: {:.6e} amu; center of mass: ({:.6}, {:.6}, {:.6})",
        report.total_mass,
        report.center_of_mass.x,
        report.center_of_mass.y,
        report.center_of_mass.z
    );

    match &config.output_path {
        Some(path) => {
            info!("Writing {:?} report to {:?}", config.report_format, path);
            let mut writer = BufWriter::new(File::create(path)?);
            write_report(&report, config.report_format, &mut writer)?;
            writer.flush()?;
            if !quiet {
                eprintln!("Report written to: {}", path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_report(&report, config.report_format, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}
