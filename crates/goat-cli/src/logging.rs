use crate::error::{CliError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

pub const LOG_FILE_HEADER: &str = "Logfile for Gaussian Optimization Analytical Tool";

/// Creates the run log and writes its identifying first line.
pub fn create_log_file(path: &Path) -> Result<File> {
    let log_file_error = |source| CliError::LogFile {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(log_file_error)?;
    writeln!(file, "{}", LOG_FILE_HEADER).map_err(log_file_error)?;
    Ok(file)
}

fn console_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn file_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 | 1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber: a compact console layer on stderr and the run log file.
///
/// The file layer records progress at INFO or finer even when the console is quiet.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: &Path) -> Result<()> {
    let file = create_log_file(log_file)?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact()
        .with_filter(console_level(verbosity, quiet));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(file_level(verbosity));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::thread;
    use std::time::Duration;
    use tracing::{debug, info};

    #[test]
    #[serial]
    fn log_file_starts_with_tool_header() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("log.txt");

        create_log_file(&log_path).unwrap();

        let content = std::fs::read_to_string(log_path).unwrap();
        assert_eq!(content.lines().next(), Some(LOG_FILE_HEADER));
    }

    #[test]
    #[serial]
    fn file_layer_records_progress_after_header() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("run.log");

        let file = create_log_file(&log_path).unwrap();
        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_filter(file_level(0));
        let subscriber = tracing_subscriber::registry().with(file_layer);

        tracing::subscriber::with_default(subscriber, || {
            info!("Bond length calculation complete.");
            debug!("Not recorded at default verbosity.");
        });

        thread::sleep(Duration::from_millis(100));

        let content = std::fs::read_to_string(log_path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(LOG_FILE_HEADER));
        assert!(content.contains("Bond length calculation complete."));
        assert!(content.contains("INFO"));
        assert!(!content.contains("Not recorded"));
    }

    #[test]
    #[serial]
    fn uncreatable_log_file_maps_to_log_file_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let invalid_path = temp_dir.path().join("missing-dir").join("log.txt");

        let result = create_log_file(&invalid_path);
        assert!(matches!(result, Err(CliError::LogFile { ref path, .. }) if *path == invalid_path));
        assert_eq!(result.unwrap_err().exit_code(), 3);
    }

    #[test]
    fn quiet_silences_console_only() {
        assert_eq!(console_level(3, true), LevelFilter::OFF);
        assert_eq!(console_level(0, false), LevelFilter::WARN);
        assert_eq!(file_level(0), LevelFilter::INFO);
        assert_eq!(file_level(2), LevelFilter::DEBUG);
    }
}
