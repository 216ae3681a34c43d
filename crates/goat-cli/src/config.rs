pub mod defaults;
pub mod models;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use goat::core::io::gaussian::{OrientationPreference, ParseOrientationError};
use goat::core::io::report::{ParseReportFormatError, ReportFormat};
use goat::engine::config as core_config;
use models::AppConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialBondingConfig {
    tolerance: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialExtractionConfig {
    orientation: Option<OrientationPreference>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialReportConfig {
    format: Option<ReportFormat>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialLoggingConfig {
    file: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    bonding: Option<PartialBondingConfig>,
    extraction: Option<PartialExtractionConfig>,
    report: Option<PartialReportConfig>,
    logging: Option<PartialLoggingConfig>,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config` (or an empty partial config when none is given)
    /// and applies every `-S KEY=VALUE` override on top of it.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut partial = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        partial.apply_set_values(&cli.set_values)?;
        Ok(partial)
    }

    /// Resolves the run log path: `--log-file`, then `[logging] file`, then the default.
    pub fn log_file(&self, cli: &Cli) -> PathBuf {
        cli.log_file
            .clone()
            .or_else(|| self.logging.as_ref().and_then(|l| l.file.clone()))
            .unwrap_or_else(|| DefaultsConfig::default().log_file)
    }

    pub fn merge_with_cli(mut self, cli: &Cli) -> Result<AppConfig> {
        let defaults = DefaultsConfig::default();

        let input_path = cli.input.clone().ok_or(CliError::InputMissing)?;

        let bonding = self.bonding.take().unwrap_or_default();
        let extraction = self.extraction.take().unwrap_or_default();
        let report = self.report.take().unwrap_or_default();

        let tolerance = cli
            .tolerance
            .or(bonding.tolerance)
            .unwrap_or(defaults.bond_tolerance);
        let orientation = cli
            .orientation
            .map(Into::into)
            .or(extraction.orientation)
            .unwrap_or(defaults.orientation);
        let report_format = cli
            .format
            .map(Into::into)
            .or(report.format)
            .unwrap_or(defaults.report_format);

        let core_config = core_config::AnalysisConfigBuilder::new()
            .bond_tolerance(tolerance)
            .orientation(orientation)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(AppConfig {
            input_path,
            output_path: cli.output.clone(),
            report_format,
            core_config,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "bonding.tolerance" => {
                    self.bonding.get_or_insert_with(Default::default).tolerance =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid float value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                "extraction.orientation" => {
                    self.extraction
                        .get_or_insert_with(Default::default)
                        .orientation = Some(
                        value_str
                            .parse()
                            .map_err(|e: ParseOrientationError| CliError::Config(e.to_string()))?,
                    );
                }
                "report.format" => {
                    self.report.get_or_insert_with(Default::default).format =
                        Some(value_str.parse().map_err(|e: ParseReportFormatError| {
                            CliError::Config(e.to_string())
                        })?);
                }
                "logging.file" => {
                    self.logging.get_or_insert_with(Default::default).file =
                        Some(PathBuf::from(value_str));
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn write_config_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn cli_from(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("goat").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_apply_without_config_file() {
        let cli = cli_from(&["opt.log"]);
        let partial = PartialAppConfig::from_cli(&cli).unwrap();

        assert_eq!(partial.log_file(&cli), PathBuf::from("log.txt"));
        let config = partial.merge_with_cli(&cli).unwrap();
        assert_eq!(config.input_path, PathBuf::from("opt.log"));
        assert_eq!(config.report_format, ReportFormat::Text);
        assert_eq!(
            config.core_config.bonding.tolerance,
            core_config::DEFAULT_BOND_TOLERANCE
        );
        assert_eq!(config.core_config.orientation, OrientationPreference::Any);
        assert!(config.output_path.is_none());
    }

    #[test]
    fn load_from_file_and_merge() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(
            &dir,
            "goat.toml",
            r#"
        [bonding]
        tolerance = 0.25

        [extraction]
        orientation = "standard"

        [report]
        format = "csv"

        [logging]
        file = "analysis.log"
        "#,
        );
        let cli = cli_from(&["opt.log", "-c", config_path.to_str().unwrap()]);
        let partial = PartialAppConfig::from_cli(&cli).unwrap();

        assert_eq!(partial.log_file(&cli), PathBuf::from("analysis.log"));
        let config = partial.merge_with_cli(&cli).unwrap();
        assert_eq!(config.core_config.bonding.tolerance, 0.25);
        assert_eq!(
            config.core_config.orientation,
            OrientationPreference::Standard
        );
        assert_eq!(config.report_format, ReportFormat::Csv);
    }

    #[test]
    fn cli_args_override_file_values() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(
            &dir,
            "goat.toml",
            "[bonding]\ntolerance = 0.25\n[logging]\nfile = \"analysis.log\"\n",
        );
        let cli = cli_from(&[
            "opt.log",
            "-c",
            config_path.to_str().unwrap(),
            "-t",
            "0.5",
            "--log-file",
            "cli.log",
        ]);
        let partial = PartialAppConfig::from_cli(&cli).unwrap();

        assert_eq!(partial.log_file(&cli), PathBuf::from("cli.log"));
        let config = partial.merge_with_cli(&cli).unwrap();
        assert_eq!(config.core_config.bonding.tolerance, 0.5);
    }

    #[test]
    fn set_value_overrides_file() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(&dir, "goat.toml", "[report]\nformat = \"text\"\n");
        let cli = cli_from(&[
            "opt.log",
            "-c",
            config_path.to_str().unwrap(),
            "-S",
            "report.format=csv",
            "-S",
            "extraction.orientation=input",
        ]);
        let config = PartialAppConfig::from_cli(&cli)
            .unwrap()
            .merge_with_cli(&cli)
            .unwrap();
        assert_eq!(config.report_format, ReportFormat::Csv);
        assert_eq!(config.core_config.orientation, OrientationPreference::Input);
    }

    #[test]
    fn unsupported_set_key_is_a_config_error() {
        let cli = cli_from(&["opt.log", "-S", "bonding.radius=1.0"]);
        let result = PartialAppConfig::from_cli(&cli);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn set_value_selects_log_file() {
        let dir = tempdir().unwrap();
        let config_path =
            write_config_file(&dir, "goat.toml", "[logging]\nfile = \"analysis.log\"\n");
        let cli = cli_from(&[
            "opt.log",
            "-c",
            config_path.to_str().unwrap(),
            "-S",
            "logging.file=custom.log",
        ]);
        let partial = PartialAppConfig::from_cli(&cli).unwrap();
        assert_eq!(partial.log_file(&cli), PathBuf::from("custom.log"));

        let cli = cli_from(&["opt.log", "-S", "logging.file=custom.log", "--log-file", "cli.log"]);
        let partial = PartialAppConfig::from_cli(&cli).unwrap();
        assert_eq!(partial.log_file(&cli), PathBuf::from("cli.log"));
    }

    #[test]
    fn missing_input_is_reported() {
        let cli = cli_from(&[]);
        let result = PartialAppConfig::default().merge_with_cli(&cli);
        assert!(matches!(result, Err(CliError::InputMissing)));
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        let cli = cli_from(&["opt.log", "--tolerance=-0.2"]);
        let result = PartialAppConfig::default().merge_with_cli(&cli);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_fields_in_file_are_rejected() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(&dir, "bad.toml", "[bonding]\nradius = 1.0\n");
        let result = PartialAppConfig::from_file(&config_path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = PartialAppConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
