use goat::core::io::report::ReportFormat;
use goat::engine::config as core_config;
use std::path::PathBuf;

/// Fully resolved settings for one `goat` run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub report_format: ReportFormat,
    pub core_config: core_config::AnalysisConfig,
}
