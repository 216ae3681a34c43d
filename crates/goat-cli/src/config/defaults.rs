use goat::core::io::gaussian::OrientationPreference;
use goat::core::io::report::ReportFormat;
use goat::engine::config::DEFAULT_BOND_TOLERANCE;
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub bond_tolerance: f64,
    pub orientation: OrientationPreference,
    pub report_format: ReportFormat,
    pub log_file: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            bond_tolerance: DEFAULT_BOND_TOLERANCE,
            orientation: OrientationPreference::Any,
            report_format: ReportFormat::Text,
            log_file: PathBuf::from("log.txt"),
        }
    }
}
