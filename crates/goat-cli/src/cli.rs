use clap::{Parser, ValueEnum};
use goat::core::io::gaussian::OrientationPreference;
use goat::core::io::report::ReportFormat;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "goat",
    author = "Kate Charbonnet, Hannah Lozano, Thomas Summers",
    version,
    about = "GOAT - Gaussian Optimization Analytical Tool. Extracts the final optimized geometry from a Gaussian log and reports mass, center of mass, bond lengths, bond angles and dihedral angles.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the Gaussian optimization log to analyze.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the structural report to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Override the bond tolerance (Angstroms added to the covalent radius sum).
    #[arg(short, long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,

    /// Which coordinate blocks of the log are eligible for extraction.
    #[arg(long, value_enum, value_name = "KIND")]
    pub orientation: Option<OrientationArg>,

    /// Path of the run log file [default: log.txt]
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S bonding.tolerance=0.3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Increase console verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress console log output and progress messages
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Csv,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Csv => ReportFormat::Csv,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationArg {
    Any,
    Standard,
    Input,
}

impl From<OrientationArg> for OrientationPreference {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Any => OrientationPreference::Any,
            OrientationArg::Standard => OrientationPreference::Standard,
            OrientationArg::Input => OrientationPreference::Input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_input_and_flags() {
        let cli = Cli::parse_from([
            "goat",
            "opt.log",
            "-f",
            "csv",
            "-t",
            "0.3",
            "--orientation",
            "standard",
            "-vv",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("opt.log")));
        assert_eq!(cli.format, Some(FormatArg::Csv));
        assert_eq!(cli.tolerance, Some(0.3));
        assert_eq!(cli.orientation, Some(OrientationArg::Standard));
        assert_eq!(cli.verbose, 2);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn input_is_optional_at_parse_time() {
        let cli = Cli::parse_from(["goat"]);
        assert!(cli.input.is_none());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["goat", "in.log", "-q", "-v"]).is_err());
    }

    #[test]
    fn value_enums_convert_to_core_types() {
        assert_eq!(ReportFormat::from(FormatArg::Csv), ReportFormat::Csv);
        assert_eq!(
            OrientationPreference::from(OrientationArg::Input),
            OrientationPreference::Input
        );
    }
}
