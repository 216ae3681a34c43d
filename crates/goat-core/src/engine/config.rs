use crate::core::io::gaussian::OrientationPreference;
use thiserror::Error;

/// Slack added to the covalent radius sum when deciding whether two atoms are bonded, in
/// Angstroms. Optimized geometries stretch bonds slightly relative to reference radii.
pub const DEFAULT_BOND_TOLERANCE: f64 = 0.4;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value {value} for parameter '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BondingConfig {
    /// Tolerance in Angstroms added to the covalent radius sum.
    pub tolerance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub bonding: BondingConfig,
    pub orientation: OrientationPreference,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bonding: BondingConfig {
                tolerance: DEFAULT_BOND_TOLERANCE,
            },
            orientation: OrientationPreference::default(),
        }
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    bond_tolerance: Option<f64>,
    orientation: Option<OrientationPreference>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bond_tolerance(mut self, tolerance: f64) -> Self {
        self.bond_tolerance = Some(tolerance);
        self
    }
    pub fn orientation(mut self, orientation: OrientationPreference) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let tolerance = self.bond_tolerance.unwrap_or(DEFAULT_BOND_TOLERANCE);
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "bond_tolerance",
                value: tolerance,
                reason: "must be a finite, non-negative distance in Angstroms",
            });
        }

        Ok(AnalysisConfig {
            bonding: BondingConfig { tolerance },
            orientation: self.orientation.unwrap_or_default(),
        })
    }
}
