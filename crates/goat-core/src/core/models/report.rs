use super::internal::{AngleRecord, DihedralRecord};
use super::molecule::Molecule;
use super::topology::BondRecord;
use nalgebra::Point3;

/// Everything the analysis derives from one optimized geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralReport {
    pub molecule: Molecule,
    /// Total mass in atomic mass units.
    pub total_mass: f64,
    pub center_of_mass: Point3<f64>,
    pub bonds: Vec<BondRecord>,
    pub angles: Vec<AngleRecord>,
    pub dihedrals: Vec<DihedralRecord>,
    /// Angle and dihedral computations skipped because of degenerate geometry.
    pub skipped_degenerate: usize,
}
