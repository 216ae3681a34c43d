use super::bond_angle::position;
use crate::core::models::internal::DihedralRecord;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::BondGraph;
use crate::core::utils::geometry::dihedral_degrees;
use crate::engine::error::EngineError;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DihedralOutcome {
    pub dihedrals: Vec<DihedralRecord>,
    /// Number of torsions skipped because of coincident or collinear atoms.
    pub skipped: usize,
}

/// Enumerates every bonded path A-B-C-D with four distinct atoms.
///
/// Each path is visited once through its central bond and stored in the orientation whose
/// first atom has the smaller index, so a path and its reversal never both appear.
fn torsion_paths(graph: &BondGraph) -> Vec<[usize; 4]> {
    let mut paths = Vec::new();
    for (b, c) in graph.edges() {
        for &a in graph.neighbors(b).iter().filter(|&&a| a != c) {
            for &d in graph.neighbors(c).iter().filter(|&&d| d != b && d != a) {
                paths.push(if a < d { [a, b, c, d] } else { [d, c, b, a] });
            }
        }
    }
    paths.sort_unstable_by_key(|&[a, b, c, d]| (b.min(c), b.max(c), a, d));
    paths
}

/// Computes the signed dihedral angle of every torsion path in the bond graph.
///
/// Degenerate torsions are logged and skipped.
///
/// # Errors
///
/// Returns [`EngineError::Internal`] if the graph refers to an atom missing from the molecule.
#[instrument(skip_all, name = "dihedral_angle_task")]
pub fn run(molecule: &Molecule, graph: &BondGraph) -> Result<DihedralOutcome, EngineError> {
    let paths = torsion_paths(graph);
    debug!(num_paths = paths.len(), "Enumerated torsion paths.");

    let mut outcome = DihedralOutcome::default();
    for [a, b, c, d] in paths {
        let result = dihedral_degrees(
            position(molecule, a)?,
            position(molecule, b)?,
            position(molecule, c)?,
            position(molecule, d)?,
        );
        match result {
            Ok(angle_degrees) => outcome.dihedrals.push(DihedralRecord {
                atom_a: a,
                atom_b: b,
                atom_c: c,
                atom_d: d,
                angle_degrees,
            }),
            Err(e) => {
                warn!(a, b, c, d, "Skipping dihedral angle: {}", e);
                outcome.skipped += 1;
            }
        }
    }

    info!(
        num_dihedrals = outcome.dihedrals.len(),
        skipped = outcome.skipped,
        "Dihedral angle calculation complete."
    );
    Ok(outcome)
}
