use crate::core::models::internal::AngleRecord;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::BondGraph;
use crate::core::utils::geometry::bond_angle_degrees;
use crate::engine::error::EngineError;
use itertools::Itertools;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AngleOutcome {
    pub angles: Vec<AngleRecord>,
    /// Number of angles skipped because two atoms coincide.
    pub skipped: usize,
}

/// Computes every bond angle A-C-B of the bond graph.
///
/// Angles are grouped by ascending center atom, then by ascending neighbor pair. A degenerate
/// angle is logged and skipped; it never aborts the task.
///
/// # Errors
///
/// Returns [`EngineError::Internal`] if the graph refers to an atom missing from the molecule.
#[instrument(skip_all, name = "bond_angle_task")]
pub fn run(molecule: &Molecule, graph: &BondGraph) -> Result<AngleOutcome, EngineError> {
    let mut outcome = AngleOutcome::default();

    for (center, neighbors) in graph.iter().filter(|(_, n)| n.len() >= 2) {
        let center_pos = position(molecule, center)?;
        for (&a, &b) in neighbors.iter().tuple_combinations() {
            match bond_angle_degrees(position(molecule, a)?, center_pos, position(molecule, b)?) {
                Ok(angle_degrees) => outcome.angles.push(AngleRecord {
                    center,
                    neighbor_a: a,
                    neighbor_b: b,
                    angle_degrees,
                }),
                Err(e) => {
                    warn!(center, a, b, "Skipping bond angle: {}", e);
                    outcome.skipped += 1;
                }
            }
        }
    }

    info!(
        num_angles = outcome.angles.len(),
        skipped = outcome.skipped,
        "Bond angle calculation complete."
    );
    Ok(outcome)
}

pub(crate) fn position(
    molecule: &Molecule,
    index: usize,
) -> Result<&nalgebra::Point3<f64>, EngineError> {
    molecule
        .position(index)
        .ok_or_else(|| EngineError::Internal(format!("bond graph refers to missing atom {}", index)))
}
