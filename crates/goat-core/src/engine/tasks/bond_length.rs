use crate::core::elements::{self, ElementEntry};
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::{BondOrder, BondRecord};
use crate::core::utils::geometry::distance;
use crate::engine::config::BondingConfig;
use crate::engine::error::EngineError;
use itertools::Itertools;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Largest distance at which two atoms of the given elements count as bonded.
pub fn bond_threshold(a: &ElementEntry, b: &ElementEntry, tolerance: f64) -> f64 {
    a.covalent_radius + b.covalent_radius + tolerance
}

/// Estimates the bond order as the order whose covalent radius sum lies closest to `distance`.
///
/// Only orders for which both elements carry a radius are considered, so bonds to hydrogen
/// or halogens are always single.
pub fn estimate_bond_order(a: &ElementEntry, b: &ElementEntry, distance: f64) -> BondOrder {
    let candidates = [
        Some((BondOrder::Single, a.covalent_radius + b.covalent_radius)),
        a.double_bond_radius
            .zip(b.double_bond_radius)
            .map(|(ra, rb)| (BondOrder::Double, ra + rb)),
        a.triple_bond_radius
            .zip(b.triple_bond_radius)
            .map(|(ra, rb)| (BondOrder::Triple, ra + rb)),
    ];
    candidates
        .into_iter()
        .flatten()
        .min_by(|(_, x), (_, y)| {
            (x - distance)
                .abs()
                .partial_cmp(&(y - distance).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map_or(BondOrder::Single, |(order, _)| order)
}

/// Finds every bonded atom pair of the molecule.
///
/// Every unordered pair is tested against [`bond_threshold`]; the result is sorted by
/// `(atom_a, atom_b)` regardless of how the pairs were evaluated.
///
/// # Errors
///
/// Returns [`EngineError::UnknownElement`] if an atom's element has no covalent radius.
#[instrument(skip_all, name = "bond_length_task")]
pub fn run(molecule: &Molecule, config: &BondingConfig) -> Result<Vec<BondRecord>, EngineError> {
    let entries: Vec<&ElementEntry> = molecule
        .atoms()
        .iter()
        .map(|atom| {
            elements::lookup(&atom.element).ok_or_else(|| EngineError::UnknownElement {
                symbol: atom.element.clone(),
                index: atom.index,
            })
        })
        .collect::<Result<_, _>>()?;

    let atoms = molecule.atoms();
    let pairs: Vec<(usize, usize)> = (0..atoms.len()).tuple_combinations().collect();
    debug!(
        num_pairs = pairs.len(),
        tolerance = config.tolerance,
        "Evaluating atom pairs."
    );

    #[cfg(not(feature = "parallel"))]
    let iterator = pairs.iter();

    #[cfg(feature = "parallel")]
    let iterator = pairs.par_iter();

    let mut bonds: Vec<BondRecord> = iterator
        .filter_map(|&(i, j)| {
            let d = distance(&atoms[i].position, &atoms[j].position);
            if d <= bond_threshold(entries[i], entries[j], config.tolerance) {
                let order = estimate_bond_order(entries[i], entries[j], d);
                BondRecord::new(atoms[i].index, atoms[j].index, d, order)
            } else {
                None
            }
        })
        .collect();

    bonds.sort_unstable_by_key(|b| (b.atom_a, b.atom_b));

    info!(num_bonds = bonds.len(), "Bond length calculation complete.");
    Ok(bonds)
}
