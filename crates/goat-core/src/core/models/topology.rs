use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum BondOrder {
    #[default]
    Single = 1,
    Double = 2,
    Triple = 3,
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
            }
        )
    }
}

/// A bonded atom pair with its interatomic distance.
///
/// `atom_a` is always the smaller index, so a bond and its mirror image compare equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondRecord {
    pub atom_a: usize,
    pub atom_b: usize,
    /// Interatomic distance in Angstroms.
    pub distance: f64,
    /// Bond order estimated from the distance and the elements' covalent radii.
    pub order: BondOrder,
}

impl BondRecord {
    /// Creates a bond between two distinct atoms, storing the indices in ascending order.
    ///
    /// # Return
    ///
    /// Returns `None` if `atom_a == atom_b`.
    pub fn new(atom_a: usize, atom_b: usize, distance: f64, order: BondOrder) -> Option<Self> {
        if atom_a == atom_b {
            return None;
        }
        Some(Self {
            atom_a: atom_a.min(atom_b),
            atom_b: atom_a.max(atom_b),
            distance,
            order,
        })
    }
}

/// Undirected bond graph over 1-based atom indices.
///
/// Built once from the bond records and shared by reference with both angle engines.
/// Neighbor lists are kept sorted ascending, and every atom of the molecule has an entry,
/// possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BondGraph {
    adjacency: BTreeMap<usize, Vec<usize>>,
}

impl BondGraph {
    /// Builds the adjacency structure for a molecule of `atom_count` atoms.
    pub fn from_bonds(atom_count: usize, bonds: &[BondRecord]) -> Self {
        let mut adjacency: BTreeMap<usize, Vec<usize>> =
            (1..=atom_count).map(|i| (i, Vec::new())).collect();
        for bond in bonds {
            adjacency.entry(bond.atom_a).or_default().push(bond.atom_b);
            adjacency.entry(bond.atom_b).or_default().push(bond.atom_a);
        }
        for neighbors in adjacency.values_mut() {
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        Self { adjacency }
    }

    /// Returns the sorted neighbors of `index`, or an empty slice for unknown atoms.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.adjacency.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over `(atom, neighbors)` in ascending atom order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.adjacency.iter().map(|(&i, n)| (i, n.as_slice()))
    }

    /// Iterates over each bond once as `(a, b)` with `a < b`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&b| a < b)
                .map(move |b| (a, b))
        })
    }
}
