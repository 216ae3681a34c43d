use super::atom::AtomRecord;
use nalgebra::Point3;

/// One optimized geometry snapshot: an ordered, read-only table of atom records.
///
/// A `Molecule` can only be built from a list of `(element, position)` pairs, which guarantees
/// that indices are unique and run contiguously from 1 to N in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    atoms: Vec<AtomRecord>,
}

impl Molecule {
    /// Creates a molecule from elements and positions, numbering atoms from 1.
    ///
    /// # Arguments
    ///
    /// * `atoms` - The `(element, position)` pairs in file order.
    pub fn from_atoms<I, S>(atoms: I) -> Self
    where
        I: IntoIterator<Item = (S, Point3<f64>)>,
        S: AsRef<str>,
    {
        let atoms = atoms
            .into_iter()
            .enumerate()
            .map(|(i, (element, position))| AtomRecord::new(i + 1, element.as_ref(), position))
            .collect();
        Self { atoms }
    }

    /// Returns all atom records in index order.
    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }

    /// Retrieves an atom by its 1-based index.
    ///
    /// # Return
    ///
    /// Returns `Some(&AtomRecord)` if the index is in `1..=len()`, otherwise `None`.
    pub fn atom(&self, index: usize) -> Option<&AtomRecord> {
        index.checked_sub(1).and_then(|i| self.atoms.get(i))
    }

    /// Returns the position of the atom with the given 1-based index.
    pub fn position(&self, index: usize) -> Option<&Point3<f64>> {
        self.atom(index).map(|a| &a.position)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns a copy of the molecule with every atom shifted by `offset`.
    pub fn translated(&self, offset: &nalgebra::Vector3<f64>) -> Self {
        Self {
            atoms: self
                .atoms
                .iter()
                .map(|a| AtomRecord::new(a.index, &a.element, a.position + offset))
                .collect(),
        }
    }
}
