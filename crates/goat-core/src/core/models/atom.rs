use nalgebra::Point3;

/// One row of an optimized coordinate table.
///
/// Records are produced by the extractor and never modified afterwards. The `index` is
/// 1-based and contiguous within the owning [`Molecule`](super::molecule::Molecule).
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The 1-based position of the atom within its molecule.
    pub index: usize,
    /// The element symbol (e.g., "C", "Cl").
    pub element: String,
    /// The Cartesian coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl AtomRecord {
    /// Creates a new `AtomRecord`.
    ///
    /// # Arguments
    ///
    /// * `index` - The 1-based index of the atom.
    /// * `element` - The element symbol.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(index: usize, element: &str, position: Point3<f64>) -> Self {
        Self {
            index,
            element: element.to_string(),
            position,
        }
    }

    /// Returns a short label such as `C3` used in logs and reports.
    pub fn label(&self) -> String {
        format!("{}{}", self.element, self.index)
    }
}
