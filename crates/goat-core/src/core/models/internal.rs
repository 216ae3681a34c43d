/// A bond angle A-C-B measured at a central atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRecord {
    pub center: usize,
    pub neighbor_a: usize,
    pub neighbor_b: usize,
    /// Angle in degrees, within [0, 180].
    pub angle_degrees: f64,
}

/// A torsion about the central bond B-C of the bonded path A-B-C-D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DihedralRecord {
    pub atom_a: usize,
    pub atom_b: usize,
    pub atom_c: usize,
    pub atom_d: usize,
    /// Signed angle in degrees, within (-180, 180].
    pub angle_degrees: f64,
}

impl DihedralRecord {
    pub fn atoms(&self) -> [usize; 4] {
        [self.atom_a, self.atom_b, self.atom_c, self.atom_d]
    }
}
