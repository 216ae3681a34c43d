//! Individual analysis stages. Each task reads the shared, immutable `Molecule`; the angle
//! tasks additionally read the `BondGraph` produced from the bond length task's output.

pub mod bond_angle;
pub mod bond_length;
pub mod dihedral_angle;
pub mod mass;
