//! # Core Models Module
//!
//! Data structures describing one optimized geometry and the relationships derived from it.
//!
//! ## Key Components
//!
//! - [`atom`] - A single coordinate-table row (`AtomRecord`)
//! - [`molecule`] - The ordered, immutable coordinate table (`Molecule`)
//! - [`topology`] - Bond records, estimated bond orders and the adjacency `BondGraph`
//! - [`internal`] - Bond angle and dihedral angle records
//! - [`report`] - The aggregated result of one analysis run
//!
//! ## Usage
//!
//! ```ignore
//! use goat::core::models::molecule::Molecule;
//! use nalgebra::Point3;
//!
//! let molecule = Molecule::from_atoms([
//!     ("H", Point3::new(0.0, 0.0, 0.0)),
//!     ("H", Point3::new(0.74, 0.0, 0.0)),
//! ]);
//! assert_eq!(molecule.atom(2).unwrap().index, 2);
//! ```

pub mod atom;
pub mod internal;
pub mod molecule;
pub mod report;
pub mod topology;
