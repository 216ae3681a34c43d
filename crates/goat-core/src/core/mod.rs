//! # Core Module
//!
//! The stateless building blocks of the analysis pipeline.
//!
//! ## Architecture
//!
//! - **Element Data** ([`elements`]) - Static, process-wide table of masses and covalent radii
//! - **Molecular Representation** ([`models`]) - Atom records, molecules, bonds and internal coordinates
//! - **File I/O** ([`io`]) - Gaussian log extraction and structural report rendering
//! - **Geometry** ([`utils`]) - Distance, angle and torsion primitives on `nalgebra` points
//!
//! Nothing in this module mutates a `Molecule` after construction; every engine task reads the
//! same coordinate table.

pub mod elements;
pub mod io;
pub mod models;
pub mod utils;
