//! # GOAT Core Library
//!
//! Structural analysis of molecular geometries optimized with Gaussian. The library recovers
//! the final optimized coordinate table from an optimization log and derives total mass,
//! center of mass, bond lengths, bond angles and dihedral angles from it.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that every stage can be exercised on its own:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Molecule`, `BondGraph`), the static
//!   element table, geometric primitives and file I/O (log extraction, report rendering).
//!
//! - **[`engine`]: The Logic Core.** Analysis configuration, the error taxonomy, progress
//!   reporting and the individual analysis tasks (mass, bond length, bond angle, dihedral).
//!
//! - **[`workflows`]: The Public API.** Ties extraction and every task together into a single
//!   `analyze` call that produces a `StructuralReport`.

pub mod core;
pub mod engine;
pub mod workflows;
