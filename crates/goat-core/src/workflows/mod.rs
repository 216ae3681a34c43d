//! # Workflows Module
//!
//! High-level entry points that run a complete GOAT analysis.
//!
//! ## Overview
//!
//! A workflow owns the pipeline from input file to [`StructuralReport`](crate::core::models::report::StructuralReport):
//! it extracts the final optimized geometry, runs every engine task in dependency order and
//! reports each stage through a [`ProgressReporter`](crate::engine::progress::ProgressReporter).
//!
//! - **Analysis Workflow** ([`analyze`]) - Extraction, mass properties, bonds, bond angles
//!   and dihedral angles for one Gaussian optimization log.

pub mod analyze;
