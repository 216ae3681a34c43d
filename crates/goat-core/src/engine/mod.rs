//! # Engine Module
//!
//! This module implements the analysis engine of GOAT: the tasks that turn an extracted
//! coordinate table into derived structural quantities.
//!
//! ## Overview
//!
//! Each task is a plain function over an immutable [`Molecule`](crate::core::models::molecule::Molecule)
//! and, where needed, the bond graph produced by an earlier task. Tasks never mutate their
//! inputs, so the workflow layer is free to run them in any order that respects those data
//! dependencies.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Bond tolerance, orientation preference and their validation
//! - **Progress Monitoring** ([`progress`]) - Stage start/finish events for user feedback
//! - **Error Handling** ([`error`]) - Engine-specific error types and error propagation
//! - **Tasks** ([`tasks`]) - Mass properties, bond detection, bond angles and dihedral angles
//!
//! ## Key Capabilities
//!
//! - **Covalent-radius bond detection** with a configurable tolerance and bond order estimate
//! - **Degeneracy tolerance**: coincident or collinear atoms skip one angle, never the run
//! - **Deterministic output ordering** independent of the optional `parallel` feature

pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;
