//! Numerical helpers shared by the analysis tasks.

pub mod geometry;
