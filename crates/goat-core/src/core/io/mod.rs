//! Input/output for the analysis pipeline.
//!
//! [`gaussian`] extracts the final optimized geometry from a Gaussian optimization log, and
//! [`report`] renders the structural analysis as plain text or CSV. Geometry readers share the
//! [`traits::GeometrySource`] interface.

pub mod gaussian;
pub mod report;
pub mod traits;
