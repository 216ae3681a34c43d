use crate::core::io::gaussian::GaussianLog;
use crate::core::io::traits::GeometrySource;
use crate::core::models::molecule::Molecule;
use crate::core::models::report::StructuralReport;
use crate::core::models::topology::BondGraph;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks;
use std::path::Path;
use tracing::{info, instrument};

pub const STAGE_EXTRACTION: &str = "Coordinate extraction";
pub const STAGE_MASS: &str = "Mass calculation";
pub const STAGE_BOND_LENGTH: &str = "Bond length calculation";
pub const STAGE_BOND_ANGLE: &str = "Bond angle calculation";
pub const STAGE_DIHEDRAL_ANGLE: &str = "Dihedral angle calculation";

/// Runs the full analysis on a Gaussian optimization log.
///
/// The last coordinate table matching `config.orientation` is extracted and handed to
/// [`analyze_molecule`].
///
/// # Errors
///
/// Returns [`EngineError::Extraction`] if the log cannot be read or holds no usable geometry,
/// plus any error of [`analyze_molecule`].
#[instrument(skip_all, name = "analysis_workflow")]
pub fn run(
    path: &Path,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<StructuralReport, EngineError> {
    reporter.report(Progress::StageStart {
        name: STAGE_EXTRACTION,
    });
    let (molecule, metadata) = GaussianLog::read_from_path(path, &config.orientation)?;
    info!(
        path = %path.display(),
        atoms = molecule.len(),
        blocks_found = metadata.blocks_found,
        header_line = metadata.header_line,
        orientation = ?metadata.orientation,
        "Extracted final optimized geometry."
    );
    if metadata.rows_discarded > 0 {
        reporter.report(Progress::Message(format!(
            "Discarded {} unparseable row(s) in the coordinate block at line {}.",
            metadata.rows_discarded, metadata.header_line
        )));
    }
    reporter.report(Progress::StageFinish {
        name: STAGE_EXTRACTION,
    });

    analyze_molecule(molecule, config, reporter)
}

/// Runs every analysis task on an already extracted molecule.
///
/// Both angle stages always run once the bond graph is known; a molecule without bonds simply
/// yields empty angle lists.
///
/// # Errors
///
/// Returns [`EngineError::UnknownElement`] if an atom is missing from the element table and
/// [`EngineError::ZeroMass`] if the total mass is zero.
#[instrument(skip_all, name = "analysis_tasks")]
pub fn analyze_molecule(
    molecule: Molecule,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<StructuralReport, EngineError> {
    reporter.report(Progress::StageStart { name: STAGE_MASS });
    let mass = tasks::mass::run(&molecule)?;
    if mass.total_mass <= 0.0 {
        return Err(EngineError::ZeroMass);
    }
    reporter.report(Progress::StageFinish { name: STAGE_MASS });

    reporter.report(Progress::StageStart {
        name: STAGE_BOND_LENGTH,
    });
    let bonds = tasks::bond_length::run(&molecule, &config.bonding)?;
    let graph = BondGraph::from_bonds(molecule.len(), &bonds);
    reporter.report(Progress::StageFinish {
        name: STAGE_BOND_LENGTH,
    });

    reporter.report(Progress::StageStart {
        name: STAGE_BOND_ANGLE,
    });
    let angles = tasks::bond_angle::run(&molecule, &graph)?;
    reporter.report(Progress::StageFinish {
        name: STAGE_BOND_ANGLE,
    });

    reporter.report(Progress::StageStart {
        name: STAGE_DIHEDRAL_ANGLE,
    });
    let dihedrals = tasks::dihedral_angle::run(&molecule, &graph)?;
    reporter.report(Progress::StageFinish {
        name: STAGE_DIHEDRAL_ANGLE,
    });

    let skipped_degenerate = angles.skipped + dihedrals.skipped;
    if skipped_degenerate > 0 {
        reporter.report(Progress::Message(format!(
            "Skipped {} degenerate angle/dihedral computation(s).",
            skipped_degenerate
        )));
    }

    info!(
        total_mass = mass.total_mass,
        bonds = bonds.len(),
        angles = angles.angles.len(),
        dihedrals = dihedrals.dihedrals.len(),
        "Analysis complete."
    );

    Ok(StructuralReport {
        molecule,
        total_mass: mass.total_mass,
        center_of_mass: mass.center_of_mass,
        bonds,
        angles: angles.angles,
        dihedrals: dihedrals.dihedrals,
        skipped_degenerate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use std::sync::{Arc, Mutex};

    fn recording_reporter(sink: Arc<Mutex<Vec<String>>>) -> ProgressReporter<'static> {
        ProgressReporter::with_callback(Box::new(move |event| {
            if let Progress::StageFinish { name } = event {
                sink.lock().unwrap().push(name.to_string());
            }
        }))
    }

    #[test]
    fn stages_finish_in_dependency_order() {
        let molecule = Molecule::from_atoms([
            ("H", Point3::new(0.0, 0.0, 0.0)),
            ("H", Point3::new(0.74, 0.0, 0.0)),
        ]);
        let finished = Arc::new(Mutex::new(Vec::new()));
        let reporter = recording_reporter(finished.clone());

        let report = analyze_molecule(molecule, &AnalysisConfig::default(), &reporter).unwrap();

        assert_eq!(report.bonds.len(), 1);
        assert!(report.angles.is_empty());
        assert!(report.dihedrals.is_empty());
        assert_eq!(
            *finished.lock().unwrap(),
            vec![
                STAGE_MASS,
                STAGE_BOND_LENGTH,
                STAGE_BOND_ANGLE,
                STAGE_DIHEDRAL_ANGLE
            ]
        );
    }

    #[test]
    fn unknown_element_stops_before_bond_detection() {
        let molecule = Molecule::from_atoms([("Zz", Point3::origin())]);
        let finished = Arc::new(Mutex::new(Vec::new()));
        let reporter = recording_reporter(finished.clone());

        let result = analyze_molecule(molecule, &AnalysisConfig::default(), &reporter);

        assert!(matches!(result, Err(EngineError::UnknownElement { .. })));
        assert!(finished.lock().unwrap().is_empty());
    }

    #[test]
    fn empty_molecule_is_rejected_as_zero_mass() {
        let result = analyze_molecule(
            Molecule::default(),
            &AnalysisConfig::default(),
            &ProgressReporter::new(),
        );
        assert!(matches!(result, Err(EngineError::ZeroMass)));
    }

    #[test]
    fn degenerate_angles_are_counted_in_report() {
        let molecule = Molecule::from_atoms([
            ("O", Point3::new(0.0, 0.0, 0.0)),
            ("H", Point3::new(0.0, 0.0, 0.0)),
            ("H", Point3::new(1.1, 0.0, 0.0)),
        ]);
        let report =
            analyze_molecule(molecule, &AnalysisConfig::default(), &ProgressReporter::new())
                .unwrap();
        assert_eq!(report.skipped_degenerate, 1);
        assert!(report.angles.is_empty());
    }
}
