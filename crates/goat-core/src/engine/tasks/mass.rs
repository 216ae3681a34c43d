use crate::core::elements;
use crate::core::models::molecule::Molecule;
use crate::core::utils::geometry::mass_weighted_centroid;
use crate::engine::error::EngineError;
use nalgebra::Point3;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassProperties {
    /// Total mass in atomic mass units.
    pub total_mass: f64,
    /// Mass-weighted centroid; the origin when the total mass is zero.
    pub center_of_mass: Point3<f64>,
}

/// Computes the total mass and center of mass of a molecule.
///
/// A zero total mass is returned as-is; deciding whether it is fatal is left to the caller.
///
/// # Errors
///
/// Returns [`EngineError::UnknownElement`] if any atom's element is missing from the element
/// table. Unknown elements are never counted as massless.
#[instrument(skip_all, name = "mass_task")]
pub fn run(molecule: &Molecule) -> Result<MassProperties, EngineError> {
    let masses = molecule
        .atoms()
        .iter()
        .map(|atom| {
            elements::lookup(&atom.element)
                .map(|e| (e.atomic_mass, &atom.position))
                .ok_or_else(|| EngineError::UnknownElement {
                    symbol: atom.element.clone(),
                    index: atom.index,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total_mass: f64 = masses.iter().map(|(m, _)| m).sum();
    let center_of_mass = mass_weighted_centroid(masses).unwrap_or_else(Point3::origin);

    info!(
        total_mass,
        com_x = center_of_mass.x,
        com_y = center_of_mass.y,
        com_z = center_of_mass.z,
        "Mass calculation complete."
    );
    Ok(MassProperties {
        total_mass,
        center_of_mass,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn hydrogen_molecule() -> Molecule {
        Molecule::from_atoms([
            ("H", Point3::new(0.0, 0.0, 0.0)),
            ("H", Point3::new(0.74, 0.0, 0.0)),
        ])
    }

    #[test]
    fn hydrogen_molecule_has_mass_2_016_and_centered_com() {
        let props = run(&hydrogen_molecule()).unwrap();
        assert!((props.total_mass - 2.016).abs() < 1e-9);
        assert!((props.center_of_mass - Point3::new(0.37, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn center_of_mass_leans_toward_heavier_atom() {
        let molecule = Molecule::from_atoms([
            ("C", Point3::new(0.0, 0.0, 0.0)),
            ("O", Point3::new(1.128, 0.0, 0.0)),
        ]);
        let props = run(&molecule).unwrap();
        let expected_x = 15.999 * 1.128 / (12.011 + 15.999);
        assert!((props.center_of_mass.x - expected_x).abs() < 1e-12);
        assert!(props.center_of_mass.x > 0.564);
    }

    #[test]
    fn translation_shifts_com_and_preserves_mass() {
        let molecule = Molecule::from_atoms([
            ("N", Point3::new(0.1, -0.2, 0.3)),
            ("H", Point3::new(1.0, 0.0, 0.0)),
            ("H", Point3::new(-0.3, 0.9, 0.0)),
            ("H", Point3::new(-0.3, -0.4, 0.8)),
        ]);
        let offset = Vector3::new(10.0, -5.5, 2.25);

        let before = run(&molecule).unwrap();
        let after = run(&molecule.translated(&offset)).unwrap();

        assert!((before.total_mass - after.total_mass).abs() < 1e-12);
        assert!((after.center_of_mass - (before.center_of_mass + offset)).norm() < 1e-9);
    }

    #[test]
    fn unknown_element_is_reported_not_ignored() {
        let molecule = Molecule::from_atoms([
            ("C", Point3::origin()),
            ("Xx", Point3::new(1.5, 0.0, 0.0)),
        ]);
        let result = run(&molecule);
        match result {
            Err(EngineError::UnknownElement { symbol, index }) => {
                assert_eq!(symbol, "Xx");
                assert_eq!(index, 2);
            }
            other => panic!("expected UnknownElement, got {:?}", other),
        }
    }

    #[test]
    fn empty_molecule_has_zero_mass_at_origin() {
        let props = run(&Molecule::default()).unwrap();
        assert_eq!(props.total_mass, 0.0);
        assert_eq!(props.center_of_mass, Point3::origin());
    }
}
