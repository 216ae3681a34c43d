use nalgebra::{Point3, Vector3};
use thiserror::Error;

/// Absolute cutoff below which a vector is treated as zero.
///
/// Applied to bond vector lengths (Angstroms) and to the plane normals of a dihedral
/// (squared Angstroms). A normal's norm is |ab||bc|sin(theta), so the collinearity test
/// scales with the bond lengths and is not an angular threshold.
pub const DEGENERACY_EPSILON: f64 = 1e-8;

const ANGLE_FOLD_EPSILON: f64 = 1e-9;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Degenerate geometry: {0}")]
    Degenerate(DegeneracyKind),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DegeneracyKind {
    #[error("coincident atoms give a zero-length bond vector")]
    CoincidentAtoms,
    #[error("collinear atoms give a zero-magnitude plane normal")]
    Collinear,
}

pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (b - a).norm()
}

/// Computes the angle A-C-B at the vertex `center`, in degrees.
///
/// The cosine is clamped before `acos` so rounding noise on (anti)parallel vectors still
/// yields exactly 0 or 180 degrees.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if either arm has zero length.
pub fn bond_angle_degrees(
    a: &Point3<f64>,
    center: &Point3<f64>,
    b: &Point3<f64>,
) -> Result<f64, GeometryError> {
    let ca = a - center;
    let cb = b - center;
    let (ca_norm, cb_norm) = (ca.norm(), cb.norm());
    if ca_norm < DEGENERACY_EPSILON || cb_norm < DEGENERACY_EPSILON {
        return Err(GeometryError::Degenerate(DegeneracyKind::CoincidentAtoms));
    }
    let cos = (ca.dot(&cb) / (ca_norm * cb_norm)).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

/// Computes the signed torsion angle of A-B-C-D about the B-C axis, in degrees.
///
/// Uses `atan2((n1 x n2) . bc_hat, n1 . n2)` with `n1 = ab x bc` and `n2 = bc x cd`, so the
/// result lies in (-180, 180]; anything within rounding noise of -180 is folded onto +180.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if B and C coincide or either plane normal vanishes.
pub fn dihedral_degrees(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
) -> Result<f64, GeometryError> {
    let ab: Vector3<f64> = b - a;
    let bc: Vector3<f64> = c - b;
    let cd: Vector3<f64> = d - c;

    let bc_norm = bc.norm();
    if bc_norm < DEGENERACY_EPSILON {
        return Err(GeometryError::Degenerate(DegeneracyKind::CoincidentAtoms));
    }

    let n1 = ab.cross(&bc);
    let n2 = bc.cross(&cd);
    if n1.norm() < DEGENERACY_EPSILON || n2.norm() < DEGENERACY_EPSILON {
        return Err(GeometryError::Degenerate(DegeneracyKind::Collinear));
    }

    let y = n1.cross(&n2).dot(&(bc / bc_norm));
    let x = n1.dot(&n2);
    let angle = y.atan2(x).to_degrees();
    Ok(if angle + 180.0 < ANGLE_FOLD_EPSILON {
        180.0
    } else {
        angle
    })
}

/// Mass-weighted centroid of `(mass, position)` pairs.
///
/// # Return
///
/// Returns `None` if the total mass is zero or there are no points.
pub fn mass_weighted_centroid<'a, I>(points: I) -> Option<Point3<f64>>
where
    I: IntoIterator<Item = (f64, &'a Point3<f64>)>,
{
    let (total, weighted) = points
        .into_iter()
        .fold((0.0, Vector3::<f64>::zeros()), |(m, acc), (mass, p)| {
            (m + mass, acc + p.coords * mass)
        });
    if total == 0.0 {
        None
    } else {
        Some(Point3::from(weighted / total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn distance_is_euclidean_and_symmetric() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 12.0);
        assert!((distance(&a, &b) - 13.0).abs() < EPS);
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn bond_angle_of_right_angle_is_ninety_degrees() {
        let angle = bond_angle_degrees(
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::origin(),
            &Point3::new(0.0, 2.0, 0.0),
        )
        .unwrap();
        assert!((angle - 90.0).abs() < EPS);
    }

    #[test]
    fn bond_angle_of_collinear_arms_is_exactly_zero_or_180() {
        let straight = bond_angle_degrees(
            &Point3::new(-1.16, 0.0, 0.0),
            &Point3::origin(),
            &Point3::new(1.16, 0.0, 0.0),
        )
        .unwrap();
        assert!((straight - 180.0).abs() < 1e-6);

        let folded = bond_angle_degrees(
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::origin(),
            &Point3::new(2.0, 0.0, 0.0),
        )
        .unwrap();
        assert!(folded.abs() < 1e-6);
    }

    #[test]
    fn bond_angle_is_symmetric_in_its_arms() {
        let a = Point3::new(0.3, 1.2, -0.4);
        let c = Point3::new(0.0, 0.1, 0.0);
        let b = Point3::new(-1.1, -0.2, 0.7);
        let forward = bond_angle_degrees(&a, &c, &b).unwrap();
        let backward = bond_angle_degrees(&b, &c, &a).unwrap();
        assert!((forward - backward).abs() < EPS);
        assert!((0.0..=180.0).contains(&forward));
    }

    #[test]
    fn bond_angle_with_coincident_atoms_is_degenerate() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let result = bond_angle_degrees(&p, &p, &Point3::origin());
        assert_eq!(
            result,
            Err(GeometryError::Degenerate(DegeneracyKind::CoincidentAtoms))
        );
    }

    #[test]
    fn dihedral_of_trans_zigzag_is_180_degrees() {
        let angle = dihedral_degrees(
            &Point3::new(0.0, 1.0, 0.0),
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(1.0, -1.0, 0.0),
        )
        .unwrap();
        assert!((angle - 180.0).abs() < EPS);
    }

    #[test]
    fn dihedral_of_cis_arrangement_is_zero() {
        let angle = dihedral_degrees(
            &Point3::new(0.0, 1.0, 0.0),
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(1.0, 1.0, 0.0),
        )
        .unwrap();
        assert!(angle.abs() < EPS);
    }

    #[test]
    fn dihedral_sign_follows_handedness_and_survives_reversal() {
        let a = Point3::new(0.0, 1.0, 0.0);
        let b = Point3::new(0.0, 0.0, 0.0);
        let c = Point3::new(1.0, 0.0, 0.0);
        let d = Point3::new(1.0, 0.0, 1.0);

        let forward = dihedral_degrees(&a, &b, &c, &d).unwrap();
        assert!((forward.abs() - 90.0).abs() < EPS);

        let mirrored = dihedral_degrees(&a, &b, &c, &Point3::new(1.0, 0.0, -1.0)).unwrap();
        assert!((forward + mirrored).abs() < EPS);

        let reversed = dihedral_degrees(&d, &c, &b, &a).unwrap();
        assert!((forward - reversed).abs() < EPS);
    }

    #[test]
    fn dihedral_of_collinear_chain_is_degenerate() {
        let result = dihedral_degrees(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
            &Point3::new(3.0, 1.0, 0.0),
        );
        assert_eq!(
            result,
            Err(GeometryError::Degenerate(DegeneracyKind::Collinear))
        );
    }

    #[test]
    fn mass_weighted_centroid_weights_by_mass() {
        let heavy = Point3::new(0.0, 0.0, 0.0);
        let light = Point3::new(4.0, 0.0, 0.0);
        let center = mass_weighted_centroid([(3.0, &heavy), (1.0, &light)]).unwrap();
        assert!((center - Point3::new(1.0, 0.0, 0.0)).norm() < EPS);
    }

    #[test]
    fn mass_weighted_centroid_of_massless_points_is_none() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(mass_weighted_centroid([(0.0, &p)]).is_none());
        assert!(mass_weighted_centroid(std::iter::empty()).is_none());
    }
}
