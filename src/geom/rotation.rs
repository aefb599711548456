//! Rotation between two directions.
//!
//! Rodrigues-style construction of the minimal rotation mapping one vector
//! onto another, with explicit handling of the parallel and anti-parallel
//! cases where the closed-form expression degenerates to 0/0.

use glam::{DMat3, DVec3};

use super::types::GeomError;

// Below this sine magnitude the vectors are treated as collinear.
const COLLINEAR_EPS: f64 = 1e-12;

/// Find the rotation matrix that aligns `source` with `target`.
///
/// Both vectors must be finite and non-zero; they need not be normalized.
/// Collinear inputs are a defined case, not an error: identical directions
/// yield the identity, opposite directions yield a 180-degree rotation about
/// an axis perpendicular to `source`.
pub fn rotation_between(source: DVec3, target: DVec3) -> Result<DMat3, GeomError> {
    let a = unit(source, "source")?;
    let b = unit(target, "target")?;

    let v = a.cross(b);
    let c = a.dot(b);
    let s = v.length();

    if s < COLLINEAR_EPS {
        if c > 0.0 {
            return Ok(DMat3::IDENTITY);
        }
        // Anti-parallel: rotate 180 degrees about any axis perpendicular
        // to `a`. R = 2*u*u^T - I.
        let u = perpendicular_to(a);
        return Ok(DMat3::from_cols(
            2.0 * u.x * u - DVec3::X,
            2.0 * u.y * u - DVec3::Y,
            2.0 * u.z * u - DVec3::Z,
        ));
    }

    let k = skew(v);
    Ok(DMat3::IDENTITY + k + (k * k) * ((1.0 - c) / (s * s)))
}

fn unit(v: DVec3, which: &str) -> Result<DVec3, GeomError> {
    if !v.is_finite() {
        return Err(GeomError::DegenerateVector(format!(
            "{which} vector has non-finite components: {v:?}"
        )));
    }
    let len = v.length();
    if len < COLLINEAR_EPS {
        return Err(GeomError::DegenerateVector(format!(
            "{which} vector has zero magnitude"
        )));
    }
    Ok(v / len)
}

/// Skew-symmetric cross-product matrix of `v`, so that `skew(v) * w == v x w`.
fn skew(v: DVec3) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(0.0, v.z, -v.y),
        DVec3::new(-v.z, 0.0, v.x),
        DVec3::new(v.y, -v.x, 0.0),
    )
}

/// A unit vector perpendicular to `v` (`v` must be unit length).
///
/// Crosses against the standard basis vector of the smallest-magnitude
/// component, which keeps the result well away from zero.
fn perpendicular_to(v: DVec3) -> DVec3 {
    let ax = v.x.abs();
    let ay = v.y.abs();
    let az = v.z.abs();
    let basis = if ax <= ay && ax <= az {
        DVec3::X
    } else if ay <= az {
        DVec3::Y
    } else {
        DVec3::Z
    };
    v.cross(basis).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_close(a: DVec3, b: DVec3, tol: f64) {
        assert!(
            (a - b).length() < tol,
            "vectors differ: {a:?} vs {b:?}"
        );
    }

    fn assert_proper_rotation(r: DMat3) {
        assert!((r.determinant() - 1.0).abs() < 1e-9);
        let rtr = r.transpose() * r;
        for col in 0..3 {
            for row in 0..3 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!((rtr.col(col)[row] - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_zero_vector_rejected() {
        assert!(rotation_between(DVec3::ZERO, DVec3::Z).is_err());
        assert!(rotation_between(DVec3::X, DVec3::ZERO).is_err());
    }

    #[test]
    fn test_identical_directions_give_identity() {
        let v = DVec3::new(0.3, -1.2, 2.5);
        let r = rotation_between(v, v).unwrap();
        assert!((r - DMat3::IDENTITY).abs_diff_eq(DMat3::ZERO, 1e-12));
    }

    #[test]
    fn test_x_to_z() {
        let r = rotation_between(DVec3::X, DVec3::Z).unwrap();
        assert_proper_rotation(r);
        assert_vec_close(r * DVec3::X, DVec3::Z, 1e-6);
    }

    #[test]
    fn test_general_alignment() {
        let v1 = DVec3::new(1.0, 2.0, -0.5);
        let v2 = DVec3::new(-3.0, 0.7, 1.4);
        let r = rotation_between(v1, v2).unwrap();
        assert_proper_rotation(r);
        assert_vec_close(r * v1.normalize(), v2.normalize(), 1e-9);
    }

    #[test]
    fn test_antiparallel_is_proper_half_turn() {
        for v in [
            DVec3::X,
            DVec3::new(0.0, 0.0, -4.0),
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(-0.2, 3.0, 0.1),
        ] {
            let r = rotation_between(v, -v).unwrap();
            assert_proper_rotation(r);
            assert_vec_close(r * v.normalize(), -v.normalize(), 1e-9);
            // Half turn: applying twice is the identity.
            let rr = r * r;
            assert!((rr - DMat3::IDENTITY).abs_diff_eq(DMat3::ZERO, 1e-9));
        }
    }

    #[test]
    fn test_round_trip() {
        let v1 = DVec3::new(0.6, -1.1, 2.0);
        let v2 = DVec3::new(2.2, 0.4, -0.9);
        let forward = rotation_between(v1, v2).unwrap();
        let back = rotation_between(v2, v1).unwrap();
        assert_vec_close(back * (forward * v1.normalize()), v1.normalize(), 1e-9);
    }
}
