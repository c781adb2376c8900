//! Rotations that align one direction with another.
//!
//! Used to orient each cross-section ring perpendicular to the local curve
//! tangent.

use nalgebra::{Matrix3, Vector3};

use crate::error::{TubeError, TubeResult};

/// Below this value of `|from × to|²`, directions pointing apart are treated
/// as opposite and the closed-form rotation is replaced by a half turn.
///
/// At the cutoff the half turn is off by about `1e-8` rad, the same order as
/// the rounding error left in the closed form.
pub const ANTIPARALLEL_TOLERANCE: f64 = 1e-16;

/// Rotation matrix `R` such that `R * from` is parallel to `to`.
///
/// Both inputs are normalized first. Uses the Rodrigues form
/// `R = I + [v]ₓ + [v]ₓ² / (1 + c)` with `v = from × to` and `c = from · to`.
/// For `c < 0` the factor is evaluated as `(1 - c) / |v|²`, which equals
/// `1 / (1 + c)` for unit vectors without cancelling near `c = -1`. When the
/// vectors are opposite the result is a 180° rotation about an axis
/// perpendicular to `to`.
///
/// # Errors
///
/// Returns [`TubeError::DegenerateVector`] if either input is zero-length or
/// not finite.
///
/// # Example
///
/// ```
/// use mesh_from_curves::align;
/// use nalgebra::Vector3;
///
/// let from = Vector3::new(1.0, 0.0, 0.0);
/// let r = align(&from, &Vector3::z()).unwrap();
/// let rotated = r * from;
/// assert!((rotated.z - 1.0).abs() < 1e-12);
/// ```
pub fn align(from: &Vector3<f64>, to: &Vector3<f64>) -> TubeResult<Matrix3<f64>> {
    let from = unit(from)?;
    let to = unit(to)?;

    let v = from.cross(&to);
    let c = from.dot(&to);
    let sin_sq = v.norm_squared();

    let scale = if c >= 0.0 {
        1.0 / (1.0 + c)
    } else if sin_sq > ANTIPARALLEL_TOLERANCE {
        (1.0 - c) / sin_sq
    } else {
        return Ok(half_turn(&to));
    };

    let vx = v.cross_matrix();
    Ok(Matrix3::identity() + vx + vx * vx * scale)
}

fn unit(v: &Vector3<f64>) -> TubeResult<Vector3<f64>> {
    if !v.iter().all(|c| c.is_finite()) {
        return Err(TubeError::DegenerateVector);
    }
    v.try_normalize(f64::EPSILON)
        .ok_or(TubeError::DegenerateVector)
}

/// 180° rotation `2kkᵀ - I` about a unit axis `k` perpendicular to `v`.
fn half_turn(v: &Vector3<f64>) -> Matrix3<f64> {
    let k = find_perpendicular(v);
    2.0 * k * k.transpose() - Matrix3::identity()
}

/// Find a unit vector perpendicular to the given unit vector.
fn find_perpendicular(v: &Vector3<f64>) -> Vector3<f64> {
    // Choose the axis most perpendicular to v
    let abs_x = v.x.abs();
    let abs_y = v.y.abs();
    let abs_z = v.z.abs();

    let perp = if abs_x <= abs_y && abs_x <= abs_z {
        Vector3::x()
    } else if abs_y <= abs_z {
        Vector3::y()
    } else {
        Vector3::z()
    };

    v.cross(&perp)
        .try_normalize(f64::EPSILON)
        .unwrap_or(Vector3::y())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn samples() -> Vec<Vector3<f64>> {
        vec![
            Vector3::x(),
            Vector3::y(),
            Vector3::z(),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(-0.3, 0.8, 0.1),
            Vector3::new(0.2, -0.1, -0.9),
            Vector3::new(1e-4, 0.0, -1.0),
            Vector3::new(-5.0, 2.0, 0.5),
        ]
    }

    fn assert_proper_rotation(r: &Matrix3<f64>) {
        let should_be_identity = r.transpose() * r;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(should_be_identity[(i, j)], expected, epsilon = 1e-6);
            }
        }
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn maps_samples_onto_z() {
        for sample in samples() {
            let u = sample.normalize();
            let r = align(&u, &Vector3::z()).unwrap();
            let mapped = r * u;
            assert_relative_eq!(mapped.x, 0.0, epsilon = 1e-6);
            assert_relative_eq!(mapped.y, 0.0, epsilon = 1e-6);
            assert_relative_eq!(mapped.z, 1.0, epsilon = 1e-6);
            assert_proper_rotation(&r);
        }
    }

    #[test]
    fn identity_for_same_direction() {
        let r = align(&Vector3::z(), &Vector3::z()).unwrap();
        assert_relative_eq!(r, Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn antiparallel_falls_back_to_half_turn() {
        let r = align(&(-Vector3::z()), &Vector3::z()).unwrap();
        let mapped = r * -Vector3::z();
        assert!(r.iter().all(|c| c.is_finite()));
        assert_relative_eq!(mapped, Vector3::z(), epsilon = 1e-12);
        assert_proper_rotation(&r);
    }

    #[test]
    fn antiparallel_for_arbitrary_axis() {
        let to = Vector3::new(0.3, -0.4, 0.5).normalize();
        let r = align(&(-to), &to).unwrap();
        assert_relative_eq!(r * -to, to, epsilon = 1e-12);
        assert_proper_rotation(&r);
    }

    #[test]
    fn nearly_opposite_directions_stay_accurate() {
        // 1 + c runs from about 5e-7 down past the cutoff
        for tilt in [1e-3, 1e-5, 1e-7, 1e-9] {
            let u = Vector3::new(tilt, 0.0, -1.0).normalize();
            let r = align(&u, &Vector3::z()).unwrap();

            assert_relative_eq!(r * u, Vector3::z(), epsilon = 1e-8);
            assert_relative_eq!(r.transpose() * r, Matrix3::identity(), epsilon = 1e-9);
            assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn ring_near_minus_z_keeps_its_radius() {
        let tangent = Vector3::new(3e-6, 0.0, -1.0);
        let r = align(&tangent, &Vector3::z()).unwrap().transpose();
        for j in 0..8 {
            let angle = std::f64::consts::TAU * f64::from(j) / 8.0;
            let c = Vector3::new(angle.cos(), angle.sin(), 0.0);
            let placed = r * c;
            assert_relative_eq!(placed.norm(), 1.0, epsilon = 1e-9);
            assert_relative_eq!(placed.dot(&tangent.normalize()), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn unnormalized_inputs_are_accepted() {
        let r = align(&Vector3::new(0.0, 3.0, 0.0), &Vector3::new(0.0, 0.0, 2.0)).unwrap();
        assert_relative_eq!(r * Vector3::y(), Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn zero_vector_rejected() {
        assert_eq!(
            align(&Vector3::zeros(), &Vector3::z()),
            Err(TubeError::DegenerateVector)
        );
        assert_eq!(
            align(&Vector3::new(f64::NAN, 0.0, 1.0), &Vector3::z()),
            Err(TubeError::DegenerateVector)
        );
    }

    #[test]
    fn find_perpendicular_is_orthogonal() {
        for v in [Vector3::x(), Vector3::y(), Vector3::z()] {
            let perp = find_perpendicular(&v);
            assert_relative_eq!(v.dot(&perp), 0.0, epsilon = 1e-10);
            assert_relative_eq!(perp.norm(), 1.0, epsilon = 1e-10);
        }
    }
}
