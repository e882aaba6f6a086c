#![warn(missing_docs)]

//! Math types for the strata slicer.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! slicing geometry: 2D/3D points and vectors, the shared distance
//! tolerance, and the directional angle used to disambiguate contour
//! junctions.

use nalgebra::{Vector2, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A point in the 2D plane of a slice.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// Distance tolerance below which two floating-point quantities are
/// treated as equal (in mm).
///
/// Mesh files carry limited precision, so every closeness comparison in
/// the workspace goes through this single constant: vertex matching during
/// loop linking, on-plane classification, and degenerate-edge filtering.
pub const EPSILON: f64 = 1e-5;

/// Check if a scalar is effectively zero.
pub fn is_zero(d: f64) -> bool {
    d.abs() < EPSILON
}

/// Check if two 3D points are coincident within [`EPSILON`].
pub fn points_close(a: &Point3, b: &Point3) -> bool {
    (a - b).norm() < EPSILON
}

/// Check if two 2D points are coincident within [`EPSILON`].
pub fn points2_close(a: &Point2, b: &Point2) -> bool {
    (a - b).norm() < EPSILON
}

/// The scalar 2D cross product `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` points to the left of `a`.
pub fn cross2(a: &Vec2, b: &Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Signed turning angle from `from` to `to`, mapped into `[0, 2π)`.
///
/// Counterclockwise turns keep the unsigned angle; clockwise turns map to
/// `2π - angle`. Loop linking picks the continuation with the minimum
/// directional angle when several edges meet at one vertex.
pub fn directional_angle(from: &Vec2, to: &Vec2) -> f64 {
    let denom = from.norm() * to.norm();
    let cos = (from.dot(to) / denom).clamp(-1.0, 1.0);
    let angle = cos.acos();
    if cross2(from, to) > 0.0 {
        angle
    } else {
        std::f64::consts::TAU - angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_points_close_reflexive() {
        let p = Point3::new(1.5, -2.0, 0.25);
        assert!(points_close(&p, &p));
        let q = Point2::new(-7.0, 3.5);
        assert!(points2_close(&q, &q));
    }

    #[test]
    fn test_points_close_symmetric() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(EPSILON / 2.0, 0.0, 0.0);
        assert!(points_close(&a, &b));
        assert!(points_close(&b, &a));

        let c = Point3::new(1.0, 0.0, 0.0);
        assert!(!points_close(&a, &c));
        assert!(!points_close(&c, &a));
    }

    #[test]
    fn test_cross2_sign() {
        let x = Vec2::new(1.0, 0.0);
        let y = Vec2::new(0.0, 1.0);
        assert!(cross2(&x, &y) > 0.0);
        assert!(cross2(&y, &x) < 0.0);
        assert_relative_eq!(cross2(&x, &x), 0.0);
    }

    #[test]
    fn test_directional_angle_quadrants() {
        let x = Vec2::new(1.0, 0.0);

        // 90° counterclockwise turn.
        assert_relative_eq!(
            directional_angle(&x, &Vec2::new(0.0, 1.0)),
            FRAC_PI_2,
            epsilon = 1e-12
        );
        // 90° clockwise turn maps to 3π/2.
        assert_relative_eq!(
            directional_angle(&x, &Vec2::new(0.0, -1.0)),
            3.0 * FRAC_PI_2,
            epsilon = 1e-12
        );
        // Reversal is π regardless of cross sign.
        assert_relative_eq!(
            directional_angle(&x, &Vec2::new(-1.0, 0.0)),
            PI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_directional_angle_unnormalized_inputs() {
        let a = Vec2::new(3.0, 0.0);
        let b = Vec2::new(0.0, 0.5);
        assert_relative_eq!(directional_angle(&a, &b), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_directional_angle_range() {
        let x = Vec2::new(1.0, 0.0);
        for i in 0..16 {
            let theta = i as f64 / 16.0 * TAU;
            let d = Vec2::new(theta.cos(), theta.sin());
            let angle = directional_angle(&x, &d);
            assert!((0.0..=TAU).contains(&angle), "angle {angle} out of range");
        }
    }
}
