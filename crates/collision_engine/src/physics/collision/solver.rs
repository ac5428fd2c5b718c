//! Scalar helpers for the swept sphere test
//!
//! The lowest-root quadratic solve gives the earliest time of impact inside
//! a bound, and the barycentric test classifies plane points against a
//! triangle.

use crate::foundation::math::Vec3;

/// Smallest root of `a*t^2 + b*t + c = 0` inside the open interval `(0, current)`
///
/// Returns `None` for complex roots, for `a == 0`, and when neither real root
/// lies strictly between zero and `current`.
#[allow(clippy::float_cmp)]
pub fn lowest_root(a: f32, b: f32, c: f32, current: f32) -> Option<f32> {
    let determinant = b * b - 4.0 * a * c;
    if determinant < 0.0 || a == 0.0 {
        return None;
    }

    let sqrt_determinant = determinant.sqrt();
    let mut r1 = (-b - sqrt_determinant) / (2.0 * a);
    let mut r2 = (-b + sqrt_determinant) / (2.0 * a);
    if r1 > r2 {
        std::mem::swap(&mut r1, &mut r2);
    }

    if r1 > 0.0 && r1 < current {
        return Some(r1);
    }
    // r1 can be negative while r2 is still in range
    if r2 > 0.0 && r2 < current {
        return Some(r2);
    }
    None
}

/// Barycentric point-in-triangle test
///
/// `point` is assumed to lie in the triangle's plane; any offset along the
/// normal is ignored because only dot products with in-plane edges are used.
/// The far edge is exclusive (`u + v < 1`), the two edges through `p1` are
/// inclusive. Zero-area triangles contain nothing.
#[allow(clippy::float_cmp)]
pub fn point_in_triangle(point: &Vec3, p1: &Vec3, p2: &Vec3, p3: &Vec3) -> bool {
    let v0 = p2 - p1;
    let v1 = p3 - p1;
    let v2 = point - p1;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let denominator = dot00 * dot11 - dot01 * dot01;
    if denominator == 0.0 || !denominator.is_finite() {
        return false;
    }

    let u = (dot11 * dot02 - dot01 * dot12) / denominator;
    let v = (dot00 * dot12 - dot01 * dot02) / denominator;

    u >= 0.0 && v >= 0.0 && u + v < 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lowest_root_picks_smaller_of_two_valid_roots() {
        // (t - 0.2)(t - 0.5)
        let root = lowest_root(1.0, -0.7, 0.1, 1.0).unwrap();
        assert_relative_eq!(root, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_lowest_root_skips_negative_root() {
        // (t + 1)(t - 0.5)
        let root = lowest_root(1.0, 0.5, -0.5, 1.0).unwrap();
        assert_relative_eq!(root, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_lowest_root_rejects_roots_outside_interval() {
        // (t - 2)(t - 3), both beyond the bound
        assert_eq!(lowest_root(1.0, -5.0, 6.0, 1.0), None);
        // (t + 1)(t + 2), both negative
        assert_eq!(lowest_root(1.0, 3.0, 2.0, 1.0), None);
        // t^2 + 1, complex
        assert_eq!(lowest_root(1.0, 0.0, 1.0, 1.0), None);
        // root equal to the bound is excluded
        assert_eq!(lowest_root(1.0, -1.0, 0.0, 1.0), None);
    }

    #[test]
    fn test_lowest_root_bound_shrinks_the_interval() {
        assert_eq!(lowest_root(1.0, -0.7, 0.1, 0.15), None);
        let root = lowest_root(1.0, 0.5, -0.5, 0.6).unwrap();
        assert_relative_eq!(root, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_lowest_root_divides_by_two_a() {
        // 2(t - 0.2)(t - 0.5)
        let root = lowest_root(2.0, -1.4, 0.2, 1.0).unwrap();
        assert_relative_eq!(root, 0.2, epsilon = 1e-6);

        // negative leading coefficient flips root order before sorting
        let root = lowest_root(-2.0, 1.4, -0.2, 1.0).unwrap();
        assert_relative_eq!(root, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_lowest_root_zero_leading_coefficient() {
        assert_eq!(lowest_root(0.0, 1.0, -0.5, 1.0), None);
    }

    #[test]
    fn test_point_in_triangle_far_edge_is_exclusive() {
        let p1 = Vec3::new(0.0, 0.0, 0.0);
        let p2 = Vec3::new(1.0, 0.0, 0.0);
        let p3 = Vec3::new(0.0, 1.0, 0.0);

        assert!(!point_in_triangle(&Vec3::new(0.5, 0.5, 0.0), &p1, &p2, &p3));
        assert!(point_in_triangle(&Vec3::new(0.4, 0.4, 0.0), &p1, &p2, &p3));
    }

    #[test]
    fn test_point_in_triangle_near_edges_are_inclusive() {
        let p1 = Vec3::new(0.0, 0.0, 0.0);
        let p2 = Vec3::new(1.0, 0.0, 0.0);
        let p3 = Vec3::new(0.0, 1.0, 0.0);

        assert!(point_in_triangle(&p1, &p1, &p2, &p3));
        assert!(point_in_triangle(&Vec3::new(0.5, 0.0, 0.0), &p1, &p2, &p3));
        assert!(point_in_triangle(&Vec3::new(0.0, 0.25, 0.0), &p1, &p2, &p3));
        assert!(!point_in_triangle(&Vec3::new(-0.1, 0.2, 0.0), &p1, &p2, &p3));
    }

    #[test]
    fn test_point_in_triangle_ignores_offset_along_normal() {
        let p1 = Vec3::new(0.0, 0.0, 0.0);
        let p2 = Vec3::new(1.0, 0.0, 0.0);
        let p3 = Vec3::new(0.0, 1.0, 0.0);

        assert!(point_in_triangle(&Vec3::new(0.2, 0.2, -2.0), &p1, &p2, &p3));
    }

    #[test]
    fn test_point_in_degenerate_triangle_is_false() {
        let p1 = Vec3::new(0.0, 0.0, 0.0);
        let p2 = Vec3::new(1.0, 1.0, 0.0);
        let p3 = Vec3::new(2.0, 2.0, 0.0);

        assert!(!point_in_triangle(&Vec3::new(1.0, 1.0, 0.0), &p1, &p2, &p3));
        assert!(!point_in_triangle(&p1, &p1, &p1, &p1));
    }
}
