//! Math utilities and types
//!
//! Vector and matrix aliases plus the change of basis between world space and
//! ellipsoid space, where the moving ellipsoid becomes a unit sphere.

pub use nalgebra::{Matrix3, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// Change of basis from world space into ellipsoid space
///
/// A diagonal matrix holding the reciprocal of each radius. Multiplying a
/// world-space vector by it scales the ellipsoid down to a unit sphere.
pub fn ellipsoid_basis(radii: &Vec3) -> Mat3 {
    Mat3::from_diagonal(&radii.map(|r| 1.0 / r))
}

/// Inverse change of basis, from ellipsoid space back into world space
pub fn world_basis(radii: &Vec3) -> Mat3 {
    Mat3::from_diagonal(radii)
}

/// True when every component is finite (neither NaN nor infinite)
pub fn is_finite(v: &Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Normalize a vector, returning zero for a zero-length input instead of NaN
pub fn normalize_or_zero(v: &Vec3) -> Vec3 {
    v.try_normalize(0.0).unwrap_or_else(Vec3::zeros)
}
