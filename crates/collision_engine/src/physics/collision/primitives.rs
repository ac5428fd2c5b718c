//! Primitive collision shapes
//!
//! Provides the geometric primitives used by the swept ellipsoid test:
//! planes, triangles and axis-aligned bounding boxes.

use crate::foundation::math::{normalize_or_zero, Vec3};
use super::solver::point_in_triangle;

/// An infinite plane stored as origin, unit normal and implicit equation
///
/// The equation coefficients `(a, b, c, d)` satisfy
/// `a*x + b*y + c*z + d = signed distance along the normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// A point on the plane
    pub origin: Vec3,
    /// Unit normal, or zero for a plane built from collinear points
    pub normal: Vec3,
    /// Implicit equation coefficients `[a, b, c, d]`
    pub equation: [f32; 4],
}

impl Plane {
    /// Creates a plane through `origin` with the given unit `normal`
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self {
            origin,
            normal,
            equation: [normal.x, normal.y, normal.z, -normal.dot(&origin)],
        }
    }

    /// Creates the plane of a triangle given in front-facing order
    ///
    /// Collinear points are not rejected; they produce a zero normal, which is
    /// never front-facing and measures every point at distance zero.
    pub fn from_points(p1: &Vec3, p2: &Vec3, p3: &Vec3) -> Self {
        let normal = normalize_or_zero(&(p2 - p1).cross(&(p3 - p1)));
        Self::new(*p1, normal)
    }

    /// True when the plane came from collinear points
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.normal.magnitude_squared() == 0.0
    }

    /// Signed distance from the plane; positive on the side the normal points to
    pub fn signed_distance_to(&self, point: &Vec3) -> f32 {
        point.dot(&self.normal) + self.equation[3]
    }

    /// True iff the normal has a strictly positive component along `direction`
    pub fn is_front_facing_to(&self, direction: &Vec3) -> bool {
        self.normal.dot(direction) > 0.0
    }

    /// Orthogonal projection of a point onto the plane
    pub fn project_point(&self, point: &Vec3) -> Vec3 {
        point - self.normal * self.signed_distance_to(point)
    }
}

/// A triangle for collision detection, vertices in front-facing order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex, also the origin of the triangle's plane
    pub p1: Vec3,
    /// Second vertex
    pub p2: Vec3,
    /// Third vertex
    pub p3: Vec3,
}

impl Triangle {
    /// Creates a new triangle
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self { p1, p2, p3 }
    }

    /// The plane containing this triangle
    pub fn plane(&self) -> Plane {
        Plane::from_points(&self.p1, &self.p2, &self.p3)
    }

    /// Unit normal (right-hand rule), zero for a degenerate triangle
    pub fn normal(&self) -> Vec3 {
        self.plane().normal
    }

    /// Calculates the centroid (center point) of the triangle
    pub fn centroid(&self) -> Vec3 {
        (self.p1 + self.p2 + self.p3) / 3.0
    }

    /// Vertices in winding order
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Edges as `(start, end)` pairs: p1→p2, p2→p3, p3→p1
    pub fn edges(&self) -> [(Vec3, Vec3); 3] {
        [(self.p1, self.p2), (self.p2, self.p3), (self.p3, self.p1)]
    }

    /// True when the vertices are collinear (zero area)
    pub fn is_degenerate(&self) -> bool {
        self.plane().is_degenerate()
    }

    /// Barycentric containment test for a point in the triangle's plane
    pub fn contains_point(&self, point: &Vec3) -> bool {
        point_in_triangle(point, &self.p1, &self.p2, &self.p3)
    }

    /// Same triangle with the opposite winding (and therefore opposite normal)
    pub fn flipped(&self) -> Self {
        Self::new(self.p1, self.p3, self.p2)
    }

    /// Applies `f` to every vertex, keeping the winding
    pub fn map_points(&self, f: impl Fn(&Vec3) -> Vec3) -> Self {
        Self::new(f(&self.p1), f(&self.p2), f(&self.p3))
    }
}

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl AABB {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a point with given extents
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Smallest box enclosing every point, `None` when there are no points
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = *points.next()?;
        Some(points.fold(Self::new(first, first), |aabb, p| Self {
            min: aabb.min.inf(p),
            max: aabb.max.sup(p),
        }))
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the AABB
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Box with both corners multiplied by `factor` (model scale)
    pub fn scaled(&self, factor: f32) -> Self {
        Self::from_points(&[self.min * factor, self.max * factor])
            .unwrap_or(*self)
    }

    /// Check if this AABB contains a point
    pub fn contains_point(&self, point: &Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// The eight corners in the fixed order used by the box triangle table
    ///
    /// Corners 0-3 lie on the +Z face and 4-7 on the -Z face; within each
    /// face the order is (-X,-Y), (-X,+Y), (+X,+Y), (+X,-Y).
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
        ]
    }
}
