//! Swept unit sphere against a single triangle
//!
//! Everything here works in ellipsoid space, where the mover is a unit
//! sphere. The test finds the earliest time in `[0, 1]` at which the sphere,
//! travelling along the packet's velocity, touches the triangle face, one of
//! its vertices or one of its edges.
//!
//! A triangle only blocks movement along its normal: a sweep whose direction
//! does not have a strictly positive component along the normal passes
//! through it.

use super::packet::{CollisionPacket, ContactKind, SweepHit};
use super::primitives::Triangle;
use super::solver::lowest_root;
use crate::foundation::math::Vec3;

/// Earliest contact of the packet's swept sphere with `triangle`
///
/// `triangle` must already be in ellipsoid space. Returns `None` when the
/// triangle is back-facing, degenerate, or out of reach during this sweep.
#[allow(clippy::float_cmp)]
pub fn sweep_triangle(packet: &CollisionPacket, triangle: &Triangle) -> Option<SweepHit> {
    let plane = triangle.plane();
    if !plane.is_front_facing_to(&packet.normalized_velocity) {
        return None;
    }

    let base = packet.base_point;
    let velocity = packet.velocity;
    let speed = packet.speed();

    let signed_distance = plane.signed_distance_to(&base);
    let normal_dot_velocity = plane.normal.dot(&velocity);

    let (t0, embedded) = if normal_dot_velocity == 0.0 {
        // Travelling parallel to the plane: either always touching or never
        if signed_distance.abs() >= 1.0 {
            return None;
        }
        (0.0, true)
    } else {
        let mut t0 = (-1.0 - signed_distance) / normal_dot_velocity;
        let mut t1 = (1.0 - signed_distance) / normal_dot_velocity;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > 1.0 || t1 < 0.0 {
            return None;
        }
        (t0.clamp(0.0, 1.0), false)
    };

    if !embedded {
        let contact = plane.project_point(&(base + velocity * t0));
        if triangle.contains_point(&contact) {
            return Some(SweepHit::new(ContactKind::Face, t0, speed, contact));
        }
    }

    sweep_features(triangle, &base, &velocity, speed)
}

/// Vertex and edge sweeps, used when the face itself is not hit
fn sweep_features(triangle: &Triangle, base: &Vec3, velocity: &Vec3, speed: f32) -> Option<SweepHit> {
    let velocity_squared = velocity.magnitude_squared();
    let mut t = 1.0;
    let mut hit = None;

    // Sphere center reaches distance 1 from a point
    let a = velocity_squared;
    for vertex in triangle.vertices() {
        let b = 2.0 * velocity.dot(&(base - vertex));
        let c = (vertex - base).magnitude_squared() - 1.0;
        if let Some(root) = lowest_root(a, b, c, t) {
            t = root;
            hit = Some(SweepHit::new(ContactKind::Vertex, t, speed, vertex));
        }
    }

    // Sphere center reaches distance 1 from the edge's line, inside the segment
    for (start, end) in triangle.edges() {
        let edge = end - start;
        let base_to_vertex = start - base;
        let edge_squared = edge.magnitude_squared();
        if edge_squared == 0.0 {
            continue;
        }

        let edge_dot_velocity = edge.dot(velocity);
        let edge_dot_base_to_vertex = edge.dot(&base_to_vertex);

        let a = edge_squared * -velocity_squared + edge_dot_velocity * edge_dot_velocity;
        let b = edge_squared * (2.0 * velocity.dot(&base_to_vertex))
            - 2.0 * edge_dot_velocity * edge_dot_base_to_vertex;
        let c = edge_squared * (1.0 - base_to_vertex.magnitude_squared())
            + edge_dot_base_to_vertex * edge_dot_base_to_vertex;

        if let Some(root) = lowest_root(a, b, c, t) {
            let f = (edge_dot_velocity * root - edge_dot_base_to_vertex) / edge_squared;
            if (0.0..=1.0).contains(&f) {
                t = root;
                hit = Some(SweepHit::new(ContactKind::Edge, t, speed, start + edge * f));
            }
        }
    }

    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_packet(position: Vec3, velocity: Vec3) -> CollisionPacket {
        CollisionPacket::new(&Vec3::new(1.0, 1.0, 1.0), &velocity, &position)
    }

    /// Right triangle in the z = 0 plane with its normal along +Z
    fn floor_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(0.0, 4.0, 0.0),
        )
    }

    #[test]
    fn test_face_hit_at_plane_entry_time() {
        let packet = unit_packet(Vec3::new(1.0, 1.0, -5.0), Vec3::new(0.0, 0.0, 8.0));
        let hit = sweep_triangle(&packet, &floor_triangle()).unwrap();

        assert_eq!(hit.kind, ContactKind::Face);
        assert_relative_eq!(hit.time, 0.5, epsilon = 1e-6);
        assert_relative_eq!(hit.distance, 4.0, epsilon = 1e-5);
        assert_relative_eq!(hit.point, Vec3::new(1.0, 1.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_vertex_hit_outside_the_face() {
        let packet = unit_packet(Vec3::new(-0.6, -0.6, -5.0), Vec3::new(0.0, 0.0, 8.0));
        let hit = sweep_triangle(&packet, &floor_triangle()).unwrap();

        assert_eq!(hit.kind, ContactKind::Vertex);
        assert_relative_eq!(hit.time, 0.558_86, epsilon = 1e-4);
        assert_eq!(hit.point, Vec3::zeros());
    }

    #[test]
    fn test_edge_hit_inside_segment() {
        let packet = unit_packet(Vec3::new(1.0, -0.6, -5.0), Vec3::new(0.0, 0.0, 8.0));
        let hit = sweep_triangle(&packet, &floor_triangle()).unwrap();

        assert_eq!(hit.kind, ContactKind::Edge);
        assert_relative_eq!(hit.time, 0.525, epsilon = 1e-4);
        assert_relative_eq!(hit.distance, 4.2, epsilon = 1e-3);
        assert_relative_eq!(hit.point, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-4);
    }

    #[test]
    fn test_back_face_is_transparent() {
        let packet = unit_packet(Vec3::new(1.0, 1.0, 5.0), Vec3::new(0.0, 0.0, -8.0));
        assert_eq!(sweep_triangle(&packet, &floor_triangle()), None);

        // Same sweep hits once the winding is reversed
        assert!(sweep_triangle(&packet, &floor_triangle().flipped()).is_some());
    }

    #[test]
    fn test_parallel_sweep_is_ignored() {
        let packet = unit_packet(Vec3::new(-3.0, 1.0, -0.5), Vec3::new(8.0, 0.0, 0.0));
        assert_eq!(sweep_triangle(&packet, &floor_triangle()), None);
    }

    #[test]
    fn test_out_of_reach_sweep_misses() {
        let packet = unit_packet(Vec3::new(1.0, 1.0, -20.0), Vec3::new(0.0, 0.0, 8.0));
        assert_eq!(sweep_triangle(&packet, &floor_triangle()), None);

        // Passes beside the triangle without touching any feature
        let packet = unit_packet(Vec3::new(10.0, 10.0, -5.0), Vec3::new(0.0, 0.0, 8.0));
        assert_eq!(sweep_triangle(&packet, &floor_triangle()), None);
    }

    #[test]
    fn test_touching_sphere_hits_at_time_zero() {
        let packet = unit_packet(Vec3::new(1.0, 1.0, -0.5), Vec3::new(0.0, 0.0, 1.0));
        let hit = sweep_triangle(&packet, &floor_triangle()).unwrap();

        assert_eq!(hit.kind, ContactKind::Face);
        assert_relative_eq!(hit.time, 0.0);
        assert_relative_eq!(hit.distance, 0.0);
    }

    #[test]
    fn test_degenerate_triangle_never_hits() {
        let sliver = Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
        );
        let packet = unit_packet(Vec3::new(1.0, 1.0, -3.0), Vec3::new(0.0, 0.0, 8.0));
        assert_eq!(sweep_triangle(&packet, &sliver), None);
    }
}
