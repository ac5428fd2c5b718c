//! Per-query collision state
//!
//! A [`CollisionPacket`] holds one movement request expressed in both world
//! space and ellipsoid space, together with the nearest hit found so far.

use crate::foundation::math::{ellipsoid_basis, normalize_or_zero, world_basis, Mat3, Vec3};

/// Which feature of a triangle the swept sphere touched first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Interior of the triangle face
    Face,
    /// One of the three corners
    Vertex,
    /// One of the three edges
    Edge,
}

/// Earliest contact of the swept unit sphere with one triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Feature that was touched
    pub kind: ContactKind,
    /// Normalized time of impact in `[0, 1]`
    pub time: f32,
    /// Distance travelled before impact, in ellipsoid space
    pub distance: f32,
    /// Contact point on the triangle, in ellipsoid space
    pub point: Vec3,
}

impl SweepHit {
    /// Builds a hit, deriving the travelled distance from the sweep speed
    pub fn new(kind: ContactKind, time: f32, speed: f32, point: Vec3) -> Self {
        Self {
            kind,
            time,
            distance: time * speed,
            point,
        }
    }

    /// True when every component of the hit is a finite number
    pub fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.distance.is_finite()
            && self.point.iter().all(|c| c.is_finite())
    }
}

/// One movement query: the sweep inputs in both spaces and the nearest hit
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionPacket {
    /// Ellipsoid radii along X, Y and Z
    pub ellipsoid_radius: Vec3,
    /// Requested velocity in world space
    pub world_velocity: Vec3,
    /// Current ellipsoid center in world space
    pub world_position: Vec3,

    /// Velocity in ellipsoid space
    pub velocity: Vec3,
    /// Unit ellipsoid-space velocity, zero when the velocity is zero
    pub normalized_velocity: Vec3,
    /// Ellipsoid center in ellipsoid space
    pub base_point: Vec3,

    /// Nearest hit across every triangle tested so far
    pub nearest: Option<SweepHit>,
}

impl CollisionPacket {
    /// Converts a world-space movement request into ellipsoid space
    pub fn new(radii: &Vec3, world_velocity: &Vec3, world_position: &Vec3) -> Self {
        let to_ellipsoid = ellipsoid_basis(radii);
        let velocity = to_ellipsoid * world_velocity;

        Self {
            ellipsoid_radius: *radii,
            world_velocity: *world_velocity,
            world_position: *world_position,
            velocity,
            normalized_velocity: normalize_or_zero(&velocity),
            base_point: to_ellipsoid * world_position,
            nearest: None,
        }
    }

    /// Length of the ellipsoid-space velocity
    pub fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }

    /// World-to-ellipsoid change of basis for this packet's radii
    pub fn to_ellipsoid_space(&self) -> Mat3 {
        ellipsoid_basis(&self.ellipsoid_radius)
    }

    /// Ellipsoid-to-world change of basis for this packet's radii
    pub fn to_world_space(&self) -> Mat3 {
        world_basis(&self.ellipsoid_radius)
    }

    /// Whether any triangle was hit
    pub fn found_collision(&self) -> bool {
        self.nearest.is_some()
    }

    /// Distance to the nearest hit in ellipsoid space
    pub fn nearest_distance(&self) -> Option<f32> {
        self.nearest.map(|hit| hit.distance)
    }

    /// Contact point of the nearest hit in ellipsoid space
    pub fn intersection_point(&self) -> Option<Vec3> {
        self.nearest.map(|hit| hit.point)
    }

    /// Keeps `hit` if it is the first one or strictly closer than the current nearest
    ///
    /// Non-finite hits are discarded. Returns whether the hit was kept.
    pub fn record(&mut self, hit: SweepHit) -> bool {
        if !hit.is_finite() {
            return false;
        }
        match self.nearest {
            Some(current) if hit.distance >= current.distance => false,
            _ => {
                self.nearest = Some(hit);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_packet_scales_into_ellipsoid_space() {
        let packet = CollisionPacket::new(
            &Vec3::new(2.0, 4.0, 0.5),
            &Vec3::new(2.0, 0.0, 1.0),
            &Vec3::new(4.0, 8.0, -1.0),
        );
        assert_relative_eq!(packet.velocity, Vec3::new(1.0, 0.0, 2.0), epsilon = 1e-6);
        assert_relative_eq!(packet.base_point, Vec3::new(2.0, 2.0, -2.0), epsilon = 1e-6);
        assert_relative_eq!(packet.normalized_velocity.magnitude(), 1.0, epsilon = 1e-6);
        assert!(!packet.found_collision());

        let back = packet.to_world_space() * packet.velocity;
        assert_relative_eq!(back, packet.world_velocity, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_velocity_normalizes_to_zero() {
        let packet = CollisionPacket::new(&Vec3::new(1.0, 1.0, 1.0), &Vec3::zeros(), &Vec3::zeros());
        assert_eq!(packet.normalized_velocity, Vec3::zeros());
        assert_relative_eq!(packet.speed(), 0.0);
    }

    #[test]
    fn test_record_keeps_strictly_closer_hits_only() {
        let mut packet = CollisionPacket::new(&Vec3::new(1.0, 1.0, 1.0), &Vec3::z(), &Vec3::zeros());
        let first = SweepHit::new(ContactKind::Face, 0.5, 2.0, Vec3::new(0.0, 0.0, 1.0));
        let tie = SweepHit::new(ContactKind::Edge, 0.5, 2.0, Vec3::new(1.0, 0.0, 1.0));
        let closer = SweepHit::new(ContactKind::Vertex, 0.25, 2.0, Vec3::new(2.0, 0.0, 1.0));
        let farther = SweepHit::new(ContactKind::Face, 0.75, 2.0, Vec3::new(3.0, 0.0, 1.0));

        assert!(packet.record(first));
        assert!(!packet.record(tie));
        assert_eq!(packet.nearest, Some(first));

        assert!(packet.record(closer));
        assert!(!packet.record(farther));
        assert_relative_eq!(packet.nearest_distance().unwrap(), 0.5);
        assert_eq!(packet.intersection_point(), Some(Vec3::new(2.0, 0.0, 1.0)));
    }

    #[test]
    fn test_record_discards_non_finite_hits() {
        let mut packet = CollisionPacket::new(&Vec3::new(1.0, 1.0, 1.0), &Vec3::z(), &Vec3::zeros());
        let bad = SweepHit::new(ContactKind::Face, f32::NAN, 1.0, Vec3::zeros());
        assert!(!packet.record(bad));
        assert!(!packet.found_collision());
    }
}
