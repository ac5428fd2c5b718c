//! Collision resolver for a moving ellipsoid
//!
//! The resolver owns the static geometry tracked during scene setup and
//! answers one question per frame: given the mover's ellipsoid radii, its
//! requested velocity and its position, which velocity can it safely use?
//!
//! Each query runs in two steps:
//! 1. Sweep: the request is converted to ellipsoid space, where the mover is
//!    a unit sphere, and swept against every tracked triangle. The nearest
//!    hit is kept.
//! 2. Slide: the mover is advanced to just short of the contact and the
//!    remaining movement is projected onto a sliding plane through the
//!    contact point.
//!
//! Sliding runs once per query; movement introduced by the slide itself is
//! not swept again.

use std::sync::Arc;

use crate::core::config::ResolverConfig;
use crate::foundation::math::{is_finite, normalize_or_zero, Vec3};
use crate::physics::collision::{
    box_triangles, sweep_triangle, BoxBatchSource, CollisionPacket, Plane, SweepHit,
};
use crate::physics::error::CollisionError;

/// Swept ellipsoid collision resolver
///
/// Geometry is appended with [`track`](Self::track) during setup and is
/// read-only afterwards; queries borrow the resolver immutably.
pub struct CollisionResolver {
    /// Sliding response settings
    config: ResolverConfig,

    /// Geometry sources in tracking order
    sources: Vec<Arc<dyn BoxBatchSource>>,
}

impl CollisionResolver {
    /// Create a resolver with no tracked geometry
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            sources: Vec::new(),
        }
    }

    /// Resolver settings
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Append a geometry source
    ///
    /// Tracking the same source twice duplicates its triangles.
    pub fn track(&mut self, source: Arc<dyn BoxBatchSource>) {
        let degenerate = source.degenerate_triangle_count();
        if degenerate > 0 {
            log::warn!(
                "Tracked source #{} has {} degenerate triangles; they will never collide",
                self.sources.len(),
                degenerate
            );
        }
        log::debug!(
            "Tracking source #{}: {} boxes, {} triangles ({:?})",
            self.sources.len(),
            source.box_batches().len(),
            source.triangle_count(),
            source.orientation()
        );
        self.sources.push(source);
    }

    /// Number of tracked sources
    pub fn tracked_count(&self) -> usize {
        self.sources.len()
    }

    /// Number of triangles tested per query
    pub fn triangle_count(&self) -> usize {
        self.sources.iter().map(|source| source.triangle_count()).sum()
    }

    /// Sweep the ellipsoid against every tracked triangle
    ///
    /// Triangles are visited in tracking order; the returned packet holds the
    /// nearest hit, with ties going to the first triangle tested.
    pub fn sweep(&self, radii: &Vec3, velocity: &Vec3, position: &Vec3) -> CollisionPacket {
        let mut packet = CollisionPacket::new(radii, velocity, position);
        let to_ellipsoid = packet.to_ellipsoid_space();

        for source in &self.sources {
            let orientation = source.orientation();
            for aabb in source.box_batches() {
                for triangle in box_triangles(aabb, orientation) {
                    let triangle = triangle.map_points(|p| to_ellipsoid * p);
                    if let Some(hit) = sweep_triangle(&packet, &triangle) {
                        if packet.record(hit) {
                            log::trace!(
                                "{:?} hit at t={} (distance {})",
                                hit.kind,
                                hit.time,
                                hit.distance
                            );
                        }
                    }
                }
            }
        }

        packet
    }

    /// Corrected world-space velocity for the requested move
    ///
    /// Without a collision this is `velocity` itself, with the vertical
    /// component dropped when the config asks for it. Never fails: a
    /// non-finite slide falls back to the uncorrected velocity.
    pub fn resolve_move(&self, radii: &Vec3, velocity: &Vec3, position: &Vec3) -> Vec3 {
        let packet = self.sweep(radii, velocity, position);
        let Some(hit) = packet.nearest else {
            return self.config.ground_velocity(velocity);
        };

        let slide = packet.to_world_space() * self.slide_velocity(&packet, &hit);
        if !is_finite(&slide) {
            log::warn!("Non-finite slide velocity {slide:?}; using the requested velocity");
            return self.config.ground_velocity(velocity);
        }

        log::debug!(
            "Collision at distance {} ({:?}); velocity {:?} -> {:?}",
            hit.distance,
            hit.kind,
            velocity,
            slide
        );
        self.config.ground_velocity(&slide)
    }

    /// Validated form of [`resolve_move`](Self::resolve_move)
    ///
    /// Rejects radii that are not strictly positive and inputs containing NaN
    /// or infinity.
    pub fn try_resolve_move(
        &self,
        radii: &Vec3,
        velocity: &Vec3,
        position: &Vec3,
    ) -> Result<Vec3, CollisionError> {
        if !radii.iter().all(|r| r.is_finite() && *r > 0.0) {
            return Err(CollisionError::InvalidRadii {
                x: radii.x,
                y: radii.y,
                z: radii.z,
            });
        }
        if !is_finite(velocity) {
            return Err(CollisionError::NonFiniteInput("velocity"));
        }
        if !is_finite(position) {
            return Err(CollisionError::NonFiniteInput("position"));
        }
        Ok(self.resolve_move(radii, velocity, position))
    }

    /// Residual ellipsoid-space movement projected onto the sliding plane
    fn slide_velocity(&self, packet: &CollisionPacket, hit: &SweepHit) -> Vec3 {
        let near_distance = self.config.near_distance;
        let mut new_base_point = packet.base_point;
        let mut intersection = hit.point;

        // Stop short of the surface
        if hit.distance >= near_distance {
            new_base_point += packet.normalized_velocity * (hit.distance - near_distance);
            intersection -= packet.normalized_velocity * near_distance;
        }

        let sliding_plane = Plane::new(intersection, normalize_or_zero(&(new_base_point - intersection)));
        let destination = packet.base_point + packet.velocity;
        sliding_plane.project_point(&destination) - intersection
    }
}

impl std::fmt::Debug for CollisionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollisionResolver")
            .field("config", &self.config)
            .field("sources", &self.sources.len())
            .finish()
    }
}
