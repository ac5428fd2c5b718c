//! Physics module for swept collision detection and response
//!
//! Provides the swept ellipsoid test against static box geometry and the
//! sliding response used by first-person movement.

pub mod collision;
pub mod collision_system;
pub mod error;

#[cfg(test)]
mod tests;

pub use collision::{
    BoxBatchSource,
    BoxMesh,
    BoxOrientation,
    CollisionPacket,
    ContactKind,
    Plane,
    SweepHit,
    Triangle,
    AABB,
};
pub use collision_system::CollisionResolver;
pub use error::CollisionError;
