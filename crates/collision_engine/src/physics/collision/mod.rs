//! Swept ellipsoid collision against triangle geometry
//!
//! # Module Organization
//!
//! - [`primitives`] - Planes, triangles and axis-aligned boxes
//! - [`solver`] - Lowest-root quadratic solve and barycentric containment
//! - [`packet`] - Per-query state in world and ellipsoid space
//! - [`sweep`] - Swept unit sphere against one triangle
//! - [`mesh`] - Box batches and the fixed box triangle table
//!
//! # Key Types
//!
//! - [`CollisionPacket`] - One movement query and its nearest hit
//! - [`SweepHit`] - Earliest contact with a single triangle
//! - [`BoxBatchSource`] - Static geometry handed to the resolver

pub mod primitives;
pub mod solver;
pub mod packet;
pub mod sweep;
pub mod mesh;

// Re-export commonly used types
pub use primitives::{Plane, Triangle, AABB};
pub use packet::{CollisionPacket, ContactKind, SweepHit};
pub use sweep::sweep_triangle;
pub use mesh::{box_triangles, BoxBatchSource, BoxMesh, BoxOrientation, BOX_TRIANGLE_INDICES};
