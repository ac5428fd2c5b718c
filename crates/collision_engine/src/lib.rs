//! # Collision Engine
//!
//! Swept collision detection and sliding response for a moving bounding
//! ellipsoid against static, axis-aligned box geometry.
//!
//! ## Features
//!
//! - **Exact sweeps**: Swept unit sphere against triangle faces, edges and vertices
//! - **Ellipsoid space**: Any axis-aligned ellipsoid is handled by a change of basis
//! - **Sliding response**: Residual movement is projected onto a sliding plane
//! - **Configurable**: Near distance and vertical axis loaded from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use collision_engine::prelude::*;
//!
//! let mut resolver = CollisionResolver::new(ResolverConfig::default());
//! let room = BoxMesh::from_aabbs(
//!     vec![AABB::new(Vec3::new(-10.0, -2.0, -10.0), Vec3::new(10.0, 6.0, 10.0))],
//!     BoxOrientation::Containment,
//! );
//! resolver.track(Arc::new(room));
//!
//! let radii = Vec3::new(1.0, 1.0, 1.0);
//! let corrected = resolver.resolve_move(&radii, &Vec3::new(0.0, 0.0, 0.1), &Vec3::zeros());
//! # let _ = corrected;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod config;
pub mod foundation;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        core::config::{ResolverConfig, UpAxis},
        foundation::math::{Mat3, Vec3},
        physics::{
            BoxBatchSource, BoxMesh, BoxOrientation, CollisionError, CollisionPacket,
            CollisionResolver, Plane, SweepHit, Triangle, AABB,
        },
    };
}
