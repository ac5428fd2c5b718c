//! Collision error types

use thiserror::Error;

/// Errors raised by validated resolver entry points and geometry builders
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// A radius is zero, negative or not finite
    #[error("Invalid ellipsoid radii: ({x}, {y}, {z})")]
    InvalidRadii {
        /// Radius along X
        x: f32,
        /// Radius along Y
        y: f32,
        /// Radius along Z
        z: f32,
    },

    /// Velocity or position contains NaN or infinity
    #[error("Non-finite {0} supplied to the resolver")]
    NonFiniteInput(&'static str),

    /// A bounding box was requested for a group with no vertices
    #[error("Vertex group {index} is empty")]
    EmptyVertexGroup {
        /// Position of the group in the input slice
        index: usize,
    },
}
