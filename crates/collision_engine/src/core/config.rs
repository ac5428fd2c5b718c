//! # Resolver Configuration
//!
//! Tuning values for the collision resolver. Every field has a default that
//! matches the behaviour expected by first-person movement code: a small
//! stand-off distance in front of obstacles and ground-plane movement with
//! the Y axis pointing up.
//!
//! Configurations can be loaded from and saved to TOML or RON through the
//! [`Config`] trait.

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::foundation::math::Vec3;

/// Stand-off distance kept between the mover and an obstacle, in ellipsoid units
pub const DEFAULT_NEAR_DISTANCE: f32 = 0.05;

/// World axis treated as vertical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpAxis {
    /// X is up
    X,
    /// Y is up (right-handed, Y-up convention)
    #[default]
    Y,
    /// Z is up
    Z,
}

impl UpAxis {
    /// Component index of this axis in a 3D vector
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Copy of `v` with the component along this axis set to zero
    pub fn flatten(self, v: &Vec3) -> Vec3 {
        let mut flat = *v;
        flat[self.index()] = 0.0;
        flat
    }
}

/// # Collision Resolver Configuration
///
/// Controls the sliding response computed once a collision is found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Distance kept between the mover and the contact point, in ellipsoid space
    pub near_distance: f32,
    /// Axis considered vertical for ground-plane movement
    pub up_axis: UpAxis,
    /// Whether the vertical component of every returned velocity is zeroed
    pub flatten_vertical: bool,
}

impl ResolverConfig {
    /// Create a new resolver configuration with default values
    pub fn new() -> Self {
        Self {
            near_distance: DEFAULT_NEAR_DISTANCE,
            up_axis: UpAxis::Y,
            flatten_vertical: true,
        }
    }

    /// Set the stand-off distance
    pub fn with_near_distance(mut self, near_distance: f32) -> Self {
        self.near_distance = near_distance;
        self
    }

    /// Set the vertical axis
    pub fn with_up_axis(mut self, up_axis: UpAxis) -> Self {
        self.up_axis = up_axis;
        self
    }

    /// Enable or disable dropping the vertical component
    pub fn with_flatten_vertical(mut self, enabled: bool) -> Self {
        self.flatten_vertical = enabled;
        self
    }

    /// Apply the vertical-component convention to a world-space velocity
    pub fn ground_velocity(&self, velocity: &Vec3) -> Vec3 {
        if self.flatten_vertical {
            self.up_axis.flatten(velocity)
        } else {
            *velocity
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.near_distance.is_finite() || self.near_distance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "near_distance must be a finite, non-negative value (got {})",
                self.near_distance
            )));
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for ResolverConfig {}
