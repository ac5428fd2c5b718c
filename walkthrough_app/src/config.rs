//! Walkthrough settings, loaded from TOML or RON

use collision_engine::config::{Config, ConfigError};
use collision_engine::core::ResolverConfig;
use collision_engine::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

/// Movement request, independent of the input device that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

/// One scripted input: turn, then hold a movement key for some frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub movement: Movement,
    pub frames: u32,
    #[serde(default)]
    pub turn_degrees: f32,
}

impl ScriptStep {
    pub const fn new(movement: Movement, frames: u32) -> Self {
        Self { movement, frames, turn_degrees: 0.0 }
    }

    pub const fn turning(mut self, degrees: f32) -> Self {
        self.turn_degrees = degrees;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkthroughConfig {
    pub resolver: ResolverConfig,
    pub player_radii: [f32; 3],
    pub start_position: [f32; 3],
    pub start_yaw_degrees: f32,
    /// Units per second
    pub speed: f32,
    /// Seconds per simulated frame
    pub frame_step: f32,
    /// Uniform scale applied to furniture model coordinates
    pub model_scale: f32,
    pub script: Vec<ScriptStep>,
}

impl WalkthroughConfig {
    pub fn player_radii(&self) -> Vec3 {
        Vec3::from(self.player_radii)
    }

    pub fn start_position(&self) -> Vec3 {
        Vec3::from(self.start_position)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolver.validate()?;

        if !self.player_radii.iter().all(|r| r.is_finite() && *r > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "player_radii must all be positive (got {:?})",
                self.player_radii
            )));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::Invalid(format!("speed must be non-negative (got {})", self.speed)));
        }
        if !self.frame_step.is_finite() || self.frame_step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "frame_step must be positive (got {})",
                self.frame_step
            )));
        }
        if !self.model_scale.is_finite() || self.model_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "model_scale must be positive (got {})",
                self.model_scale
            )));
        }
        Ok(())
    }
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            player_radii: [1.0, 1.0, 1.0],
            start_position: [0.0, 1.0, 6.0],
            start_yaw_degrees: -90.0,
            speed: 4.5,
            frame_step: 1.0 / 60.0,
            model_scale: 0.02,
            script: vec![
                // Across the room and into the table
                ScriptStep::new(Movement::Forward, 180),
                // Strafe along its edge
                ScriptStep::new(Movement::Right, 90),
                // Into the east wall at an angle
                ScriptStep::new(Movement::Forward, 240).turning(60.0),
                ScriptStep::new(Movement::Backward, 60),
                ScriptStep::new(Movement::Left, 120).turning(-150.0),
            ],
        }
    }
}

impl Config for WalkthroughConfig {}
