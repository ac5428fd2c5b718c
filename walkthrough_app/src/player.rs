//! First-person mover driven through the collision resolver

use collision_engine::foundation::math::{normalize_or_zero, Vec3};
use collision_engine::physics::CollisionResolver;

use crate::config::{Movement, WalkthroughConfig};

/// Ellipsoid-shaped player walking on the ground plane
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    pub radii: Vec3,
    /// Heading in degrees; -90 looks down -Z
    pub yaw_degrees: f32,
    /// Units per second
    pub speed: f32,
}

impl Player {
    pub fn new(position: Vec3, radii: Vec3, yaw_degrees: f32, speed: f32) -> Self {
        Self { position, radii, yaw_degrees, speed }
    }

    pub fn from_config(config: &WalkthroughConfig) -> Self {
        Self::new(
            config.start_position(),
            config.player_radii(),
            config.start_yaw_degrees,
            config.speed,
        )
    }

    /// Horizontal viewing direction
    pub fn front(&self) -> Vec3 {
        let yaw = self.yaw_degrees.to_radians();
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    pub fn right(&self) -> Vec3 {
        normalize_or_zero(&self.front().cross(&Vec3::y()))
    }

    pub fn turn(&mut self, degrees: f32) {
        self.yaw_degrees += degrees;
    }

    /// Requested velocity for one frame of `movement`
    pub fn requested_velocity(&self, movement: Movement, dt: f32) -> Vec3 {
        let distance = self.speed * dt;
        match movement {
            Movement::Forward => self.front() * distance,
            Movement::Backward => -self.front() * distance,
            Movement::Left => -self.right() * distance,
            Movement::Right => self.right() * distance,
        }
    }

    /// Moves by the resolver-corrected velocity and returns it
    pub fn process_movement(&mut self, resolver: &CollisionResolver, movement: Movement, dt: f32) -> Vec3 {
        let requested = self.requested_velocity(movement, dt);
        let corrected = resolver.resolve_move(&self.radii, &requested, &self.position);
        self.position += corrected;
        corrected
    }
}
