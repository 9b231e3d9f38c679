//! Shared state and behavior of everything that flies around the playfield

use rand::Rng;
use rust_engine::foundation::math::{utils, Vec2};
use rust_engine::physics::BoundingCircle;
use rust_engine::render::{RenderResult, Renderer};

use crate::config::WorldConfig;

/// Size of the toroidal playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Width in world units
    pub width: f32,
    /// Height in world units
    pub height: f32,
}

impl Bounds {
    /// Create playfield bounds
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the playfield
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Fold a position back into `[0, width) x [0, height)`
    pub fn wrap(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            utils::wrap(position.x, self.width),
            utils::wrap(position.y, self.height),
        )
    }

    /// Uniformly distributed point inside the playfield
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(rng.gen_range(0.0..self.width), rng.gen_range(0.0..self.height))
    }
}

impl From<&WorldConfig> for Bounds {
    fn from(world: &WorldConfig) -> Self {
        Self::new(world.width, world.height)
    }
}

/// Kinematic state common to ships, bullets and asteroids
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Position in world space
    pub position: Vec2,

    /// Velocity in units per second
    pub velocity: Vec2,

    /// Orientation in degrees, 0 pointing up and increasing clockwise
    pub angle: f32,

    /// Collision radius
    pub radius: f32,

    /// Inactive bodies are dropped by their owner
    pub active: bool,
}

impl Body {
    /// Create a resting body at `position`
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            angle: 0.0,
            radius,
            active: true,
        }
    }

    /// Move by `velocity * dt`, then wrap around the playfield edges
    pub fn integrate(&mut self, dt: f32, bounds: &Bounds) {
        self.position = bounds.wrap(self.position + self.velocity * dt);
    }

    /// Collision circle at the current position
    pub fn bounding_circle(&self) -> BoundingCircle {
        BoundingCircle::new(self.position, self.radius)
    }
}

/// Something the game updates and draws every frame
pub trait GameObject {
    /// Kinematic state
    fn body(&self) -> &Body;

    /// Mutable kinematic state
    fn body_mut(&mut self) -> &mut Body;

    /// Advance by `dt` seconds
    fn update(&mut self, dt: f32, bounds: &Bounds);

    /// Emit draw calls for the current state
    fn draw(&self, renderer: &mut dyn Renderer) -> RenderResult<()>;

    /// Still part of the game?
    fn is_active(&self) -> bool {
        self.body().active
    }

    /// Current position
    fn position(&self) -> Vec2 {
        self.body().position
    }
}
