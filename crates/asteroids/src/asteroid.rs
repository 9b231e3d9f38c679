//! Asteroids and their split rule

use rand::Rng;
use rust_engine::foundation::math::{constants, utils, Vec2, Vec2Ext};
use rust_engine::render::{Color, RenderResult, Renderer};

use crate::config::AsteroidConfig;
use crate::object::{Body, Bounds, GameObject};

/// Asteroid size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AsteroidSize {
    /// Small asteroid (destroyed completely)
    Small = 1,

    /// Medium asteroid (splits into small)
    Medium = 2,

    /// Large asteroid (splits into medium)
    Large = 3,
}

impl AsteroidSize {
    /// Numeric tier, 1 for small up to 3 for large
    pub fn tier(self) -> u32 {
        self as u32
    }

    /// Size for a numeric tier
    pub fn from_tier(tier: u32) -> Option<Self> {
        match tier {
            1 => Some(Self::Small),
            2 => Some(Self::Medium),
            3 => Some(Self::Large),
            _ => None,
        }
    }

    /// Collision radius for this size
    pub fn radius(self) -> f32 {
        10.0 + 15.0 * self.tier() as f32
    }

    /// Get the points awarded for destroying this size
    pub fn points(self) -> u32 {
        (4 - self.tier()) * 20
    }

    /// Get the next smaller size when split
    pub fn split_into(self) -> Option<Self> {
        Self::from_tier(self.tier() - 1)
    }
}

/// A drifting, spinning rock
#[derive(Debug, Clone)]
pub struct Asteroid {
    body: Body,
    size: AsteroidSize,
    rotation_speed: f32,
    outline: Vec<Vec2>,
}

impl Asteroid {
    /// Create an asteroid at `position` with a random drift, spin and outline
    pub fn new<R: Rng>(
        position: Vec2,
        size: AsteroidSize,
        rng: &mut R,
        config: &AsteroidConfig,
    ) -> Self {
        let radius = size.radius();
        let rotation_speed = rng.gen_range(-config.max_spin..=config.max_spin);

        let speed = rng.gen_range(config.min_speed..=config.max_speed);
        let direction = utils::deg_to_rad(rng.gen_range(0.0..constants::FULL_TURN_DEG));
        let (sin_d, cos_d) = direction.sin_cos();

        let step = constants::FULL_TURN_DEG / config.vertex_count as f32;
        let outline = (0..config.vertex_count)
            .map(|i| {
                let factor = rng.gen_range(config.jaggedness_min..=config.jaggedness_max);
                Vec2::new(radius * factor, 0.0).rotated_deg(step * i as f32)
            })
            .collect();

        let mut body = Body::new(position, radius);
        body.velocity = Vec2::new(cos_d, sin_d) * speed;

        Self {
            body,
            size,
            rotation_speed,
            outline,
        }
    }

    /// Size category
    pub fn size(&self) -> AsteroidSize {
        self.size
    }

    /// Spin in degrees per second
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Outline offsets relative to the center, before rotation
    pub fn outline(&self) -> &[Vec2] {
        &self.outline
    }

    /// Outline in world space
    pub fn outline_points(&self) -> Vec<Vec2> {
        self.outline
            .iter()
            .map(|offset| offset.rotated_deg(self.body.angle) + self.body.position)
            .collect()
    }

    /// Break into smaller fragments at the same position
    ///
    /// Small asteroids leave nothing behind.
    pub fn split<R: Rng>(&self, rng: &mut R, config: &AsteroidConfig) -> Vec<Asteroid> {
        let Some(smaller) = self.size.split_into() else {
            return Vec::new();
        };

        let kick = config.fragment_kick;
        (0..config.fragment_count)
            .map(|_| {
                let mut fragment = Asteroid::new(self.body.position, smaller, rng, config);
                fragment.body.velocity += Vec2::new(
                    rng.gen_range(-kick..=kick),
                    rng.gen_range(-kick..=kick),
                );
                fragment
            })
            .collect()
    }
}

impl GameObject for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32, bounds: &Bounds) {
        self.body.integrate(dt, bounds);
        self.body.angle = utils::wrap_degrees(self.body.angle + self.rotation_speed * dt);
    }

    fn draw(&self, renderer: &mut dyn Renderer) -> RenderResult<()> {
        renderer.stroke_polygon(&self.outline_points(), Color::WHITE, 2.0)
    }
}
