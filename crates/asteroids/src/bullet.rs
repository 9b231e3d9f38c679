//! Projectiles fired by the ship

use rust_engine::foundation::math::{Vec2, Vec2Ext};
use rust_engine::render::{Color, RenderResult, Renderer};

use crate::config::BulletConfig;
use crate::object::{Body, Bounds, GameObject};

/// A bullet flying in a straight line until it expires
#[derive(Debug, Clone)]
pub struct Bullet {
    body: Body,
    lifetime: f32,
    age: f32,
}

impl Bullet {
    /// Fire a bullet from `position` along the heading `angle`
    pub fn new(position: Vec2, angle: f32, config: &BulletConfig) -> Self {
        let mut body = Body::new(position, config.radius);
        body.angle = angle;
        body.velocity = Vec2::from_heading(angle) * config.speed;

        Self {
            body,
            lifetime: config.lifetime,
            age: 0.0,
        }
    }

    /// Seconds since the bullet was fired
    pub fn age(&self) -> f32 {
        self.age
    }

    /// Seconds the bullet lives for
    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }
}

impl GameObject for Bullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32, bounds: &Bounds) {
        self.body.integrate(dt, bounds);
        self.age += dt;
        if self.age > self.lifetime {
            self.body.active = false;
        }
    }

    fn draw(&self, renderer: &mut dyn Renderer) -> RenderResult<()> {
        renderer.draw_circle(self.body.position, self.body.radius, Color::WHITE)
    }
}
