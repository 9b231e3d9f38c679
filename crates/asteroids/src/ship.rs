//! Player ship

use rust_engine::foundation::math::{utils, Vec2, Vec2Ext};
use rust_engine::render::{Color, RenderResult, Renderer};

use crate::config::ShipConfig;
use crate::controls::Controls;
use crate::object::{Body, Bounds, GameObject};

/// The player's ship
///
/// Controls are re-sampled every frame with [`Ship::apply_controls`]; the
/// ship never leaves the game, it is only moved back with [`Ship::respawn`].
#[derive(Debug, Clone)]
pub struct Ship {
    body: Body,
    thrusting: bool,
    rotation_speed: f32,
    max_speed: f32,
    thrust_power: f32,
    friction: f32,
    turn_rate: f32,
    hull: [Vec2; 3],
    flame_length: f32,
}

impl Ship {
    /// Create a resting ship at `position`, nose up
    pub fn new(position: Vec2, config: &ShipConfig) -> Self {
        Self {
            body: Body::new(position, config.radius),
            thrusting: false,
            rotation_speed: 0.0,
            max_speed: config.max_speed,
            thrust_power: config.thrust_power,
            friction: config.friction,
            turn_rate: config.turn_rate,
            hull: config.hull.map(|[x, y]| Vec2::new(x, y)),
            flame_length: config.flame_length,
        }
    }

    /// Set thrust and turn for this frame
    ///
    /// Right wins when both turn directions are held.
    pub fn apply_controls(&mut self, controls: Controls) {
        self.thrusting = controls.contains(Controls::THRUST);
        self.rotation_speed = if controls.contains(Controls::ROTATE_RIGHT) {
            self.turn_rate
        } else if controls.contains(Controls::ROTATE_LEFT) {
            -self.turn_rate
        } else {
            0.0
        };
    }

    /// Is the engine firing this frame?
    pub fn is_thrusting(&self) -> bool {
        self.thrusting
    }

    /// Current turn speed in degrees per second
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Orientation in degrees
    pub fn angle(&self) -> f32 {
        self.body.angle
    }

    /// Unit vector the nose points along
    pub fn heading(&self) -> Vec2 {
        Vec2::from_heading(self.body.angle)
    }

    /// Current speed
    pub fn speed(&self) -> f32 {
        self.body.velocity.magnitude()
    }

    /// Move back to `position` at rest, keeping the orientation
    pub fn respawn(&mut self, position: Vec2) {
        self.body.position = position;
        self.body.velocity = Vec2::zeros();
    }

    /// Hull outline in world space
    pub fn hull_points(&self) -> Vec<Vec2> {
        self.hull
            .iter()
            .map(|point| point.rotated_deg(self.body.angle) + self.body.position)
            .collect()
    }
}

impl GameObject for Ship {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32, bounds: &Bounds) {
        self.body.angle = utils::wrap_degrees(self.body.angle + self.rotation_speed * dt);

        if self.thrusting {
            self.body.velocity += self.heading() * self.thrust_power * dt;
        }

        let speed = self.body.velocity.magnitude();
        if speed > self.max_speed {
            self.body.velocity *= self.max_speed / speed;
        }

        // Applied per frame, not per second
        self.body.velocity *= self.friction;

        self.body.integrate(dt, bounds);
    }

    fn draw(&self, renderer: &mut dyn Renderer) -> RenderResult<()> {
        renderer.fill_polygon(&self.hull_points(), Color::WHITE)?;

        if self.thrusting {
            let tail = self.body.position - self.heading() * self.flame_length;
            renderer.draw_line(self.body.position, tail, Color::YELLOW, 2.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_engine::render::{DrawCommand, RecordingRenderer};

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    fn ship() -> Ship {
        Ship::new(Vec2::new(400.0, 300.0), &ShipConfig::default())
    }

    #[test]
    fn test_right_overrides_left() {
        let mut ship = ship();

        ship.apply_controls(Controls::ROTATE_LEFT);
        assert_eq!(ship.rotation_speed(), -180.0);

        ship.apply_controls(Controls::ROTATE_LEFT | Controls::ROTATE_RIGHT);
        assert_eq!(ship.rotation_speed(), 180.0);

        ship.apply_controls(Controls::empty());
        assert_eq!(ship.rotation_speed(), 0.0);
        assert!(!ship.is_thrusting());
    }

    #[test]
    fn test_rotation_wraps_angle() {
        let mut ship = ship();
        ship.apply_controls(Controls::ROTATE_LEFT);

        ship.update(0.5, &bounds());

        assert_relative_eq!(ship.angle(), 270.0);
    }

    #[test]
    fn test_thrust_then_friction() {
        let mut ship = ship();
        ship.apply_controls(Controls::THRUST);

        ship.update(0.1, &bounds());

        // 200 * 0.1 upwards, then one friction step
        assert_relative_eq!(ship.body().velocity.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ship.body().velocity.y, -19.6, epsilon = 1e-4);
        assert_relative_eq!(ship.position().y, 300.0 - 1.96, epsilon = 1e-3);
    }

    #[test]
    fn test_speed_capped_under_sustained_thrust() {
        let mut ship = ship();
        ship.apply_controls(Controls::THRUST | Controls::ROTATE_RIGHT);

        for _ in 0..2000 {
            ship.update(1.0 / 60.0, &bounds());
            assert!(ship.speed() <= 300.0 + 1e-3);
        }
    }

    #[test]
    fn test_coasting_decays() {
        let mut ship = ship();
        ship.body_mut().velocity = Vec2::new(100.0, 0.0);

        ship.update(1.0 / 60.0, &bounds());

        assert_relative_eq!(ship.speed(), 98.0, epsilon = 1e-4);
    }

    #[test]
    fn test_respawn_keeps_angle() {
        let mut ship = ship();
        ship.body_mut().angle = 45.0;
        ship.body_mut().velocity = Vec2::new(50.0, 50.0);
        ship.body_mut().position = Vec2::new(10.0, 10.0);

        ship.respawn(Vec2::new(400.0, 300.0));

        assert_eq!(ship.position(), Vec2::new(400.0, 300.0));
        assert_eq!(ship.body().velocity, Vec2::zeros());
        assert_eq!(ship.angle(), 45.0);
    }

    #[test]
    fn test_hull_follows_heading() {
        let mut ship = ship();
        ship.body_mut().angle = 90.0;

        let hull = ship.hull_points();

        assert_relative_eq!(hull[0].x, 410.0, epsilon = 1e-4);
        assert_relative_eq!(hull[0].y, 300.0, epsilon = 1e-4);
    }

    #[test]
    fn test_draw_flame_only_when_thrusting() {
        let mut ship = ship();
        let mut renderer = RecordingRenderer::new();

        ship.draw(&mut renderer).unwrap();
        assert_eq!(renderer.current().len(), 1);

        ship.apply_controls(Controls::THRUST);
        ship.draw(&mut renderer).unwrap();

        let commands: Vec<_> = renderer.current().iter().collect();
        assert_eq!(commands.len(), 3);
        match commands[2] {
            DrawCommand::Line { from, to, color, width } => {
                assert_eq!(*from, Vec2::new(400.0, 300.0));
                assert_relative_eq!(to.y, 315.0, epsilon = 1e-4);
                assert_eq!(*color, Color::YELLOW);
                assert_eq!(*width, 2.0);
            }
            other => panic!("expected flame line, got {other:?}"),
        }
    }
}
