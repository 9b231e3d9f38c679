//! Game state and per-frame rules
//!
//! [`Game`] owns every entity and applies the rules in a fixed order each
//! frame: motion, bullet hits, ship hits, then a new wave if the field is
//! empty. It knows nothing about keys or windows; the application feeds it
//! [`Controls`] and discrete fire/restart requests.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_engine::config::ConfigError;
use rust_engine::foundation::math::Vec2;
use rust_engine::physics::first_overlap;
use rust_engine::render::{Color, RenderResult, Renderer, TextAnchor};

use crate::asteroid::{Asteroid, AsteroidSize};
use crate::bullet::Bullet;
use crate::config::GameConfig;
use crate::controls::Controls;
use crate::object::{Bounds, GameObject};
use crate::ship::Ship;

/// Text shown over the frozen playfield
pub const GAME_OVER_TEXT: &str = "GAME OVER - Press R to restart";

/// Everything that changes during a match
#[derive(Debug, Clone)]
pub struct GameState {
    /// The player's ship
    pub ship: Ship,

    /// Live bullets, oldest first
    pub bullets: Vec<Bullet>,

    /// Live asteroids in spawn order
    pub asteroids: Vec<Asteroid>,

    /// Points scored this match
    pub score: u32,

    /// Lives left
    pub lives: u32,

    /// Set when the last life is lost; updates stop until restart
    pub game_over: bool,
}

/// A single match of asteroids
pub struct Game {
    config: GameConfig,
    bounds: Bounds,
    state: GameState,
    rng: StdRng,
}

impl Game {
    /// Start a match, seeding from `config.seed` or the OS
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Start a match with a fixed seed
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Start a match drawing randomness from `rng`
    ///
    /// Fails if `config` does not pass [`GameConfig::validate`].
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let bounds = Bounds::from(&config.world);
        let state = GameState {
            ship: Ship::new(bounds.center(), &config.ship),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            score: 0,
            lives: config.rules.starting_lives,
            game_over: false,
        };

        let mut game = Self {
            config,
            bounds,
            state,
            rng,
        };
        game.spawn_asteroids(game.config.rules.initial_asteroids);
        Ok(game)
    }

    /// Current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state, for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Configuration the match runs with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Playfield bounds
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Is the match over?
    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    /// Set the ship's held controls for the next update
    pub fn set_controls(&mut self, controls: Controls) {
        self.state.ship.apply_controls(controls);
    }

    /// Fire one bullet from the ship's nose direction
    ///
    /// Ignored once the match is over.
    pub fn fire(&mut self) {
        if self.state.game_over {
            return;
        }

        let ship = &self.state.ship;
        self.state
            .bullets
            .push(Bullet::new(ship.position(), ship.angle(), &self.config.bullet));
    }

    /// Throw away the current match and start a fresh one
    pub fn restart(&mut self) {
        log::info!("Restarting (final score {})", self.state.score);

        self.state = GameState {
            ship: Ship::new(self.bounds.center(), &self.config.ship),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            score: 0,
            lives: self.config.rules.starting_lives,
            game_over: false,
        };
        self.spawn_asteroids(self.config.rules.initial_asteroids);
    }

    /// Advance the match by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.state.game_over {
            return;
        }

        let bounds = self.bounds;
        self.state.ship.update(dt, &bounds);

        let mut bullets = std::mem::take(&mut self.state.bullets);
        for bullet in &mut bullets {
            bullet.update(dt, &bounds);
        }
        bullets.retain(|bullet| bullet.is_active());
        self.state.bullets = bullets;

        for asteroid in &mut self.state.asteroids {
            asteroid.update(dt, &bounds);
        }

        self.resolve_bullet_hits();
        self.resolve_ship_hit();

        if self.state.asteroids.is_empty() {
            let count = self.wave_size();
            log::info!("Field cleared, spawning {count} asteroids");
            self.spawn_asteroids(count);
        }
    }

    /// Each bullet destroys at most the first asteroid it overlaps
    fn resolve_bullet_hits(&mut self) {
        let bullets = std::mem::take(&mut self.state.bullets);
        let mut surviving = Vec::with_capacity(bullets.len());

        for bullet in bullets {
            let hit = first_overlap(
                &bullet.body().bounding_circle(),
                self.state.asteroids.iter().map(|a| a.body().bounding_circle()),
            );

            match hit {
                Some(index) => {
                    let asteroid = self.state.asteroids.remove(index);
                    let points = asteroid.size().points();
                    self.state.score += points;
                    log::debug!(
                        "Destroyed {:?} asteroid for {points} points (score {})",
                        asteroid.size(),
                        self.state.score
                    );

                    let fragments = asteroid.split(&mut self.rng, &self.config.asteroid);
                    self.state.asteroids.extend(fragments);
                }
                None => surviving.push(bullet),
            }
        }

        self.state.bullets = surviving;
    }

    /// Only the first overlapping asteroid costs a life; it stays in play
    fn resolve_ship_hit(&mut self) {
        let hit = first_overlap(
            &self.state.ship.body().bounding_circle(),
            self.state.asteroids.iter().map(|a| a.body().bounding_circle()),
        );
        if hit.is_none() {
            return;
        }

        self.state.lives = self.state.lives.saturating_sub(1);
        if self.state.lives == 0 {
            log::info!("Ship destroyed, game over with score {}", self.state.score);
            self.state.game_over = true;
        } else {
            log::info!("Ship destroyed, {} lives left", self.state.lives);
            self.state.ship.respawn(self.bounds.center());
        }
    }

    /// Asteroids in the next wave, one more per full score step
    pub fn wave_size(&self) -> usize {
        let rules = &self.config.rules;
        rules.initial_asteroids + (self.state.score / rules.score_per_extra_asteroid) as usize
    }

    /// Add `count` large asteroids, each clear of the ship
    pub fn spawn_asteroids(&mut self, count: usize) {
        let ship_position = self.state.ship.position();
        for _ in 0..count {
            let position = self.spawn_point(ship_position);
            let asteroid =
                Asteroid::new(position, AsteroidSize::Large, &mut self.rng, &self.config.asteroid);
            self.state.asteroids.push(asteroid);
        }
    }

    /// Random point strictly farther than the spawn clearance from `ship`
    fn spawn_point(&mut self, ship: Vec2) -> Vec2 {
        let clearance = self.config.rules.spawn_clearance;
        loop {
            let candidate = self.bounds.random_point(&mut self.rng);
            if (candidate - ship).magnitude() > clearance {
                return candidate;
            }
        }
    }

    /// Draw the playfield and HUD
    pub fn draw(&self, renderer: &mut dyn Renderer) -> RenderResult<()> {
        renderer.clear(Color::BLACK)?;

        if !self.state.game_over {
            self.state.ship.draw(renderer)?;
        }
        for bullet in &self.state.bullets {
            bullet.draw(renderer)?;
        }
        for asteroid in &self.state.asteroids {
            asteroid.draw(renderer)?;
        }

        renderer.draw_text(
            &format!("Score: {}", self.state.score),
            Vec2::new(10.0, 10.0),
            TextAnchor::TopLeft,
            Color::WHITE,
        )?;
        renderer.draw_text(
            &format!("Lives: {}", self.state.lives),
            Vec2::new(10.0, 50.0),
            TextAnchor::TopLeft,
            Color::WHITE,
        )?;

        if self.state.game_over {
            renderer.draw_text(
                GAME_OVER_TEXT,
                self.bounds.center(),
                TextAnchor::Center,
                Color::RED,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::with_seed(GameConfig::default(), 1).unwrap()
    }

    #[test]
    fn test_new_match() {
        let game = game();
        let state = game.state();

        assert_eq!(state.asteroids.len(), 5);
        assert!(state.asteroids.iter().all(|a| a.size() == AsteroidSize::Large));
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert_eq!(state.ship.position(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_seed_reproduces_layout() {
        let a = Game::with_seed(GameConfig::default(), 9).unwrap();
        let b = Game::with_seed(GameConfig::default(), 9).unwrap();

        let positions =
            |g: &Game| g.state().asteroids.iter().map(|a| a.position()).collect::<Vec<_>>();
        assert_eq!(positions(&a), positions(&b));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.world.width = 0.0;
        let err = Game::with_seed(config, 1).err();
        assert!(matches!(err, Some(ConfigError::Invalid { field: "world.width", .. })));

        let mut config = GameConfig::default();
        config.rules.spawn_clearance = 499.0;
        let err = Game::with_seed(config, 1).err();
        assert!(matches!(err, Some(ConfigError::Invalid { field: "rules.spawn_clearance", .. })));
    }

    #[test]
    fn test_fire_spawns_bullet_at_ship() {
        let mut game = game();
        game.state_mut().ship.body_mut().angle = 90.0;

        game.fire();

        let bullets = &game.state().bullets;
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].position(), Vec2::new(400.0, 300.0));
        assert_eq!(bullets[0].body().angle, 90.0);
    }

    #[test]
    fn test_wave_size_grows_with_score() {
        let mut game = game();
        assert_eq!(game.wave_size(), 5);

        game.state_mut().score = 999;
        assert_eq!(game.wave_size(), 5);

        game.state_mut().score = 2400;
        assert_eq!(game.wave_size(), 7);
    }

    #[test]
    fn test_expired_bullets_are_dropped() {
        let mut game = game();
        game.state_mut().asteroids.clear();
        game.fire();

        game.update(1.0);
        game.state_mut().asteroids.clear();
        assert_eq!(game.state().bullets.len(), 1);

        game.update(1.5);
        assert!(game.state().bullets.is_empty());
    }
}
