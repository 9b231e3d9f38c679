//! Game configuration
//!
//! Every tunable of the game lives here with the classic arcade values as
//! defaults. Files are loaded through the engine's [`Config`] trait, so both
//! `asteroids.toml` and `asteroids.ron` work, and any section or field left
//! out keeps its default.

use std::path::Path;

use rust_engine::config::{Config, ConfigError};
use rust_engine::input::KeyCode;
use rust_engine::EngineConfig;
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the random source; `None` seeds from the OS
    pub seed: Option<u64>,

    /// Playfield settings
    pub world: WorldConfig,

    /// Player ship tuning
    pub ship: ShipConfig,

    /// Projectile tuning
    pub bullet: BulletConfig,

    /// Asteroid generation tuning
    pub asteroid: AsteroidConfig,

    /// Scoring, lives and spawning rules
    pub rules: RulesConfig,

    /// Key bindings
    pub controls: ControlsConfig,

    /// Main loop settings
    pub engine: EngineConfig,
}

/// Playfield configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Playfield width
    pub width: f32,

    /// Playfield height
    pub height: f32,
}

/// Ship configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Collision radius
    pub radius: f32,

    /// Speed cap in units per second
    pub max_speed: f32,

    /// Thrust acceleration in units per second squared
    pub thrust_power: f32,

    /// Velocity multiplier applied once per frame
    pub friction: f32,

    /// Turn speed in degrees per second
    pub turn_rate: f32,

    /// Hull triangle in local space, nose first (y down, nose up)
    pub hull: [[f32; 2]; 3],

    /// Length of the thrust flame drawn behind the ship
    pub flame_length: f32,
}

/// Bullet configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Collision and draw radius
    pub radius: f32,

    /// Muzzle speed in units per second
    pub speed: f32,

    /// Seconds before the bullet expires
    pub lifetime: f32,
}

/// Asteroid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Slowest initial drift speed
    pub min_speed: f32,

    /// Fastest initial drift speed
    pub max_speed: f32,

    /// Spin is drawn from `[-max_spin, max_spin]` degrees per second
    pub max_spin: f32,

    /// Number of outline vertices
    pub vertex_count: usize,

    /// Smallest per-vertex radius factor
    pub jaggedness_min: f32,

    /// Largest per-vertex radius factor
    pub jaggedness_max: f32,

    /// Fragments produced by a split
    pub fragment_count: usize,

    /// Fragment velocity offsets are drawn from `[-fragment_kick, fragment_kick]` per axis
    pub fragment_kick: f32,
}

/// Game rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Lives at the start of a match
    pub starting_lives: u32,

    /// Large asteroids in the first wave
    pub initial_asteroids: usize,

    /// Each full step of this many points adds one asteroid to new waves
    pub score_per_extra_asteroid: u32,

    /// New asteroids spawn strictly farther than this from the ship
    pub spawn_clearance: f32,
}

/// Controls configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Turn counter-clockwise while held
    pub rotate_left: KeyCode,

    /// Turn clockwise while held
    pub rotate_right: KeyCode,

    /// Thrust while held
    pub thrust: KeyCode,

    /// Fire one bullet per press
    pub fire: KeyCode,

    /// Leave the game
    pub quit: KeyCode,

    /// Start a new match after game over
    pub restart: KeyCode,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            radius: 8.0,
            max_speed: 300.0,
            thrust_power: 200.0,
            friction: 0.98,
            turn_rate: 180.0,
            hull: [[0.0, -10.0], [-6.0, 8.0], [6.0, 8.0]],
            flame_length: 15.0,
        }
    }
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            speed: 400.0,
            lifetime: 2.0,
        }
    }
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            min_speed: 20.0,
            max_speed: 80.0,
            max_spin: 180.0,
            vertex_count: 8,
            jaggedness_min: 0.7,
            jaggedness_max: 1.3,
            fragment_count: 2,
            fragment_kick: 50.0,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            initial_asteroids: 5,
            score_per_extra_asteroid: 1000,
            spawn_clearance: 100.0,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            rotate_left: KeyCode::Left,
            rotate_right: KeyCode::Right,
            thrust: KeyCode::Up,
            fire: KeyCode::Space,
            quit: KeyCode::Escape,
            restart: KeyCode::R,
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load configuration from `path`, or the defaults when no path is given
    ///
    /// The result is validated either way.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                log::info!("Loading game configuration from {}", path.display());
                Self::load_from_file(path)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world.width", self.world.width)?;
        positive("world.height", self.world.height)?;

        positive("ship.radius", self.ship.radius)?;
        positive("ship.max_speed", self.ship.max_speed)?;
        non_negative("ship.thrust_power", self.ship.thrust_power)?;
        non_negative("ship.turn_rate", self.ship.turn_rate)?;
        non_negative("ship.flame_length", self.ship.flame_length)?;
        if self.ship.hull.iter().flatten().any(|c| !c.is_finite()) {
            return Err(invalid("ship.hull", "coordinates must be finite".to_string()));
        }
        if !(self.ship.friction > 0.0 && self.ship.friction <= 1.0) {
            return Err(invalid(
                "ship.friction",
                format!("must be in (0, 1], got {}", self.ship.friction),
            ));
        }

        positive("bullet.radius", self.bullet.radius)?;
        positive("bullet.speed", self.bullet.speed)?;
        positive("bullet.lifetime", self.bullet.lifetime)?;

        let asteroid = &self.asteroid;
        non_negative("asteroid.min_speed", asteroid.min_speed)?;
        ordered("asteroid.max_speed", asteroid.min_speed, asteroid.max_speed)?;
        non_negative("asteroid.max_spin", asteroid.max_spin)?;
        positive("asteroid.jaggedness_min", asteroid.jaggedness_min)?;
        ordered("asteroid.jaggedness_max", asteroid.jaggedness_min, asteroid.jaggedness_max)?;
        non_negative("asteroid.fragment_kick", asteroid.fragment_kick)?;
        if asteroid.vertex_count < 3 {
            return Err(invalid(
                "asteroid.vertex_count",
                format!("an outline needs at least 3 vertices, got {}", asteroid.vertex_count),
            ));
        }

        if self.rules.starting_lives == 0 {
            return Err(invalid("rules.starting_lives", "must be at least 1".to_string()));
        }
        if self.rules.score_per_extra_asteroid == 0 {
            return Err(invalid("rules.score_per_extra_asteroid", "must be at least 1".to_string()));
        }
        non_negative("rules.spawn_clearance", self.rules.spawn_clearance)?;
        // Below half the shorter side, at least a fifth of the field lies
        // outside the clearance circle wherever the ship is.
        let half_side = self.world.width.min(self.world.height) / 2.0;
        if self.rules.spawn_clearance >= half_side {
            return Err(invalid(
                "rules.spawn_clearance",
                format!(
                    "{} leaves no spawn area in a {}x{} world",
                    self.rules.spawn_clearance, self.world.width, self.world.height
                ),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must not be negative, got {value}")))
    }
}

fn ordered(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if max.is_finite() && max >= min {
        Ok(())
    } else {
        Err(invalid(field, format!("must be at least {min}, got {max}")))
    }
}
