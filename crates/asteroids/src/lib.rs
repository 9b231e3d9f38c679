//! # Asteroids
//!
//! Classic arcade asteroids on top of the engine shell:
//! - Ship with rotation, thrust, speed cap and friction
//! - Bullets with a fixed lifetime
//! - Procedural asteroids that split into smaller fragments
//! - Screen wrap, lives, score and escalating waves
//!
//! [`Game`] holds the rules and can be driven directly; [`AsteroidsApp`]
//! plugs it into the engine main loop.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod asteroid;
pub mod autopilot;
pub mod bullet;
pub mod config;
pub mod controls;
pub mod game;
pub mod object;
pub mod ship;

pub use app::AsteroidsApp;
pub use asteroid::{Asteroid, AsteroidSize};
pub use autopilot::Autopilot;
pub use bullet::Bullet;
pub use config::GameConfig;
pub use controls::Controls;
pub use game::{Game, GameState};
pub use object::{Body, Bounds, GameObject};
pub use ship::Ship;
