//! # Rust Engine
//!
//! A small frame-stepped engine shell for 2D arcade games.
//!
//! ## Features
//!
//! - **Main Loop**: fixed or measured delta time, frame rate cap, frame limit
//! - **Input**: held-key state plus edge-triggered presses
//! - **Rendering Contract**: 2D primitives behind the [`render::Renderer`] trait
//! - **Configuration**: TOML/RON files through the [`config::Config`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         // Initialize your game
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
//!         // Update game logic
//!         Ok(())
//!     }
//!
//!     fn render(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         engine.renderer_mut().clear(Color::BLACK)?;
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, engine: &mut Engine) {
//!         // Cleanup resources
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Engine::new(
//!         EngineConfig::default(),
//!         Box::new(RecordingRenderer::new()),
//!         Box::new(EventQueue::new()),
//!     )?;
//!     engine.run(&mut MyApp)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod events;
pub mod input;
pub mod physics;
pub mod render;

mod application;
mod engine;

pub use application::{Application, AppError, AppEvent};
pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError, AppEvent,
        Engine, EngineConfig, EngineError,
        config::{Config, ConfigError},
        events::{EventQueue, EventSource},
        foundation::{
            math::{Vec2, Vec2Ext},
            time::{FrameLimiter, Timer},
        },
        input::{InputManager, KeyCode},
        physics::BoundingCircle,
        render::{Color, RecordingRenderer, RenderError, Renderer, TextAnchor},
    };
}
