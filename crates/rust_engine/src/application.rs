//! Application trait and lifecycle management

use crate::config::ConfigError;
use crate::engine::{Engine, EngineError};
use crate::render::RenderError;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to create your game or application using the engine.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first frame. Use this to set up your
    /// initial game state.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame after the frame's events have been handled.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Render the application
    ///
    /// Called after update. Draw the frame through `engine.renderer_mut()`;
    /// the engine presents it afterwards.
    fn render(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Handle application events
    ///
    /// Called for every event polled at the start of a frame.
    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        // Default implementation forwards to engine
        engine.handle_event(event);
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called once when the main loop has stopped.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Rendering error
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Window close requested
    WindowCloseRequested,

    /// Window lost focus
    WindowUnfocused,

    /// Key was pressed
    KeyPressed(crate::input::KeyCode),

    /// Key was released
    KeyReleased(crate::input::KeyCode),
}
