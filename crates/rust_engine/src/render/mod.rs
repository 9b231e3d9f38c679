//! # Rendering System
//!
//! This module provides the rendering contract for 2D games on the engine.
//! The engine never rasterizes anything itself: games describe each frame as
//! a handful of primitives (background fill, polygons, lines, circles, text)
//! and a [`Renderer`] implementation turns them into pixels, a log, or a
//! recorded draw list.
//!
//! ## Coordinate Space
//!
//! Origin at the top-left corner, x to the right, y down. Angles are in
//! degrees with 0° pointing up the screen.

pub mod backend;
pub mod commands;
pub mod recording;

pub use backend::Renderer;
pub use commands::{Color, DrawCommand, DrawList, TextAnchor};
pub use recording::RecordingRenderer;

use thiserror::Error;

/// High-level rendering error types
///
/// Represents errors that can occur during rendering operations, abstracted
/// from whatever backend sits behind the [`Renderer`] trait.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A primitive was submitted with unusable geometry
    #[error("Invalid primitive: {0}")]
    InvalidPrimitive(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
