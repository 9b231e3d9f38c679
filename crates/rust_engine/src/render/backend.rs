//! Backend abstraction trait for the rendering system
//!
//! This module defines the trait that rendering backends must implement
//! so games can draw without knowing which backend presents the frame.

use crate::foundation::math::Vec2;
use crate::render::{Color, RenderResult, TextAnchor};

/// Main rendering backend trait
///
/// Calls between two [`Renderer::present`] calls make up one frame.
pub trait Renderer {
    /// Fill the whole frame with a background color
    fn clear(&mut self, color: Color) -> RenderResult<()>;

    /// Draw a filled polygon from its outline points in screen space
    fn fill_polygon(&mut self, points: &[Vec2], color: Color) -> RenderResult<()>;

    /// Draw the closed outline of a polygon
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32) -> RenderResult<()>;

    /// Draw a line segment
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) -> RenderResult<()>;

    /// Draw a filled circle
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) -> RenderResult<()>;

    /// Draw a line of text anchored at `position`
    fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        anchor: TextAnchor,
        color: Color,
    ) -> RenderResult<()>;

    /// Finish the frame and show it
    fn present(&mut self) -> RenderResult<()>;

    /// Downcast to concrete backend type
    /// This breaks abstraction but lets headless tools read back recorded frames
    fn as_any(&self) -> &dyn std::any::Any;
}
