//! Recording renderer
//!
//! Headless [`Renderer`] that stores every primitive instead of drawing it.
//! Used for headless sessions and for asserting on what a game drew.

use crate::foundation::math::Vec2;
use crate::render::{Color, DrawCommand, DrawList, RenderError, RenderResult, Renderer, TextAnchor};

/// Renderer that keeps the draw list of the frame in progress and of the
/// last presented frame
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    current: DrawList,
    last_frame: DrawList,
    frames_presented: u64,
}

impl RecordingRenderer {
    /// Create an empty recording renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands submitted since the last present
    pub fn current(&self) -> &DrawList {
        &self.current
    }

    /// Commands of the most recently presented frame
    pub fn last_frame(&self) -> &DrawList {
        &self.last_frame
    }

    /// Number of frames presented so far
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn check_points(points: &[Vec2]) -> RenderResult<()> {
        if points.len() < 3 {
            return Err(RenderError::InvalidPrimitive(format!(
                "polygon needs at least 3 points, got {}",
                points.len()
            )));
        }
        if let Some(bad) = points.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(RenderError::InvalidPrimitive(format!("non-finite point {bad:?}")));
        }
        Ok(())
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color) -> RenderResult<()> {
        self.current.push(DrawCommand::Clear(color));
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) -> RenderResult<()> {
        Self::check_points(points)?;
        self.current.push(DrawCommand::FillPolygon { points: points.to_vec(), color });
        Ok(())
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32) -> RenderResult<()> {
        Self::check_points(points)?;
        self.current.push(DrawCommand::StrokePolygon { points: points.to_vec(), color, width });
        Ok(())
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) -> RenderResult<()> {
        self.current.push(DrawCommand::Line { from, to, color, width });
        Ok(())
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) -> RenderResult<()> {
        if radius < 0.0 {
            return Err(RenderError::InvalidPrimitive(format!("negative circle radius {radius}")));
        }
        self.current.push(DrawCommand::Circle { center, radius, color });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        anchor: TextAnchor,
        color: Color,
    ) -> RenderResult<()> {
        self.current.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            anchor,
            color,
        });
        Ok(())
    }

    fn present(&mut self) -> RenderResult<()> {
        log::trace!("Presenting frame {} ({} commands)", self.frames_presented, self.current.len());
        self.last_frame = std::mem::take(&mut self.current);
        self.frames_presented += 1;
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
