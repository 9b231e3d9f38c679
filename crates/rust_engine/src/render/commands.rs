//! Draw commands and colors
//!
//! A [`DrawCommand`] is the data form of one [`Renderer`](crate::render::Renderer)
//! call. Backends that buffer a frame before presenting it collect them in a
//! [`DrawList`].

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Red
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Yellow
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Where a text position sits relative to the rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Position is the top-left corner of the text box
    #[default]
    TopLeft,
    /// Position is the center of the text box
    Center,
}

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Background fill
    Clear(Color),

    /// Filled polygon
    FillPolygon {
        /// Outline points
        points: Vec<Vec2>,
        /// Fill color
        color: Color,
    },

    /// Polygon outline
    StrokePolygon {
        /// Outline points
        points: Vec<Vec2>,
        /// Stroke color
        color: Color,
        /// Stroke width in pixels
        width: f32,
    },

    /// Line segment
    Line {
        /// Start point
        from: Vec2,
        /// End point
        to: Vec2,
        /// Line color
        color: Color,
        /// Line width in pixels
        width: f32,
    },

    /// Filled circle
    Circle {
        /// Circle center
        center: Vec2,
        /// Circle radius
        radius: f32,
        /// Fill color
        color: Color,
    },

    /// Text label
    Text {
        /// The string to draw
        text: String,
        /// Anchor position
        position: Vec2,
        /// How `position` relates to the text box
        anchor: TextAnchor,
        /// Text color
        color: Color,
    },
}

/// Ordered list of draw commands making up one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    /// List of commands to execute
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command to this list
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Get the number of commands in this list
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all commands from this list
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Iterate over the commands in submission order
    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// All text strings in the list, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
