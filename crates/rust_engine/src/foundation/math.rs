//! Math utilities and types
//!
//! Provides the 2D vector type used by games built on the engine, plus the
//! angle and wrapping helpers for a y-down screen space where 0° points up.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Extension trait for Vec2 with game-oriented convenience methods
pub trait Vec2Ext {
    /// Unit vector in the same direction, or the zero vector for a zero-length input
    fn normalize_or_zero(&self) -> Vec2;

    /// Rotate the vector clockwise on screen (y down) by `degrees`
    fn rotated_deg(&self, degrees: f32) -> Vec2;

    /// Unit vector for a heading in degrees, 0° pointing up the screen
    fn from_heading(degrees: f32) -> Vec2;
}

impl Vec2Ext for Vec2 {
    fn normalize_or_zero(&self) -> Vec2 {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            self / magnitude
        } else {
            Vec2::zeros()
        }
    }

    fn rotated_deg(&self, degrees: f32) -> Vec2 {
        let (sin_a, cos_a) = utils::deg_to_rad(degrees).sin_cos();
        Vec2::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    fn from_heading(degrees: f32) -> Vec2 {
        let (sin_a, cos_a) = utils::deg_to_rad(degrees - 90.0).sin_cos();
        Vec2::new(cos_a, sin_a)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Degrees in a full turn
    pub const FULL_TURN_DEG: f32 = 360.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Toroidal wrap of `value` into `[0, extent)`
    ///
    /// `rem_euclid` on a tiny negative input can round up to exactly `extent`
    /// in f32, so that case folds back to zero.
    pub fn wrap(value: f32, extent: f32) -> f32 {
        let wrapped = value.rem_euclid(extent);
        if wrapped >= extent { 0.0 } else { wrapped }
    }

    /// Normalize an angle in degrees into `[0, 360)`
    pub fn wrap_degrees(degrees: f32) -> f32 {
        wrap(degrees, constants::FULL_TURN_DEG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -4.0);

        assert_eq!(a + b, Vec2::new(4.0, -2.0));
        assert_eq!(a * 2.5, Vec2::new(2.5, 5.0));
        assert_relative_eq!(b.magnitude(), 5.0);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let zero = Vec2::zeros();
        let normalized = zero.normalize_or_zero();

        assert_eq!(normalized, Vec2::zeros());
        assert!(!normalized.x.is_nan() && !normalized.y.is_nan());
    }

    #[test]
    fn test_normalize_non_zero() {
        let v = Vec2::new(3.0, 4.0).normalize_or_zero();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(v.y, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_heading_points_up_at_zero() {
        let up = Vec2::from_heading(0.0);
        assert_relative_eq!(up.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(up.y, -1.0, epsilon = 1e-6);

        let right = Vec2::from_heading(90.0);
        assert_relative_eq!(right.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(right.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_is_clockwise_on_screen() {
        let nose = Vec2::new(0.0, -10.0);
        let rotated = nose.rotated_deg(90.0);
        assert_relative_eq!(rotated.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(rotated.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_wrap() {
        assert_relative_eq!(utils::wrap(805.0, 800.0), 5.0);
        assert_relative_eq!(utils::wrap(-5.0, 800.0), 795.0);
        assert_relative_eq!(utils::wrap(800.0, 800.0), 0.0);
        assert!(utils::wrap(-1.0e-9, 800.0) < 800.0);
    }

    #[test]
    fn test_wrap_degrees() {
        assert_relative_eq!(utils::wrap_degrees(370.0), 10.0, epsilon = 1e-4);
        assert_relative_eq!(utils::wrap_degrees(-90.0), 270.0, epsilon = 1e-4);
    }
}
