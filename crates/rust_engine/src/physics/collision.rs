//! Circle collision primitives
//!
//! Every collider in a 2D arcade game is approximated by its bounding circle.

use crate::foundation::math::Vec2;

/// A bounding circle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCircle {
    /// The center position of the circle in world space
    pub center: Vec2,
    /// The radius of the circle
    pub radius: f32,
}

impl BoundingCircle {
    /// Creates a new bounding circle with the given center and radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this circle overlaps another
    ///
    /// Circles that exactly touch do not count as overlapping.
    pub fn intersects(&self, other: &BoundingCircle) -> bool {
        let distance = (self.center - other.center).magnitude();
        distance < self.radius + other.radius
    }

    /// Get the penetration depth if intersecting (0.0 if not intersecting)
    pub fn penetration_depth(&self, other: &BoundingCircle) -> f32 {
        let distance = (self.center - other.center).magnitude();
        let radius_sum = self.radius + other.radius;
        if distance < radius_sum {
            radius_sum - distance
        } else {
            0.0
        }
    }

    /// Check if a point lies strictly inside the circle
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point - self.center).magnitude() < self.radius
    }
}

/// Index of the first circle in `others` that overlaps `circle`
pub fn first_overlap<I>(circle: &BoundingCircle, others: I) -> Option<usize>
where
    I: IntoIterator<Item = BoundingCircle>,
{
    others.into_iter().position(|other| circle.intersects(&other))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_overlapping_circles() {
        let a = BoundingCircle::new(Vec2::new(0.0, 0.0), 10.0);
        let b = BoundingCircle::new(Vec2::new(15.0, 0.0), 10.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert_relative_eq!(a.penetration_depth(&b), 5.0);
    }

    #[test]
    fn test_touching_circles_do_not_collide() {
        let a = BoundingCircle::new(Vec2::new(0.0, 0.0), 8.0);
        let b = BoundingCircle::new(Vec2::new(0.0, 10.0), 2.0);

        assert!(!a.intersects(&b));
        assert_eq!(a.penetration_depth(&b), 0.0);
    }

    #[test]
    fn test_contains_point() {
        let circle = BoundingCircle::new(Vec2::new(5.0, 5.0), 2.0);
        assert!(circle.contains_point(Vec2::new(6.0, 6.0)));
        assert!(!circle.contains_point(Vec2::new(7.0, 5.0)));
    }

    #[test]
    fn test_first_overlap_picks_earliest() {
        let query = BoundingCircle::new(Vec2::new(0.0, 0.0), 5.0);
        let others = [
            BoundingCircle::new(Vec2::new(100.0, 0.0), 5.0),
            BoundingCircle::new(Vec2::new(6.0, 0.0), 5.0),
            BoundingCircle::new(Vec2::new(0.0, 3.0), 5.0),
        ];

        assert_eq!(first_overlap(&query, others), Some(1));
        assert_eq!(first_overlap(&query, others[..1].iter().copied()), None);
    }
}
