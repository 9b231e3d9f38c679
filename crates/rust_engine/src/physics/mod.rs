//! Physics module for collision detection
//!
//! Games on this engine use point-circle approximations only.

pub mod collision;

pub use collision::{BoundingCircle, first_overlap};
