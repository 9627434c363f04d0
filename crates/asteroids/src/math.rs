//! Math utilities and types
//!
//! Thin aliases over nalgebra plus the few 2D helpers the game needs.

pub use nalgebra::{Rotation2, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Rotate a heading by `angle` radians and renormalize it.
///
/// Renormalizing keeps repeated small rotations from drifting the length.
pub fn rotate_heading(direction: Vec2, angle: f32) -> Vec2 {
    let rotated = Rotation2::new(angle) * direction;
    rotated.try_normalize(f32::EPSILON).unwrap_or(direction)
}

/// Wrap a coordinate into `[0, extent)`.
///
/// A value that leaves one side re-enters from the opposite side carrying
/// its overshoot.
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}
