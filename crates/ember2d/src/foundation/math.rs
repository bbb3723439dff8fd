//! Math utilities and types
//!
//! Provides fundamental math types for 2D game development.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Matrix3, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type (2D homogeneous transforms)
pub type Mat3 = Matrix3<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Transform representing 2D position, rotation, and scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position in world space
    pub position: Vec2,

    /// Rotation in radians (counter-clockwise)
    pub rotation: f32,

    /// Scale factors
    pub scale: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec2, rotation: f32) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Convert to a homogeneous transformation matrix
    pub fn to_matrix(&self) -> Mat3 {
        let (sin, cos) = self.rotation.sin_cos();
        Mat3::new(
            cos * self.scale.x, -sin * self.scale.y, self.position.x,
            sin * self.scale.x,  cos * self.scale.y, self.position.y,
            0.0,                 0.0,                1.0,
        )
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point2) -> Point2 {
        let (sin, cos) = self.rotation.sin_cos();
        let scaled = Vec2::new(point.x * self.scale.x, point.y * self.scale.y);
        let rotated = Vec2::new(
            scaled.x * cos - scaled.y * sin,
            scaled.x * sin + scaled.y * cos,
        );
        Point2::from(rotated + self.position)
    }

    /// Translate the transform by a delta
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Clamp a value to a range
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_transform() {
        let transform = Transform::identity();
        let point = Point2::new(3.0, -2.0);
        let moved = transform.transform_point(point);

        assert_relative_eq!(moved.x, 3.0);
        assert_relative_eq!(moved.y, -2.0);
    }

    #[test]
    fn test_transform_point_with_translation() {
        let transform = Transform::from_position(Vec2::new(10.0, 5.0));
        let moved = transform.transform_point(Point2::new(1.0, 1.0));

        assert_relative_eq!(moved.x, 11.0);
        assert_relative_eq!(moved.y, 6.0);
    }

    #[test]
    fn test_transform_point_with_rotation() {
        let transform = Transform::from_position_rotation(Vec2::zeros(), constants::PI / 2.0);
        let moved = transform.transform_point(Point2::new(1.0, 0.0));

        assert_relative_eq!(moved.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(moved.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_lerp() {
        assert_relative_eq!(utils::lerp(0.0, 10.0, 0.5), 5.0);
        assert_relative_eq!(utils::lerp(-1.0, 1.0, 0.0), -1.0);
        assert_relative_eq!(utils::lerp(-1.0, 1.0, 1.0), 1.0);
    }
}
