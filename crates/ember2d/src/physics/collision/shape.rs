//! Collision shape definitions
//!
//! A closed tagged union over the supported shape kinds, dispatched by
//! pattern matching. Shapes are model-space: an AABB stores half extents and
//! a circle its radius; world position comes from the entity transform.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

/// Collision shape attached to an entity (model space)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned bounding box, stored as half extents from the center
    Aabb {
        /// Half width and half height
        half_extents: Vec2,
    },
    /// Circle, stored as a radius around the center
    Circle {
        /// Circle radius
        radius: f32,
    },
}

impl Shape {
    /// Create an AABB from its full width and height
    pub fn aabb(width: f32, height: f32) -> Self {
        Self::Aabb {
            half_extents: Vec2::new(width.abs() * 0.5, height.abs() * 0.5),
        }
    }

    /// Create a circle with the given radius
    pub fn circle(radius: f32) -> Self {
        Self::Circle {
            radius: radius.abs(),
        }
    }

    /// Radius of the smallest circle containing the shape
    pub fn bounding_radius(&self) -> f32 {
        match self {
            Self::Aabb { half_extents } => half_extents.magnitude(),
            Self::Circle { radius } => *radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aabb_stores_half_extents() {
        let shape = Shape::aabb(4.0, 2.0);
        assert_eq!(
            shape,
            Shape::Aabb {
                half_extents: Vec2::new(2.0, 1.0)
            }
        );
    }

    #[test]
    fn test_negative_dimensions_are_normalized() {
        assert_eq!(Shape::circle(-3.0), Shape::Circle { radius: 3.0 });
        assert_eq!(
            Shape::aabb(-2.0, -2.0),
            Shape::Aabb {
                half_extents: Vec2::new(1.0, 1.0)
            }
        );
    }

    #[test]
    fn test_bounding_radius() {
        assert_relative_eq!(Shape::circle(5.0).bounding_radius(), 5.0);
        assert_relative_eq!(
            Shape::aabb(6.0, 8.0).bounding_radius(),
            5.0 // hypot(3, 4)
        );
    }
}
