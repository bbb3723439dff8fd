//! Collision manifold: the result of a pairwise shape test

use crate::foundation::math::{Point2, Vec2};

/// Contact information for one colliding pair
///
/// Transient: only valid for the frame in which it was computed. The normal
/// points from shape A toward shape B; a zero normal means no collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Manifold {
    /// Unit contact normal from A toward B, or zero when no collision
    pub normal: Vec2,
    /// Overlap depth along the normal
    pub penetration: f32,
    /// Representative contact point in world space
    pub contact: Point2,
}

impl Manifold {
    /// A manifold reporting no collision
    pub fn none() -> Self {
        Self {
            normal: Vec2::zeros(),
            penetration: 0.0,
            contact: Point2::origin(),
        }
    }

    /// Whether the pair collided this frame
    ///
    /// True iff the normal is non-zero.
    pub fn occurred(&self) -> bool {
        self.normal != Vec2::zeros()
    }

    /// The same contact seen from the other shape: normal flipped
    pub fn reversed(&self) -> Self {
        Self {
            normal: -self.normal,
            penetration: self.penetration,
            contact: self.contact,
        }
    }
}

impl Default for Manifold {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_has_not_occurred() {
        assert!(!Manifold::none().occurred());
    }

    #[test]
    fn test_reversed_flips_normal_only() {
        let manifold = Manifold {
            normal: Vec2::new(1.0, 0.0),
            penetration: 2.0,
            contact: Point2::new(5.0, 0.0),
        };
        let reversed = manifold.reversed();

        assert_eq!(reversed.normal, Vec2::new(-1.0, 0.0));
        assert_eq!(reversed.penetration, 2.0);
        assert_eq!(reversed.contact, manifold.contact);
        assert!(reversed.occurred());
    }
}
