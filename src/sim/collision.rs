//! Circle-circle collision detection
//!
//! Every collider in the game is a circle, so one test covers projectile hits
//! and craft rams alike. The result carries enough contact geometry to drive
//! damage scaling and positional push-back.

use glam::Vec2;

use crate::consts::NORMALIZE_EPSILON;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the circles overlap
    pub hit: bool,
    /// Contact point, roughly the middle of the overlap
    pub point: Vec2,
    /// Unit normal pointing from the first circle toward the second
    pub normal: Vec2,
    /// Overlap depth (radii sum minus center distance)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check two circles for overlap
///
/// Circles touching exactly (distance == radius sum) do not collide. When the
/// centers coincide the normal falls back to +X so nothing downstream divides
/// by zero.
pub fn circle_collision(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> CollisionResult {
    let delta = pos_b - pos_a;
    let distance = delta.length();
    let radii_sum = radius_a + radius_b;

    if distance >= radii_sum {
        return CollisionResult::miss();
    }

    let penetration = radii_sum - distance;
    let normal = if distance > NORMALIZE_EPSILON {
        delta / distance
    } else {
        Vec2::X
    };
    let point = pos_a + normal * (radius_a - penetration * 0.5);

    CollisionResult {
        hit: true,
        point,
        normal,
        penetration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_separated_circles_miss() {
        let result = circle_collision(Vec2::ZERO, 10.0, Vec2::new(30.0, 0.0), 10.0);
        assert!(!result.hit);
    }

    #[test]
    fn test_touching_circles_miss() {
        let result = circle_collision(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0);
        assert!(!result.hit);
    }

    #[test]
    fn test_overlap_geometry() {
        let result = circle_collision(Vec2::ZERO, 10.0, Vec2::new(15.0, 0.0), 10.0);
        assert!(result.hit);
        assert!((result.penetration - 5.0).abs() < 1e-5);
        assert!((result.normal - Vec2::X).length() < 1e-6);
        // 10 - 5/2 along +X
        assert!((result.point - Vec2::new(7.5, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_normal_points_from_a_to_b() {
        let result = circle_collision(Vec2::new(0.0, 10.0), 8.0, Vec2::ZERO, 8.0);
        assert!(result.hit);
        assert!((result.normal - Vec2::NEG_Y).length() < 1e-6);
    }

    #[test]
    fn test_exact_overlap_uses_fallback_normal() {
        let pos = Vec2::new(100.0, 100.0);
        let result = circle_collision(pos, 6.0, pos, 20.0);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::X);
        assert!((result.penetration - 26.0).abs() < 1e-5);
        assert!(result.point.is_finite());
        // 6 - 26/2 = -7 along the fallback normal
        assert!((result.point - Vec2::new(93.0, 100.0)).length() < 1e-4);
    }

    proptest! {
        #[test]
        fn hit_iff_closer_than_radii_sum(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            ra in 0.5f32..60.0, rb in 0.5f32..60.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            let result = circle_collision(a, ra, b, rb);
            let distance = (b - a).length();
            if distance >= ra + rb {
                prop_assert!(!result.hit);
            } else {
                prop_assert!(result.hit);
                prop_assert_eq!(result.penetration, ra + rb - distance);
                prop_assert!(result.normal.is_finite());
                prop_assert!(result.point.is_finite());
                prop_assert!((result.normal.length() - 1.0).abs() < 1e-4);
            }
        }
    }
}
