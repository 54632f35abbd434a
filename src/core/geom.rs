//! Axis-aligned boxes and overlap tests
//!
//! Every moving entity in the arcade is a rectangle. The overlap test is the
//! exact open-interval check: `a.min < b.max && a.max > b.min` on both axes,
//! no tolerance.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box. `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    /// Create a box. Geometry must be finite and non-negative in extent;
    /// anything else is a programmer error.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite(),
            "non-finite box geometry ({x}, {y}, {w}, {h})"
        );
        debug_assert!(w >= 0.0 && h >= 0.0, "negative box extent ({w}, {h})");
        Self { x, y, w, h }
    }

    /// Top-left corner as a vector.
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Strict overlap test. Touching edges do not count as overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Does the box contain the point (edges inclusive on the min side)?
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        // Exact test, no tolerance: a shared edge is not an overlap.
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn contained_box_intersects() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn contains_point() {
        let a = Aabb::new(10.0, 10.0, 5.0, 5.0);
        assert!(a.contains(Vec2::new(12.0, 12.0)));
        assert!(!a.contains(Vec2::new(16.0, 12.0)));
    }

    fn arb_box() -> impl Strategy<Value = Aabb> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            0.0f32..200.0,
            0.0f32..200.0,
        )
            .prop_map(|(x, y, w, h)| Aabb::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(a in arb_box(), b in arb_box()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn box_never_intersects_distant_box(a in arb_box()) {
            let far = Aabb::new(a.x + a.w + 1000.0, a.y, 1.0, 1.0);
            prop_assert!(!a.intersects(&far));
        }
    }
}
