//! Axis-aligned bounding-box collision
//!
//! Every collision check in the game (player vs enemy, player vs power-up)
//! reduces to one rectangle-overlap test. Touching edges do not count as
//! overlap: the comparisons are strict, so two boxes sharing an edge miss.

use glam::Vec2;

/// An axis-aligned bounding box. `pos` is the top-left corner; y grows
/// downward like the rest of the playfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self { pos, width, height }
    }

    /// Center point, used as the origin for explosion bursts.
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Rectangle-overlap test.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.width
            && self.pos.x + self.width > other.pos.x
            && self.pos.y < other.pos.y + other.height
            && self.pos.y + self.height > other.pos.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), w, h)
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = boxed(0.0, 0.0, 50.0, 80.0);
        let b = boxed(40.0, 60.0, 70.0, 70.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_separated_boxes() {
        let a = boxed(0.0, 0.0, 50.0, 80.0);
        let b = boxed(200.0, 0.0, 70.0, 70.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = boxed(0.0, 0.0, 50.0, 80.0);
        let b = boxed(50.0, 0.0, 50.0, 80.0);
        assert!(!a.overlaps(&b));
        let below = boxed(0.0, 80.0, 50.0, 80.0);
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = boxed(0.0, 0.0, 100.0, 100.0);
        let inner = boxed(25.0, 25.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_identical_boxes_overlap() {
        let a = boxed(10.0, 20.0, 50.0, 80.0);
        assert!(a.overlaps(&a));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = boxed(ax, ay, aw, ah);
            let b = boxed(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
