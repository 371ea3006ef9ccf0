//! Obscured-object detection.
//!
//! An object is "obscured" when a strictly smaller object that draws above it
//! overlaps its bounding box. Larger or equal-area occluders never mark the
//! object underneath: a bigger overlay already looks dominant on screen, so
//! relabeling the covered object would be noise.

use crate::geometry::Rect;
use crate::types::ObjectId;
use std::collections::HashSet;

/// A visible object reduced to what occlusion needs: identity, footprint, stacking.
#[derive(Debug, Clone, Copy)]
pub struct StackedRect {
    /// Which placed object this footprint belongs to.
    pub id: ObjectId,
    /// Canvas-space bounding box.
    pub rect: Rect,
    /// Draw order; higher is in front.
    pub stack_order: u32,
}

/// Returns the ids of all objects covered by a smaller, higher-stacked object.
///
/// Pure derived view: callers recompute it from scratch after every qualifying
/// mutation rather than patching it incrementally.
pub fn compute_obscured(objects: &[StackedRect]) -> HashSet<ObjectId> {
    let mut obscured = HashSet::new();

    for below in objects {
        let covered = objects.iter().any(|above| {
            above.id != below.id
                && above.stack_order > below.stack_order
                && above.rect.area() < below.rect.area()
                && above.rect.overlaps(&below.rect)
        });
        if covered {
            obscured.insert(below.id);
        }
    }

    obscured
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn obj(rect: Rect, stack_order: u32) -> StackedRect {
        StackedRect {
            id: ObjectId::Monitor(Uuid::new_v4()),
            rect,
            stack_order,
        }
    }

    #[test]
    fn empty_set_has_no_obscured() {
        assert!(compute_obscured(&[]).is_empty());
    }

    #[test]
    fn smaller_higher_overlap_obscures() {
        let big = obj(Rect::from_pos_size((0.0, 0.0), 200.0, 100.0), 1);
        let small = obj(Rect::from_pos_size((50.0, 25.0), 50.0, 50.0), 2);

        let obscured = compute_obscured(&[big, small]);
        assert!(obscured.contains(&big.id));
        assert!(!obscured.contains(&small.id));
    }

    #[test]
    fn smaller_but_lower_does_not_obscure() {
        let big = obj(Rect::from_pos_size((0.0, 0.0), 200.0, 100.0), 2);
        let small = obj(Rect::from_pos_size((50.0, 25.0), 50.0, 50.0), 1);

        assert!(compute_obscured(&[big, small]).is_empty());
    }

    #[test]
    fn equal_area_never_obscures() {
        let a = obj(Rect::from_pos_size((0.0, 0.0), 100.0, 100.0), 1);
        let b = obj(Rect::from_pos_size((10.0, 10.0), 100.0, 100.0), 2);

        assert!(compute_obscured(&[a, b]).is_empty());
    }

    #[test]
    fn non_overlapping_never_obscures() {
        let big = obj(Rect::from_pos_size((0.0, 0.0), 200.0, 100.0), 1);
        let small = obj(Rect::from_pos_size((500.0, 500.0), 50.0, 50.0), 2);

        assert!(compute_obscured(&[big, small]).is_empty());
    }

    #[test]
    fn largest_object_is_never_obscured() {
        let big = obj(Rect::from_pos_size((0.0, 0.0), 300.0, 200.0), 1);
        let mid = obj(Rect::from_pos_size((10.0, 10.0), 150.0, 100.0), 2);
        let small = obj(Rect::from_pos_size((20.0, 20.0), 60.0, 40.0), 3);

        let obscured = compute_obscured(&[big, mid, small]);
        assert!(obscured.contains(&big.id));
        assert!(obscured.contains(&mid.id));
        assert!(!obscured.contains(&small.id));
    }

    #[test]
    fn stacked_at_same_position_only_top_is_clear() {
        // Decreasing area, increasing stack order, all at the origin.
        let a = obj(Rect::from_pos_size((0.0, 0.0), 300.0, 300.0), 1);
        let b = obj(Rect::from_pos_size((0.0, 0.0), 200.0, 200.0), 2);
        let c = obj(Rect::from_pos_size((0.0, 0.0), 100.0, 100.0), 3);

        let obscured = compute_obscured(&[a, b, c]);
        assert_eq!(obscured.len(), 2);
        assert!(!obscured.contains(&c.id));
    }
}
