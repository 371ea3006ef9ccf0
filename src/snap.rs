//! Edge and center snapping for dragged objects.
//!
//! Given a candidate position for a moving rect, finds the nearest edge/center
//! alignment against every other visible object and applies it when the
//! distance is below the snap threshold. The two axes are resolved
//! independently, so an X snap and a Y snap may come from different objects.

use crate::geometry::Rect;

/// Best alignment found so far on one axis.
///
/// `delta` starts at the threshold, so only strictly closer alignments win.
struct BestSnap {
    delta: f32,
    value: f32,
}

impl BestSnap {
    fn new(threshold: f32, raw: f32) -> Self {
        Self {
            delta: threshold,
            value: raw,
        }
    }

    fn consider(&mut self, moving: f32, target: f32, snapped_pos: f32) {
        let delta = (moving - target).abs();
        if delta < self.delta {
            self.delta = delta;
            self.value = snapped_pos;
        }
    }
}

/// Snaps a candidate top-left position against the given rects.
///
/// For each axis the moving rect's two edges and center are matched against the
/// corresponding edges and center of every other rect; the minimum-distance
/// alignment wins if it is strictly closer than `threshold`, otherwise the raw
/// coordinate is kept. A single linear pass per pointer move is plenty for the
/// object counts involved (tens, not thousands).
pub fn snap(
    candidate: (f32, f32),
    width: f32,
    height: f32,
    others: &[Rect],
    threshold: f32,
) -> (f32, f32) {
    let (raw_x, raw_y) = candidate;
    let moving = Rect::from_pos_size(candidate, width, height);

    let mut best_x = BestSnap::new(threshold, raw_x);
    let mut best_y = BestSnap::new(threshold, raw_y);

    for other in others {
        // X axis: left/right edges and horizontal centers.
        best_x.consider(moving.left, other.left, other.left);
        best_x.consider(moving.left, other.right(), other.right());
        best_x.consider(moving.right(), other.left, other.left - width);
        best_x.consider(moving.right(), other.right(), other.right() - width);
        best_x.consider(moving.center_x(), other.center_x(), other.center_x() - width / 2.0);

        // Y axis: top/bottom edges and vertical centers.
        best_y.consider(moving.top, other.top, other.top);
        best_y.consider(moving.top, other.bottom(), other.bottom());
        best_y.consider(moving.bottom(), other.top, other.top - height);
        best_y.consider(moving.bottom(), other.bottom(), other.bottom() - height);
        best_y.consider(moving.center_y(), other.center_y(), other.center_y() - height / 2.0);
    }

    (best_x.value, best_y.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SNAP_THRESHOLD;

    #[test]
    fn no_targets_leaves_candidate_unchanged() {
        let pos = snap((123.4, 567.8), 50.0, 30.0, &[], SNAP_THRESHOLD);
        assert_eq!(pos, (123.4, 567.8));
    }

    #[test]
    fn far_candidate_is_unchanged() {
        let other = Rect::from_pos_size((0.0, 0.0), 100.0, 100.0);
        let pos = snap((500.0, 500.0), 50.0, 30.0, &[other], SNAP_THRESHOLD);
        assert_eq!(pos, (500.0, 500.0));
    }

    #[test]
    fn left_edge_snaps_to_other_right_edge() {
        let other = Rect::from_pos_size((0.0, 0.0), 100.0, 100.0);
        // Left edge 7 px past the other's right edge, y well clear.
        let pos = snap((107.0, 300.0), 50.0, 30.0, &[other], SNAP_THRESHOLD);
        assert_eq!(pos, (100.0, 300.0));
    }

    #[test]
    fn right_edge_snaps_to_other_left_edge() {
        let other = Rect::from_pos_size((200.0, 0.0), 100.0, 100.0);
        // Moving right edge at 195, 5 px short of the other's left edge at 200.
        let pos = snap((145.0, 300.0), 50.0, 30.0, &[other], SNAP_THRESHOLD);
        assert_eq!(pos, (150.0, 300.0));
    }

    #[test]
    fn centers_snap_on_both_axes() {
        let other = Rect::from_pos_size((100.0, 100.0), 80.0, 60.0); // center (140, 130)
        // Moving center at (143, 127): both axes within threshold of the center.
        let pos = snap((123.0, 112.0), 40.0, 30.0, &[other], SNAP_THRESHOLD);
        assert_eq!(pos, (120.0, 115.0));
    }

    #[test]
    fn axes_snap_against_different_objects() {
        let snap_x = Rect::from_pos_size((100.0, 500.0), 50.0, 50.0);
        let snap_y = Rect::from_pos_size((500.0, 200.0), 50.0, 50.0);
        // X within threshold of snap_x's left edge, Y within threshold of snap_y's top.
        let pos = snap((104.0, 196.0), 40.0, 40.0, &[snap_x, snap_y], SNAP_THRESHOLD);
        assert_eq!(pos, (100.0, 200.0));
    }

    #[test]
    fn snapping_is_idempotent() {
        let other = Rect::from_pos_size((0.0, 0.0), 100.0, 100.0);
        let first = snap((104.0, 97.0), 50.0, 30.0, &[other], SNAP_THRESHOLD);
        let second = snap(first, 50.0, 30.0, &[other], SNAP_THRESHOLD);
        assert_eq!(first, second);
    }

    #[test]
    fn threshold_boundary_is_exclusive() {
        let other = Rect::from_pos_size((0.0, 0.0), 100.0, 100.0);
        let eps = 0.01;

        // Just under the threshold: snaps.
        let near = snap((100.0 + SNAP_THRESHOLD - eps, 300.0), 50.0, 30.0, &[other], SNAP_THRESHOLD);
        assert_eq!(near.0, 100.0);

        // At or past the threshold: unchanged.
        let at = snap((100.0 + SNAP_THRESHOLD, 300.0), 50.0, 30.0, &[other], SNAP_THRESHOLD);
        assert_eq!(at.0, 100.0 + SNAP_THRESHOLD);
        let far = snap((100.0 + SNAP_THRESHOLD + eps, 300.0), 50.0, 30.0, &[other], SNAP_THRESHOLD);
        assert_eq!(far.0, 100.0 + SNAP_THRESHOLD + eps);
    }

    #[test]
    fn nearest_alignment_wins() {
        // Other rect left edge at 100, right at 200; candidate left edge at 104
        // is 4 px from the left edge and 96 px from the right edge.
        let other = Rect::from_pos_size((100.0, 0.0), 100.0, 100.0);
        let pos = snap((104.0, 300.0), 50.0, 30.0, &[other], SNAP_THRESHOLD);
        assert_eq!(pos.0, 100.0);
    }
}
