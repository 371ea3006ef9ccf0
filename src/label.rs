//! Label placement for placed objects.
//!
//! Labels render at constant screen size regardless of zoom, so whether a label
//! fits inside its object depends on the object's *visible* (scaled) size.

use crate::constants::LABEL_PADDING;

/// Where an object's identifying text is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Centered inside the object's bounding box.
    InsideCentered,
    /// Anchored outside, above the object's top-left corner, with a backdrop.
    OutsideAnchored,
}

/// Decides where to draw a label given its measured size, the object's visible
/// on-screen size, and whether the object is obscured by a smaller object above
/// it (in which case an inside label would be covered too).
pub fn place_label(
    text_size: (f32, f32),
    visible_size: (f32, f32),
    obscured: bool,
) -> LabelPlacement {
    let fits = text_size.0 <= visible_size.0 - LABEL_PADDING
        && text_size.1 <= visible_size.1 - LABEL_PADDING;
    if fits && !obscured {
        LabelPlacement::InsideCentered
    } else {
        LabelPlacement::OutsideAnchored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitting_label_goes_inside() {
        assert_eq!(
            place_label((60.0, 30.0), (200.0, 120.0), false),
            LabelPlacement::InsideCentered
        );
    }

    #[test]
    fn overflowing_label_goes_outside() {
        // Too wide.
        assert_eq!(
            place_label((250.0, 30.0), (200.0, 120.0), false),
            LabelPlacement::OutsideAnchored
        );
        // Too tall once padding is accounted for.
        assert_eq!(
            place_label((60.0, 110.0), (200.0, 120.0), false),
            LabelPlacement::OutsideAnchored
        );
    }

    #[test]
    fn obscured_object_always_labels_outside() {
        assert_eq!(
            place_label((60.0, 30.0), (200.0, 120.0), true),
            LabelPlacement::OutsideAnchored
        );
    }
}
