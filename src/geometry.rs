//! Pure geometry helpers for the canvas engine.
//!
//! Converts monitor specs (diagonal, aspect ratio, resolution) into physical
//! dimensions, and provides the axis-aligned bounding box used by snapping,
//! occlusion detection and rendering.

use crate::types::{AspectRatio, Orientation, Resolution};

/// Physical dimensions derived from a monitor's spec.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorMetrics {
    /// Pixels per inch.
    pub ppi: f32,
    /// Physical width in inches (landscape, pre-rotation).
    pub width_inches: f32,
    /// Physical height in inches (landscape, pre-rotation).
    pub height_inches: f32,
}

/// Computes PPI and physical width/height from diagonal, aspect ratio and resolution.
///
/// Inputs are assumed positive and finite; the add-monitor form rejects anything
/// else before an object is constructed.
pub fn derive_monitor_metrics(
    diagonal: f32,
    aspect_ratio: AspectRatio,
    resolution: Resolution,
) -> MonitorMetrics {
    let diagonal_pixels =
        ((resolution.w as f32).powi(2) + (resolution.h as f32).powi(2)).sqrt();
    let ppi = diagonal_pixels / diagonal;

    let ratio = (aspect_ratio.w.powi(2) + aspect_ratio.h.powi(2)).sqrt();
    let width_inches = diagonal * aspect_ratio.w / ratio;
    let height_inches = diagonal * aspect_ratio.h / ratio;

    MonitorMetrics {
        ppi,
        width_inches,
        height_inches,
    }
}

/// An axis-aligned rectangle in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge (x of the top-left corner).
    pub left: f32,
    /// Top edge (y of the top-left corner).
    pub top: f32,
    /// Width, always >= 0.
    pub width: f32,
    /// Height, always >= 0.
    pub height: f32,
}

impl Rect {
    /// Builds a rect from a top-left corner and a size.
    pub fn from_pos_size(position: (f32, f32), width: f32, height: f32) -> Self {
        Self {
            left: position.0,
            top: position.1,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    /// Vertical center.
    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }

    /// Footprint area.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether two rects overlap (edge contact counts as overlap).
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.left
            || self.left > other.right()
            || self.bottom() < other.top
            || self.top > other.bottom())
    }
}

/// Computes the canvas-space bounding box for a placed object.
///
/// Portrait orientation swaps the effective width and height; the position stays
/// the top-left corner either way.
pub fn bounding_box(
    position: (f32, f32),
    width_units: f32,
    height_units: f32,
    orientation: Orientation,
    pixels_per_unit: f32,
) -> Rect {
    let (w, h) = match orientation {
        Orientation::Landscape => (width_units, height_units),
        Orientation::Portrait => (height_units, width_units),
    };
    Rect::from_pos_size(position, w * pixels_per_unit, h * pixels_per_unit)
}
