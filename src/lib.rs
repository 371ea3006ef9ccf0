//! # Monitor Comparator
//!
//! A visual tool for comparing physical monitor sizes and layouts on a
//! virtual desk. Monitors are entered by diagonal, aspect ratio and
//! resolution, then placed true-to-scale on an interactive canvas:
//! - Dragging with edge/center snapping against other monitors
//! - Canvas panning and zooming (wheel, pinch, toolbar)
//! - Automatic stacking so smaller monitors draw on top of larger ones
//! - Obscured-label detection keeping every monitor's label legible
//! - An optional keyboard overlay (full-size or 75%) for scale reference
//!
//! The core engine (`geometry`, `snap`, `occlusion`, `label`, `types`) is
//! plain state and pure functions; the `ui` module feeds it egui events.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
mod geometry;
mod label;
mod occlusion;
mod snap;
mod types;
mod ui;

pub use geometry::{bounding_box, derive_monitor_metrics, MonitorMetrics, Rect};
pub use label::{place_label, LabelPlacement};
pub use occlusion::{compute_obscured, StackedRect};
pub use snap::snap;
pub use types::*;
use ui::DeskApp;

/// Runs the monitor comparator with default settings.
///
/// Initializes the egui application window and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Monitor Comparator",
        options,
        Box::new(|_cc| Ok(Box::new(DeskApp::default()))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desk_default() {
        let desk = DeskSetup::default();
        assert!(desk.monitors.is_empty());
        assert_eq!(desk.keyboard_mode, KeyboardMode::Hidden);
        assert_eq!(
            desk.keyboard_position,
            constants::KEYBOARD_DEFAULT_POSITION
        );
    }

    #[test]
    fn test_metrics_are_positive() {
        let m = derive_monitor_metrics(
            31.5,
            AspectRatio { w: 16.0, h: 9.0 },
            Resolution { w: 3840, h: 2160 },
        );
        assert!(m.ppi > 0.0 && m.width_inches > 0.0 && m.height_inches > 0.0);
    }
}
