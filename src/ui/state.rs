//! Application state structures.
//!
//! Contains the main `DeskApp` struct plus the nested state for canvas
//! navigation, pointer interaction, and the add-monitor form.

use crate::constants::{ASPECT_RATIO_PRESETS, DEFAULT_PAN, DIAGONAL_PRESETS, RESOLUTION_PRESETS};
use crate::types::{AspectRatio, DeskSetup, MonitorId, MonitorSpec, ObjectId, Resolution};
use eframe::egui;

/// Canvas navigation state: pan, zoom and the observed viewport size.
pub struct CanvasState {
    /// Pan offset in screen pixels; combines with `scale` into the
    /// screen↔canvas transform.
    pub pan: egui::Vec2,
    /// Zoom scale (1.0 = normal), clamped to the configured range.
    pub scale: f32,
    /// Size of the visible viewport in screen pixels, observed every frame.
    pub viewport_size: egui::Vec2,
    /// Whether the dotted desk grid is drawn.
    pub show_grid: bool,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            pan: egui::vec2(DEFAULT_PAN.0, DEFAULT_PAN.1),
            scale: 1.0,
            viewport_size: egui::Vec2::ZERO,
            show_grid: true,
        }
    }
}

/// The drag controller's state machine.
///
/// Exactly one variant is active at a time; any pointer release or cancel
/// returns to `Idle`. Grab offsets are in canvas space, captured at the
/// instant of pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No active pointer interaction.
    #[default]
    Idle,
    /// A monitor follows the pointer.
    DraggingMonitor {
        /// Id of the grabbed monitor.
        id: MonitorId,
        /// Canvas-space offset from the monitor's top-left to the grab point.
        grab_offset: egui::Vec2,
    },
    /// The keyboard overlay follows the pointer.
    DraggingKeyboard {
        /// Canvas-space offset from the keyboard's top-left to the grab point.
        grab_offset: egui::Vec2,
    },
    /// The canvas background is being panned.
    Panning {
        /// Screen position of the previous pointer sample.
        last_pos: egui::Pos2,
    },
    /// A two-finger pinch gesture is zooming the canvas.
    Pinching,
}

impl DragState {
    /// The placed object currently being dragged, if any.
    pub fn dragged_object(&self) -> Option<ObjectId> {
        match self {
            DragState::DraggingMonitor { id, .. } => Some(ObjectId::Monitor(*id)),
            DragState::DraggingKeyboard { .. } => Some(ObjectId::Keyboard),
            _ => None,
        }
    }
}

/// Pointer interaction and sidebar editing state.
#[derive(Default)]
pub struct InteractionState {
    /// Current drag controller state.
    pub drag: DragState,
    /// Monitor whose name is being edited in the sidebar, if any.
    pub renaming: Option<MonitorId>,
    /// Temporary storage for the name while editing.
    pub temp_name: String,
}

/// State of the add-monitor form (thin collaborator; validates positivity
/// before anything reaches the core).
pub struct FormState {
    /// Diagonal size in inches.
    pub diagonal: f32,
    /// Index into [`ASPECT_RATIO_PRESETS`].
    pub aspect_index: usize,
    /// Index into [`RESOLUTION_PRESETS`].
    pub resolution_index: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            diagonal: DIAGONAL_PRESETS[1],
            aspect_index: 0,
            resolution_index: 1,
        }
    }
}

impl FormState {
    /// The spec currently described by the form, or `None` if any quantity is
    /// non-positive.
    pub fn spec(&self) -> Option<MonitorSpec> {
        let (_, aw, ah) = ASPECT_RATIO_PRESETS[self.aspect_index];
        let (_, rw, rh) = RESOLUTION_PRESETS[self.resolution_index];
        let spec = MonitorSpec {
            diagonal: self.diagonal,
            aspect_ratio: AspectRatio { w: aw, h: ah },
            resolution: Resolution { w: rw, h: rh },
        };
        spec.is_valid().then_some(spec)
    }
}

/// The main application: the desk model plus all UI state.
#[derive(Default)]
pub struct DeskApp {
    /// The desk being arranged.
    pub desk: DeskSetup,
    /// Canvas navigation state.
    pub canvas: CanvasState,
    /// Pointer interaction state.
    pub interaction: InteractionState,
    /// Add-monitor form state.
    pub form: FormState,
}
