//! Canvas navigation and the drag controller.
//!
//! Owns the screen↔canvas coordinate transform, wheel/pinch zooming anchored
//! at the pointer, background panning, canvas auto-sizing, and the pointer
//! state machine that routes drags through the snap engine. The egui glue at
//! the bottom only translates raw input into the explicit pointer/zoom
//! methods, so any event source can drive the controller.

use super::state::{DeskApp, DragState};
use crate::constants::{
    BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT, CANVAS_PADDING, DEFAULT_PAN, MAX_ZOOM, MIN_ZOOM,
    SNAP_THRESHOLD, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
};
use crate::snap::snap;
use crate::types::{MonitorPatch, ObjectId};
use eframe::egui;

impl DeskApp {
    /// Converts screen coordinates to canvas-space coordinates.
    pub fn screen_to_canvas(&self, screen_pos: egui::Pos2) -> egui::Pos2 {
        (screen_pos - self.canvas.pan) / self.canvas.scale
    }

    /// Converts canvas-space coordinates to screen coordinates.
    pub fn canvas_to_screen(&self, canvas_pos: egui::Pos2) -> egui::Pos2 {
        canvas_pos * self.canvas.scale + self.canvas.pan
    }

    /// Records the viewport size observed from the host container.
    pub fn set_viewport_size(&mut self, size: egui::Vec2) {
        self.canvas.viewport_size = size;
    }

    /// Canvas content size: large enough for every visible object plus the
    /// padding margin, and never smaller than the visible viewport.
    pub fn content_size(&self) -> egui::Vec2 {
        let (extent_x, extent_y) = self.desk.content_extent();
        egui::vec2(
            (self.canvas.viewport_size.x / self.canvas.scale).max(extent_x + CANVAS_PADDING),
            (self.canvas.viewport_size.y / self.canvas.scale).max(extent_y + CANVAS_PADDING),
        )
    }

    /// Multiplies the zoom scale by `factor`, anchored at a screen position.
    ///
    /// The pan offset is recomputed so the canvas point under the anchor stays
    /// visually stationary. The scale is clamped to the configured range.
    pub fn zoom_by(&mut self, factor: f32, anchor: egui::Pos2) {
        let old_scale = self.canvas.scale;
        let new_scale = (old_scale * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_scale - old_scale).abs() <= f32::EPSILON {
            return;
        }

        let anchor = anchor.to_vec2();
        self.canvas.pan = anchor - (anchor - self.canvas.pan) * (new_scale / old_scale);
        self.canvas.scale = new_scale;
    }

    /// Applies a single-notch wheel zoom at the pointer position.
    pub fn wheel_zoom(&mut self, scroll_delta: f32, pointer: egui::Pos2) {
        if scroll_delta == 0.0 {
            return;
        }
        let factor = if scroll_delta > 0.0 {
            WHEEL_ZOOM_IN
        } else {
            WHEEL_ZOOM_OUT
        };
        self.zoom_by(factor, pointer);
    }

    /// Applies a pinch zoom given the ratio of successive pinch distances,
    /// anchored at the touch midpoint.
    pub fn pinch_zoom(&mut self, distance_ratio: f32, center: egui::Pos2) {
        if distance_ratio > 0.0 && distance_ratio.is_finite() {
            self.zoom_by(distance_ratio, center);
        }
    }

    /// Restores the default view (scale 1.0, initial pan).
    pub fn reset_view(&mut self) {
        self.canvas.scale = 1.0;
        self.canvas.pan = egui::vec2(DEFAULT_PAN.0, DEFAULT_PAN.1);
    }

    /// Finds the topmost visible object at a canvas-space position.
    pub fn find_object_at(&self, canvas_pos: egui::Pos2) -> Option<ObjectId> {
        let mut objects = self.desk.stacked_rects();
        objects.sort_by(|a, b| b.stack_order.cmp(&a.stack_order));
        objects
            .iter()
            .find(|o| {
                canvas_pos.x >= o.rect.left
                    && canvas_pos.x <= o.rect.right()
                    && canvas_pos.y >= o.rect.top
                    && canvas_pos.y <= o.rect.bottom()
            })
            .map(|o| o.id)
    }

    /// Pointer-down: grabs the object under the pointer, or starts panning on
    /// empty background.
    pub fn pointer_down(&mut self, screen_pos: egui::Pos2) {
        if self.interaction.drag != DragState::Idle {
            return;
        }

        let canvas_pos = self.screen_to_canvas(screen_pos);
        match self.find_object_at(canvas_pos) {
            Some(ObjectId::Monitor(id)) => {
                // object_rect is Some for anything find_object_at returned
                if let Some(rect) = self.desk.object_rect(ObjectId::Monitor(id)) {
                    self.interaction.drag = DragState::DraggingMonitor {
                        id,
                        grab_offset: canvas_pos - egui::pos2(rect.left, rect.top),
                    };
                }
            }
            Some(ObjectId::Keyboard) => {
                let (x, y) = self.desk.keyboard_position;
                self.interaction.drag = DragState::DraggingKeyboard {
                    grab_offset: canvas_pos - egui::pos2(x, y),
                };
            }
            None => {
                self.interaction.drag = DragState::Panning {
                    last_pos: screen_pos,
                };
            }
        }
    }

    /// Pointer-move: commits a new position for the grabbed object (snapped
    /// against all other visible objects), or pans the canvas.
    pub fn pointer_move(&mut self, screen_pos: egui::Pos2) {
        match self.interaction.drag {
            DragState::Idle | DragState::Pinching => {}
            DragState::DraggingMonitor { id, grab_offset } => {
                // The monitor may have been deleted or hidden mid-drag; end
                // the session quietly.
                let Some(rect) = self.desk.object_rect(ObjectId::Monitor(id)) else {
                    self.interaction.drag = DragState::Idle;
                    return;
                };

                let candidate = self.screen_to_canvas(screen_pos) - grab_offset;
                let targets = self.desk.snap_targets(ObjectId::Monitor(id));
                let position = snap(
                    (candidate.x, candidate.y),
                    rect.width,
                    rect.height,
                    &targets,
                    SNAP_THRESHOLD,
                );
                if !self.desk.update_monitor(
                    id,
                    MonitorPatch {
                        position: Some(position),
                        ..Default::default()
                    },
                ) {
                    self.interaction.drag = DragState::Idle;
                }
            }
            DragState::DraggingKeyboard { grab_offset } => {
                let Some(rect) = self.desk.keyboard_rect() else {
                    self.interaction.drag = DragState::Idle;
                    return;
                };

                let candidate = self.screen_to_canvas(screen_pos) - grab_offset;
                let targets = self.desk.snap_targets(ObjectId::Keyboard);
                let position = snap(
                    (candidate.x, candidate.y),
                    rect.width,
                    rect.height,
                    &targets,
                    SNAP_THRESHOLD,
                );
                self.desk.set_keyboard_position(position);
            }
            DragState::Panning { last_pos } => {
                self.canvas.pan += screen_pos - last_pos;
                self.interaction.drag = DragState::Panning {
                    last_pos: screen_pos,
                };
            }
        }
    }

    /// Pointer-up or pointer-cancel: ends any active drag session. The object
    /// stays wherever the last committed move placed it.
    pub fn pointer_up(&mut self) {
        self.interaction.drag = DragState::Idle;
    }

    /// Translates egui input on the canvas widget into controller events.
    pub fn handle_canvas_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        self.set_viewport_size(response.rect.size());

        // Two-finger pinch takes precedence over single-pointer handling.
        if let Some(touch) = ui.input(|i| i.multi_touch()) {
            self.interaction.drag = DragState::Pinching;
            self.pinch_zoom(touch.zoom_delta, touch.center_pos);
            return;
        } else if self.interaction.drag == DragState::Pinching {
            self.interaction.drag = DragState::Idle;
        }

        // Wheel zoom, anchored at the hover position, only over the canvas.
        let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll_delta != 0.0 {
            if let Some(pointer) = ui.input(|i| i.pointer.hover_pos()) {
                if response.rect.contains(pointer) {
                    self.wheel_zoom(scroll_delta, pointer);
                }
            }
        }

        let primary_down = ui.input(|i| i.pointer.primary_down());
        if primary_down {
            if let Some(pointer) = response.interact_pointer_pos() {
                if self.interaction.drag == DragState::Idle {
                    self.pointer_down(pointer);
                } else {
                    self.pointer_move(pointer);
                }
            }
        } else if self.interaction.drag != DragState::Idle {
            self.pointer_up();
        }
    }

    /// Zooms in one toolbar step, anchored at the viewport center.
    pub fn zoom_in_step(&mut self, canvas_rect: egui::Rect) {
        self.zoom_by(BUTTON_ZOOM_IN, canvas_rect.center());
    }

    /// Zooms out one toolbar step, anchored at the viewport center.
    pub fn zoom_out_step(&mut self, canvas_rect: egui::Rect) {
        self.zoom_by(BUTTON_ZOOM_OUT, canvas_rect.center());
    }
}
