//! Canvas rendering for monitors, the keyboard overlay and the desk grid.
//!
//! Objects are drawn in stack order (lowest first) so smaller monitors end up
//! on top. Labels render at constant screen size; where each label goes is
//! decided per object by the label placement rules.

use super::state::DeskApp;
use crate::constants::{GRID_DOT_RADIUS, GRID_DOT_SPACING, KEYBOARD_COLOR};
use crate::geometry::Rect;
use crate::label::{place_label, LabelPlacement};
use crate::types::{KeyboardMode, Monitor, ObjectId};
use eframe::egui;
use eframe::epaint::StrokeKind;

const DRAG_HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(0x00, 0xff, 0xff);
const LABEL_TEXT: egui::Color32 = egui::Color32::from_rgba_premultiplied(220, 220, 220, 220);
const LABEL_BACKDROP: egui::Color32 = egui::Color32::from_rgba_premultiplied(31, 41, 55, 230);

fn color32(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

impl DeskApp {
    /// Draws the whole canvas: grid, canvas bounds, monitors, keyboard.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        self.handle_canvas_input(ui, &response);

        if self.canvas.show_grid {
            self.draw_grid(&painter, response.rect);
        }
        self.draw_canvas_bounds(&painter);

        let obscured = self.desk.obscured_ids();

        let mut monitors: Vec<&Monitor> = self.desk.visible_monitors().collect();
        monitors.sort_by_key(|m| m.stack_order);
        for monitor in monitors {
            let dragging =
                self.interaction.drag.dragged_object() == Some(ObjectId::Monitor(monitor.id));
            let is_obscured = obscured.contains(&ObjectId::Monitor(monitor.id));
            self.draw_monitor(&painter, monitor, dragging, is_obscured);
        }

        if let Some(rect) = self.desk.keyboard_rect() {
            let dragging = self.interaction.drag.dragged_object() == Some(ObjectId::Keyboard);
            self.draw_keyboard(&painter, rect, dragging);
        }
    }

    /// Dotted desk grid, fixed in screen space but tracking the pan offset.
    fn draw_grid(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let spacing = GRID_DOT_SPACING;
        let dot = egui::Color32::from_gray(60);

        let offset_x = canvas_rect.left() + self.canvas.pan.x.rem_euclid(spacing);
        let offset_y = canvas_rect.top() + self.canvas.pan.y.rem_euclid(spacing);

        let cols = (canvas_rect.width() / spacing).ceil() as i32 + 1;
        let rows = (canvas_rect.height() / spacing).ceil() as i32 + 1;
        for row in 0..rows {
            for col in 0..cols {
                let pos = egui::pos2(
                    offset_x + col as f32 * spacing - spacing,
                    offset_y + row as f32 * spacing - spacing,
                );
                if canvas_rect.contains(pos) {
                    painter.circle_filled(pos, GRID_DOT_RADIUS, dot);
                }
            }
        }
    }

    /// Faint outline of the auto-sized canvas content area.
    fn draw_canvas_bounds(&self, painter: &egui::Painter) {
        let size = self.content_size();
        let rect = egui::Rect::from_min_max(
            self.canvas_to_screen(egui::Pos2::ZERO),
            self.canvas_to_screen(egui::pos2(size.x, size.y)),
        );
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(50)),
            StrokeKind::Inside,
        );
    }

    fn screen_rect(&self, rect: Rect) -> egui::Rect {
        egui::Rect::from_min_max(
            self.canvas_to_screen(egui::pos2(rect.left, rect.top)),
            self.canvas_to_screen(egui::pos2(rect.right(), rect.bottom())),
        )
    }

    fn draw_monitor(
        &self,
        painter: &egui::Painter,
        monitor: &Monitor,
        dragging: bool,
        obscured: bool,
    ) {
        let rect = self.screen_rect(monitor.rect());
        let border = if dragging {
            DRAG_HIGHLIGHT
        } else {
            color32(monitor.color)
        };

        painter.rect_filled(rect, 2.0, egui::Color32::from_black_alpha(128));
        painter.rect_stroke(rect, 2.0, egui::Stroke::new(2.0, border), StrokeKind::Inside);

        let text = format!(
            "{}\n{}\"\n{}x{}",
            monitor.name, monitor.diagonal, monitor.resolution.w, monitor.resolution.h
        );
        self.draw_label(painter, rect, &text, egui::FontId::proportional(10.0), obscured);
    }

    fn draw_keyboard(&self, painter: &egui::Painter, rect: Rect, dragging: bool) {
        let rect = self.screen_rect(rect);
        let border = if dragging {
            DRAG_HIGHLIGHT
        } else {
            color32(KEYBOARD_COLOR)
        };

        painter.rect_filled(rect, 2.0, egui::Color32::from_rgba_premultiplied(40, 40, 48, 200));
        painter.rect_stroke(rect, 2.0, egui::Stroke::new(2.0, border), StrokeKind::Inside);

        let text = match self.desk.keyboard_mode {
            KeyboardMode::FullSize => "100% Keyboard",
            KeyboardMode::Compact => "75% Keyboard",
            KeyboardMode::Hidden => return,
        };
        // The keyboard always stacks on top, so it is never obscured.
        self.draw_label(painter, rect, text, egui::FontId::monospace(10.0), false);
    }

    /// Lays out a label and draws it centered inside the object, or anchored
    /// outside above its top-left corner when it would not be legible inside.
    fn draw_label(
        &self,
        painter: &egui::Painter,
        object_rect: egui::Rect,
        text: &str,
        font: egui::FontId,
        obscured: bool,
    ) {
        let galley = painter.layout(text.to_owned(), font, LABEL_TEXT, f32::INFINITY);
        let text_size = galley.size();

        let placement = place_label(
            (text_size.x, text_size.y),
            (object_rect.width(), object_rect.height()),
            obscured,
        );
        match placement {
            LabelPlacement::InsideCentered => {
                let pos = object_rect.center() - text_size / 2.0;
                painter.galley(pos, galley, LABEL_TEXT);
            }
            LabelPlacement::OutsideAnchored => {
                let padding = egui::vec2(6.0, 4.0);
                let backdrop = egui::Rect::from_min_size(
                    object_rect.min - text_size - padding * 2.0 - egui::vec2(4.0, 4.0),
                    text_size + padding * 2.0,
                );
                painter.rect_filled(backdrop, 4.0, LABEL_BACKDROP);
                painter.galley(backdrop.min + padding, galley, LABEL_TEXT);
            }
        }
    }
}
