//! User interface for the monitor comparator.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main `DeskApp`
//! - `canvas` - Viewport transforms, zooming, panning, and the drag controller
//! - `rendering` - Drawing monitors, the keyboard overlay, labels, and the grid
//! - `panel` - Add-monitor form and comparison list sidebar

mod canvas;
mod panel;
mod rendering;
mod state;


pub use state::{DeskApp, DragState};

use eframe::egui;

impl eframe::App for DeskApp {
    /// Main update function called by egui for each frame.
    ///
    /// Lays out the sidebar and the canvas, then draws the floating zoom
    /// controls in the bottom-right corner of the canvas.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("sidebar")
            .default_width(300.0)
            .show(ctx, |ui| {
                self.draw_side_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let canvas_rect = ui.max_rect();
            self.draw_canvas(ui);
            self.draw_zoom_controls(ctx, canvas_rect);
        });
    }
}

impl DeskApp {
    fn draw_zoom_controls(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        egui::Area::new(egui::Id::new("zoom_controls"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("＋").on_hover_text("Zoom in").clicked() {
                        self.zoom_in_step(canvas_rect);
                    }
                    if ui.button("－").on_hover_text("Zoom out").clicked() {
                        self.zoom_out_step(canvas_rect);
                    }
                    if ui.button("⟲").on_hover_text("Reset view").clicked() {
                        self.reset_view();
                    }
                    ui.checkbox(&mut self.canvas.show_grid, "grid");
                });
            });
    }
}
