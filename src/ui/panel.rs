//! Sidebar: the add-monitor form and the comparison list.
//!
//! Thin collaborators around the canvas engine. The form validates positivity
//! before anything reaches [`DeskSetup::add_monitor`]; the list is plain CRUD
//! over the monitor records.
//!
//! [`DeskSetup::add_monitor`]: crate::types::DeskSetup::add_monitor

use super::state::DeskApp;
use crate::constants::{ASPECT_RATIO_PRESETS, DIAGONAL_PRESETS, RESOLUTION_PRESETS};
use crate::types::{KeyboardMode, MonitorPatch};
use eframe::egui;

impl DeskApp {
    /// Draws the whole sidebar.
    pub fn draw_side_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Monitor Comparator");
        ui.add_space(8.0);

        self.draw_add_form(ui);
        ui.add_space(8.0);
        ui.separator();

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Comparison List").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.draw_keyboard_switch(ui);
            });
        });
        ui.add_space(4.0);
        self.draw_monitor_list(ui);
    }

    fn draw_add_form(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Diagonal");
            ui.add(
                egui::DragValue::new(&mut self.form.diagonal)
                    .speed(0.1)
                    .range(0.1..=200.0)
                    .suffix("\""),
            );
        });
        ui.horizontal(|ui| {
            for &preset in &DIAGONAL_PRESETS {
                if ui.small_button(format!("{preset}\"")).clicked() {
                    self.form.diagonal = preset;
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("Aspect");
            egui::ComboBox::from_id_salt("aspect_ratio")
                .selected_text(ASPECT_RATIO_PRESETS[self.form.aspect_index].0)
                .show_ui(ui, |ui| {
                    for (i, (name, _, _)) in ASPECT_RATIO_PRESETS.iter().enumerate() {
                        ui.selectable_value(&mut self.form.aspect_index, i, *name);
                    }
                });

            ui.label("Resolution");
            egui::ComboBox::from_id_salt("resolution")
                .selected_text(RESOLUTION_PRESETS[self.form.resolution_index].0)
                .show_ui(ui, |ui| {
                    for (i, (name, _, _)) in RESOLUTION_PRESETS.iter().enumerate() {
                        ui.selectable_value(&mut self.form.resolution_index, i, *name);
                    }
                });
        });

        // Only a validated spec ever reaches the core.
        let spec = self.form.spec();
        if ui
            .add_enabled(spec.is_some(), egui::Button::new("Add monitor"))
            .clicked()
        {
            if let Some(spec) = spec {
                self.desk.add_monitor(spec);
            }
        }
    }

    fn draw_keyboard_switch(&mut self, ui: &mut egui::Ui) {
        for mode in [
            KeyboardMode::FullSize,
            KeyboardMode::Compact,
            KeyboardMode::Hidden,
        ] {
            if ui
                .selectable_label(self.desk.keyboard_mode == mode, mode.label())
                .clicked()
            {
                self.desk.set_keyboard_mode(mode);
            }
        }
        ui.label("⌨");
    }

    fn draw_monitor_list(&mut self, ui: &mut egui::Ui) {
        let monitors = self.desk.monitors.clone();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for monitor in &monitors {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter().rect_filled(
                        rect,
                        2.0,
                        egui::Color32::from_rgb(
                            monitor.color[0],
                            monitor.color[1],
                            monitor.color[2],
                        ),
                    );

                    if self.interaction.renaming == Some(monitor.id) {
                        let edit = ui.text_edit_singleline(&mut self.interaction.temp_name);
                        if edit.lost_focus() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            let name = self.interaction.temp_name.trim();
                            if !name.is_empty() {
                                self.desk.rename_monitor(monitor.id, name);
                            }
                            self.interaction.renaming = None;
                        }
                    } else if ui
                        .label(egui::RichText::new(&monitor.name).strong())
                        .double_clicked()
                    {
                        self.interaction.renaming = Some(monitor.id);
                        self.interaction.temp_name = monitor.name.clone();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                            self.desk.delete_monitor(monitor.id);
                        }
                        if ui.small_button("⟳").on_hover_text("Rotate").clicked() {
                            self.desk.update_monitor(
                                monitor.id,
                                MonitorPatch {
                                    orientation: Some(monitor.orientation.toggled()),
                                    ..Default::default()
                                },
                            );
                        }
                        let eye = if monitor.visible { "👁" } else { "—" };
                        if ui.small_button(eye).on_hover_text("Show/hide").clicked() {
                            self.desk.update_monitor(
                                monitor.id,
                                MonitorPatch {
                                    visible: Some(!monitor.visible),
                                    ..Default::default()
                                },
                            );
                        }
                    });
                });
                ui.label(
                    egui::RichText::new(format!(
                        "{}\"  {}x{}  {:.0} ppi  {:.1}×{:.1} in",
                        monitor.diagonal,
                        monitor.resolution.w,
                        monitor.resolution.h,
                        monitor.ppi,
                        monitor.width_inches,
                        monitor.height_inches,
                    ))
                    .small()
                    .weak(),
                );
                ui.add_space(4.0);
            }
        });
    }
}
