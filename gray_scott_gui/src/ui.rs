// ui.rs - Control panel, field painting and pointer seeding

use eframe::egui;
use egui::{Color32, ColorImage, Pos2, Rect, TextureOptions, Vec2};
use gray_scott::{Action, Frame, PRESETS};
use log::debug;

use crate::GrayScottApp;

impl eframe::App for GrayScottApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One generation per rendered frame while running
        self.tick();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Gray-Scott Reaction Diffusion");

            // Controls
            ui.horizontal(|ui| {
                if ui.button("▶ Play").clicked() {
                    self.run_action(Action::Play);
                }
                if ui.button("⏸ Pause").clicked() {
                    self.run_action(Action::Pause);
                }
                if ui.button("⏹ Reset").clicked() {
                    self.run_action(Action::Reset);
                }

                ui.separator();

                ui.label("Preset:");
                egui::ComboBox::from_id_source("preset_selector")
                    .selected_text(PRESETS[self.selected_preset].name)
                    .show_ui(ui, |ui| {
                        for (i, preset) in PRESETS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_preset, i, preset.name);
                        }
                    });

                if ui.button("Apply Preset").clicked() {
                    self.apply_selected_preset();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.sim.generation()));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Brush:");
                ui.add(egui::Slider::new(&mut self.brush_radius, 0..=20).suffix(" cells"));

                ui.separator();

                ui.label("Zoom:");
                ui.add(egui::Slider::new(&mut self.zoom, 1.0..=4.0).suffix("x"));
            });

            ui.separator();

            ui.label("Drag across the field to seed chemical B.");

            ui.separator();

            let texture_id = self.frame_texture(ctx);
            let (width, height) = (self.sim.config().width, self.sim.config().height);
            let size = Vec2::new(width as f32 * self.zoom, height as f32 * self.zoom);

            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            painter.image(
                texture_id,
                response.rect,
                Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );

            if response.clicked() || response.dragged() {
                if let Some(cell) = response
                    .interact_pointer_pos()
                    .and_then(|pos| screen_to_cell(pos, response.rect, self.zoom))
                {
                    if let Err(err) = self.sim.inject_seed_disc(cell.0, cell.1, self.brush_radius) {
                        debug!("ignored pointer seed: {err}");
                    }
                }
            }

            ui.separator();

            let (mean_a, mean_b) = self.sim.grid().mean_concentrations();
            let params = self.sim.params();
            ui.horizontal(|ui| {
                ui.label(format!("State: {:?}", self.sim.state()));
                ui.label(format!("Mean A: {mean_a:.3}"));
                ui.label(format!("Mean B: {mean_b:.3}"));
                ui.label(format!(
                    "dA: {:.3}  dB: {:.3}  f: {:.4}  k: {:.4}",
                    params.d_a, params.d_b, params.feed, params.kill
                ));
            });
        });

        if self.sim.is_running() {
            ctx.request_repaint();
        }
    }
}

impl GrayScottApp {
    /// Uploads the simulation frame when it changed and returns the texture to paint.
    fn frame_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        let texture = match self.texture.take() {
            Some(mut texture) => {
                if self.frame_dirty {
                    texture.set(frame_image(self.sim.frame()), TextureOptions::NEAREST);
                }
                texture
            }
            None => ctx.load_texture(
                "gray_scott_field",
                frame_image(self.sim.frame()),
                TextureOptions::NEAREST,
            ),
        };
        self.frame_dirty = false;

        let id = texture.id();
        self.texture = Some(texture);
        id
    }
}

fn frame_image(frame: &Frame) -> ColorImage {
    ColorImage::from_rgba_unmultiplied([frame.width, frame.height], &frame.pixels)
}

/// Grid cell under a screen position, or `None` above or left of the field.
/// Cells past the right or bottom edge are left for the simulation to reject.
pub fn screen_to_cell(pos: Pos2, field: Rect, zoom: f32) -> Option<(usize, usize)> {
    let rel = pos - field.min;
    if rel.x < 0.0 || rel.y < 0.0 || zoom <= 0.0 {
        return None;
    }
    Some(((rel.x / zoom).floor() as usize, (rel.y / zoom).floor() as usize))
}
