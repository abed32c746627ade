// ui.rs - Buttons, canvas and activity log for the grid demo

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Vec2};

use crate::{GridDemo, renderer};

impl eframe::App for GridDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        let now = Instant::now();
        self.tick(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Double-buffered Game of Life");

            // Controls
            ui.horizontal(|ui| {
                if ui.button("Frame +").clicked() {
                    self.next_frame();
                }

                let auto_text = if self.driver.is_running() { "⏸ Auto" } else { "▶ Auto" };
                if ui.button(auto_text).clicked() {
                    self.toggle_loop(Instant::now());
                }

                if ui.button("⏹ Reset").clicked() {
                    self.reset();
                }

                ui.separator();

                ui.label(format!("Step: {}", self.stepper.step_count()));
                ui.label(format!("Reading buffer {}", if self.stepper.current_index() == 0 { 'A' } else { 'B' }));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Interval:");
                let mut ms = self.driver.interval().as_millis() as u64;
                if ui.add(egui::Slider::new(&mut ms, 50..=2000).suffix(" ms")).changed() {
                    self.driver.set_interval(Duration::from_millis(ms));
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Clear:");
                ui.color_edit_button_srgba(&mut self.clear_color);
            });

            ui.separator();

            // Canvas
            let side = ui.available_width().min(512.0);
            let (response, painter) = ui.allocate_painter(Vec2::splat(side), egui::Sense::hover());
            renderer::paint_grid(
                &painter,
                response.rect,
                self.display.grid(),
                self.live_color,
                self.clear_color,
            );

            ui.separator();

            if let Some(grid) = self.display.grid() {
                let live = grid.live_count();
                let total = grid.len();
                let shown = self.display.step().unwrap_or_default();
                ui.horizontal(|ui| {
                    ui.label(format!("Showing step {}", shown));
                    ui.label(format!("Live cells: {}", live));
                    ui.label(format!("Dead cells: {}", total - live));
                    ui.label(format!("Population: {:.1}%", (live as f32 / total as f32) * 100.0));
                });
                ui.separator();
            }

            // Activity log, newest last
            ui.label(format!("Log ({} entries)", self.activity.len()));
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for entry in self.activity.entries() {
                        let color = if entry.contains("ERR:") { Color32::LIGHT_RED } else { Color32::GRAY };
                        ui.colored_label(color, entry);
                    }
                });
        });

        // Wake up for the next loop frame
        if let Some(wait) = self.driver.time_until_due(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
