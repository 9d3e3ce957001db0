//! Interactive viewer for gravsim scenarios
//!
//! Draws every body and its trail, shows the timescale and scale in a HUD,
//! and reloads the scenario whenever the file changes on disk.

use crate::watch::{canonical_path, is_watched};
use eframe::egui;
use gravsim_core::units::{readable_elapsed_years, readable_scale, readable_timestep};
use gravsim_core::{load_simulation, Command, Simulation};
use log::{info, warn};
use notify::{Event, RecommendedWatcher, Watcher};
use std::path::PathBuf;
use std::sync::mpsc;

/// Per-frame multiplier for held Up/Down and Right/Left keys
const ADJUST_UP: f64 = 1.01;
const ADJUST_DOWN: f64 = 0.99;
/// Camera movement per frame for held W/A/S/D, in pixels
const PAN_STEP: f32 = 1.0;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(38, 38, 51);

/// Open the viewer window and block until it is closed
pub fn run(source_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "gravsim",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(source_path, cc)))),
    )?;
    Ok(())
}

pub struct ViewerApp {
    source_path: PathBuf,
    /// Canonical form of `source_path`, compared against watcher events
    watched_path: PathBuf,
    sim_opt: Option<Simulation>,
    last_load_error: Option<String>,
    playing: bool,
    /// Camera offset in screen pixels
    camera: egui::Vec2,
    last_delta: f32,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
}

impl ViewerApp {
    pub fn new(source_path: PathBuf, _cc: &eframe::CreationContext<'_>) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            // The receiver is gone once the window closes
            let _ = tx.send(res);
        })
        .ok();

        if let Some(ref mut w) = watcher {
            if let Err(e) = w.watch(&source_path, notify::RecursiveMode::NonRecursive) {
                warn!("not watching {}: {}", source_path.display(), e);
            }
        }

        let watched_path = canonical_path(&source_path);
        let mut app = Self {
            source_path,
            watched_path,
            sim_opt: None,
            last_load_error: None,
            playing: true,
            camera: egui::Vec2::ZERO,
            last_delta: 0.0,
            file_watcher: watcher,
            file_receiver: rx,
        };

        app.reload_simulation();

        app
    }

    fn reload_simulation(&mut self) {
        match load_simulation(&self.source_path) {
            Ok(sim) => {
                self.sim_opt = Some(sim);
                self.last_load_error = None;
            }
            Err(e) => {
                warn!("{}", e);
                self.last_load_error = Some(e.to_string());
                self.sim_opt = None;
            }
        }
    }

    fn check_file_changes(&mut self) {
        let mut needs_reload = false;
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_),
                    paths,
                    ..
                }) => {
                    if paths.iter().any(|p| is_watched(p, &self.watched_path)) {
                        needs_reload = true;
                    }
                }
                Ok(_) => {}
                Err(e) => warn!("file watcher error: {}", e),
            }
        }

        if needs_reload {
            info!("{} changed, reloading", self.source_path.display());
            self.reload_simulation();
        }
    }

    /// Translate held keys into simulation commands and camera movement
    fn handle_input(&mut self, ctx: &egui::Context) -> Vec<Command> {
        let mut commands = Vec::new();
        ctx.input(|i| {
            if i.key_pressed(egui::Key::R) {
                commands.push(Command::Report);
            }
            if i.key_down(egui::Key::ArrowDown) {
                commands.push(Command::ScaleTimestep(ADJUST_DOWN));
            }
            if i.key_down(egui::Key::ArrowUp) {
                commands.push(Command::ScaleTimestep(ADJUST_UP));
            }
            if i.key_down(egui::Key::ArrowRight) {
                commands.push(Command::ScaleDistance(ADJUST_UP));
            }
            if i.key_down(egui::Key::ArrowLeft) {
                commands.push(Command::ScaleDistance(ADJUST_DOWN));
            }
            if i.key_down(egui::Key::W) {
                self.camera.y += PAN_STEP;
            }
            if i.key_down(egui::Key::A) {
                self.camera.x -= PAN_STEP;
            }
            if i.key_down(egui::Key::S) {
                self.camera.y -= PAN_STEP;
            }
            if i.key_down(egui::Key::D) {
                self.camera.x += PAN_STEP;
            }
        });
        commands
    }

    fn draw_simulation(&self, ui: &egui::Ui, sim: &Simulation) {
        let rect = ui.max_rect();
        let painter = ui.painter();
        let center = rect.center();
        let scale = sim.distance_scale;
        let camera = self.camera;

        // world y points up, screen y points down
        let to_screen = |x: f64, y: f64| {
            center + egui::vec2((x / scale) as f32 - camera.x, -((y / scale) as f32 - camera.y))
        };

        for entry in sim.entries() {
            let points: Vec<egui::Pos2> = entry.trail.iter().map(|p| to_screen(p.x, p.y)).collect();
            let len = points.len();
            for (j, pair) in points.windows(2).enumerate() {
                let alpha = (255.0 * j as f32 / len as f32) as u8;
                painter.line_segment(
                    [pair[0], pair[1]],
                    egui::Stroke::new(2.0, egui::Color32::from_rgba_unmultiplied(128, 128, 128, alpha)),
                );
            }
        }

        for entry in sim.entries() {
            let body = &entry.body;
            let screen_pos = to_screen(body.pos.x, body.pos.y);
            let radius = ((body.radius.ln() / 50f64.ln()) as f32).max(1.0);

            painter.circle_filled(screen_pos, radius, egui::Color32::WHITE);
            painter.text(
                screen_pos + egui::vec2(0.0, -(radius + 10.0)),
                egui::Align2::CENTER_BOTTOM,
                &body.name,
                egui::FontId::default(),
                egui::Color32::WHITE,
            );
        }

        // 100 pixel scale bar
        let bar_start = rect.left_top() + egui::vec2(10.0, 60.0);
        painter.line_segment(
            [bar_start, bar_start + egui::vec2(100.0, 0.0)],
            egui::Stroke::new(1.0, egui::Color32::WHITE),
        );
    }

    fn draw_hud(&self, ui: &mut egui::Ui, sim: &Simulation) {
        ui.label(format!("Timescale: {}", readable_timestep(sim.timestep_scale())));
        ui.label(format!("Scale: {}", readable_scale(sim.distance_scale)));
        ui.add_space((ui.available_height() - 60.0).max(0.0));
        ui.label(format!("Time Elapsed: {}", readable_elapsed_years(sim.elapsed())));
        ui.label(format!("Delta: {:.5}s", self.last_delta));
        let fps = if self.last_delta > 0.0 { 1.0 / self.last_delta } else { 0.0 };
        ui.label(format!("FPS: {:.0}", fps));
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing;
                }
                if ui.button("⏮ Reset").clicked() {
                    self.reload_simulation();
                }
                ui.separator();
                if let Some(ref sim) = self.sim_opt {
                    ui.label(format!("{} ({} bodies)", sim.name, sim.len()));
                }
            });
        });

        let commands = self.handle_input(ctx);
        self.last_delta = ctx.input(|i| i.stable_dt);

        if self.playing {
            if let Some(ref mut sim) = self.sim_opt {
                // the clock clamps stalled frames
                sim.tick(self.last_delta as f64, &commands);
            }
        } else if let Some(ref mut sim) = self.sim_opt {
            for command in commands {
                sim.apply(command);
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(BACKGROUND))
            .show(ctx, |ui| {
                if let Some(ref sim) = self.sim_opt {
                    self.draw_simulation(ui, sim);
                    self.draw_hud(ui, sim);
                }

                if let Some(ref error) = self.last_load_error {
                    ui.vertical_centered(|ui| {
                        ui.add_space(ui.max_rect().height() * 0.4);
                        ui.label(
                            egui::RichText::new(format!("Error: {}", error))
                                .color(egui::Color32::RED)
                                .size(16.0),
                        );
                    });
                }
            });

        if self.playing {
            ctx.request_repaint();
        }
    }
}
