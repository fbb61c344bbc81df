// main.rs - Windowed Gray-Scott reaction-diffusion viewer

use eframe::egui;
use env_logger::Env;
use gray_scott::{Action, PRESETS, SimConfig, Simulation, SimulationControls};
use log::info;

mod settings; // JSON config loading
mod ui;       // Control panel, field painting and pointer seeding

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = settings::load_config();
    let app = GrayScottApp::new(config)?;
    let [width, height] = app.window_size();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        "Gray-Scott Reaction Diffusion",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("window closed with error: {err}"))
}

/// The simulation plus the view state the panel edits.
pub struct GrayScottApp {
    sim: Simulation,
    texture: Option<egui::TextureHandle>,
    frame_dirty: bool,

    pub selected_preset: usize,
    pub brush_radius: usize,
    pub zoom: f32,
}

impl GrayScottApp {
    pub fn new(config: SimConfig) -> gray_scott::Result<Self> {
        let selected_preset = PRESETS
            .iter()
            .position(|p| p.params == config.params)
            .unwrap_or(0);
        let sim = Simulation::new(config)?;

        Ok(Self {
            sim,
            texture: None,
            frame_dirty: true,
            selected_preset,
            brush_radius: 0,
            zoom: 1.0,
        })
    }

    fn window_size(&self) -> [f32; 2] {
        let cfg = self.sim.config();
        [
            (cfg.width as f32 + 40.0).max(720.0),
            (cfg.height as f32 + 220.0).max(480.0),
        ]
    }

    pub fn run_action(&mut self, action: Action) {
        self.sim.apply(action);
        if action == Action::Reset {
            self.frame_dirty = true;
        }
    }

    pub fn apply_selected_preset(&mut self) {
        if let Some(preset) = PRESETS.get(self.selected_preset) {
            info!("applying preset {}", preset.name);
            if self.sim.reconfigure(preset.params).is_ok() {
                self.frame_dirty = true;
            }
        }
    }

    /// Called once per rendered frame.
    pub fn tick(&mut self) {
        if self.sim.tick() {
            self.frame_dirty = true;
        }
    }
}
