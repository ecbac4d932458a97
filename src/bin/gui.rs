// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use proposal_desk::config::state::GuiState;
use proposal_desk::gui;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let gui_defaults = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([
            gui_defaults.window_w as f32,
            gui_defaults.window_h as f32,
        ]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
