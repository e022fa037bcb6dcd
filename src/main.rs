// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod cards;
mod charts;
mod config;
mod gui;
mod loader;
mod pitch;
mod types;
mod upload;
use std::sync::mpsc::channel;
use anyhow::anyhow;
use eframe::egui;
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let path = config::config_path();
    let config = config::load_from(&path).unwrap_or_else(|err| {
        log::warn!("{err}; falling back to defaults");
        config::ViewerConfig::default()
    });
    log::info!(
        "starting with {:?} renderer and {} card(s)",
        config.renderer,
        config.cards
    );
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 760.0])
        .with_min_inner_size([720.0, 480.0])
        .with_title("PitchScope");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "PitchScope",
        options,
        Box::new(move |cc| {
            let (tx, rx) = channel();
            let (tx_cmd, rx_cmd) = channel();
            // wake the UI as soon as a file has been read
            let ctx = cc.egui_ctx.clone();
            loader::spawn_thread(tx, rx_cmd, move || ctx.request_repaint());
            Box::new(gui::PitchScopeApp::new(config, tx_cmd, rx))
        }),
    )
    .map_err(|err| anyhow!("viewer exited with an error: {err}"))
}
