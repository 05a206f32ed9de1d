// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use deck_scrape::{
    config::{options::SourceKind, state::AppState},
    gui,
};
use eframe::egui::ViewportBuilder;
use log::LevelFilter;

fn main() {
    deck_scrape::log::init(LevelFilter::Info, false);

    let mut state = AppState::default();
    // optional first argument: directory of saved pages
    if let Some(dir) = std::env::args_os().nth(1) {
        state.options.source.kind = SourceKind::Snapshots(PathBuf::from(dir));
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        deck_scrape::loge!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
