mod config;
mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use storage::MemorySessionStore;

use crate::config::{load_settings, Args};
use crate::ui::TaskListApp;

const MIN_WINDOW_SIZE: [f32; 2] = [360.0, 420.0];

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let loaded = load_settings(&args);
    let settings = loaded.settings;

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();
    for warning in &loaded.warnings {
        tracing::warn!("config: {warning}");
    }
    tracing::info!(
        title = %settings.window_title,
        filter = %settings.initial_filter,
        "starting task list"
    );

    // Lives as long as the process; nothing is written to disk.
    let store = MemorySessionStore::new();
    let app = TaskListApp::new(store, &settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
