// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Folio Desktop
//!
//! A personal portfolio presented as a simulated desktop: a menu bar, a
//! profile sidebar, a node canvas of cards per section and a magnifying dock.

mod app;
mod config;
mod icons;
mod io;
mod layout;
mod models;
mod state;
mod ui;
mod util;

use anyhow::Result;
use app::PortfolioApp;
use config::AppConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config_path = AppConfig::locate(std::env::args());
    let config = AppConfig::load_or_default(config_path.as_deref());
    let data = io::loader::load_portfolio(&config.data_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([960.0, 640.0])
            .with_title("Portfolio"),
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio",
        options,
        Box::new(|_cc| Ok(Box::new(PortfolioApp::new(config, data)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
