// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Cli {
    /// The directory containing the range chart images.
    #[arg(long, short, default_value = "assets")]
    assets_dir: PathBuf,
    /// The configuration storage key.
    #[arg(long, short)]
    storage: Option<String>,
}

fn main() -> eframe::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let init_size = [1024.0, 768.0];
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(init_size)
            .with_min_inner_size(init_size)
            .with_title("Rangebook"),
        ..Default::default()
    };

    let cli = Cli::parse();

    let config = rangebook_gui::Config {
        assets_dir: cli.assets_dir,
    };

    let app_name = cli
        .storage
        .map(|s| format!("rangebook-{s}"))
        .unwrap_or_else(|| "rangebook".to_string());

    eframe::run_native(
        &app_name,
        native_options,
        Box::new(|cc| Ok(Box::new(rangebook_gui::AppFrame::new(config, cc)))),
    )
}
