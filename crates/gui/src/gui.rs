// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rangebook egui app implementation.
use eframe::egui::*;
use std::path::PathBuf;

use rangebook_core::charts::Charts;

use crate::gate_view::GateView;

/// App configuration parameters.
#[derive(Debug)]
pub struct Config {
    /// The directory containing the range chart assets.
    pub assets_dir: PathBuf,
}

/// The application state shared by all views.
pub struct App {
    /// The application configuration.
    pub config: Config,
    /// The chart textures cache.
    pub charts: Charts,
}

/// Traits for UI views.
pub trait View {
    /// Process a view update.
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame, app: &mut App);

    /// Returns the next view if any.
    fn next(
        &mut self,
        ctx: &Context,
        frame: &mut eframe::Frame,
        app: &mut App,
    ) -> Option<Box<dyn View>>;
}

/// The UI main frame.
pub struct AppFrame {
    app: App,
    panel: Box<dyn View>,
}

impl AppFrame {
    /// Creates a new App instance.
    pub fn new(config: Config, cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_theme(Theme::Dark);

        log::info!("Creating new app with config: {config:?}");

        let charts = Charts::new(&config.assets_dir);
        let app = App { config, charts };

        AppFrame {
            app,
            panel: Box::new(GateView::new(cc.storage)),
        }
    }
}

impl eframe::App for AppFrame {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        self.panel.update(ctx, frame, &mut self.app);

        if let Some(panel) = self.panel.next(ctx, frame, &mut self.app) {
            self.panel = panel;
            self.panel.update(ctx, frame, &mut self.app);
        }
    }
}
