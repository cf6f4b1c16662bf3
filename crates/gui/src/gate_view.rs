// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Access gate dialog view.
use eframe::egui::*;

use crate::{
    filter_view::FilterView,
    gui::{App, View},
};

/// The storage key for the authenticated flag.
const AUTH_KEY: &str = "rangebook-authenticated";

/// The shared access phrase, a cosmetic deterrent and not a security
/// boundary, anyone with the binary can read it.
const ACCESS_PHRASE: &str = "pangpond";

/// Access gate view.
#[derive(Default)]
pub struct GateView {
    phrase: String,
    error: Option<String>,
    authenticated: bool,
}

impl GateView {
    /// Creates a new gate view, skipping the prompt if a previous run
    /// stored the authenticated flag.
    pub fn new(storage: Option<&dyn eframe::Storage>) -> Self {
        let authenticated = storage
            .and_then(|s| eframe::get_value(s, AUTH_KEY))
            .unwrap_or(false);

        Self {
            authenticated,
            ..Self::default()
        }
    }

    /// Clears the stored authenticated flag.
    pub fn forget(storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, AUTH_KEY, &false);
    }

    fn check_phrase(&mut self, frame: &mut eframe::Frame) {
        if self.phrase == ACCESS_PHRASE {
            self.error = None;
            self.authenticated = true;

            if let Some(storage) = frame.storage_mut() {
                eframe::set_value(storage, AUTH_KEY, &true);
            }
        } else {
            self.error = Some("Incorrect access phrase, try again".to_string());
            self.phrase.clear();
        }
    }
}

impl View for GateView {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame, _app: &mut App) {
        if self.authenticated {
            return;
        }

        Window::new("Rangebook")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_TOP, vec2(0.0, 180.0))
            .show(ctx, |ui| {
                ui.label("Enter the access phrase");

                let response = ui.add(
                    TextEdit::singleline(&mut self.phrase)
                        .password(true)
                        .hint_text("Access phrase..."),
                );

                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                ui.add_space(5.0);

                if ui.button("Unlock").clicked() || submitted {
                    self.check_phrase(frame);
                }

                if let Some(error) = &self.error {
                    ui.add_space(5.0);
                    ui.colored_label(Color32::RED, error);
                }
            });
    }

    fn next(
        &mut self,
        _ctx: &Context,
        _frame: &mut eframe::Frame,
        _app: &mut App,
    ) -> Option<Box<dyn View>> {
        self.authenticated
            .then(|| Box::new(FilterView::new()) as Box<dyn View>)
    }
}
