// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Range filters and charts view.
use eframe::egui::*;

use rangebook_core::{
    catalog::{self, EFFECTIVE_STACKS, PLAYER_COUNTS, TABLE_TYPES},
    filters::Filters,
    ranges::{self, RangeResult},
};

use crate::{
    gate_view::GateView,
    gui::{App, View},
};

/// Range filters view.
pub struct FilterView {
    filters: Filters,
    ranges: Vec<RangeResult>,
    logout: bool,
}

impl View for FilterView {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame, app: &mut App) {
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                let mut changed = false;

                self.paint_header(ui, &mut changed);
                ui.add_space(10.0);

                ui.group(|ui| {
                    changed |= self.paint_filters(ui);
                });

                if !self.ranges.is_empty() {
                    ui.add_space(10.0);
                    changed |= self.paint_nav_controls(ui);
                }

                if changed {
                    self.ranges = ranges::derive_ranges(&self.filters);
                    app.charts.sync(&self.ranges);
                }

                ui.add_space(10.0);
                self.paint_ranges(ui, app);
            });
        });
    }

    fn next(
        &mut self,
        _ctx: &Context,
        frame: &mut eframe::Frame,
        _app: &mut App,
    ) -> Option<Box<dyn View>> {
        if self.logout {
            if let Some(storage) = frame.storage_mut() {
                GateView::forget(storage);
            }

            Some(Box::new(GateView::default()))
        } else {
            None
        }
    }
}

impl Default for FilterView {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterView {
    const TEXT_FONT: FontId = FontId::new(15.0, FontFamily::Monospace);
    const TITLE_FONT: FontId = FontId::new(18.0, FontFamily::Monospace);
    const PATH_FONT: FontId = FontId::new(13.0, FontFamily::Monospace);
    const TITLE_COLOR: Color32 = Color32::from_rgb(20, 150, 20);
    const CHART_SIZE: Vec2 = vec2(440.0, 440.0);

    /// Creates a new [FilterView] with the default selections.
    pub fn new() -> Self {
        let filters = Filters::default();
        let ranges = ranges::derive_ranges(&filters);

        Self {
            filters,
            ranges,
            logout: false,
        }
    }

    fn paint_header(&mut self, ui: &mut Ui, changed: &mut bool) {
        ui.horizontal(|ui| {
            ui.heading("Pre-Flop Ranges");

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Logout").clicked() {
                    self.logout = true;
                }

                if ui.button("Reset All").clicked() {
                    self.filters.reset();
                    *changed = true;
                }
            });
        });
    }

    fn paint_filters(&mut self, ui: &mut Ui) -> bool {
        let mut changed = false;

        Grid::new("filters_grid")
            .num_columns(2)
            .spacing([40.0, 8.0])
            .show(ui, |ui| {
                let table_types: Vec<_> =
                    TABLE_TYPES.iter().map(|t| (t.id, t.label)).collect();
                if let Some(selection) =
                    filter_select(ui, "Table Type", &table_types, self.filters.table_type, true)
                {
                    self.filters.set_table_type(selection);
                    changed = true;
                }

                let player_counts: Vec<_> =
                    PLAYER_COUNTS.iter().map(|p| (p.id, p.label)).collect();
                if let Some(selection) =
                    filter_select(ui, "Players", &player_counts, self.filters.players, true)
                {
                    self.filters.set_players(selection);
                    changed = true;
                }

                let stacks: Vec<_> =
                    EFFECTIVE_STACKS.iter().map(|s| (s.id, s.label)).collect();
                if let Some(selection) =
                    filter_select(ui, "Stack Size", &stacks, self.filters.effective_stack, true)
                {
                    self.filters.set_effective_stack(selection);
                    changed = true;
                }

                let positions: Vec<_> = catalog::positions(self.filters.players)
                    .iter()
                    .map(|p| (p.id, p.label))
                    .collect();
                if let Some(selection) =
                    filter_select(ui, "My Position", &positions, self.filters.my_position, true)
                {
                    self.filters.set_my_position(selection);
                    changed = true;
                }

                let rfi_positions: Vec<_> =
                    catalog::opponent_rfi_positions(self.filters.players)
                        .iter()
                        .map(|p| (p.id, p.label))
                        .collect();
                if let Some(selection) =
                    filter_select(ui, "vs RFI", &rfi_positions, self.filters.opponent_rfi, true)
                {
                    self.filters.set_opponent_rfi(selection);
                    changed = true;
                }

                if let Some(selection) = filter_select(
                    ui,
                    "vs 3-Bet",
                    &positions,
                    self.filters.opponent_3bet,
                    !self.filters.three_bet_disabled(),
                ) {
                    self.filters.set_opponent_3bet(selection);
                    changed = true;
                }
            });

        changed
    }

    fn paint_nav_controls(&mut self, ui: &mut Ui) -> bool {
        let mut changed = false;

        ui.horizontal(|ui| {
            if ui.button("Next Position").clicked() {
                self.filters.next_position();
                changed = true;
            }

            if ui.button("Stack Up").clicked() {
                self.filters.prev_stack();
                changed = true;
            }

            if ui.button("Stack Down").clicked() {
                self.filters.next_stack();
                changed = true;
            }

            let toggle_label = if self.filters.auto_reset_opponents {
                "Reset opponents"
            } else {
                "Keep opponents"
            };
            ui.checkbox(&mut self.filters.auto_reset_opponents, toggle_label);

            let stack_label = self
                .filters
                .effective_stack
                .and_then(|id| EFFECTIVE_STACKS.iter().find(|s| s.id == id))
                .map(|s| s.label)
                .unwrap_or("-");

            ui.label(
                RichText::new(stack_label)
                    .font(Self::TEXT_FONT)
                    .color(Self::TITLE_COLOR)
                    .strong(),
            );
        });

        changed
    }

    fn paint_ranges(&self, ui: &mut Ui, app: &mut App) {
        if self.ranges.is_empty() {
            ui.vertical_centered(|ui| {
                ui.group(|ui| {
                    ui.add_space(30.0);
                    ui.label(
                        RichText::new("No range pictures available for the selected filters.")
                            .font(Self::TEXT_FONT),
                    );
                    ui.label("Select your position and opponents to see the ranges.");
                    ui.add_space(30.0);
                });
            });

            return;
        }

        Grid::new("ranges_grid")
            .num_columns(2)
            .spacing([16.0, 16.0])
            .show(ui, |ui| {
                for (idx, range) in self.ranges.iter().enumerate() {
                    Self::paint_range(ui, app, range);

                    if idx % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    }

    fn paint_range(ui: &mut Ui, app: &mut App, range: &RangeResult) {
        ui.group(|ui| {
            ui.set_min_width(Self::CHART_SIZE.x);

            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&range.title)
                        .font(Self::TITLE_FONT)
                        .color(Self::TITLE_COLOR),
                );

                if let Some(description) = &range.description {
                    ui.label(description);
                }

                ui.separator();

                match app.charts.get(ui.ctx(), range) {
                    Some(texture) => {
                        ui.add(
                            Image::new(&texture)
                                .corner_radius(5.0)
                                .max_size(Self::CHART_SIZE),
                        );
                    }
                    None => Self::paint_placeholder(ui, range),
                }
            });
        });
    }

    /// Per entry fallback, shows the unresolved path for diagnosis.
    fn paint_placeholder(ui: &mut Ui, range: &RangeResult) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);

            ui.label(
                RichText::new("Range chart not available")
                    .font(Self::TEXT_FONT)
                    .strong(),
            );

            ui.add_space(10.0);
            ui.label(
                RichText::new(&range.image_path)
                    .font(Self::PATH_FONT)
                    .color(Color32::LIGHT_GRAY),
            );

            ui.add_space(40.0);
        });
    }
}

/// A labelled dropdown over catalog entries, the first entry unselects.
///
/// Returns the new selection when it changed this frame.
fn filter_select(
    ui: &mut Ui,
    label: &str,
    options: &[(&'static str, &'static str)],
    current: Option<&'static str>,
    enabled: bool,
) -> Option<Option<&'static str>> {
    let mut selection = current;

    ui.label(RichText::new(label).font(FilterView::TEXT_FONT));

    let selected_text = current
        .and_then(|id| options.iter().find(|(option_id, _)| *option_id == id))
        .map(|(_, label)| *label)
        .unwrap_or("-");

    ui.add_enabled_ui(enabled, |ui| {
        ComboBox::from_id_salt(label)
            .width(200.0)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selection, None, "-");

                for (id, option_label) in options {
                    ui.selectable_value(&mut selection, Some(*id), *option_label);
                }
            });
    });

    ui.end_row();

    (selection != current).then_some(selection)
}
