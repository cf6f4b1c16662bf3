// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rangebook pre-flop range chart GUI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod filter_view;
pub use filter_view::FilterView;

pub mod gate_view;
pub use gate_view::GateView;

pub mod gui;
pub use gui::{App, AppFrame, Config, View};
