// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rangebook pre-flop range chart core types.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod catalog;
pub mod filters;
pub mod ranges;

#[cfg(feature = "egui")]
pub mod charts;
