// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Filter selections state.
use crate::catalog::{self, EFFECTIVE_STACKS};

/// The stack id with no 3-bet charts in the asset store.
pub const NO_LIMP_10BB: &str = "10bb-no-limp";

/// The filter selections driving the derived chart list.
///
/// Selections are ids into the [catalog] tables, `None` means unselected.
/// All mutations go through the setters so that dependent selections are
/// cleared when their catalog changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    /// The table game format.
    pub table_type: Option<&'static str>,
    /// The table seats variant.
    pub players: Option<&'static str>,
    /// The effective stack depth.
    pub effective_stack: Option<&'static str>,
    /// The hero seat position.
    pub my_position: Option<&'static str>,
    /// The opponent position for the vs RFI charts.
    pub opponent_rfi: Option<&'static str>,
    /// The opponent position for the vs 3-bet charts.
    pub opponent_3bet: Option<&'static str>,
    /// Clear both opponent selections on every position cycle.
    pub auto_reset_opponents: bool,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            table_type: Some("mtt"),
            players: Some("8max"),
            effective_stack: Some("100bb"),
            my_position: Some("btn"),
            opponent_rfi: None,
            opponent_3bet: None,
            auto_reset_opponents: true,
        }
    }
}

impl Filters {
    /// Selects the table game format.
    pub fn set_table_type(&mut self, id: Option<&'static str>) {
        self.table_type = id;
    }

    /// Selects the seats variant, clearing positions that may no longer be
    /// valid members of the new position list.
    pub fn set_players(&mut self, id: Option<&'static str>) {
        self.players = id;
        self.my_position = None;
        self.opponent_rfi = None;
        self.opponent_3bet = None;
    }

    /// Selects the effective stack.
    ///
    /// The 10bb no-limp stack has no 3-bet charts, selecting it clears the
    /// 3-bet opponent.
    pub fn set_effective_stack(&mut self, id: Option<&'static str>) {
        self.effective_stack = id;
        if self.three_bet_disabled() {
            self.opponent_3bet = None;
        }
    }

    /// Selects the hero position.
    pub fn set_my_position(&mut self, id: Option<&'static str>) {
        self.my_position = id;
    }

    /// Selects the vs RFI opponent position.
    pub fn set_opponent_rfi(&mut self, id: Option<&'static str>) {
        self.opponent_rfi = id;
    }

    /// Selects the vs 3-bet opponent position, ignored while the 3-bet
    /// selector is disabled.
    pub fn set_opponent_3bet(&mut self, id: Option<&'static str>) {
        if !self.three_bet_disabled() {
            self.opponent_3bet = id;
        }
    }

    /// Checks if the 3-bet opponent selector is disabled.
    pub fn three_bet_disabled(&self) -> bool {
        self.effective_stack == Some(NO_LIMP_10BB)
    }

    /// Restores the default selections keeping the auto reset toggle.
    pub fn reset(&mut self) {
        let auto_reset_opponents = self.auto_reset_opponents;
        *self = Self {
            auto_reset_opponents,
            ..Self::default()
        };
    }

    /// Cycles the hero position backward through the active position list.
    ///
    /// An unselected position jumps to the last entry, the first entry
    /// wraps around to the last. Both opponent selections are cleared when
    /// the auto reset toggle is on.
    pub fn next_position(&mut self) {
        let positions = catalog::positions(self.players);
        if positions.is_empty() {
            return;
        }

        let index = positions
            .iter()
            .position(|p| Some(p.id) == self.my_position);

        let next = match index {
            None => positions.len() - 1,
            Some(index) => (index + positions.len() - 1) % positions.len(),
        };

        self.my_position = Some(positions[next].id);

        if self.auto_reset_opponents {
            self.opponent_rfi = None;
            self.opponent_3bet = None;
        }
    }

    /// Cycles the effective stack forward to the next shorter stack,
    /// wrapping around to the deepest.
    pub fn next_stack(&mut self) {
        let index = self.stack_index();
        let next = match index {
            None => 0,
            Some(index) => (index + 1) % EFFECTIVE_STACKS.len(),
        };

        self.set_effective_stack(Some(EFFECTIVE_STACKS[next].id));
    }

    /// Cycles the effective stack backward to the next deeper stack,
    /// wrapping around to the shortest.
    pub fn prev_stack(&mut self) {
        let index = self.stack_index();
        let prev = match index {
            None => 0,
            Some(index) => (index + EFFECTIVE_STACKS.len() - 1) % EFFECTIVE_STACKS.len(),
        };

        self.set_effective_stack(Some(EFFECTIVE_STACKS[prev].id));
    }

    fn stack_index(&self) -> Option<usize> {
        EFFECTIVE_STACKS
            .iter()
            .position(|s| Some(s.id) == self.effective_stack)
    }
}
