// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Static filter catalogs.
//!
//! Every selector in the UI is backed by one of these tables; filter
//! selections hold ids into them. The position tables are keyed by player
//! count, with a generic list used while no player count is selected.

/// A table game format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableType {
    /// The catalog id.
    pub id: &'static str,
    /// The asset naming code.
    pub name: &'static str,
    /// The label shown in the UI.
    pub label: &'static str,
}

/// A table seats variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCount {
    /// The catalog id.
    pub id: &'static str,
    /// The number of seats.
    pub count: u8,
    /// The label shown in the UI.
    pub label: &'static str,
}

/// An effective stack depth in big blinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveStack {
    /// The catalog id.
    pub id: &'static str,
    /// The blinds description.
    pub blinds: &'static str,
    /// The label shown in the UI.
    pub label: &'static str,
}

/// A seat position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// The catalog id.
    pub id: &'static str,
    /// The asset naming code.
    pub name: &'static str,
    /// The label shown in the UI.
    pub label: &'static str,
}

/// The table game formats.
pub const TABLE_TYPES: &[TableType] = &[
    TableType {
        id: "cash",
        name: "cash",
        label: "Cash",
    },
    TableType {
        id: "mtt",
        name: "mtt",
        label: "MTT",
    },
];

/// The table seats variants.
pub const PLAYER_COUNTS: &[PlayerCount] = &[
    PlayerCount {
        id: "6max",
        count: 6,
        label: "6-Max",
    },
    PlayerCount {
        id: "8max",
        count: 8,
        label: "8-Max",
    },
    PlayerCount {
        id: "9max",
        count: 9,
        label: "9-Max",
    },
];

/// The effective stacks ordered from deepest to shortest.
///
/// Stack cycling follows this order, the no-limp stacks have no 3-bet
/// charts in the asset store.
pub const EFFECTIVE_STACKS: &[EffectiveStack] = &[
    EffectiveStack {
        id: "100bb",
        blinds: "100bb",
        label: "100bb",
    },
    EffectiveStack {
        id: "60bb",
        blinds: "60bb",
        label: "60bb",
    },
    EffectiveStack {
        id: "50bb",
        blinds: "50bb",
        label: "50bb",
    },
    EffectiveStack {
        id: "40bb",
        blinds: "40bb",
        label: "40bb",
    },
    EffectiveStack {
        id: "30bb",
        blinds: "30bb",
        label: "30bb",
    },
    EffectiveStack {
        id: "20bb-no-limp",
        blinds: "20bb (No limp)",
        label: "20bb (No limp)",
    },
    EffectiveStack {
        id: "10bb-no-limp",
        blinds: "10 (No limp)",
        label: "10 (No limp)",
    },
];

/// The seat positions used while no player count is selected.
pub const POSITIONS: &[Position] = &[
    Position {
        id: "utg",
        name: "utg",
        label: "UTG",
    },
    Position {
        id: "utg1",
        name: "utg1",
        label: "UTG1",
    },
    Position {
        id: "mp",
        name: "mp",
        label: "MP",
    },
    Position {
        id: "mp1",
        name: "mp1-hj",
        label: "MP1 (HJ)",
    },
    Position {
        id: "co",
        name: "co",
        label: "CO",
    },
    Position {
        id: "btn",
        name: "btn",
        label: "BTN",
    },
    Position {
        id: "sb",
        name: "sb",
        label: "SB",
    },
    Position {
        id: "bb",
        name: "bb",
        label: "BB",
    },
];

/// The seat positions at a 6-max table.
pub const POSITIONS_6MAX: &[Position] = &[
    Position {
        id: "utg",
        name: "utg",
        label: "UTG",
    },
    Position {
        id: "mp",
        name: "mp-hj",
        label: "MP (HJ)",
    },
    Position {
        id: "co",
        name: "co",
        label: "CO",
    },
    Position {
        id: "btn",
        name: "btn",
        label: "BTN",
    },
    Position {
        id: "sb",
        name: "sb",
        label: "SB",
    },
    Position {
        id: "bb",
        name: "bb",
        label: "BB",
    },
];

/// The seat positions at an 8-max table.
pub const POSITIONS_8MAX: &[Position] = &[
    Position {
        id: "utg",
        name: "utg",
        label: "UTG",
    },
    Position {
        id: "utg1",
        name: "utg1",
        label: "UTG1",
    },
    Position {
        id: "mp",
        name: "mp-lj",
        label: "MP (LJ)",
    },
    Position {
        id: "mp1",
        name: "mp1-hj",
        label: "MP1 (HJ)",
    },
    Position {
        id: "co",
        name: "co",
        label: "CO",
    },
    Position {
        id: "btn",
        name: "btn",
        label: "BTN",
    },
    Position {
        id: "sb",
        name: "sb",
        label: "SB",
    },
    Position {
        id: "bb",
        name: "bb",
        label: "BB",
    },
];

/// The seat positions at a 9-max table.
pub const POSITIONS_9MAX: &[Position] = &[
    Position {
        id: "utg",
        name: "utg",
        label: "UTG",
    },
    Position {
        id: "utg1",
        name: "utg1",
        label: "UTG1",
    },
    Position {
        id: "mp",
        name: "mp",
        label: "MP",
    },
    Position {
        id: "mp1",
        name: "mp1-lj",
        label: "MP1 (LJ)",
    },
    Position {
        id: "mp2",
        name: "mp2-hj",
        label: "MP2 (HJ)",
    },
    Position {
        id: "co",
        name: "co",
        label: "CO",
    },
    Position {
        id: "btn",
        name: "btn",
        label: "BTN",
    },
    Position {
        id: "sb",
        name: "sb",
        label: "SB",
    },
    Position {
        id: "bb",
        name: "bb",
        label: "BB",
    },
];

/// The small blind limp sentinel.
///
/// Not a real seat, it selects the limp variant of the small blind RFI
/// charts and maps to a filename suffix rather than a seat code.
pub const SB_LIMP: Position = Position {
    id: "sb-limp",
    name: "sb-limp",
    label: "SB (Limp)",
};

/// Returns the ordered seat positions for a player count.
pub fn positions(players: Option<&str>) -> &'static [Position] {
    match players {
        Some("6max") => POSITIONS_6MAX,
        Some("8max") => POSITIONS_8MAX,
        Some("9max") => POSITIONS_9MAX,
        _ => POSITIONS,
    }
}

/// Returns the opponent positions offered by the vs RFI selector.
///
/// The active position list with the [SB_LIMP] sentinel inserted right
/// after the small blind.
pub fn opponent_rfi_positions(players: Option<&str>) -> Vec<Position> {
    let mut rfi_positions = Vec::new();

    for position in positions(players) {
        rfi_positions.push(*position);
        if position.id == "sb" {
            rfi_positions.push(SB_LIMP);
        }
    }

    rfi_positions
}

/// Returns the display label for a position id.
///
/// Ids missing from the active list fall back to the upper-cased id.
pub fn position_label(players: Option<&str>, id: &str) -> String {
    if id == SB_LIMP.id {
        return SB_LIMP.label.to_string();
    }

    positions(players)
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.label.to_string())
        .unwrap_or_else(|| id.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_by_player_count() {
        assert_eq!(positions(Some("6max")).len(), 6);
        assert_eq!(positions(Some("8max")).len(), 8);
        assert_eq!(positions(Some("9max")).len(), 9);

        // Unknown or unselected player counts use the generic list.
        assert_eq!(positions(None).len(), 8);
        assert_eq!(positions(Some("2max")).len(), 8);

        for players in [None, Some("6max"), Some("8max"), Some("9max")] {
            let list = positions(players);
            assert_eq!(list.first().unwrap().id, "utg");
            assert_eq!(list.last().unwrap().id, "bb");
        }
    }

    #[test]
    fn opponent_rfi_inserts_limp_after_sb() {
        for players in [None, Some("6max"), Some("8max"), Some("9max")] {
            let base = positions(players);
            let rfi = opponent_rfi_positions(players);

            assert_eq!(rfi.len(), base.len() + 1);

            let sb = rfi.iter().position(|p| p.id == "sb").unwrap();
            assert_eq!(rfi[sb + 1].id, "sb-limp");
            assert_eq!(rfi.last().unwrap().id, "bb");
        }
    }

    #[test]
    fn position_labels() {
        assert_eq!(position_label(Some("6max"), "mp"), "MP (HJ)");
        assert_eq!(position_label(Some("8max"), "mp"), "MP (LJ)");
        assert_eq!(position_label(Some("9max"), "mp2"), "MP2 (HJ)");
        assert_eq!(position_label(Some("8max"), "sb-limp"), "SB (Limp)");

        // A stale id not in the active list falls back to its id.
        assert_eq!(position_label(Some("6max"), "mp2"), "MP2");
    }
}
