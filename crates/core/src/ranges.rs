// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Chart list derivation.
//!
//! Derived image paths follow the asset store convention
//! `/ranges/{TABLE}/{PLAYERS}/{STACK}/{CATEGORY}/{POSITION_CODE}.jpg` with
//! category one of `RFI`, `vsRFI`, `vs3Bet`. Segments are upper-cased and
//! the small blind limp sentinel maps to a `-LIMP` filename suffix; the
//! asset store expects exactly this naming.
use crate::{
    catalog::{self, SB_LIMP},
    filters::Filters,
};

/// A derived chart entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeResult {
    /// A stable entry id.
    pub id: &'static str,
    /// The title shown above the chart.
    pub title: String,
    /// The derived image path.
    pub image_path: String,
    /// An optional description shown under the title.
    pub description: Option<String>,
}

/// Derives the ordered chart list for the current selections.
///
/// Returns no entries unless table type, players, stack, and the hero
/// position are all selected. The list is rebuilt from scratch on every
/// call, entries are never patched in place.
pub fn derive_ranges(filters: &Filters) -> Vec<RangeResult> {
    let (Some(table_type), Some(players), Some(stack), Some(my_position)) = (
        filters.table_type,
        filters.players,
        filters.effective_stack,
        filters.my_position,
    ) else {
        return Vec::new();
    };

    let dir = format!(
        "/ranges/{}/{}/{}",
        table_type.to_uppercase(),
        players.to_uppercase(),
        stack.to_uppercase()
    );

    let my_label = catalog::position_label(filters.players, my_position);
    let my_code = my_position.to_uppercase();

    let mut ranges = Vec::new();

    // How to play against an opponent 3-bet.
    if let Some(opponent) = filters.opponent_3bet {
        let opponent_label = catalog::position_label(filters.players, opponent);

        ranges.push(RangeResult {
            id: "vs-3bet-range",
            title: format!("vs 3-Bet | {my_label} vs {opponent_label}"),
            image_path: format!("{dir}/vs3Bet/{my_code}vs{}.jpg", opponent.to_uppercase()),
            description: None,
        });
    }

    // How to play against an opponent open raise.
    if let Some(opponent) = filters.opponent_rfi {
        let opponent_label = catalog::position_label(filters.players, opponent);

        // The limp sentinel selects a filename suffix, not a seat code.
        let (opponent_code, suffix) = if opponent == SB_LIMP.id {
            ("SB".to_string(), "-LIMP")
        } else {
            (opponent.to_uppercase(), "")
        };

        ranges.push(RangeResult {
            id: "vs-rfi-range",
            title: format!("vs RFI | {my_label} vs {opponent_label}"),
            image_path: format!("{dir}/vsRFI/{my_code}vs{opponent_code}{suffix}.jpg"),
            description: None,
        });
    }

    // The hero open raise range is always shown.
    ranges.push(RangeResult {
        id: "my-rfi-range",
        title: format!("RFI | {my_label}"),
        image_path: format!("{dir}/RFI/{my_code}.jpg"),
        description: None,
    });

    // And the opponent own open raise range when one is selected.
    if let Some(opponent) = filters.opponent_rfi {
        let opponent_label = catalog::position_label(filters.players, opponent);

        ranges.push(RangeResult {
            id: "opponent-rfi-range",
            title: format!("Opponent RFI | {opponent_label}"),
            image_path: format!("{dir}/RFI/{}.jpg", opponent.to_uppercase()),
            description: None,
        });
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ranges: &[RangeResult]) -> Vec<&'static str> {
        ranges.iter().map(|r| r.id).collect()
    }

    #[test]
    fn hero_position_alone_derives_single_rfi() {
        let filters = Filters::default();
        let ranges = derive_ranges(&filters);

        assert_eq!(ids(&ranges), vec!["my-rfi-range"]);
        assert_eq!(ranges[0].title, "RFI | BTN");
        assert_eq!(ranges[0].image_path, "/ranges/MTT/8MAX/100BB/RFI/BTN.jpg");
    }

    #[test]
    fn no_entries_without_hero_position() {
        let mut filters = Filters::default();
        filters.set_my_position(None);
        assert!(derive_ranges(&filters).is_empty());

        // An opponent selection alone derives nothing either.
        filters.set_opponent_rfi(Some("co"));
        filters.set_opponent_3bet(Some("sb"));
        assert!(derive_ranges(&filters).is_empty());
    }

    #[test]
    fn no_entries_without_required_filters() {
        let mut filters = Filters::default();
        filters.set_table_type(None);
        assert!(derive_ranges(&filters).is_empty());

        let mut filters = Filters::default();
        filters.set_effective_stack(None);
        assert!(derive_ranges(&filters).is_empty());
    }

    #[test]
    fn opponent_rfi_adds_two_entries() {
        let mut filters = Filters::default();
        filters.set_opponent_rfi(Some("co"));

        let ranges = derive_ranges(&filters);
        assert_eq!(
            ids(&ranges),
            vec!["vs-rfi-range", "my-rfi-range", "opponent-rfi-range"]
        );

        assert_eq!(ranges[0].title, "vs RFI | BTN vs CO");
        assert_eq!(
            ranges[0].image_path,
            "/ranges/MTT/8MAX/100BB/vsRFI/BTNvsCO.jpg"
        );

        assert_eq!(ranges[2].title, "Opponent RFI | CO");
        assert_eq!(ranges[2].image_path, "/ranges/MTT/8MAX/100BB/RFI/CO.jpg");
    }

    #[test]
    fn opponent_three_bet_adds_entry_first() {
        let mut filters = Filters::default();
        filters.set_opponent_3bet(Some("sb"));

        let ranges = derive_ranges(&filters);
        assert_eq!(ids(&ranges), vec!["vs-3bet-range", "my-rfi-range"]);

        assert_eq!(ranges[0].title, "vs 3-Bet | BTN vs SB");
        assert_eq!(
            ranges[0].image_path,
            "/ranges/MTT/8MAX/100BB/vs3Bet/BTNvsSB.jpg"
        );
    }

    #[test]
    fn all_opponents_selected_derives_four_entries() {
        let mut filters = Filters::default();
        filters.set_opponent_rfi(Some("utg"));
        filters.set_opponent_3bet(Some("bb"));

        let ranges = derive_ranges(&filters);
        assert_eq!(
            ids(&ranges),
            vec![
                "vs-3bet-range",
                "vs-rfi-range",
                "my-rfi-range",
                "opponent-rfi-range"
            ]
        );
    }

    #[test]
    fn limp_sentinel_maps_to_filename_suffix() {
        let mut filters = Filters::default();
        filters.set_my_position(Some("bb"));
        filters.set_opponent_rfi(Some("sb-limp"));

        let ranges = derive_ranges(&filters);

        assert_eq!(ranges[0].title, "vs RFI | BB vs SB (Limp)");
        assert_eq!(
            ranges[0].image_path,
            "/ranges/MTT/8MAX/100BB/vsRFI/BBvsSB-LIMP.jpg"
        );

        // The opponent own RFI entry keeps the raw sentinel code.
        assert_eq!(
            ranges[2].image_path,
            "/ranges/MTT/8MAX/100BB/RFI/SB-LIMP.jpg"
        );
    }

    #[test]
    fn path_segments_are_upper_cased() {
        let mut filters = Filters::default();
        filters.set_table_type(Some("cash"));
        filters.set_players(Some("9max"));
        filters.set_effective_stack(Some("20bb-no-limp"));
        filters.set_my_position(Some("mp2"));

        let ranges = derive_ranges(&filters);
        assert_eq!(
            ranges[0].image_path,
            "/ranges/CASH/9MAX/20BB-NO-LIMP/RFI/MP2.jpg"
        );
    }
}
