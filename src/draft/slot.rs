//! Roster slot catalog and the open-slot resolver.
//!
//! Every team draws from the same fixed catalog of 18 slots: seven pitcher
//! slots, one of each infield position and catcher, three outfield slots,
//! three utility slots, and a taxi-squad slot. Slots move from open to filled
//! exactly once per draft; there is no release path.

use std::collections::HashSet;
use std::fmt;

use crate::draft::position::Position;

/// Number of pitcher slots per team.
pub const PITCHER_SLOTS: u8 = 7;

/// Number of outfield slots per team.
pub const OUTFIELD_SLOTS: u8 = 3;

/// Number of utility slots per team.
pub const UTILITY_SLOTS: u8 = 3;

/// A labeled roster slot, e.g. "P 3", "SS", "U 1", "Taxi".
///
/// Numbered variants carry a 1-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterSlot {
    Pitcher(u8),
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    Outfield(u8),
    Utility(u8),
    Taxi,
}

impl RosterSlot {
    /// The slot label as stored in pick records.
    pub fn label(&self) -> String {
        match self {
            Self::Pitcher(n) => format!("P {}", n),
            Self::Catcher => "C".to_string(),
            Self::FirstBase => "1B".to_string(),
            Self::SecondBase => "2B".to_string(),
            Self::ThirdBase => "3B".to_string(),
            Self::Shortstop => "SS".to_string(),
            Self::Outfield(n) => format!("OF {}", n),
            Self::Utility(n) => format!("U {}", n),
            Self::Taxi => "Taxi".to_string(),
        }
    }

    /// Parse a stored slot label. Returns `None` for labels outside the
    /// catalog (including numbered slots past their limit).
    pub fn parse_label(label: &str) -> Option<Self> {
        let label = label.trim();
        match label {
            "C" => return Some(Self::Catcher),
            "1B" => return Some(Self::FirstBase),
            "2B" => return Some(Self::SecondBase),
            "3B" => return Some(Self::ThirdBase),
            "SS" => return Some(Self::Shortstop),
            "Taxi" => return Some(Self::Taxi),
            _ => {}
        }

        let (prefix, n) = label.split_once(' ')?;
        let n: u8 = n.parse().ok()?;
        match prefix {
            "P" if (1..=PITCHER_SLOTS).contains(&n) => Some(Self::Pitcher(n)),
            "OF" if (1..=OUTFIELD_SLOTS).contains(&n) => Some(Self::Outfield(n)),
            "U" if (1..=UTILITY_SLOTS).contains(&n) => Some(Self::Utility(n)),
            _ => None,
        }
    }

    /// Whether a player with the given eligible positions may fill this slot.
    ///
    /// Utility slots accept any non-pitcher; taxi accepts anyone. A player
    /// with no recognized positions therefore still qualifies for utility and
    /// taxi, which mirrors the board's permissive fallback.
    pub fn accepts(&self, eligible: &[Position]) -> bool {
        match self {
            Self::Pitcher(_) => eligible.contains(&Position::Pitcher),
            Self::Catcher => eligible.contains(&Position::Catcher),
            Self::FirstBase => eligible.contains(&Position::FirstBase),
            Self::SecondBase => eligible.contains(&Position::SecondBase),
            Self::ThirdBase => eligible.contains(&Position::ThirdBase),
            Self::Shortstop => eligible.contains(&Position::Shortstop),
            Self::Outfield(_) => eligible.contains(&Position::Outfield),
            Self::Utility(_) => !eligible.contains(&Position::Pitcher),
            Self::Taxi => true,
        }
    }

    /// The full per-team slot catalog in display order.
    pub fn catalog() -> Vec<RosterSlot> {
        let mut slots = Vec::with_capacity(18);
        for n in 1..=PITCHER_SLOTS {
            slots.push(Self::Pitcher(n));
        }
        slots.push(Self::Catcher);
        slots.push(Self::FirstBase);
        slots.push(Self::SecondBase);
        slots.push(Self::ThirdBase);
        slots.push(Self::Shortstop);
        for n in 1..=OUTFIELD_SLOTS {
            slots.push(Self::Outfield(n));
        }
        for n in 1..=UTILITY_SLOTS {
            slots.push(Self::Utility(n));
        }
        slots.push(Self::Taxi);
        slots
    }
}

impl fmt::Display for RosterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Slots a player may legally fill right now, in catalog order.
///
/// Filled slots are never offered again. The result is advisory: the
/// database's atomic draft operation still rejects a duplicate (team, slot)
/// pair if this view is stale.
pub fn open_slots(eligible: &[Position], filled: &HashSet<RosterSlot>) -> Vec<RosterSlot> {
    RosterSlot::catalog()
        .into_iter()
        .filter(|slot| slot.accepts(eligible) && !filled.contains(slot))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn labels(slots: &[RosterSlot]) -> Vec<String> {
        slots.iter().map(|s| s.label()).collect()
    }

    #[test]
    fn test_catalog_order_and_size() {
        let catalog = RosterSlot::catalog();
        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog[0].label(), "P 1");
        assert_eq!(catalog[6].label(), "P 7");
        assert_eq!(catalog[7].label(), "C");
        assert_eq!(catalog[11].label(), "SS");
        assert_eq!(catalog[12].label(), "OF 1");
        assert_eq!(catalog[17].label(), "Taxi");
    }

    #[test]
    fn test_label_round_trip() {
        for slot in RosterSlot::catalog() {
            assert_eq!(RosterSlot::parse_label(&slot.label()), Some(slot));
        }
    }

    #[test]
    fn test_parse_rejects_out_of_catalog() {
        assert_eq!(RosterSlot::parse_label("P 8"), None);
        assert_eq!(RosterSlot::parse_label("OF 4"), None);
        assert_eq!(RosterSlot::parse_label("U 0"), None);
        assert_eq!(RosterSlot::parse_label("DH"), None);
        assert_eq!(RosterSlot::parse_label("P"), None);
    }

    #[test]
    fn test_pure_pitcher_gets_pitcher_and_taxi_only() {
        let open = open_slots(&[Position::Pitcher], &HashSet::new());
        assert_eq!(
            labels(&open),
            vec!["P 1", "P 2", "P 3", "P 4", "P 5", "P 6", "P 7", "Taxi"]
        );
    }

    #[test]
    fn test_outfielder_with_partial_fill() {
        let filled: HashSet<RosterSlot> = [RosterSlot::Outfield(1), RosterSlot::Outfield(3)]
            .into_iter()
            .collect();
        let open = open_slots(&[Position::Outfield], &filled);
        assert_eq!(labels(&open), vec!["OF 2", "U 1", "U 2", "U 3", "Taxi"]);
    }

    #[test]
    fn test_multi_position_infielder() {
        let open = open_slots(&[Position::SecondBase, Position::Shortstop], &HashSet::new());
        assert_eq!(labels(&open), vec!["2B", "SS", "U 1", "U 2", "U 3", "Taxi"]);
    }

    #[test]
    fn test_two_way_player_is_still_barred_from_utility() {
        // Eligible for P gates the utility slots even with other positions.
        let open = open_slots(&[Position::Pitcher, Position::Outfield], &HashSet::new());
        assert!(labels(&open).contains(&"P 1".to_string()));
        assert!(labels(&open).contains(&"OF 1".to_string()));
        assert!(!labels(&open).iter().any(|l| l.starts_with("U ")));
    }

    #[test]
    fn test_no_positions_degrades_to_utility_and_taxi() {
        let open = open_slots(&[], &HashSet::new());
        assert_eq!(labels(&open), vec!["U 1", "U 2", "U 3", "Taxi"]);
    }

    #[test]
    fn test_filled_slot_never_offered() {
        let filled: HashSet<RosterSlot> = [RosterSlot::Taxi, RosterSlot::Catcher]
            .into_iter()
            .collect();
        let open = open_slots(&[Position::Catcher], &filled);
        assert_eq!(labels(&open), vec!["U 1", "U 2", "U 3"]);
    }
}
