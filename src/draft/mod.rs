//! Draft board state for a fantasy baseball snake draft.
//!
//! This module provides the core types and the session aggregate:
//!
//! - `team` - League teams (id-sorted turn order, name matching)
//! - `player` - Candidate players from the local table or the stats API
//! - `position` - Position codes and eligibility inference
//! - `slot` - The roster slot catalog and open-slot resolver
//! - `pick` - Recorded picks, drafted-player index, history grouping
//! - `turn` - Snake-draft turn order
//! - `scoring` - Fantasy point tables
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                          DraftBoard                              │
//! │                                                                  │
//! │  teams: Vec<Team>          picks: Vec<Pick>                      │
//! │  (sorted by team_id)       (append-only, densely numbered)       │
//! │                                                                  │
//! │  ┌──────────────────┐  ┌───────────────────────────────┐         │
//! │  │   DraftedIndex   │  │  filled slots per team         │        │
//! │  │                  │  │                                │        │
//! │  │ identity key →   │  │  team_id →                     │        │
//! │  │   seen           │  │    HashSet<RosterSlot>         │        │
//! │  └──────────────────┘  └───────────────────────────────┘         │
//! │                                                                  │
//! │  team_on_clock()   is_drafted(player)   open_slots(team, player) │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both indexes are derived views over the pick snapshot and are rebuilt
//! wholesale by [`DraftBoard::refresh_picks`]; the database's atomic
//! `draft_player` function remains the single authority on what was actually
//! drafted.
//!
//! # Usage
//!
//! ```rust
//! use draftboard_state::draft::{DraftBoard, Pick, Player, Team};
//!
//! let teams = vec![Team::new(1, "River Rats"), Team::new(2, "Harbor Hawks")];
//! let picks = vec![Pick {
//!     team_id: Some(1),
//!     player_id: Some(42),
//!     player_name: Some("Walter Johnson".to_string()),
//!     roster_position: "P 1".to_string(),
//!     ..Default::default()
//! }];
//!
//! let board = DraftBoard::new(teams, picks);
//!
//! // Second team is on the clock after one pick.
//! assert_eq!(board.team_on_clock().unwrap().team_id, 2);
//!
//! let candidate = Player {
//!     player_id: Some(42),
//!     ..Default::default()
//! };
//! assert!(board.is_drafted(&candidate));
//! ```

pub mod pick;
pub mod player;
pub mod position;
pub mod scoring;
pub mod slot;
pub mod team;
pub mod turn;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use tracing::warn;

// Re-export commonly used types
pub use pick::{assign_pick_numbers, picks_by_round, picks_by_team, DraftedIndex, Pick};
pub use player::{Player, PlayerSource, PrimaryPosition};
pub use position::{infer_eligible_positions, Position, PositionFlags};
pub use scoring::{BattingStats, PitchingStats, ScoringRules, StatLine};
pub use slot::{open_slots, RosterSlot};
pub use team::{find_by_name, random_team_name, Team};
pub use turn::{round_number, seat_for_pick, team_on_clock, DEFAULT_TOTAL_ROUNDS};

/// Draft board errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// The session has no teams; turn order is undefined.
    NoTeams,
    /// A team id that is not part of this session.
    UnknownTeam(i64),
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTeams => write!(f, "No teams loaded for this draft session"),
            Self::UnknownTeam(id) => write!(f, "Team {} is not in this draft session", id),
        }
    }
}

impl std::error::Error for DraftError {}

/// One draft session's advisory state.
///
/// Holds the session snapshot (teams and recorded picks) plus the derived
/// indexes the UI needs: who has been drafted and which roster slots each
/// team has filled. All three core reads are pure over this state; after a
/// successful draft confirmation the caller re-fetches the pick list and
/// calls [`DraftBoard::refresh_picks`] to rebuild everything from scratch.
#[derive(Debug, Clone, Default)]
pub struct DraftBoard {
    /// Session teams, ascending by `team_id`.
    teams: Vec<Team>,

    /// Recorded picks in insertion order, densely numbered.
    picks: Vec<Pick>,

    /// Identity keys consumed by recorded picks.
    drafted: DraftedIndex,

    /// Filled roster slots per team id.
    filled: HashMap<i64, HashSet<RosterSlot>>,
}

impl DraftBoard {
    /// Build a board from a session snapshot.
    pub fn new(mut teams: Vec<Team>, picks: Vec<Pick>) -> Self {
        teams.sort_by_key(|t| t.team_id);
        let mut board = Self {
            teams,
            picks: Vec::new(),
            drafted: DraftedIndex::new(),
            filled: HashMap::new(),
        };
        board.refresh_picks(picks);
        board
    }

    /// Replace the pick list and rebuild all derived state.
    ///
    /// There is deliberately no incremental path: the pick list is the
    /// authority and this board must tolerate having been stale.
    pub fn refresh_picks(&mut self, mut picks: Vec<Pick>) {
        assign_pick_numbers(&mut picks);

        self.drafted.rebuild(&picks);

        self.filled.clear();
        for team in &self.teams {
            self.filled.insert(team.team_id, HashSet::new());
        }
        for pick in &picks {
            let Some(team_id) = pick.resolve_team(&self.teams).map(|t| t.team_id) else {
                warn!(
                    team_name = pick.team_name.as_deref().unwrap_or(""),
                    roster_position = %pick.roster_position,
                    "pick does not resolve to a session team; slot not tracked"
                );
                continue;
            };
            match RosterSlot::parse_label(&pick.roster_position) {
                Some(slot) => {
                    self.filled.entry(team_id).or_default().insert(slot);
                }
                None => warn!(
                    team_id,
                    roster_position = %pick.roster_position,
                    "pick carries a slot label outside the catalog"
                ),
            }
        }

        self.picks = picks;
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    pub fn team(&self, team_id: i64) -> Option<&Team> {
        self.teams.iter().find(|t| t.team_id == team_id)
    }

    /// Overall number of the next pick, 1-based.
    pub fn next_pick_number(&self) -> usize {
        self.picks.len() + 1
    }

    /// 1-based round of the next pick. `None` with no teams.
    pub fn current_round(&self) -> Option<usize> {
        round_number(self.next_pick_number(), self.teams.len())
    }

    /// The team that owns the next pick, per snake order. `None` with no
    /// teams; callers guard that case.
    pub fn team_on_clock(&self) -> Option<&Team> {
        turn::team_on_clock(&self.teams, self.picks.len())
    }

    /// Whether any of the candidate's identity keys matches a recorded pick.
    /// Heuristic; see [`DraftedIndex`].
    pub fn is_drafted(&self, player: &Player) -> bool {
        self.drafted.is_drafted(player)
    }

    /// Roster slots the candidate may fill for the given team right now, in
    /// catalog order.
    pub fn open_slots(&self, team_id: i64, player: &Player) -> Result<Vec<RosterSlot>, DraftError> {
        let filled = self
            .filled
            .get(&team_id)
            .ok_or(DraftError::UnknownTeam(team_id))?;
        Ok(slot::open_slots(&player.eligible(), filled))
    }

    /// Slots already filled for a team.
    pub fn filled_slots(&self, team_id: i64) -> Result<&HashSet<RosterSlot>, DraftError> {
        self.filled
            .get(&team_id)
            .ok_or(DraftError::UnknownTeam(team_id))
    }

    /// Picks grouped by 1-based round.
    pub fn picks_by_round(&self) -> BTreeMap<usize, Vec<&Pick>> {
        pick::picks_by_round(&self.picks, self.teams.len())
    }

    /// Picks grouped by team id, with name-fallback resolution.
    pub fn picks_by_team(&self) -> BTreeMap<i64, Vec<&Pick>> {
        pick::picks_by_team(&self.picks, &self.teams)
    }

    /// Board snapshot for clients.
    pub fn to_json(&self) -> serde_json::Value {
        let filled: serde_json::Map<String, serde_json::Value> = self
            .teams
            .iter()
            .map(|team| {
                let mut labels: Vec<String> = self
                    .filled
                    .get(&team.team_id)
                    .map(|slots| slots.iter().map(|s| s.label()).collect())
                    .unwrap_or_default();
                labels.sort();
                (team.team_id.to_string(), serde_json::json!(labels))
            })
            .collect();

        serde_json::json!({
            "teams": self.teams,
            "picks": self.picks,
            "next_pick_number": self.next_pick_number(),
            "round": self.current_round(),
            "team_on_clock": self.team_on_clock().map(|t| t.team_id),
            "filled_slots": filled,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn teams() -> Vec<Team> {
        vec![
            Team::new(1, "A"),
            Team::new(2, "B"),
            Team::new(3, "C"),
        ]
    }

    fn pick(team_id: i64, player_id: i64, slot: &str) -> Pick {
        Pick {
            team_id: Some(team_id),
            player_id: Some(player_id),
            player_name: Some(format!("Player {}", player_id)),
            roster_position: slot.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario_four_picks_team_b_on_clock() {
        let picks = vec![
            pick(1, 10, "P 1"),
            pick(2, 11, "P 1"),
            pick(3, 12, "P 1"),
            pick(3, 13, "C"),
        ];
        let board = DraftBoard::new(teams(), picks);

        assert_eq!(board.next_pick_number(), 5);
        assert_eq!(board.current_round(), Some(2));
        assert_eq!(board.team_on_clock().unwrap().team_name, "B");
    }

    #[test]
    fn test_empty_board_first_team_on_clock() {
        let board = DraftBoard::new(teams(), Vec::new());
        assert_eq!(board.team_on_clock().unwrap().team_id, 1);
        assert_eq!(board.current_round(), Some(1));
    }

    #[test]
    fn test_no_teams_no_clock() {
        let board = DraftBoard::new(Vec::new(), Vec::new());
        assert!(board.team_on_clock().is_none());
        assert!(board.current_round().is_none());
    }

    #[test]
    fn test_drafted_and_slot_state_from_snapshot() {
        let board = DraftBoard::new(teams(), vec![pick(1, 42, "OF 1"), pick(1, 43, "OF 3")]);

        let drafted = Player {
            player_id: Some(42),
            ..Default::default()
        };
        assert!(board.is_drafted(&drafted));

        let outfielder = Player {
            position: Some("OF".to_string()),
            ..Default::default()
        };
        let open: Vec<String> = board
            .open_slots(1, &outfielder)
            .unwrap()
            .iter()
            .map(|s| s.label())
            .collect();
        assert_eq!(open, vec!["OF 2", "U 1", "U 2", "U 3", "Taxi"]);

        // Other teams are untouched.
        assert!(board.filled_slots(2).unwrap().is_empty());
    }

    #[test]
    fn test_open_slots_unknown_team() {
        let board = DraftBoard::new(teams(), Vec::new());
        let err = board.open_slots(99, &Player::default()).unwrap_err();
        assert_eq!(err, DraftError::UnknownTeam(99));
    }

    #[test]
    fn test_refresh_rebuilds_from_scratch() {
        let mut board = DraftBoard::new(teams(), vec![pick(1, 42, "C")]);
        let old = Player {
            player_id: Some(42),
            ..Default::default()
        };
        assert!(board.is_drafted(&old));

        board.refresh_picks(vec![pick(2, 50, "SS")]);

        assert!(!board.is_drafted(&old));
        assert!(board.filled_slots(1).unwrap().is_empty());
        assert!(board
            .filled_slots(2)
            .unwrap()
            .contains(&RosterSlot::Shortstop));
        assert_eq!(board.picks()[0].pick_number, Some(1));
    }

    #[test]
    fn test_pick_with_team_name_fills_slot() {
        let picks = vec![Pick {
            team_name: Some("b".to_string()),
            player_id: Some(7),
            roster_position: "1B".to_string(),
            ..Default::default()
        }];
        let board = DraftBoard::new(teams(), picks);
        assert!(board
            .filled_slots(2)
            .unwrap()
            .contains(&RosterSlot::FirstBase));
    }

    #[test]
    fn test_unresolvable_pick_kept_in_history_but_untracked() {
        let picks = vec![Pick {
            team_name: Some("Ghost Team".to_string()),
            player_id: Some(7),
            roster_position: "C".to_string(),
            ..Default::default()
        }];
        let board = DraftBoard::new(teams(), picks);

        assert_eq!(board.picks().len(), 1);
        for team in board.teams() {
            assert!(board.filled_slots(team.team_id).unwrap().is_empty());
        }
        // The player is still indexed as drafted.
        assert!(board.is_drafted(&Player {
            player_id: Some(7),
            ..Default::default()
        }));
    }

    #[test]
    fn test_teams_sorted_on_construction() {
        let board = DraftBoard::new(
            vec![Team::new(3, "C"), Team::new(1, "A"), Team::new(2, "B")],
            Vec::new(),
        );
        let ids: Vec<i64> = board.teams().iter().map(|t| t.team_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_to_json_snapshot() {
        let board = DraftBoard::new(teams(), vec![pick(1, 42, "P 3")]);
        let json = board.to_json();

        assert_eq!(json["next_pick_number"], 2);
        assert_eq!(json["team_on_clock"], 2);
        assert_eq!(json["filled_slots"]["1"], serde_json::json!(["P 3"]));
        assert_eq!(json["picks"][0]["pick_number"], 1);
    }
}
