//! Recorded draft picks and derived indexes.
//!
//! Picks are append-only for the life of a draft; the store's atomic
//! `draft_player` function is the only writer. Everything here is derived,
//! advisory state rebuilt from a full snapshot after each refresh.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::draft::player::Player;
use crate::draft::team::{find_by_name, Team};
use crate::draft::turn::round_number;

/// One completed draft selection, as the results view reports it.
///
/// Team and player references are whatever subset the row carries; older
/// rows may name the team instead of carrying its id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pick {
    #[serde(default)]
    pub team_id: Option<i64>,

    #[serde(default)]
    pub team_name: Option<String>,

    #[serde(default)]
    pub player_id: Option<i64>,

    #[serde(default)]
    pub player_api_lookup: Option<String>,

    #[serde(default)]
    pub player_name: Option<String>,

    /// Roster slot label the pick filled, e.g. "P 3", "OF 1", "Taxi".
    pub roster_position: String,

    /// Explicit overall pick number; assigned from insertion order when the
    /// view omits it.
    #[serde(default)]
    pub pick_number: Option<usize>,

    #[serde(default)]
    pub picked_at: Option<DateTime<Utc>>,
}

impl Pick {
    /// Identity keys this pick consumes: player id, API lookup, display name.
    pub fn identity_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(id) = self.player_id {
            keys.push(id.to_string());
        }
        if let Some(lookup) = &self.player_api_lookup {
            if !lookup.is_empty() {
                keys.push(lookup.clone());
            }
        }
        if let Some(name) = &self.player_name {
            if !name.is_empty() {
                keys.push(name.clone());
            }
        }
        keys
    }

    /// Resolve the owning team against the session's team list, by id first
    /// and then by case-insensitive name.
    pub fn resolve_team<'a>(&self, teams: &'a [Team]) -> Option<&'a Team> {
        if let Some(id) = self.team_id {
            return teams.iter().find(|t| t.team_id == id);
        }
        self.team_name.as_deref().and_then(|name| find_by_name(teams, name))
    }
}

/// Assign missing pick numbers densely from insertion order.
///
/// Rows that already carry a number keep it and advance the counter past it,
/// so a mixed list stays monotone.
pub fn assign_pick_numbers(picks: &mut [Pick]) {
    let mut counter = 1;
    for pick in picks.iter_mut() {
        match pick.pick_number {
            Some(n) => counter = n + 1,
            None => {
                pick.pick_number = Some(counter);
                counter += 1;
            }
        }
    }
}

/// Seen-identity index for drafted-player detection.
///
/// Built once per snapshot; the caller rebuilds it whenever the pick list
/// changes. Matching is a best-effort heuristic because the two upstream
/// sources share no key space; a name hit against a different player is an
/// accepted false positive surfaced in the UI, not an error.
#[derive(Debug, Clone, Default)]
pub struct DraftedIndex {
    keys: HashSet<String>,
}

impl DraftedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the index from a full pick snapshot.
    pub fn rebuild(&mut self, picks: &[Pick]) {
        self.keys.clear();
        for pick in picks {
            self.insert_pick(pick);
        }
    }

    pub fn insert_pick(&mut self, pick: &Pick) {
        for key in pick.identity_keys() {
            self.keys.insert(key);
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Whether any of the candidate's identity keys has been seen, checked
    /// strongest-first (id, then API lookup, then full name).
    pub fn is_drafted(&self, player: &Player) -> bool {
        player
            .identity_keys()
            .iter()
            .any(|key| self.keys.contains(key))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Group picks by 1-based round for the round-view board.
///
/// Picks without a number (call [`assign_pick_numbers`] first) are skipped.
pub fn picks_by_round<'a>(picks: &'a [Pick], team_count: usize) -> BTreeMap<usize, Vec<&'a Pick>> {
    let mut rounds: BTreeMap<usize, Vec<&Pick>> = BTreeMap::new();
    for pick in picks {
        let round = pick
            .pick_number
            .and_then(|n| round_number(n, team_count));
        if let Some(round) = round {
            rounds.entry(round).or_default().push(pick);
        }
    }
    rounds
}

/// Group picks by owning team id for the team-view board.
///
/// Every session team gets an entry, empty or not. Picks whose team cannot
/// be resolved are logged and left out of the grouping; they still exist in
/// the flat pick list.
pub fn picks_by_team<'a>(picks: &'a [Pick], teams: &[Team]) -> BTreeMap<i64, Vec<&'a Pick>> {
    let mut by_team: BTreeMap<i64, Vec<&Pick>> = BTreeMap::new();
    for team in teams {
        by_team.entry(team.team_id).or_default();
    }
    for pick in picks {
        match pick.resolve_team(teams) {
            Some(team) => by_team.entry(team.team_id).or_default().push(pick),
            None => warn!(
                team_name = pick.team_name.as_deref().unwrap_or(""),
                roster_position = %pick.roster_position,
                "pick references a team not in this session"
            ),
        }
    }
    by_team
}
