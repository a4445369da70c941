//! Teams and team lookup.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A league member's team for one draft session.
///
/// Loaded once per session and treated as read-only; `team_id` is the stable
/// sort key for turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: i64,
    pub team_name: String,

    #[serde(default)]
    pub owner_id: Option<i64>,

    #[serde(default)]
    pub year_id: Option<i32>,
}

impl Team {
    pub fn new(team_id: i64, team_name: impl Into<String>) -> Self {
        Self {
            team_id,
            team_name: team_name.into(),
            owner_id: None,
            year_id: None,
        }
    }

    /// Case-insensitive name match, used when a pick references a team by
    /// name instead of id.
    pub fn matches_name(&self, name: &str) -> bool {
        self.team_name == name || self.team_name.eq_ignore_ascii_case(name)
    }
}

/// Find a team by name, exact match first, then case-insensitive.
pub fn find_by_name<'a>(teams: &'a [Team], name: &str) -> Option<&'a Team> {
    teams
        .iter()
        .find(|t| t.team_name == name)
        .or_else(|| teams.iter().find(|t| t.team_name.eq_ignore_ascii_case(name)))
}

const NAME_ADJECTIVES: &[&str] = &[
    "Mighty", "Fierce", "Blazing", "Raging", "Thundering", "Soaring", "Charging", "Striking",
    "Roaring", "Crushing", "Flaming", "Flying",
];

const NAME_NOUNS: &[&str] = &[
    "Giants", "Dragons", "Titans", "Thunder", "Hurricanes", "Warriors", "Knights", "Legends",
    "Wolves", "Bears", "Eagles", "Lions",
];

/// Generate a random "Adjective Nouns" team name for new teams.
pub fn random_team_name<R: rand::Rng + ?Sized>(rng: &mut R) -> String {
    let adj = NAME_ADJECTIVES.choose(rng).unwrap_or(&"Mighty");
    let noun = NAME_NOUNS.choose(rng).unwrap_or(&"Giants");
    format!("{} {}", adj, noun)
}
