//! Candidate player records.
//!
//! Players come from two sources with disjoint key spaces: the local player
//! table (numeric `player_id`, `bln_*` position flags) and the MLB stats API
//! (numeric `id`, single position, full name). One record type covers both;
//! serde field names match what each source actually sends so a JSON row
//! deserializes directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::draft::position::{infer_eligible_positions, Position, PositionFlags};

/// Where a player record originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSource {
    #[serde(rename = "database", alias = "Database")]
    Database,
    #[serde(rename = "MLB API")]
    MlbApi,
}

/// Nested position object on MLB API player payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryPosition {
    pub abbreviation: String,
}

/// A player under consideration for a pick.
///
/// Every field is optional because neither source supplies all of them; the
/// accessors below paper over the gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    /// Local database id.
    #[serde(default)]
    pub player_id: Option<i64>,

    /// MLB stats API id.
    #[serde(default, alias = "id")]
    pub mlb_id: Option<i64>,

    #[serde(default)]
    pub player_first_name: Option<String>,

    #[serde(default)]
    pub player_last_name: Option<String>,

    /// Pre-assembled display name, when the source provides one.
    #[serde(default, alias = "fullName")]
    pub name: Option<String>,

    /// External lookup string bridging the database and the stats API.
    #[serde(default)]
    pub player_api_lookup: Option<String>,

    /// Single position code (stats API players).
    #[serde(default)]
    pub position: Option<String>,

    #[serde(default, alias = "primaryPosition")]
    pub primary_position: Option<PrimaryPosition>,

    /// Explicit eligible-position list, when already computed upstream.
    #[serde(default, alias = "eligiblePositions")]
    pub eligible_positions: Option<Vec<String>>,

    /// Database position flags.
    #[serde(flatten)]
    pub flags: PositionFlags,

    #[serde(default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(default)]
    pub source: Option<PlayerSource>,
}

impl Player {
    /// Display name: explicit name, else first + last, else whichever part
    /// exists, else empty.
    pub fn full_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        let first = self.player_first_name.as_deref().unwrap_or("").trim();
        let last = self.player_last_name.as_deref().unwrap_or("").trim();
        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{} {}", first, last),
            (true, false) => last.to_string(),
            (false, true) => first.to_string(),
            (true, true) => String::new(),
        }
    }

    /// Identity keys for drafted-status matching, strongest first: local id,
    /// stats API id, API lookup string, full display name.
    pub fn identity_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(id) = self.player_id {
            keys.push(id.to_string());
        }
        if let Some(id) = self.mlb_id {
            keys.push(id.to_string());
        }
        if let Some(lookup) = &self.player_api_lookup {
            if !lookup.is_empty() {
                keys.push(lookup.clone());
            }
        }
        let name = self.full_name();
        if !name.is_empty() {
            keys.push(name);
        }
        keys
    }

    /// Most specific single identifier, for handing to the external draft
    /// confirmation: API lookup, else an id, else the display name.
    pub fn draft_lookup(&self) -> Option<String> {
        if let Some(lookup) = &self.player_api_lookup {
            if !lookup.is_empty() {
                return Some(lookup.clone());
            }
        }
        if let Some(id) = self.mlb_id.or(self.player_id) {
            return Some(id.to_string());
        }
        let name = self.full_name();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Single position code, preferring the flat field over the nested
    /// stats API object.
    fn single_position(&self) -> Option<&str> {
        if let Some(pos) = self.position.as_deref() {
            return Some(pos);
        }
        self.primary_position.as_ref().map(|p| p.abbreviation.as_str())
    }

    /// Eligible positions via the standard inference order: explicit list,
    /// then flags, then single position code.
    pub fn eligible(&self) -> Vec<Position> {
        infer_eligible_positions(
            self.eligible_positions.as_deref(),
            Some(&self.flags),
            self.single_position(),
        )
    }

    pub fn is_pitcher(&self) -> bool {
        self.eligible().contains(&Position::Pitcher)
    }

    /// Age in whole years as of `today`, when a birth date is on record.
    pub fn age(&self, today: NaiveDate) -> Option<u32> {
        self.birth_date.and_then(|born| today.years_since(born))
    }
}
