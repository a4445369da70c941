//! Baseball position codes and eligibility inference.
//!
//! Player records arrive in three shapes depending on their source: an explicit
//! eligible-position list, per-position boolean flags (the database schema's
//! `bln_*` columns), or a single position string (the stats API). The adapter
//! here normalizes all three into a set of [`Position`] values before any
//! roster-slot decision is made.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A baseball position a player can be eligible for.
///
/// The corner outfield codes (LF/CF/RF) fold into [`Position::Outfield`];
/// roster slots never distinguish between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "P")]
    Pitcher,
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    Shortstop,
    #[serde(rename = "OF")]
    Outfield,
}

impl Position {
    /// Parse a position code. LF/CF/RF map to `Outfield`; anything else
    /// (DH, UTIL, empty, garbage) is unrecognized.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "P" => Some(Self::Pitcher),
            "C" => Some(Self::Catcher),
            "1B" => Some(Self::FirstBase),
            "2B" => Some(Self::SecondBase),
            "3B" => Some(Self::ThirdBase),
            "SS" => Some(Self::Shortstop),
            "OF" | "LF" | "CF" | "RF" => Some(Self::Outfield),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Pitcher => "P",
            Self::Catcher => "C",
            Self::FirstBase => "1B",
            Self::SecondBase => "2B",
            Self::ThirdBase => "3B",
            Self::Shortstop => "SS",
            Self::Outfield => "OF",
        }
    }

    /// Full display name for UI labels.
    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Pitcher => "Pitcher",
            Self::Catcher => "Catcher",
            Self::FirstBase => "First Base",
            Self::SecondBase => "Second Base",
            Self::ThirdBase => "Third Base",
            Self::Shortstop => "Shortstop",
            Self::Outfield => "Outfield",
        }
    }

    /// Sort key for roster listings: position players first, pitchers last.
    pub fn sort_order(&self) -> u8 {
        match self {
            Self::Catcher => 0,
            Self::FirstBase => 1,
            Self::SecondBase => 2,
            Self::ThirdBase => 3,
            Self::Shortstop => 4,
            Self::Outfield => 5,
            Self::Pitcher => 6,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Per-position boolean flags as stored in the player table.
///
/// `bln_u` exists in the schema but does not confer slot eligibility on its
/// own; utility slots are derived from "not a pitcher" instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionFlags {
    pub bln_p: bool,
    pub bln_c: bool,
    pub bln_1b: bool,
    pub bln_2b: bool,
    pub bln_ss: bool,
    pub bln_3b: bool,
    pub bln_of: bool,
    pub bln_u: bool,
}

impl PositionFlags {
    /// Positions implied by the set flags, in schema check order.
    pub fn positions(&self) -> Vec<Position> {
        let mut out = Vec::new();
        if self.bln_p {
            out.push(Position::Pitcher);
        }
        if self.bln_c {
            out.push(Position::Catcher);
        }
        if self.bln_1b {
            out.push(Position::FirstBase);
        }
        if self.bln_2b {
            out.push(Position::SecondBase);
        }
        if self.bln_ss {
            out.push(Position::Shortstop);
        }
        if self.bln_3b {
            out.push(Position::ThirdBase);
        }
        if self.bln_of {
            out.push(Position::Outfield);
        }
        out
    }

    pub fn any(&self) -> bool {
        self.bln_p
            || self.bln_c
            || self.bln_1b
            || self.bln_2b
            || self.bln_ss
            || self.bln_3b
            || self.bln_of
    }

    /// Flags for a single position code (for writing back to the store).
    pub fn from_position(pos: Position) -> Self {
        let mut flags = Self::default();
        match pos {
            Position::Pitcher => flags.bln_p = true,
            Position::Catcher => flags.bln_c = true,
            Position::FirstBase => flags.bln_1b = true,
            Position::SecondBase => flags.bln_2b = true,
            Position::ThirdBase => flags.bln_3b = true,
            Position::Shortstop => flags.bln_ss = true,
            Position::Outfield => flags.bln_of = true,
        }
        flags
    }
}

/// Normalize a player's position data into an eligible-position set.
///
/// Preference order: explicit list, then boolean flags, then a single position
/// string. Unrecognized codes are dropped; duplicates (e.g. LF and RF both
/// folding to OF) are kept once. An empty result is valid and means the player
/// degrades to utility/taxi eligibility only.
pub fn infer_eligible_positions(
    explicit: Option<&[String]>,
    flags: Option<&PositionFlags>,
    single: Option<&str>,
) -> Vec<Position> {
    if let Some(codes) = explicit {
        let mut out = Vec::new();
        for code in codes {
            if let Some(pos) = Position::from_code(code) {
                if !out.contains(&pos) {
                    out.push(pos);
                }
            }
        }
        return out;
    }

    if let Some(flags) = flags {
        if flags.any() {
            return flags.positions();
        }
    }

    match single.and_then(Position::from_code) {
        Some(pos) => vec![pos],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Position::from_code("P"), Some(Position::Pitcher));
        assert_eq!(Position::from_code("SS"), Some(Position::Shortstop));
        assert_eq!(Position::from_code(" OF "), Some(Position::Outfield));
        assert_eq!(Position::from_code("LF"), Some(Position::Outfield));
        assert_eq!(Position::from_code("CF"), Some(Position::Outfield));
        assert_eq!(Position::from_code("RF"), Some(Position::Outfield));
        assert_eq!(Position::from_code("DH"), None);
        assert_eq!(Position::from_code(""), None);
    }

    #[test]
    fn test_full_names() {
        assert_eq!(Position::Pitcher.full_name(), "Pitcher");
        assert_eq!(Position::FirstBase.full_name(), "First Base");
        assert_eq!(Position::Outfield.full_name(), "Outfield");
    }

    #[test]
    fn test_sort_order_pitchers_last() {
        let mut positions = vec![
            Position::Pitcher,
            Position::Outfield,
            Position::Catcher,
            Position::Shortstop,
        ];
        positions.sort_by_key(|p| p.sort_order());
        assert_eq!(
            positions,
            vec![
                Position::Catcher,
                Position::Shortstop,
                Position::Outfield,
                Position::Pitcher
            ]
        );
    }

    #[test]
    fn test_flags_positions() {
        let flags = PositionFlags {
            bln_2b: true,
            bln_ss: true,
            ..Default::default()
        };
        assert_eq!(
            flags.positions(),
            vec![Position::SecondBase, Position::Shortstop]
        );
        assert!(flags.any());
        assert!(!PositionFlags::default().any());
    }

    #[test]
    fn test_flags_deserialize_missing_fields() {
        let flags: PositionFlags = serde_json::from_str(r#"{"bln_of": true}"#).unwrap();
        assert_eq!(flags.positions(), vec![Position::Outfield]);
    }

    #[test]
    fn test_infer_prefers_explicit_list() {
        let explicit = vec!["1B".to_string(), "OF".to_string()];
        let flags = PositionFlags {
            bln_p: true,
            ..Default::default()
        };
        let got = infer_eligible_positions(Some(&explicit), Some(&flags), Some("C"));
        assert_eq!(got, vec![Position::FirstBase, Position::Outfield]);
    }

    #[test]
    fn test_infer_falls_back_to_flags_then_single() {
        let flags = PositionFlags {
            bln_c: true,
            ..Default::default()
        };
        let got = infer_eligible_positions(None, Some(&flags), Some("SS"));
        assert_eq!(got, vec![Position::Catcher]);

        // Flags all false: the single position string wins.
        let got = infer_eligible_positions(None, Some(&PositionFlags::default()), Some("SS"));
        assert_eq!(got, vec![Position::Shortstop]);
    }

    #[test]
    fn test_infer_dedupes_outfield_codes() {
        let explicit = vec!["LF".to_string(), "RF".to_string(), "CF".to_string()];
        let got = infer_eligible_positions(Some(&explicit), None, None);
        assert_eq!(got, vec![Position::Outfield]);
    }

    #[test]
    fn test_infer_empty_when_nothing_recognized() {
        let got = infer_eligible_positions(None, None, Some("DH"));
        assert!(got.is_empty());
        let got = infer_eligible_positions(Some(&[]), None, Some("SS"));
        assert!(got.is_empty());
    }
}
