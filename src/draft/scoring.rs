//! Fantasy point scoring.
//!
//! Stat lines deserialize straight from the stats API's camelCase fields.
//! Pitchers score on the pitching table, everyone else on the batting table;
//! leagues can override individual weights, with the reference defaults
//! below filling the gaps.

use serde::{Deserialize, Serialize};

/// A batter's counting stats for a scoring period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BattingStats {
    pub runs: f64,
    pub rbi: f64,
    pub home_runs: f64,
    pub stolen_bases: f64,
    pub hits: f64,
    pub doubles: f64,
    pub triples: f64,
    pub base_on_balls: f64,
    pub hit_by_pitch: f64,
    pub strike_outs: f64,
}

/// A pitcher's counting stats for a scoring period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PitchingStats {
    pub wins: f64,
    pub saves: f64,
    pub innings_pitched: f64,
    pub strike_outs: f64,
    pub quality_starts: f64,
    pub earned_runs: f64,
    pub hits: f64,
    pub base_on_balls: f64,
    pub hit_batsmen: f64,
    pub complete_games: f64,
    pub shutouts: f64,
}

/// Per-event weights for batters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattingRules {
    pub run: f64,
    pub rbi: f64,
    pub home_run: f64,
    pub stolen_base: f64,
    pub hit: f64,
    pub double: f64,
    pub triple: f64,
    pub walk: f64,
    pub hit_by_pitch: f64,
    pub strikeout: f64,
}

impl Default for BattingRules {
    fn default() -> Self {
        Self {
            run: 1.0,
            rbi: 1.0,
            home_run: 4.0,
            stolen_base: 2.0,
            hit: 1.0,
            double: 1.0,
            triple: 2.0,
            walk: 1.0,
            hit_by_pitch: 1.0,
            strikeout: -0.5,
        }
    }
}

/// Per-event weights for pitchers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchingRules {
    pub win: f64,
    pub save: f64,
    pub inning_pitched: f64,
    pub strikeout: f64,
    pub quality_start: f64,
    pub earned_run: f64,
    pub hit: f64,
    pub walk: f64,
    pub hit_batsman: f64,
    pub complete_game: f64,
    pub shutout: f64,
}

impl Default for PitchingRules {
    fn default() -> Self {
        Self {
            win: 5.0,
            save: 5.0,
            inning_pitched: 1.0,
            strikeout: 1.0,
            quality_start: 3.0,
            earned_run: -1.0,
            hit: -0.5,
            walk: -0.5,
            hit_batsman: -0.5,
            complete_game: 5.0,
            shutout: 5.0,
        }
    }
}

/// League scoring configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub batting: BattingRules,
    pub pitching: PitchingRules,
}

impl ScoringRules {
    /// Fantasy points for a batting line, rounded to one decimal place.
    pub fn batting_points(&self, stats: &BattingStats) -> f64 {
        let r = &self.batting;
        let points = stats.runs * r.run
            + stats.rbi * r.rbi
            + stats.home_runs * r.home_run
            + stats.stolen_bases * r.stolen_base
            + stats.hits * r.hit
            + stats.doubles * r.double
            + stats.triples * r.triple
            + stats.base_on_balls * r.walk
            + stats.hit_by_pitch * r.hit_by_pitch
            + stats.strike_outs * r.strikeout;
        round_tenth(points)
    }

    /// Fantasy points for a pitching line, rounded to one decimal place.
    pub fn pitching_points(&self, stats: &PitchingStats) -> f64 {
        let r = &self.pitching;
        let points = stats.wins * r.win
            + stats.saves * r.save
            + stats.innings_pitched * r.inning_pitched
            + stats.strike_outs * r.strikeout
            + stats.quality_starts * r.quality_start
            + stats.earned_runs * r.earned_run
            + stats.hits * r.hit
            + stats.base_on_balls * r.walk
            + stats.hit_batsmen * r.hit_batsman
            + stats.complete_games * r.complete_game
            + stats.shutouts * r.shutout;
        round_tenth(points)
    }
}

/// A stat line tagged with which scoring table applies. The caller picks the
/// variant from the player's position; the two raw shapes overlap too much
/// for self-describing deserialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatLine {
    Pitching(PitchingStats),
    Batting(BattingStats),
}

impl StatLine {
    pub fn points(&self, rules: &ScoringRules) -> f64 {
        match self {
            Self::Pitching(stats) => rules.pitching_points(stats),
            Self::Batting(stats) => rules.batting_points(stats),
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
