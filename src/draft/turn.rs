//! Snake-draft turn order.
//!
//! Pick order runs through the id-sorted team list ascending in odd rounds
//! and descending in even rounds. The calculator is pure: given the ordered
//! teams and how many picks are already on the board, it names the team that
//! owns the next pick. It is round-count-agnostic; the league's configured
//! total lives in [`DEFAULT_TOTAL_ROUNDS`] for callers that want to cap the
//! board display.

use crate::draft::team::Team;

/// Rounds in a full league draft (18 roster slots plus history padding).
pub const DEFAULT_TOTAL_ROUNDS: usize = 25;

/// 1-based round for a 1-based pick number. `None` when there are no teams.
pub fn round_number(pick_number: usize, team_count: usize) -> Option<usize> {
    if team_count == 0 || pick_number == 0 {
        return None;
    }
    Some(pick_number.div_ceil(team_count))
}

/// Index into the ascending id-sorted team list for a 1-based pick number.
pub fn seat_for_pick(pick_number: usize, team_count: usize) -> Option<usize> {
    let round = round_number(pick_number, team_count)?;
    let position_in_round = (pick_number - 1) % team_count;
    if round % 2 == 1 {
        Some(position_in_round)
    } else {
        Some(team_count - 1 - position_in_round)
    }
}

/// The team that owns pick `completed_picks + 1`.
///
/// Teams are addressed by ascending `team_id` regardless of input order.
/// `None` when `teams` is empty; the caller guards that case.
pub fn team_on_clock(teams: &[Team], completed_picks: usize) -> Option<&Team> {
    let mut sorted: Vec<&Team> = teams.iter().collect();
    sorted.sort_by_key(|t| t.team_id);

    let seat = seat_for_pick(completed_picks + 1, sorted.len())?;
    sorted.get(seat).copied()
}
