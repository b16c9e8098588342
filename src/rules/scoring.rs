//! Round scoring: converting round points into game points.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, PlayerPair, PlayerPosition, Result};
use crate::round::RoundState;

/// Why a round ended the way it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundEndReason {
    /// The winner reached the round target.
    ReachedTarget,
    /// The closer failed to reach the round target.
    CloserFailed,
    /// All cards were played and nobody reached the target; the last trick
    /// decided the round.
    LastTrick,
}

/// Final result of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: PlayerPosition,
    /// Game points awarded to the winner (1, 2 or 3 with standard rules).
    pub game_points: u32,
    pub reason: RoundEndReason,
    /// Round points of both players when the round ended.
    pub round_points: PlayerPair<u32>,
    pub closed_by: Option<PlayerPosition>,
}

impl RoundOutcome {
    #[must_use]
    pub fn loser(&self) -> PlayerPosition {
        self.winner.other()
    }
}

/// Game points won against `loser`: 3 if they took no trick, 2 if they have
/// fewer than `low_points_threshold` round points, otherwise 1.
#[must_use]
pub fn margin_points(state: &RoundState, loser: PlayerPosition) -> u32 {
    let score = &state.scores[loser];
    if !score.has_won_trick() {
        3
    } else if score.total() < state.rules.low_points_threshold {
        2
    } else {
        1
    }
}

/// Score a finished round.
///
/// `last_trick_winner` decides the round when neither player reached the
/// target; a round with no tricks played cannot be scored.
pub fn score_round(state: &RoundState, last_trick_winner: Option<PlayerPosition>) -> Result<RoundOutcome> {
    let round_points = PlayerPair::from_fn(|p| state.round_points(p));

    let (winner, game_points, reason) = match state.closed_by {
        Some(closer) if !state.has_reached_target(closer) => (
            closer.other(),
            state.rules.closing_penalty,
            RoundEndReason::CloserFailed,
        ),
        Some(closer) => (
            closer,
            margin_points(state, closer.other()),
            RoundEndReason::ReachedTarget,
        ),
        None => {
            let first = state.has_reached_target(PlayerPosition::First);
            let second = state.has_reached_target(PlayerPosition::Second);
            let leader_by_points = if round_points[PlayerPosition::First] >= round_points[PlayerPosition::Second] {
                PlayerPosition::First
            } else {
                PlayerPosition::Second
            };

            match (first, second) {
                (true, false) => (
                    PlayerPosition::First,
                    margin_points(state, PlayerPosition::Second),
                    RoundEndReason::ReachedTarget,
                ),
                (false, true) => (
                    PlayerPosition::Second,
                    margin_points(state, PlayerPosition::First),
                    RoundEndReason::ReachedTarget,
                ),
                (true, true) => (
                    leader_by_points,
                    margin_points(state, leader_by_points.other()),
                    RoundEndReason::ReachedTarget,
                ),
                (false, false) => {
                    let winner = last_trick_winner.ok_or_else(|| {
                        EngineError::invalid_state("cannot score a round in which no trick was played")
                    })?;
                    (winner, 1, RoundEndReason::LastTrick)
                }
            }
        }
    };

    Ok(RoundOutcome {
        winner,
        game_points,
        reason,
        round_points,
        closed_by: state.closed_by,
    })
}
