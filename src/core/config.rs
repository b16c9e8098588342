//! Rule configuration.
//!
//! `RuleSet` holds every number the engine would otherwise hard-code. The
//! defaults are standard Santase; variants (game to 7, no last-trick bonus)
//! are one builder call away.

use serde::{Deserialize, Serialize};

/// Scoring thresholds and rule variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Round points needed to win a round (default: 66).
    pub points_to_win_round: u32,

    /// Game points needed to win the game (default: 11).
    pub game_points_to_win: u32,

    /// Bonus for the final trick of a round played out after the talon was
    /// drawn empty (default: 10). Never awarded in a closed round.
    pub last_trick_bonus: u32,

    /// Game points the opponent receives when the closer misses
    /// `points_to_win_round` (default: 3).
    pub closing_penalty: u32,

    /// A loser below this many round points concedes 2 game points instead
    /// of 1 (default: 33).
    pub low_points_threshold: u32,

    /// Fewest cards that must remain in the talon for closing (default: 2).
    pub min_cards_to_close: usize,

    /// Forbid closing, trump exchange and announcing on the first trick of a
    /// round (default: false).
    pub first_trick_restricted: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            points_to_win_round: 66,
            game_points_to_win: 11,
            last_trick_bonus: 10,
            closing_penalty: 3,
            low_points_threshold: 33,
            min_cards_to_close: 2,
            first_trick_restricted: false,
        }
    }
}

impl RuleSet {
    /// Standard rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game target score.
    pub fn with_game_points_to_win(mut self, points: u32) -> Self {
        self.game_points_to_win = points;
        self
    }

    /// Set the round target.
    pub fn with_points_to_win_round(mut self, points: u32) -> Self {
        self.points_to_win_round = points;
        self
    }

    /// Set the last-trick bonus (0 disables it).
    pub fn with_last_trick_bonus(mut self, bonus: u32) -> Self {
        self.last_trick_bonus = bonus;
        self
    }

    /// Set the minimum talon size for closing.
    pub fn with_min_cards_to_close(mut self, cards: usize) -> Self {
        self.min_cards_to_close = cards;
        self
    }

    /// Enable or disable the first-trick restriction.
    pub fn with_first_trick_restricted(mut self, restricted: bool) -> Self {
        self.first_trick_restricted = restricted;
        self
    }
}
