//! Public round state.
//!
//! Everything in `RoundState` is visible to both players. Hands, the talon
//! order and the played-card table live in `Round` next to it.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::{PlayerPair, PlayerPosition, RuleSet};
use crate::rules::AnnounceRegistry;

/// Where the round is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Talon open: draws after each trick, no follow-suit obligation.
    Open,
    /// Talon closed by a player: no draws, follow-suit rules apply.
    Closed,
    /// Talon drawn empty: follow-suit rules apply.
    Exhausted,
    /// Round finished; see `Round::outcome`.
    Over,
}

/// Points collected by one player this round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerScore {
    /// Card points from won tricks.
    pub trick_points: u32,
    /// Marriage points (20/40).
    pub announce_points: u32,
    /// Last-trick bonus.
    pub bonus_points: u32,
    /// Number of tricks won.
    pub tricks_won: u32,
}

impl PlayerScore {
    /// Total round points.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.trick_points + self.announce_points + self.bonus_points
    }

    #[must_use]
    pub fn has_won_trick(&self) -> bool {
        self.tricks_won > 0
    }
}

/// Public state of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Rules in force.
    pub rules: RuleSet,

    /// Trump suit for the whole round.
    pub trump_suit: Suit,

    /// Face-up card under the talon; `None` once it has been drawn.
    pub trump_card: Option<Card>,

    /// Cards remaining in the talon.
    pub cards_left_in_deck: usize,

    pub phase: RoundPhase,

    /// Who closed the talon, if anyone did.
    pub closed_by: Option<PlayerPosition>,

    pub scores: PlayerPair<PlayerScore>,

    /// Current trick number, starting at 1.
    pub trick_number: u32,

    pub announces: AnnounceRegistry,
}

impl RoundState {
    /// Fresh state for a round with the given talon.
    #[must_use]
    pub fn new(rules: RuleSet, trump_suit: Suit, trump_card: Option<Card>, cards_left_in_deck: usize) -> Self {
        let phase = if cards_left_in_deck == 0 {
            RoundPhase::Exhausted
        } else {
            RoundPhase::Open
        };

        Self {
            rules,
            trump_suit,
            trump_card,
            cards_left_in_deck,
            phase,
            closed_by: None,
            scores: PlayerPair::default(),
            trick_number: 1,
            announces: AnnounceRegistry::new(),
        }
    }

    /// True once the talon is exhausted or closed: the responder must follow
    /// suit and beat if possible.
    #[must_use]
    pub fn should_observe_rules(&self) -> bool {
        self.closed_by.is_some() || self.cards_left_in_deck == 0
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed_by.is_some()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::Over
    }

    /// Talon still open for drawing.
    #[must_use]
    pub fn is_talon_open(&self) -> bool {
        self.cards_left_in_deck > 0 && self.closed_by.is_none()
    }

    #[must_use]
    pub fn is_first_trick(&self) -> bool {
        self.trick_number == 1
    }

    /// Total round points of a player.
    #[must_use]
    pub fn round_points(&self, player: PlayerPosition) -> u32 {
        self.scores[player].total()
    }

    /// Whether a player has reached the round target.
    #[must_use]
    pub fn has_reached_target(&self, player: PlayerPosition) -> bool {
        self.round_points(player) >= self.rules.points_to_win_round
    }

    /// Combined card points of both players.
    #[must_use]
    pub fn total_trick_points(&self) -> u32 {
        PlayerPosition::BOTH
            .iter()
            .map(|&p| self.scores[p].trick_points)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn open_state(cards_left: usize) -> RoundState {
        RoundState::new(
            RuleSet::default(),
            Suit::Hearts,
            Some(Card::new(Suit::Hearts, Rank::Ace)),
            cards_left,
        )
    }

    #[test]
    fn test_new_state() {
        let state = open_state(12);
        assert_eq!(state.phase, RoundPhase::Open);
        assert!(!state.should_observe_rules());
        assert!(state.is_talon_open());
        assert!(state.is_first_trick());
        assert_eq!(state.round_points(PlayerPosition::First), 0);
    }

    #[test]
    fn test_observe_rules_when_closed_or_exhausted() {
        let mut state = open_state(8);
        state.closed_by = Some(PlayerPosition::Second);
        assert!(state.should_observe_rules());
        assert!(!state.is_talon_open());

        let exhausted = RoundState::new(RuleSet::default(), Suit::Hearts, None, 0);
        assert_eq!(exhausted.phase, RoundPhase::Exhausted);
        assert!(exhausted.should_observe_rules());
    }

    #[test]
    fn test_round_points_include_announces_and_bonus() {
        let mut state = open_state(0);
        state.scores[PlayerPosition::First] = PlayerScore {
            trick_points: 30,
            announce_points: 20,
            bonus_points: 10,
            tricks_won: 3,
        };
        assert_eq!(state.round_points(PlayerPosition::First), 60);
        assert!(!state.has_reached_target(PlayerPosition::First));

        state.scores[PlayerPosition::First].trick_points = 36;
        assert!(state.has_reached_target(PlayerPosition::First));
        assert_eq!(state.total_trick_points(), 36);
    }

    #[test]
    fn test_state_serialization() {
        let state = open_state(10);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: RoundState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
