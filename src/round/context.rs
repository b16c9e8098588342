//! Read-only view handed to a strategy each turn.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardTracker, Hand, Suit};
use crate::core::PlayerPosition;

/// Snapshot of what the acting player may know.
///
/// Everything is copied out of the round; a strategy cannot reach engine
/// state through it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    /// Seat of the acting player.
    pub player: PlayerPosition,

    pub trump_suit: Suit,

    /// Visible trump card, while the talon holds it.
    pub trump_card: Option<Card>,

    pub cards_left_in_deck: usize,

    /// The acting player leads this trick.
    pub is_leading: bool,

    /// Card led by the opponent when responding.
    pub first_played_card: Option<Card>,

    pub first_player_round_points: u32,

    pub second_player_round_points: u32,

    pub should_observe_rules: bool,

    pub can_close: bool,

    pub can_change_trump: bool,

    pub can_announce: bool,

    /// Current trick number, starting at 1.
    pub trick_number: u32,

    /// Who closed the talon, if anyone.
    pub closed_by: Option<PlayerPosition>,

    /// Cards played so far this round, including `first_played_card`.
    pub played_cards: CardTracker,

    /// The acting player's own cards.
    pub hand: Hand,
}

impl TurnContext {
    /// Round points of the acting player.
    #[must_use]
    pub fn my_points(&self) -> u32 {
        self.points_of(self.player)
    }

    /// Round points of the opponent.
    #[must_use]
    pub fn opponent_points(&self) -> u32 {
        self.points_of(self.player.other())
    }

    fn points_of(&self, player: PlayerPosition) -> u32 {
        match player {
            PlayerPosition::First => self.first_player_round_points,
            PlayerPosition::Second => self.second_player_round_points,
        }
    }
}
