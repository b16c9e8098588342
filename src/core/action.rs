//! Player actions and the per-round action log.
//!
//! A turn always ends with a card leaving a hand. `ChangeTrump` and
//! `CloseGame` are leader-only preludes: after either one the same player
//! still has to play a card.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use super::player::PlayerPosition;

/// The one action a strategy returns per request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Play a card into the current trick.
    PlayCard(Card),
    /// Swap the trump Nine from hand for the visible trump card.
    ChangeTrump,
    /// Close the talon: no more draws, follow-suit rules apply.
    CloseGame,
    /// Lead a King or Queen and claim its marriage.
    Announce(Card),
}

impl PlayerAction {
    /// The card this action puts on the table, if any.
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        match self {
            PlayerAction::PlayCard(card) | PlayerAction::Announce(card) => Some(*card),
            PlayerAction::ChangeTrump | PlayerAction::CloseGame => None,
        }
    }
}

impl std::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerAction::PlayCard(card) => write!(f, "play {card}"),
            PlayerAction::ChangeTrump => f.write_str("change trump"),
            PlayerAction::CloseGame => f.write_str("close"),
            PlayerAction::Announce(card) => write!(f, "announce with {card}"),
        }
    }
}

/// An accepted action with the trick it belonged to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerPosition,

    /// The action taken.
    pub action: PlayerAction,

    /// Trick number (1-based) when the action was taken.
    pub trick: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerPosition, action: PlayerAction, trick: u32) -> Self {
        Self {
            player,
            action,
            trick,
        }
    }
}
