//! Trick resolution.
//!
//! `resolve_trick` is a pure function of the trump suit and the two cards.
//! Legality of the responder's card is the validator's business; by the time
//! a trick is resolved both cards are assumed legal.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::PlayerPosition;

/// Which role won the trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrickWinner {
    Leader,
    Responder,
}

impl TrickWinner {
    /// Seat of the winner, given the seat that led.
    #[must_use]
    pub const fn position(self, leader: PlayerPosition) -> PlayerPosition {
        match self {
            TrickWinner::Leader => leader,
            TrickWinner::Responder => leader.other(),
        }
    }
}

/// Result of resolving one trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickOutcome {
    pub winner: TrickWinner,
    /// Sum of both cards' values, credited to the winner.
    pub points: u32,
}

/// Decide a trick.
///
/// Same suit: higher value wins. Otherwise a trump beats a non-trump, and
/// if neither card is trump the leader wins.
#[must_use]
pub fn resolve_trick(trump: Suit, leader_card: Card, responder_card: Card) -> TrickOutcome {
    let points = leader_card.value() + responder_card.value();

    let winner = if leader_card.suit == responder_card.suit {
        if responder_card.value() > leader_card.value() {
            TrickWinner::Responder
        } else {
            TrickWinner::Leader
        }
    } else if responder_card.is_trump(trump) {
        TrickWinner::Responder
    } else {
        TrickWinner::Leader
    };

    TrickOutcome { winner, points }
}

/// The in-progress trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    /// Seat leading this trick.
    pub leader: PlayerPosition,
    /// Card led, once played.
    pub leader_card: Option<Card>,
}

impl Trick {
    #[must_use]
    pub fn new(leader: PlayerPosition) -> Self {
        Self {
            leader,
            leader_card: None,
        }
    }

    /// Seat expected to act next.
    #[must_use]
    pub fn active_player(&self) -> PlayerPosition {
        match self.leader_card {
            None => self.leader,
            Some(_) => self.leader.other(),
        }
    }

    #[must_use]
    pub fn is_leading(&self, player: PlayerPosition) -> bool {
        self.leader_card.is_none() && player == self.leader
    }
}
