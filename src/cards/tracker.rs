//! Played-card table.
//!
//! Owned by the round and handed out by copy in `TurnContext`, so strategies
//! can ask suit-exhaustion questions without touching engine state.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};

/// 4×6 grid of "already played" flags, indexed by `Suit::index` and
/// `Rank::index`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTracker {
    played: [[bool; 6]; 4],
}

impl CardTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a card as played.
    pub fn mark(&mut self, card: Card) {
        self.played[card.suit.index()][card.rank.index()] = true;
    }

    #[must_use]
    pub fn is_played(&self, card: Card) -> bool {
        self.played[card.suit.index()][card.rank.index()]
    }

    /// Cards of `suit` not yet played, weakest first.
    pub fn remaining_in_suit(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        Rank::ALL
            .into_iter()
            .map(move |rank| Card::new(suit, rank))
            .filter(move |&card| !self.is_played(card))
    }

    /// Whether every card of `suit` has been played.
    #[must_use]
    pub fn is_suit_exhausted(&self, suit: Suit) -> bool {
        self.played[suit.index()].iter().all(|&p| p)
    }

    #[must_use]
    pub fn played_count(&self) -> usize {
        self.played.iter().flatten().filter(|&&p| p).count()
    }

    /// All played cards in canonical order.
    pub fn played_cards(&self) -> impl Iterator<Item = Card> + '_ {
        Card::full_deck()
            .into_iter()
            .filter(move |&card| self.is_played(card))
    }
}
