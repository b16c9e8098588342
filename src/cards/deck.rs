//! The talon.
//!
//! Cards are stored bottom-first: index 0 is the face-up trump card, the last
//! element is the next card to be drawn. The trump card is therefore always
//! the final card dealt from the talon.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::{EngineError, GameRng, Result};

/// Ordered pile of undealt cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A freshly shuffled 24-card deck.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = Card::full_deck();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Build a deck from explicit cards, bottom (trump card) first.
    ///
    /// Rejects duplicates, since a real deck never holds the same card twice.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(EngineError::MalformedCard(format!(
                    "duplicate card {card} in deck"
                )));
            }
        }
        Ok(Self { cards })
    }

    /// An empty talon.
    #[must_use]
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Number of cards still in the talon.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the talon is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The visible trump card at the bottom, while the talon is non-empty.
    #[must_use]
    pub fn trump_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Replace the bottom card, returning the card that was there.
    pub fn swap_trump_card(&mut self, replacement: Card) -> Result<Card> {
        let bottom = self
            .cards
            .first_mut()
            .ok_or_else(|| EngineError::invalid_state("no trump card left in the talon"))?;
        Ok(std::mem::replace(bottom, replacement))
    }

    /// Cards bottom-first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_shuffled_deck_is_complete() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.len(), 24);

        let mut sorted = deck.cards().to_vec();
        sorted.sort();
        assert_eq!(sorted, Card::full_deck());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = Deck::shuffled(&mut GameRng::new(9));
        let b = Deck::shuffled(&mut GameRng::new(9));
        let c = Deck::shuffled(&mut GameRng::new(10));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_draw_from_top_trump_last() {
        let mut deck = Deck::from_cards(vec![card("9h"), card("As"), card("Kc")]).unwrap();
        assert_eq!(deck.trump_card(), Some(card("9h")));

        assert_eq!(deck.draw(), Some(card("Kc")));
        assert_eq!(deck.draw(), Some(card("As")));
        assert_eq!(deck.trump_card(), Some(card("9h")));
        assert_eq!(deck.draw(), Some(card("9h")));
        assert_eq!(deck.trump_card(), None);
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_swap_trump_card() {
        let mut deck = Deck::from_cards(vec![card("Ah"), card("Js")]).unwrap();
        let old = deck.swap_trump_card(Card::new(Suit::Hearts, Rank::Nine)).unwrap();
        assert_eq!(old, card("Ah"));
        assert_eq!(deck.trump_card(), Some(card("9h")));
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_swap_on_empty_deck_fails() {
        let mut deck = Deck::empty();
        assert!(matches!(
            deck.swap_trump_card(card("9h")),
            Err(EngineError::InvalidState(_))
        ));
    }

    #[test]
    fn test_duplicates_rejected() {
        let result = Deck::from_cards(vec![card("Ah"), card("Ah")]);
        assert!(matches!(result, Err(EngineError::MalformedCard(_))));
    }
}
