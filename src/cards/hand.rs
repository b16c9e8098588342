//! A player's hand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Rank, Suit};

/// Cards held by one player. Never more than six in a legal game, so the
/// storage stays inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 6]>,
}

impl Hand {
    /// An empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a drawn card.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove a card, returning whether it was present.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Swap `old` for `new` in place. Returns false if `old` is missing.
    pub fn replace(&mut self, old: Card, new: Card) -> bool {
        match self.cards.iter_mut().find(|c| **c == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit == suit)
    }

    /// Whether the hand holds both King and Queen of `suit`.
    #[must_use]
    pub fn has_marriage(&self, suit: Suit) -> bool {
        self.contains(Card::new(suit, Rank::King)) && self.contains(Card::new(suit, Rank::Queen))
    }

    /// Cards of one suit.
    pub fn cards_of_suit(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.suit == suit)
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Sum of card values in hand.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.cards.iter().map(|c| c.value()).sum()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: &[&str]) -> Hand {
        cards.iter().map(|s| s.parse::<Card>().unwrap()).collect()
    }

    #[test]
    fn test_add_and_remove() {
        let mut h = hand(&["9c", "Kd"]);
        h.add("As".parse().unwrap());
        assert_eq!(h.len(), 3);

        assert!(h.remove("Kd".parse().unwrap()));
        assert!(!h.remove("Kd".parse().unwrap()));
        assert_eq!(h.len(), 2);
        assert!(!h.contains("Kd".parse().unwrap()));
    }

    #[test]
    fn test_replace() {
        let mut h = hand(&["9h", "Js"]);
        assert!(h.replace("9h".parse().unwrap(), "Ah".parse().unwrap()));
        assert!(h.contains("Ah".parse().unwrap()));
        assert!(!h.replace("9h".parse().unwrap(), "Ah".parse().unwrap()));
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn test_suit_queries() {
        let h = hand(&["9c", "Kd", "Qd", "Js", "Ah", "10h"]);
        assert!(h.has_suit(Suit::Hearts));
        assert!(h.has_marriage(Suit::Diamonds));
        assert!(!h.has_marriage(Suit::Hearts));

        let hearts: Vec<_> = h.cards_of_suit(Suit::Hearts).collect();
        assert_eq!(hearts.len(), 2);
        assert_eq!(h.points(), 30);
    }
}
