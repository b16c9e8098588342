//! Marriage announcements (20 and 40).
//!
//! Evaluation is pure: it only looks at the hand. Claiming is recorded in the
//! `AnnounceRegistry`, which the round mutates when the announcing card is
//! actually led.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Hand, Suit};
use crate::core::PlayerPosition;

/// Value of a marriage announcement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Announce {
    #[default]
    None,
    /// King and Queen of a non-trump suit.
    Twenty,
    /// King and Queen of the trump suit.
    Forty,
}

impl Announce {
    /// Round points credited for this announcement.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Announce::None => 0,
            Announce::Twenty => 20,
            Announce::Forty => 40,
        }
    }

    #[must_use]
    pub fn is_some(self) -> bool {
        self != Announce::None
    }
}

/// What leading `played_card` from `hand` would announce.
///
/// Returns `Announce::None` unless the card is a King or Queen held in the
/// hand together with its partner of the same suit.
#[must_use]
pub fn evaluate_announce(hand: &Hand, played_card: Card, trump: Suit) -> Announce {
    if !hand.contains(played_card) {
        return Announce::None;
    }
    let Some(partner) = played_card.rank.marriage_partner() else {
        return Announce::None;
    };
    if !hand.contains(Card::new(played_card.suit, partner)) {
        return Announce::None;
    }

    if played_card.suit == trump {
        Announce::Forty
    } else {
        Announce::Twenty
    }
}

/// Marriages already credited this round, keyed by (player, suit).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnounceRegistry {
    claimed: FxHashSet<(PlayerPosition, Suit)>,
}

impl AnnounceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Like `evaluate_announce`, but `None` once `player` has claimed the suit.
    #[must_use]
    pub fn evaluate(&self, player: PlayerPosition, hand: &Hand, played_card: Card, trump: Suit) -> Announce {
        if self.is_claimed(player, played_card.suit) {
            return Announce::None;
        }
        evaluate_announce(hand, played_card, trump)
    }

    #[must_use]
    pub fn is_claimed(&self, player: PlayerPosition, suit: Suit) -> bool {
        self.claimed.contains(&(player, suit))
    }

    /// Record a claim. Returns false if it was already claimed.
    pub fn claim(&mut self, player: PlayerPosition, suit: Suit) -> bool {
        self.claimed.insert((player, suit))
    }

    /// Number of marriages credited so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn hand(cards: &[&str]) -> Hand {
        cards.iter().map(|s| s.parse::<Card>().unwrap()).collect()
    }

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_forty_with_trump_marriage() {
        let h = hand(&["9c", "Kd", "Qd", "Js", "Ah", "10h"]);
        assert_eq!(evaluate_announce(&h, card("Qd"), Suit::Diamonds), Announce::Forty);
        assert_eq!(evaluate_announce(&h, card("Kd"), Suit::Diamonds), Announce::Forty);
    }

    #[test]
    fn test_twenty_with_plain_marriage() {
        let h = hand(&["9c", "Kd", "Qd", "Js", "Ah", "10h"]);
        assert_eq!(evaluate_announce(&h, card("Qd"), Suit::Spades), Announce::Twenty);
    }

    #[test]
    fn test_no_announce_without_partner() {
        let h = hand(&["Kd", "Qh", "Js"]);
        assert_eq!(evaluate_announce(&h, card("Kd"), Suit::Diamonds), Announce::None);
        assert_eq!(evaluate_announce(&h, card("Qh"), Suit::Diamonds), Announce::None);
    }

    #[test]
    fn test_no_announce_for_other_ranks_or_missing_card() {
        let h = hand(&["Kd", "Qd", "Jd"]);
        assert_eq!(evaluate_announce(&h, card("Jd"), Suit::Diamonds), Announce::None);
        assert_eq!(
            evaluate_announce(&h, Card::new(Suit::Clubs, Rank::King), Suit::Diamonds),
            Announce::None
        );
    }

    #[test]
    fn test_registry_blocks_repeat_claims() {
        let h = hand(&["Kh", "Qh"]);
        let mut registry = AnnounceRegistry::new();
        let p = PlayerPosition::First;

        assert_eq!(registry.evaluate(p, &h, card("Kh"), Suit::Clubs), Announce::Twenty);
        assert!(registry.claim(p, Suit::Hearts));
        assert!(!registry.claim(p, Suit::Hearts));

        assert_eq!(registry.evaluate(p, &h, card("Kh"), Suit::Clubs), Announce::None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_points() {
        assert_eq!(Announce::None.points(), 0);
        assert_eq!(Announce::Twenty.points(), 20);
        assert_eq!(Announce::Forty.points(), 40);
        assert!(!Announce::default().is_some());
    }
}
