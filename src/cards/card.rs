//! Cards: suits, ranks, and the fixed point table.
//!
//! ## Canonical Ordering
//!
//! Ranks are declared in strength order, weakest first:
//!
//! | Rank  | Points |
//! |-------|--------|
//! | Nine  | 0      |
//! | Jack  | 2      |
//! | Queen | 3      |
//! | King  | 4      |
//! | Ten   | 10     |
//! | Ace   | 11     |
//!
//! Points are unique within a suit, so comparing points and comparing ranks
//! agree. Suits are ordered Clubs < Diamonds < Hearts < Spades; this order only
//! exists for stable sorting and indexing and carries no game meaning.
//!
//! `Suit::index` and `Rank::index` are the single place where the enums map
//! to array positions (see `CardTracker`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::EngineError;

/// One of the four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Position of this suit in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    /// Unicode symbol used by `Display`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            '♣' | 'c' | 'C' => Some(Suit::Clubs),
            '♦' | 'd' | 'D' => Some(Suit::Diamonds),
            '♥' | 'h' | 'H' => Some(Suit::Hearts),
            '♠' | 's' | 'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Suit::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| EngineError::MalformedCard(format!("suit index {value} out of range")))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, declared weakest to strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Nine,
    Jack,
    Queen,
    King,
    Ten,
    Ace,
}

impl Rank {
    /// All ranks in strength order.
    pub const ALL: [Rank; 6] = [
        Rank::Nine,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ten,
        Rank::Ace,
    ];

    /// Position of this rank in `Rank::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Rank::Nine => 0,
            Rank::Jack => 1,
            Rank::Queen => 2,
            Rank::King => 3,
            Rank::Ten => 4,
            Rank::Ace => 5,
        }
    }

    /// Trick points carried by a card of this rank.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Rank::Nine => 0,
            Rank::Jack => 2,
            Rank::Queen => 3,
            Rank::King => 4,
            Rank::Ten => 10,
            Rank::Ace => 11,
        }
    }

    /// The other half of a marriage, if this rank can be part of one.
    #[must_use]
    pub const fn marriage_partner(self) -> Option<Rank> {
        match self {
            Rank::King => Some(Rank::Queen),
            Rank::Queen => Some(Rank::King),
            _ => None,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Rank::Nine => "9",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ten => "10",
            Rank::Ace => "A",
        }
    }

    fn from_label(label: &str) -> Option<Rank> {
        match label {
            "9" => Some(Rank::Nine),
            "J" | "j" => Some(Rank::Jack),
            "Q" | "q" => Some(Rank::Queen),
            "K" | "k" => Some(Rank::King),
            "10" | "T" | "t" => Some(Rank::Ten),
            "A" | "a" => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| EngineError::MalformedCard(format!("rank index {value} out of range")))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable playing card.
///
/// `Ord` sorts by suit then rank and is only meant for stable display order.
/// Trick resolution never uses it; see `rules::trick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Point value of this card.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.rank.points()
    }

    /// Whether this card belongs to the given trump suit.
    #[must_use]
    pub fn is_trump(self, trump: Suit) -> bool {
        self.suit == trump
    }

    /// The 24 cards of a Santase deck in canonical order (suit-major).
    #[must_use]
    pub fn full_deck() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Parse `"A♠"`, `"AS"`, `"10h"`, `"Tc"` and similar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let malformed = || EngineError::MalformedCard(format!("cannot parse card {s:?}"));

        let suit_char = trimmed.chars().last().ok_or_else(malformed)?;
        let suit = Suit::from_char(suit_char).ok_or_else(malformed)?;
        let rank_label = &trimmed[..trimmed.len() - suit_char.len_utf8()];
        let rank = Rank::from_label(rank_label).ok_or_else(malformed)?;

        Ok(Card::new(suit, rank))
    }
}
