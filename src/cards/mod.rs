//! Card model: cards, the talon, hands, and the played-card table.
//!
//! ## Key Types
//!
//! - `Card`, `Suit`, `Rank`: immutable values with the fixed point table
//! - `Deck`: the talon; its bottom card is the visible trump card
//! - `Hand`: up to six cards owned by one player
//! - `CardTracker`: which cards have been played this round

pub mod card;
pub mod deck;
pub mod hand;
pub mod tracker;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use hand::Hand;
pub use tracker::CardTracker;
