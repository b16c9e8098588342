//! Player identification and per-player data storage.
//!
//! ## PlayerPosition
//!
//! Santase is strictly two-player. `PlayerPosition` names the seat, not the
//! role in a trick: whoever leads a trick can be either seat.
//!
//! ## PlayerPair
//!
//! Fixed-size per-player storage indexed by `PlayerPosition`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerPosition {
    First,
    Second,
}

impl PlayerPosition {
    /// Both seats, first seat first.
    pub const BOTH: [PlayerPosition; 2] = [PlayerPosition::First, PlayerPosition::Second];

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerPosition::First => PlayerPosition::Second,
            PlayerPosition::Second => PlayerPosition::First,
        }
    }

    /// Raw index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerPosition::First => 0,
            PlayerPosition::Second => 1,
        }
    }
}

impl std::fmt::Display for PlayerPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerPosition::First => f.write_str("first player"),
            PlayerPosition::Second => f.write_str("second player"),
        }
    }
}

/// Per-player data with O(1) access.
///
/// ```
/// use santase_engine::core::{PlayerPair, PlayerPosition};
///
/// let mut scores: PlayerPair<u32> = PlayerPair::default();
/// scores[PlayerPosition::Second] += 2;
/// assert_eq!(scores[PlayerPosition::First], 0);
/// assert_eq!(scores[PlayerPosition::Second], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create from explicit first/second values.
    pub fn new(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create with a factory receiving each position.
    pub fn from_fn(mut factory: impl FnMut(PlayerPosition) -> T) -> Self {
        Self::new(
            factory(PlayerPosition::First),
            factory(PlayerPosition::Second),
        )
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerPosition) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerPosition) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerPosition, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerPosition, &T)> {
        PlayerPosition::BOTH.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerPosition, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerPosition, &mut T)> {
        PlayerPosition::BOTH.into_iter().zip(self.data.iter_mut())
    }

    /// Map each entry into a new pair.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerPair<U> {
        PlayerPair::new(f(&self.data[0]), f(&self.data[1]))
    }
}

impl<T> Index<PlayerPosition> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerPosition) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerPosition> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerPosition) -> &mut Self::Output {
        self.get_mut(player)
    }
}
