//! Core engine types: players, actions, rule configuration, RNG, errors.
//!
//! Everything here is game-structure plumbing. Card values live in `cards`,
//! rule logic in `rules`, the state machine in `round` and `game`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{ActionRecord, PlayerAction};
pub use config::RuleSet;
pub use error::{EngineError, Rejection, Result};
pub use player::{PlayerPair, PlayerPosition};
pub use rng::{GameRng, GameRngState};
