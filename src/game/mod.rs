//! Games: sequences of rounds scored to a target, and the runner that plays
//! them with strategies.
//!
//! ## Key Types
//!
//! - `Game`: deals rounds, credits game points, rotates the lead
//! - `RunnerConfig`, `play_round`, `play_game`: drive rounds with a pair of
//!   `Strategy` objects

pub mod engine;
pub mod runner;

pub use engine::{Game, GamePhase, GameResult};
pub use runner::{play_game, play_round, RunnerConfig, Strategies};
