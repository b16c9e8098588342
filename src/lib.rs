//! # santase-engine
//!
//! Rules and turn resolution for Santase (Schnapsen), the two-player
//! trick-taking game played with a 24-card deck.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every action is checked against the legal
//!    set first; a rejected action leaves the round untouched.
//!
//! 2. **Strategies see snapshots**: a strategy receives a `TurnContext` copied
//!    out of the round and can only influence play through the action it
//!    returns.
//!
//! 3. **Deterministic**: shuffles come from a seeded ChaCha8 stream, so a
//!    seed and a sequence of decisions reproduce a game exactly.
//!
//! ## Modules
//!
//! - `core`: players, actions, errors, rule configuration, RNG
//! - `cards`: cards, the talon, hands, played-card tracking
//! - `rules`: announces, legal actions, trick resolution, scoring
//! - `round`: round state and the round state machine
//! - `game`: multi-round games and the strategy runner
//! - `strategy`: the `Strategy` trait and a random player
//!
//! ## Example
//!
//! ```rust
//! use santase_engine::{play_game, Game, PlayerPair, RandomStrategy, RuleSet, RunnerConfig, Strategy};
//!
//! let mut game = Game::new(RuleSet::default(), 7);
//! let mut strategies = PlayerPair::new(
//!     Box::new(RandomStrategy::new(1)) as Box<dyn Strategy>,
//!     Box::new(RandomStrategy::new(2)),
//! );
//! let result = play_game(&mut game, &mut strategies, &RunnerConfig::default()).unwrap();
//! assert!(result.scores[result.winner] >= 11);
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod round;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, EngineError, GameRng, GameRngState, PlayerAction, PlayerPair, PlayerPosition,
    Rejection, Result, RuleSet,
};

pub use crate::cards::{Card, CardTracker, Deck, Hand, Rank, Suit};

pub use crate::rules::{
    evaluate_announce, legal_actions, resolve_trick, score_round, Announce, LegalActions,
    RoundEndReason, RoundOutcome, TrickOutcome, TrickWinner,
};

pub use crate::round::{PlayerScore, Round, RoundPhase, RoundState, TrickSummary, TurnContext, TurnEvent};

pub use crate::game::{play_game, play_round, Game, GamePhase, GameResult, RunnerConfig, Strategies};

pub use crate::strategy::{RandomStrategy, Strategy};
