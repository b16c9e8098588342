//! Round state and the round state machine.
//!
//! ## Key Types
//!
//! - `Round`: owns the talon, both hands and the trick in progress; the only
//!   way to advance play is `Round::apply`
//! - `RoundState`: the public part of a round (trump, talon size, scores)
//! - `TurnContext`: the snapshot handed to a strategy
//! - `TurnEvent`: what an accepted action did

pub mod context;
pub mod engine;
pub mod event;
pub mod state;

pub use context::TurnContext;
pub use engine::{Round, HAND_SIZE};
pub use event::{TrickSummary, TurnEvent};
pub use state::{PlayerScore, RoundPhase, RoundState};
