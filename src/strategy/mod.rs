//! Player strategies.
//!
//! A strategy sees only the `TurnContext` of its own seat and the legal
//! actions computed for it; it proposes an action and the round decides
//! whether to accept it.
//!
//! ## Key Types
//!
//! - `Strategy`: the decision trait driven by the runner
//! - `RandomStrategy`: plays a uniformly random legal card

pub mod random;

pub use random::RandomStrategy;

use crate::core::PlayerAction;
use crate::round::{TrickSummary, TurnContext};
use crate::rules::{LegalActions, RoundOutcome};

/// Decision-making for one seat.
pub trait Strategy: Send {
    /// Display name used in logs.
    fn name(&self) -> &str;

    /// Pick the next action.
    ///
    /// `legal` is computed for `context.player`; proposing something outside
    /// it is rejected by the round and the runner asks again.
    fn choose_action(&mut self, context: &TurnContext, legal: &LegalActions) -> PlayerAction;

    /// Called after every resolved trick, for both seats.
    fn end_trick(&mut self, _summary: &TrickSummary) {}

    /// Called once the round is over, for both seats.
    fn end_round(&mut self, _outcome: &RoundOutcome) {}
}
