//! Engine error type.
//!
//! All validation happens before mutation, so any `Err` leaves the engine
//! exactly as it was before the call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::PlayerAction;

/// Why a proposed action was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// The card is not in the acting player's hand.
    CardNotInHand,
    /// The card is in hand but the follow/beat rules forbid it.
    CardNotPlayable,
    /// Only the player leading the trick may do this.
    NotLeader,
    /// It is the other player's turn.
    OutOfTurn,
    /// Trump exchange is not allowed right now.
    CannotChangeTrump,
    /// Closing is not allowed right now.
    CannotClose,
    /// The card does not complete an unclaimed marriage.
    NoMarriage,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Rejection::CardNotInHand => "card not in hand",
            Rejection::CardNotPlayable => "card not playable under follow-suit rules",
            Rejection::NotLeader => "only the leader may do this",
            Rejection::OutOfTurn => "out of turn",
            Rejection::CannotChangeTrump => "trump change not allowed",
            Rejection::CannotClose => "closing not allowed",
            Rejection::NoMarriage => "no marriage to announce",
        };
        f.write_str(text)
    }
}

/// Errors surfaced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The action is not in the current legal set. Recoverable: retry with a
    /// legal action.
    #[error("invalid action {action}: {reason}")]
    InvalidAction {
        action: PlayerAction,
        reason: Rejection,
    },

    /// The engine was queried in a state where the request makes no sense,
    /// e.g. after the round ended.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A suit, rank or card description outside the 24-card universe.
    #[error("malformed card: {0}")]
    MalformedCard(String),
}

impl EngineError {
    pub(crate) fn invalid_action(action: PlayerAction, reason: Rejection) -> Self {
        Self::InvalidAction { action, reason }
    }

    pub(crate) fn invalid_state(detail: impl Into<String>) -> Self {
        Self::InvalidState(detail.into())
    }

    /// The rejection reason, if this is an `InvalidAction`.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            EngineError::InvalidAction { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
