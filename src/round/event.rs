//! What an accepted action did.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerPosition;
use crate::rules::{Announce, RoundOutcome};

/// Public record of a resolved trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickSummary {
    /// 1-based trick number.
    pub number: u32,
    pub leader: PlayerPosition,
    pub leader_card: Card,
    pub responder_card: Card,
    pub winner: PlayerPosition,
    /// Card points taken by the winner, excluding any bonus.
    pub points: u32,
}

/// Result of `Round::apply`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The leader swapped the trump Nine for the visible trump card.
    TrumpChanged {
        player: PlayerPosition,
        taken: Card,
        given: Card,
    },

    /// The leader closed the talon.
    Closed { player: PlayerPosition },

    /// A card was led. `round_over` is set when a marriage took the leader
    /// past the round target.
    CardLed {
        player: PlayerPosition,
        card: Card,
        announce: Announce,
        round_over: Option<RoundOutcome>,
    },

    /// The responder played and the trick was resolved.
    TrickCompleted {
        summary: TrickSummary,
        round_over: Option<RoundOutcome>,
    },
}

impl TurnEvent {
    /// Round outcome if this event ended the round.
    #[must_use]
    pub fn round_outcome(&self) -> Option<&RoundOutcome> {
        match self {
            TurnEvent::CardLed { round_over, .. } | TurnEvent::TrickCompleted { round_over, .. } => {
                round_over.as_ref()
            }
            TurnEvent::TrumpChanged { .. } | TurnEvent::Closed { .. } => None,
        }
    }
}
