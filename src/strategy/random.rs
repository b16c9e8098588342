//! Uniformly random play.

use crate::core::{GameRng, PlayerAction};
use crate::round::TurnContext;
use crate::rules::LegalActions;

use super::Strategy;

/// Plays a random legal card. Never closes, changes trump, or announces
/// explicitly; leading a marriage card still scores it.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    name: String,
    rng: GameRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            name: format!("random-{seed}"),
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&mut self, context: &TurnContext, legal: &LegalActions) -> PlayerAction {
        let card = self
            .rng
            .choose(&legal.playable_cards)
            .or_else(|| context.hand.cards().first())
            .copied();

        match card {
            Some(card) => PlayerAction::PlayCard(card),
            // Only reachable with an empty hand, which the round rejects.
            None => PlayerAction::CloseGame,
        }
    }
}
