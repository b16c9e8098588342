//! Driving rounds and games with strategies.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{EngineError, PlayerPair, Result};
use crate::round::{Round, TurnEvent};
use crate::rules::RoundOutcome;
use crate::strategy::Strategy;

use super::engine::{Game, GamePhase, GameResult};

/// Both seats' strategies.
pub type Strategies = PlayerPair<Box<dyn Strategy>>;

/// Runner settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Rejected proposals tolerated per turn before the error is returned.
    pub max_invalid_actions: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_invalid_actions: 3,
        }
    }
}

impl RunnerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_invalid_actions(mut self, max: u32) -> Self {
        self.max_invalid_actions = max;
        self
    }
}

/// Play `round` to the end.
///
/// Rejected actions are logged and the strategy is asked again, up to
/// `config.max_invalid_actions` times per turn.
pub fn play_round(round: &mut Round, strategies: &mut Strategies, config: &RunnerConfig) -> Result<RoundOutcome> {
    while !round.is_over() {
        let player = round.active_player()?;
        let context = round.turn_context()?;
        let legal = round.legal_actions()?;

        let mut rejected = 0;
        let event = loop {
            let action = strategies[player].choose_action(&context, &legal);
            match round.apply(player, action) {
                Ok(event) => break event,
                Err(err @ EngineError::InvalidAction { .. }) => {
                    rejected += 1;
                    warn!(
                        player = %player,
                        strategy = strategies[player].name(),
                        attempt = rejected,
                        error = %err,
                        "strategy action rejected"
                    );
                    if rejected >= config.max_invalid_actions {
                        return Err(err);
                    }
                }
                Err(err) => return Err(err),
            }
        };

        trace!(player = %player, event = ?event, "turn applied");
        if let TurnEvent::TrickCompleted { summary, .. } = &event {
            for (_, strategy) in strategies.iter_mut() {
                strategy.end_trick(summary);
            }
        }
    }

    let outcome = round
        .outcome()
        .cloned()
        .ok_or_else(|| EngineError::invalid_state("round stopped without an outcome"))?;
    for (_, strategy) in strategies.iter_mut() {
        strategy.end_round(&outcome);
    }
    Ok(outcome)
}

/// Play rounds until the game is over, resuming a round already in progress.
pub fn play_game(game: &mut Game, strategies: &mut Strategies, config: &RunnerConfig) -> Result<GameResult> {
    loop {
        match game.phase() {
            GamePhase::GameOver => break,
            GamePhase::Dealing => {
                let round = game.start_round()?;
                play_round(round, strategies, config)?;
            }
            GamePhase::Playing => {
                play_round(game.round_mut()?, strategies, config)?;
            }
            GamePhase::RoundOver => {
                game.finish_round()?;
            }
        }
    }

    game.result()
        .cloned()
        .ok_or_else(|| EngineError::invalid_state("game stopped without a result"))
}
