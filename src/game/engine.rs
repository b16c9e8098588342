//! A full game: a sequence of rounds until one player reaches the target.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Deck;
use crate::core::{EngineError, GameRng, PlayerPair, PlayerPosition, Result, RuleSet};
use crate::round::Round;
use crate::rules::RoundOutcome;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for `start_round`.
    Dealing,
    /// A round is in progress.
    Playing,
    /// The current round ended; call `finish_round`.
    RoundOver,
    /// A player reached the target.
    GameOver,
}

/// Final result of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerPosition,
    pub scores: PlayerPair<u32>,
    pub rounds_played: u32,
}

/// A game of Santase.
#[derive(Clone, Debug)]
pub struct Game {
    rules: RuleSet,
    rng: GameRng,
    scores: PlayerPair<u32>,
    first_to_play: PlayerPosition,
    round: Option<Round>,
    history: Vec<RoundOutcome>,
    result: Option<GameResult>,
}

impl Game {
    /// New game; the first player leads the first round.
    #[must_use]
    pub fn new(rules: RuleSet, seed: u64) -> Self {
        Self {
            rules,
            rng: GameRng::new(seed),
            scores: PlayerPair::default(),
            first_to_play: PlayerPosition::First,
            round: None,
            history: Vec::new(),
            result: None,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.result.is_some() {
            return GamePhase::GameOver;
        }
        match &self.round {
            None => GamePhase::Dealing,
            Some(round) if round.is_over() => GamePhase::RoundOver,
            Some(_) => GamePhase::Playing,
        }
    }

    /// Game points so far.
    #[must_use]
    pub fn scores(&self) -> PlayerPair<u32> {
        self.scores
    }

    /// Player leading the current (or next) round.
    #[must_use]
    pub fn first_to_play(&self) -> PlayerPosition {
        self.first_to_play
    }

    /// Outcomes of finished rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundOutcome] {
        &self.history
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Shuffle a fresh deck and deal the next round.
    pub fn start_round(&mut self) -> Result<&mut Round> {
        match self.phase() {
            GamePhase::Dealing => {}
            GamePhase::Playing | GamePhase::RoundOver => {
                return Err(EngineError::invalid_state("a round is already in progress"));
            }
            GamePhase::GameOver => {
                return Err(EngineError::invalid_state("the game is over"));
            }
        }

        let mut round_rng = self.rng.fork();
        let deck = Deck::shuffled(&mut round_rng);
        debug!(
            round = self.history.len() + 1,
            leader = %self.first_to_play,
            "dealing"
        );

        let round = Round::deal(self.rules, deck, self.first_to_play)?;
        Ok(self.round.insert(round))
    }

    /// Current round.
    pub fn round(&self) -> Result<&Round> {
        self.ensure_not_over()?;
        self.round
            .as_ref()
            .ok_or_else(|| EngineError::invalid_state("no round in progress"))
    }

    /// Current round, for applying actions.
    pub fn round_mut(&mut self) -> Result<&mut Round> {
        self.ensure_not_over()?;
        self.round
            .as_mut()
            .ok_or_else(|| EngineError::invalid_state("no round in progress"))
    }

    /// Credit the finished round and prepare the next one.
    ///
    /// The loser of the round leads the next one.
    pub fn finish_round(&mut self) -> Result<RoundOutcome> {
        self.ensure_not_over()?;
        let outcome = self
            .round
            .as_ref()
            .and_then(|round| round.outcome())
            .cloned()
            .ok_or_else(|| EngineError::invalid_state("the current round is not over"))?;

        self.round = None;
        self.scores[outcome.winner] += outcome.game_points;
        self.first_to_play = outcome.loser();
        self.history.push(outcome.clone());

        debug!(
            winner = %outcome.winner,
            game_points = outcome.game_points,
            first = self.scores[PlayerPosition::First],
            second = self.scores[PlayerPosition::Second],
            "round credited"
        );

        if self.scores[outcome.winner] >= self.rules.game_points_to_win {
            let result = GameResult {
                winner: outcome.winner,
                scores: self.scores,
                rounds_played: self.history.len() as u32,
            };
            info!(
                winner = %result.winner,
                rounds = result.rounds_played,
                first = result.scores[PlayerPosition::First],
                second = result.scores[PlayerPosition::Second],
                "game over"
            );
            self.result = Some(result);
        }

        Ok(outcome)
    }

    fn ensure_not_over(&self) -> Result<()> {
        if self.is_over() {
            return Err(EngineError::invalid_state("the game is over"));
        }
        Ok(())
    }
}
