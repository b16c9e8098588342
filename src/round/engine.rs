//! The round state machine.
//!
//! ```text
//! deal ──▶ Open ──close──▶ Closed ──┐
//!           │                       ├──▶ Over
//!           └──talon empty──▶ Exhausted ─┘
//! ```
//!
//! `Round::apply` is the only mutating entry point during play. It validates
//! the action against `legal_actions` first and then performs every
//! consequence (point credit, draws, phase change, scoring) before returning,
//! so a round is never observed half-updated.

use im::Vector;
use tracing::{debug, info, trace};

use crate::cards::{Card, CardTracker, Deck, Hand, Rank, Suit};
use crate::core::{
    ActionRecord, EngineError, PlayerAction, PlayerPair, PlayerPosition, Rejection, Result, RuleSet,
};
use crate::rules::{
    legal_actions, resolve_trick, score_round, Announce, LegalActions, RoundOutcome, Trick,
};

use super::context::TurnContext;
use super::event::{TrickSummary, TurnEvent};
use super::state::{RoundPhase, RoundState};

/// Cards dealt to each player at the start of a round.
pub const HAND_SIZE: usize = 6;

/// Cards per dealing batch (3, then 3 more).
const DEAL_BATCH: usize = 3;

/// One round of Santase.
#[derive(Clone, Debug)]
pub struct Round {
    state: RoundState,
    deck: Deck,
    hands: PlayerPair<Hand>,
    tracker: CardTracker,
    trick: Trick,
    last_trick_winner: Option<PlayerPosition>,
    history: Vector<ActionRecord>,
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Deal a new round from `deck`.
    ///
    /// Each player receives three cards, `first_to_play` first, then three
    /// more. The remaining cards form the talon; its bottom card is the trump
    /// card.
    pub fn deal(rules: RuleSet, mut deck: Deck, first_to_play: PlayerPosition) -> Result<Self> {
        if deck.len() <= 2 * HAND_SIZE {
            return Err(EngineError::invalid_state(format!(
                "cannot deal from a deck of {} cards",
                deck.len()
            )));
        }

        let mut hands: PlayerPair<Hand> = PlayerPair::default();
        for _ in 0..HAND_SIZE / DEAL_BATCH {
            for player in [first_to_play, first_to_play.other()] {
                for _ in 0..DEAL_BATCH {
                    let card = deck
                        .draw()
                        .ok_or_else(|| EngineError::invalid_state("deck ran out while dealing"))?;
                    hands[player].add(card);
                }
            }
        }

        let trump_suit = deck
            .trump_card()
            .map(|c| c.suit)
            .ok_or_else(|| EngineError::invalid_state("no trump card after dealing"))?;

        Self::from_parts(rules, trump_suit, deck, hands, first_to_play)
    }

    /// Build a round from an arbitrary layout, e.g. to resume or to test a
    /// specific position. `leader` is about to lead a fresh trick.
    ///
    /// The layout must be reachable by play:
    /// - the trump card, if the talon is non-empty, is of `trump_suit`
    /// - both hands hold the same number of cards, at least one and at most
    ///   [`HAND_SIZE`]
    /// - while the talon has cards, both hands are full and the talon holds
    ///   an even number of cards
    /// - no card appears twice across hands and talon
    pub fn from_parts(
        rules: RuleSet,
        trump_suit: Suit,
        deck: Deck,
        hands: PlayerPair<Hand>,
        leader: PlayerPosition,
    ) -> Result<Self> {
        if let Some(trump_card) = deck.trump_card() {
            if trump_card.suit != trump_suit {
                return Err(EngineError::invalid_state(format!(
                    "trump card {trump_card} does not match trump suit {trump_suit}"
                )));
            }
        }
        let held = hands[leader].len();
        if hands[leader.other()].len() != held {
            return Err(EngineError::invalid_state(format!(
                "hands hold {} and {} cards",
                hands[PlayerPosition::First].len(),
                hands[PlayerPosition::Second].len()
            )));
        }
        if held == 0 {
            return Err(EngineError::invalid_state("leader has no cards"));
        }
        if held > HAND_SIZE {
            return Err(EngineError::invalid_state(format!(
                "hands hold {held} cards, more than {HAND_SIZE}"
            )));
        }
        if !deck.is_empty() && held != HAND_SIZE {
            return Err(EngineError::invalid_state(format!(
                "hands hold {held} cards while {} remain in the talon",
                deck.len()
            )));
        }
        if deck.len() % 2 != 0 {
            return Err(EngineError::invalid_state(format!(
                "talon of {} cards cannot be drawn in pairs",
                deck.len()
            )));
        }

        let mut seen = CardTracker::new();
        let all_cards = deck
            .cards()
            .iter()
            .chain(hands[PlayerPosition::First].cards())
            .chain(hands[PlayerPosition::Second].cards());
        for &card in all_cards {
            if seen.is_played(card) {
                return Err(EngineError::MalformedCard(format!("duplicate card {card}")));
            }
            seen.mark(card);
        }

        let state = RoundState::new(rules, trump_suit, deck.trump_card(), deck.len());

        debug!(
            trump = %trump_suit,
            trump_card = ?state.trump_card,
            talon = state.cards_left_in_deck,
            leader = %leader,
            "round started"
        );

        Ok(Self {
            state,
            deck,
            hands,
            tracker: CardTracker::new(),
            trick: Trick::new(leader),
            last_trick_winner: None,
            history: Vector::new(),
            outcome: None,
        })
    }

    // === Queries ===

    /// Public round state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerPosition) -> &Hand {
        &self.hands[player]
    }

    /// Cards played so far.
    #[must_use]
    pub fn tracker(&self) -> &CardTracker {
        &self.tracker
    }

    /// The trick in progress.
    #[must_use]
    pub fn current_trick(&self) -> &Trick {
        &self.trick
    }

    /// Accepted actions in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Talon contents, bottom first.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Result, once the round is over.
    #[must_use]
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// Winner of the most recent trick.
    #[must_use]
    pub fn last_trick_winner(&self) -> Option<PlayerPosition> {
        self.last_trick_winner
    }

    /// Seat expected to act.
    pub fn active_player(&self) -> Result<PlayerPosition> {
        self.ensure_in_progress()?;
        Ok(self.trick.active_player())
    }

    /// Legal actions of the active player.
    pub fn legal_actions(&self) -> Result<LegalActions> {
        let player = self.active_player()?;
        legal_actions(&self.state, player, &self.hands[player], self.trick.leader_card)
    }

    /// Snapshot for the active player's strategy.
    pub fn turn_context(&self) -> Result<TurnContext> {
        let player = self.active_player()?;
        let legal = self.legal_actions()?;

        Ok(TurnContext {
            player,
            trump_suit: self.state.trump_suit,
            trump_card: self.state.trump_card,
            cards_left_in_deck: self.state.cards_left_in_deck,
            is_leading: legal.is_leading,
            first_played_card: self.trick.leader_card,
            first_player_round_points: self.state.round_points(PlayerPosition::First),
            second_player_round_points: self.state.round_points(PlayerPosition::Second),
            should_observe_rules: self.state.should_observe_rules(),
            can_close: legal.can_close,
            can_change_trump: legal.can_change_trump,
            can_announce: legal.can_announce,
            trick_number: self.state.trick_number,
            closed_by: self.state.closed_by,
            played_cards: self.tracker,
            hand: self.hands[player].clone(),
        })
    }

    // === Play ===

    /// Validate and apply one action.
    ///
    /// On `Err` nothing has changed.
    pub fn apply(&mut self, player: PlayerPosition, action: PlayerAction) -> Result<TurnEvent> {
        let active = self.active_player()?;
        if player != active {
            return Err(EngineError::invalid_action(action, Rejection::OutOfTurn));
        }

        let legal = legal_actions(&self.state, player, &self.hands[player], self.trick.leader_card)?;
        legal.check(&action, &self.hands[player])?;

        let event = match (action.card(), self.trick.leader_card) {
            (Some(card), None) => self.lead(player, card, &legal)?,
            (Some(card), Some(led)) => self.respond(player, led, card)?,
            (None, _) if action == PlayerAction::ChangeTrump => self.change_trump(player)?,
            (None, _) => self.close(player),
        };

        self.history
            .push_back(ActionRecord::new(player, action, self.history_trick_number(&event)));
        Ok(event)
    }

    fn change_trump(&mut self, player: PlayerPosition) -> Result<TurnEvent> {
        let nine = Card::new(self.state.trump_suit, Rank::Nine);
        let taken = self.deck.swap_trump_card(nine)?;
        self.hands[player].replace(nine, taken);
        self.state.trump_card = Some(nine);

        debug!(player = %player, taken = %taken, "trump changed");
        Ok(TurnEvent::TrumpChanged {
            player,
            taken,
            given: nine,
        })
    }

    fn close(&mut self, player: PlayerPosition) -> TurnEvent {
        self.state.closed_by = Some(player);
        self.state.phase = RoundPhase::Closed;

        debug!(
            player = %player,
            talon = self.state.cards_left_in_deck,
            points = self.state.round_points(player),
            "talon closed"
        );
        TurnEvent::Closed { player }
    }

    fn lead(&mut self, player: PlayerPosition, card: Card, legal: &LegalActions) -> Result<TurnEvent> {
        let announce = if legal.announce_cards.contains(&card) {
            self.state
                .announces
                .evaluate(player, &self.hands[player], card, self.state.trump_suit)
        } else {
            Announce::None
        };

        self.hands[player].remove(card);
        self.tracker.mark(card);
        self.trick.leader_card = Some(card);

        let mut round_over = None;
        if announce.is_some() {
            self.state.announces.claim(player, card.suit);
            self.state.scores[player].announce_points += announce.points();
            debug!(player = %player, card = %card, announce = ?announce, "marriage announced");

            if self.state.scores[player].has_won_trick() && self.state.has_reached_target(player) {
                round_over = Some(self.finish()?);
            }
        }

        trace!(player = %player, card = %card, "card led");
        Ok(TurnEvent::CardLed {
            player,
            card,
            announce,
            round_over,
        })
    }

    fn respond(&mut self, player: PlayerPosition, led: Card, card: Card) -> Result<TurnEvent> {
        let leader = self.trick.leader;
        let outcome = resolve_trick(self.state.trump_suit, led, card);
        let winner = outcome.winner.position(leader);

        self.hands[player].remove(card);
        self.tracker.mark(card);

        let score = &mut self.state.scores[winner];
        score.trick_points += outcome.points;
        score.tricks_won += 1;
        self.last_trick_winner = Some(winner);

        let summary = TrickSummary {
            number: self.state.trick_number,
            leader,
            leader_card: led,
            responder_card: card,
            winner,
            points: outcome.points,
        };
        trace!(
            trick = summary.number,
            led = %led,
            response = %card,
            winner = %winner,
            points = outcome.points,
            "trick resolved"
        );

        let hands_empty = PlayerPosition::BOTH.iter().all(|&p| self.hands[p].is_empty());
        if hands_empty && self.state.phase == RoundPhase::Exhausted {
            self.state.scores[winner].bonus_points += self.state.rules.last_trick_bonus;
        }

        self.state.trick_number += 1;
        self.trick = Trick::new(winner);

        // An open talon still refills both hands.
        let play_exhausted = hands_empty && self.state.phase != RoundPhase::Open;
        let round_over = if play_exhausted || self.state.has_reached_target(winner) {
            Some(self.finish()?)
        } else {
            if self.state.phase == RoundPhase::Open {
                self.draw_after_trick(winner);
            }
            None
        };

        Ok(TurnEvent::TrickCompleted {
            summary,
            round_over,
        })
    }

    /// Winner draws first, then the loser. On the final pair the loser takes
    /// the face-up trump card.
    fn draw_after_trick(&mut self, winner: PlayerPosition) {
        for player in [winner, winner.other()] {
            if let Some(card) = self.deck.draw() {
                self.hands[player].add(card);
            }
        }

        self.state.cards_left_in_deck = self.deck.len();
        self.state.trump_card = self.deck.trump_card();
        if self.deck.is_empty() {
            self.state.phase = RoundPhase::Exhausted;
            debug!(trick = self.state.trick_number, "talon exhausted");
        }
    }

    fn finish(&mut self) -> Result<RoundOutcome> {
        let outcome = score_round(&self.state, self.last_trick_winner)?;
        self.state.phase = RoundPhase::Over;
        self.outcome = Some(outcome.clone());

        info!(
            winner = %outcome.winner,
            game_points = outcome.game_points,
            reason = ?outcome.reason,
            first_points = outcome.round_points[PlayerPosition::First],
            second_points = outcome.round_points[PlayerPosition::Second],
            "round over"
        );
        Ok(outcome)
    }

    fn ensure_in_progress(&self) -> Result<()> {
        if self.is_over() {
            return Err(EngineError::invalid_state("the round is over"));
        }
        Ok(())
    }

    /// Trick number an accepted action belongs to; completing a trick has
    /// already advanced the counter.
    fn history_trick_number(&self, event: &TurnEvent) -> u32 {
        match event {
            TurnEvent::TrickCompleted { summary, .. } => summary.number,
            _ => self.state.trick_number,
        }
    }
}
