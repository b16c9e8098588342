//! Legal action computation.
//!
//! `legal_actions` answers, for the player about to act, which cards may be
//! played and which leader-only actions (trump change, close, announce) are
//! currently allowed. The round uses the same result to accept or reject the
//! action a strategy returns.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Hand, Rank};
use crate::core::{EngineError, PlayerAction, PlayerPosition, Rejection, Result};
use crate::round::RoundState;

/// Everything the acting player may do right now.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalActions {
    /// Cards that may be played.
    pub playable_cards: SmallVec<[Card; 6]>,

    /// Swap the trump Nine for the visible trump card.
    pub can_change_trump: bool,

    /// Close the talon.
    pub can_close: bool,

    /// At least one card in `announce_cards`.
    pub can_announce: bool,

    /// Kings and Queens whose lead would claim an unclaimed marriage.
    pub announce_cards: SmallVec<[Card; 4]>,

    /// Whether the acting player leads the trick.
    pub is_leading: bool,
}

impl LegalActions {
    /// Whether `action` is in the legal set.
    #[must_use]
    pub fn permits(&self, action: &PlayerAction) -> bool {
        match action {
            PlayerAction::PlayCard(card) => self.playable_cards.contains(card),
            PlayerAction::ChangeTrump => self.can_change_trump,
            PlayerAction::CloseGame => self.can_close,
            PlayerAction::Announce(card) => self.announce_cards.contains(card),
        }
    }

    /// Like `permits`, but explains a refusal.
    pub fn check(&self, action: &PlayerAction, hand: &Hand) -> Result<()> {
        let reject = |reason| Err(EngineError::invalid_action(*action, reason));

        match *action {
            PlayerAction::PlayCard(card) => {
                if !hand.contains(card) {
                    return reject(Rejection::CardNotInHand);
                }
                if !self.playable_cards.contains(&card) {
                    return reject(Rejection::CardNotPlayable);
                }
            }
            PlayerAction::Announce(card) => {
                if !self.is_leading {
                    return reject(Rejection::NotLeader);
                }
                if !hand.contains(card) {
                    return reject(Rejection::CardNotInHand);
                }
                if !self.announce_cards.contains(&card) {
                    return reject(Rejection::NoMarriage);
                }
            }
            PlayerAction::ChangeTrump => {
                if !self.is_leading {
                    return reject(Rejection::NotLeader);
                }
                if !self.can_change_trump {
                    return reject(Rejection::CannotChangeTrump);
                }
            }
            PlayerAction::CloseGame => {
                if !self.is_leading {
                    return reject(Rejection::NotLeader);
                }
                if !self.can_close {
                    return reject(Rejection::CannotClose);
                }
            }
        }
        Ok(())
    }
}

/// Compute the legal actions of `player` holding `hand`.
///
/// `led_card` is the card already on the table, or `None` when `player`
/// leads. An empty hand means the round is already over and is reported as
/// `InvalidState`.
pub fn legal_actions(
    state: &RoundState,
    player: PlayerPosition,
    hand: &Hand,
    led_card: Option<Card>,
) -> Result<LegalActions> {
    if hand.is_empty() {
        return Err(EngineError::invalid_state(format!(
            "{player} has no cards; the round is over"
        )));
    }

    let Some(led) = led_card else {
        return Ok(leader_actions(state, player, hand));
    };

    let playable_cards = if state.should_observe_rules() {
        forced_responses(state, hand, led)
    } else {
        hand.iter().collect()
    };

    Ok(LegalActions {
        playable_cards,
        ..LegalActions::default()
    })
}

fn leader_actions(state: &RoundState, player: PlayerPosition, hand: &Hand) -> LegalActions {
    let restricted = state.rules.first_trick_restricted && state.is_first_trick();
    let talon_open = state.is_talon_open();

    let trump_nine = Card::new(state.trump_suit, Rank::Nine);
    let can_change_trump = !restricted
        && talon_open
        && state.cards_left_in_deck > 2
        && state.trump_card.is_some()
        && hand.contains(trump_nine);

    let can_close =
        !restricted && talon_open && state.cards_left_in_deck >= state.rules.min_cards_to_close;

    let announce_cards: SmallVec<[Card; 4]> = if restricted {
        SmallVec::new()
    } else {
        hand.iter()
            .filter(|&card| {
                state
                    .announces
                    .evaluate(player, hand, card, state.trump_suit)
                    .is_some()
            })
            .collect()
    };

    LegalActions {
        playable_cards: hand.iter().collect(),
        can_change_trump,
        can_close,
        can_announce: !announce_cards.is_empty(),
        announce_cards,
        is_leading: true,
    }
}

/// Must follow and beat if possible: higher of the led suit, else any of the
/// led suit, else trumps, else anything.
fn forced_responses(state: &RoundState, hand: &Hand, led: Card) -> SmallVec<[Card; 6]> {
    let higher: SmallVec<[Card; 6]> = hand
        .cards_of_suit(led.suit)
        .filter(|c| c.value() > led.value())
        .collect();
    if !higher.is_empty() {
        return higher;
    }

    let same_suit: SmallVec<[Card; 6]> = hand.cards_of_suit(led.suit).collect();
    if !same_suit.is_empty() {
        return same_suit;
    }

    let trumps: SmallVec<[Card; 6]> = hand.cards_of_suit(state.trump_suit).collect();
    if !trumps.is_empty() {
        return trumps;
    }

    hand.iter().collect()
}
