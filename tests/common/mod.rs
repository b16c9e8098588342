//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use santase_engine::{Card, Deck, Hand, PlayerPair, PlayerPosition, Round, RuleSet, Suit};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level from `TEST_LOG`, then `RUST_LOG`,
/// default `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(text: &str) -> Card {
    text.parse().unwrap()
}

pub fn hand(cards: &[&str]) -> Hand {
    cards.iter().map(|s| card(s)).collect()
}

/// Talon listed bottom first, so `talon[0]` is the trump card.
pub fn talon(cards: &[&str]) -> Deck {
    Deck::from_cards(cards.iter().map(|s| card(s)).collect()).unwrap()
}

/// A round with the first player leading.
pub fn round(trump: Suit, talon_cards: &[&str], first: &[&str], second: &[&str]) -> Round {
    round_with(RuleSet::default(), trump, talon_cards, first, second)
}

pub fn round_with(rules: RuleSet, trump: Suit, talon_cards: &[&str], first: &[&str], second: &[&str]) -> Round {
    init_logging();
    Round::from_parts(
        rules,
        trump,
        talon(talon_cards),
        PlayerPair::new(hand(first), hand(second)),
        PlayerPosition::First,
    )
    .unwrap()
}
