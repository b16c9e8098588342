//! Full-game integration tests with random strategies.

mod common;

use santase_engine::{
    play_game, play_round, Game, GamePhase, GameResult, PlayerPair, PlayerPosition, RandomStrategy, RoundOutcome,
    RuleSet, RunnerConfig, Strategies, Strategy,
};

fn random_pair(seed: u64) -> Strategies {
    PlayerPair::new(
        Box::new(RandomStrategy::new(seed)) as Box<dyn Strategy>,
        Box::new(RandomStrategy::new(seed.wrapping_add(1))),
    )
}

fn run(seed: u64, rules: RuleSet) -> (GameResult, Vec<RoundOutcome>) {
    common::init_logging();
    let mut game = Game::new(rules, seed);
    let mut strategies = random_pair(seed);
    let result = play_game(&mut game, &mut strategies, &RunnerConfig::default()).unwrap();
    (result, game.history().to_vec())
}

// =============================================================================
// Completion
// =============================================================================

#[test]
fn test_games_reach_target() {
    for seed in 0..20 {
        let (result, history) = run(seed, RuleSet::default());
        let loser = result.winner.other();

        assert!(result.scores[result.winner] >= 11);
        assert!(result.scores[loser] < 11);
        assert_eq!(result.rounds_played as usize, history.len());

        let credited: u32 = history.iter().map(|o| o.game_points).sum();
        assert_eq!(credited, result.scores[result.winner] + result.scores[loser]);
    }
}

#[test]
fn test_round_values_in_range() {
    for seed in 0..20 {
        let (_, history) = run(seed, RuleSet::default());
        for outcome in history {
            assert!((1..=3).contains(&outcome.game_points));
            // Random strategies never close.
            assert_eq!(outcome.closed_by, None);
        }
    }
}

#[test]
fn test_shorter_target() {
    let (result, _) = run(77, RuleSet::default().with_game_points_to_win(7));
    assert!(result.scores[result.winner] >= 7);
}

// =============================================================================
// Lead rotation
// =============================================================================

#[test]
fn test_round_loser_leads_next() {
    common::init_logging();
    let mut game = Game::new(RuleSet::default(), 404);
    let mut strategies = random_pair(404);
    let config = RunnerConfig::default();

    assert_eq!(game.first_to_play(), PlayerPosition::First);
    for _ in 0..5 {
        if game.is_over() {
            break;
        }
        let expected_leader = game.first_to_play();
        let round = game.start_round().unwrap();
        assert_eq!(round.active_player().unwrap(), expected_leader);
        play_round(round, &mut strategies, &config).unwrap();

        let outcome = game.finish_round().unwrap();
        assert_eq!(game.first_to_play(), outcome.loser());
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_game() {
    let (result_a, history_a) = run(12345, RuleSet::default());
    let (result_b, history_b) = run(12345, RuleSet::default());
    assert_eq!(result_a, result_b);
    assert_eq!(history_a, history_b);
}

#[test]
fn test_result_serialization() {
    let (result, history) = run(9, RuleSet::default());

    let json = serde_json::to_string(&result).unwrap();
    let back: GameResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);

    let json = serde_json::to_string(&history).unwrap();
    let back: Vec<RoundOutcome> = serde_json::from_str(&json).unwrap();
    assert_eq!(history, back);
}

#[test]
fn test_phase_after_game() {
    common::init_logging();
    let mut game = Game::new(RuleSet::default(), 3);
    let mut strategies = random_pair(3);
    play_game(&mut game, &mut strategies, &RunnerConfig::default()).unwrap();

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(game.start_round().is_err());
    assert!(game.round().is_err());
}
