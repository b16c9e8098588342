//! Benchmarks for dealing, single rounds and complete games.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use santase_engine::{
    legal_actions, play_game, play_round, Deck, Game, GameRng, PlayerPair, PlayerPosition, RandomStrategy, Round,
    RuleSet, RunnerConfig, Strategies, Strategy,
};

fn random_pair() -> Strategies {
    PlayerPair::new(
        Box::new(RandomStrategy::new(1)) as Box<dyn Strategy>,
        Box::new(RandomStrategy::new(2)),
    )
}

fn dealt_round(seed: u64) -> Round {
    let mut rng = GameRng::new(seed);
    Round::deal(RuleSet::default(), Deck::shuffled(&mut rng), PlayerPosition::First).unwrap()
}

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal", |b| {
        b.iter(|| black_box(dealt_round(black_box(42))));
    });
}

fn bench_legal_actions(c: &mut Criterion) {
    let round = dealt_round(42);
    let player = round.active_player().unwrap();

    c.bench_function("legal_actions_leader", |b| {
        b.iter(|| {
            let legal = legal_actions(black_box(round.state()), player, round.hand(player), None);
            black_box(legal)
        });
    });
}

fn bench_round(c: &mut Criterion) {
    let config = RunnerConfig::default();

    c.bench_function("random_round", |b| {
        let mut strategies = random_pair();
        b.iter(|| {
            let mut round = dealt_round(black_box(7));
            let outcome = play_round(&mut round, &mut strategies, &config);
            black_box(outcome)
        });
    });
}

fn bench_game_batch(c: &mut Criterion) {
    let config = RunnerConfig::default();

    c.bench_function("10_games_sequential", |b| {
        let mut strategies = random_pair();
        b.iter(|| {
            for seed in 0..10u64 {
                let mut game = Game::new(RuleSet::default(), black_box(seed));
                let result = play_game(&mut game, &mut strategies, &config);
                let _ = black_box(result);
            }
        });
    });
}

criterion_group!(benches, bench_deal, bench_legal_actions, bench_round, bench_game_batch);
criterion_main!(benches);
