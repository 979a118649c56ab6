//! Criterion benchmarks for turn application, snapshot copies and hashing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use scrim_bench::{reference_match, world_at, REFERENCE_TURNS};
use scrim_replay::{world_hash, Timeline};
use scrim_world::{GameWorld, PlaybackConfig};

/// Benchmark: replay the whole reference match from turn 0.
fn bench_replay_full(c: &mut Criterion) {
    let m = reference_match(42);
    let start = GameWorld::bootstrap(&m.game, &m.header, PlaybackConfig::default()).unwrap();

    c.bench_function("replay_500_turns", |b| {
        b.iter_batched(
            || start.copy(),
            |mut world| {
                for delta in &m.deltas {
                    world.apply_turn(delta).unwrap();
                }
                black_box(world.turn());
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: one mid-match turn.
fn bench_apply_one(c: &mut Criterion) {
    let m = reference_match(42);
    let world = world_at(&m, 250).unwrap();
    let delta = &m.deltas[250];

    c.bench_function("apply_turn_mid_match", |b| {
        b.iter_batched(
            || world.copy(),
            |mut w| black_box(w.apply_turn(delta).unwrap()),
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: deep copy, fresh and into reused buffers.
fn bench_copy(c: &mut Criterion) {
    let m = reference_match(42);
    let world = world_at(&m, 250).unwrap();

    c.bench_function("world_copy", |b| b.iter(|| black_box(world.copy())));

    let mut target = world_at(&m, 10).unwrap();
    c.bench_function("world_copy_from", |b| {
        b.iter(|| {
            target.copy_from(&world);
            black_box(target.turn());
        });
    });
}

/// Benchmark: hash a mid-match snapshot.
fn bench_hash(c: &mut Criterion) {
    let m = reference_match(42);
    let world = world_at(&m, 250).unwrap();
    c.bench_function("world_hash", |b| b.iter(|| black_box(world_hash(&world))));
}

/// Benchmark: backward seek through the timeline.
fn bench_seek_back(c: &mut Criterion) {
    let m = reference_match(42);
    let mut timeline = Timeline::bootstrap(&m.game, &m.header, PlaybackConfig::default()).unwrap();
    for delta in &m.deltas {
        timeline.push_delta(delta.clone()).unwrap();
    }
    timeline.seek(REFERENCE_TURNS as i32).unwrap();

    c.bench_function("timeline_seek_back", |b| {
        b.iter(|| {
            timeline.seek(249).unwrap();
            timeline.seek(REFERENCE_TURNS as i32).unwrap();
            black_box(timeline.turn());
        });
    });
}

criterion_group!(
    benches,
    bench_replay_full,
    bench_apply_one,
    bench_copy,
    bench_hash,
    bench_seek_back
);
criterion_main!(benches);
