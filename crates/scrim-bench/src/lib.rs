//! Benchmark profiles for the Scrim replay engine.
//!
//! - [`reference_match`]: a 16x16 synthetic match of [`REFERENCE_TURNS`] turns
//! - [`world_at`]: that match replayed to a given turn
//! - [`body_batch`]: a deterministic spawn-shaped batch for store benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use scrim_core::BodyType;
use scrim_replay::{ReplayError, Timeline};
use scrim_store::ColumnBatch;
use scrim_test_utils::{synthetic_match, SyntheticMatch};
use scrim_world::{BodyColumn, GameWorld, PlaybackConfig};

/// Turns in [`reference_match`].
pub const REFERENCE_TURNS: usize = 500;

/// The synthetic match every apply benchmark replays.
pub fn reference_match(seed: u64) -> SyntheticMatch {
    synthetic_match(seed, REFERENCE_TURNS)
}

/// Replay `m` up to `turn` and return an owned copy of the snapshot.
pub fn world_at(m: &SyntheticMatch, turn: i32) -> Result<GameWorld, ReplayError> {
    let mut timeline = Timeline::bootstrap(&m.game, &m.header, PlaybackConfig::default())?;
    for delta in &m.deltas {
        timeline.push_delta(delta.clone())?;
    }
    timeline.seek(turn)?;
    Ok(timeline.current().copy())
}

/// `n` bodies with ids `1..=n` laid out row by row on a 64-wide map,
/// alternating between the two teams.
pub fn body_batch(n: usize) -> ColumnBatch<BodyColumn> {
    let ids: Vec<i32> = (1..=n as i32).collect();
    let teams = ids.iter().map(|id| 1 + id % 2).collect();
    let xs = ids.iter().map(|id| id % 64).collect();
    let ys = ids.iter().map(|id| id / 64).collect();
    ColumnBatch::new(ids)
        .with(BodyColumn::Team, teams)
        .with(BodyColumn::Type, vec![BodyType::Soldier as i32; n])
        .with(BodyColumn::X, xs)
        .with(BodyColumn::Y, ys)
        .with(BodyColumn::Hp, vec![50; n])
        .with(BodyColumn::Level, vec![1; n])
}
