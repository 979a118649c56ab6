//! FNV-1a hashing of world snapshots.
//!
//! Not cryptographic. The digest only serves as a fast equality check
//! between a seeked snapshot and a straight-line replay.

use scrim_store::{EntityStore, Schema};
use scrim_world::{GameWorld, TeamStats};

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_i32(hash: u64, v: i32) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

#[inline]
fn fnv1a_len(hash: u64, len: usize) -> u64 {
    fnv1a_bytes(hash, &(len as u64).to_le_bytes())
}

/// Rows in ascending id order, so that two stores with the same contents
/// hash equal whatever their physical row order.
fn hash_store<S: Schema>(mut hash: u64, store: &EntityStore<S>) -> u64 {
    let mut rows: Vec<(i32, usize)> = store
        .ids()
        .iter()
        .enumerate()
        .map(|(row, &id)| (id, row))
        .collect();
    rows.sort_unstable();

    hash = fnv1a_len(hash, rows.len());
    for (id, row) in rows {
        hash = fnv1a_i32(hash, id);
        for spec in S::COLUMNS {
            hash = fnv1a_i32(hash, store.value_at(row, spec.column));
        }
    }
    hash
}

fn hash_team(mut hash: u64, stats: &TeamStats) -> u64 {
    for bucket in stats.robots.iter().chain(&stats.total_hp) {
        for &v in bucket {
            hash = fnv1a_i32(hash, v);
        }
    }
    for v in [stats.lead, stats.gold, stats.lead_change, stats.gold_change] {
        hash = fnv1a_i32(hash, v);
    }
    hash
}

fn hash_grid(mut hash: u64, grid: &[i32]) -> u64 {
    hash = fnv1a_len(hash, grid.len());
    for &v in grid {
        hash = fnv1a_i32(hash, v);
    }
    hash
}

/// Digest of a snapshot's replayed state.
///
/// Covers the turn, live and died bodies (every column), team stats in
/// team-id order, the rubble, lead and gold grids, and indicator strings
/// in body-id order. Transient indicator dots and lines, robot logs and
/// metadata are not included.
pub fn world_hash(world: &GameWorld) -> u64 {
    let mut hash = fnv1a_i32(FNV_OFFSET, world.turn());
    hash = hash_store(hash, world.bodies());
    hash = hash_store(hash, world.died_bodies());

    let mut teams: Vec<_> = world.all_team_stats().iter().collect();
    teams.sort_unstable_by_key(|(team, _)| **team);
    for (team, stats) in teams {
        hash = fnv1a_i32(hash, team.0);
        hash = hash_team(hash, stats);
    }

    let map = world.map_stats();
    for grid in [&map.rubble, &map.lead, &map.gold] {
        hash = hash_grid(hash, grid);
    }

    let mut strings: Vec<_> = world.indicator_strings().iter().collect();
    strings.sort_unstable_by_key(|(id, _)| **id);
    for (&id, text) in strings {
        hash = fnv1a_i32(hash, id);
        hash = fnv1a_len(hash, text.len());
        hash = fnv1a_bytes(hash, text.as_bytes());
    }
    hash
}
