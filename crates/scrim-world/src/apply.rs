//! The turn-application state machine.
//!
//! [`GameWorld::apply_turn`] turns snapshot `T` into `T + 1` in a fixed
//! order of steps:
//!
//! 1. sequence check (and, under [`BoundsPolicy::Reject`], drop bounds);
//! 2. team resources;
//! 3. moves;
//! 4. spawns;
//! 5. reset of last turn's action and bid fields;
//! 6. lead and gold drops;
//! 7. periodic lead growth;
//! 8. actions;
//! 9. deaths;
//! 10. indicator dots and lines;
//! 11. indicator strings;
//! 12. bytecodes, then bids and robot logs;
//! 13. turn advance.
//!
//! Only step 1 can fail on well-formed stores. Every other lookup miss is
//! a counted, logged no-op.

use scrim_core::{ResourceDrops, TeamId, TurnDelta};
use scrim_space::GridDims;
use scrim_store::{ColumnBatch, StoreError};
use tracing::{debug, trace, warn};

use crate::config::BoundsPolicy;
use crate::error::PlaybackError;
use crate::logs::parse_round_logs;
use crate::schema::{BodyColumn, DotColumn, LineColumn};
use crate::world::GameWorld;

/// What one call to [`GameWorld::apply_turn`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnSummary {
    /// The turn the snapshot is now at.
    pub round: i32,
    /// Bodies moved.
    pub moved: usize,
    /// Bodies spawned.
    pub spawned: usize,
    /// Bodies removed.
    pub died: usize,
    /// Actions dispatched.
    pub actions: usize,
    /// Rows ignored because they referenced missing bodies, teams or
    /// cells, or repeated a live id.
    pub skipped: usize,
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RowCounts {
    pub applied: usize,
    pub skipped: usize,
}

/// Usable row count of a delta group, warning when its columns disagree.
pub(crate) fn group_rows(group: &'static str, rows: usize, ragged: bool) -> usize {
    if ragged {
        warn!(target: "scrim::apply", group, rows, "parallel columns differ in length, truncating");
    }
    rows
}

/// Add drops into `grid`, wrapping on overflow. Returns the number of
/// drops skipped for lying off the map.
fn accumulate_drops(
    name: &'static str,
    grid: &mut [i32],
    dims: GridDims,
    drops: &ResourceDrops,
) -> usize {
    let n = group_rows(name, drops.rows(), drops.is_ragged());
    let mut skipped = 0;
    for i in 0..n {
        let (x, y) = (drops.xs[i], drops.ys[i]);
        match dims.index(x, y) {
            Some(idx) => grid[idx] = grid[idx].wrapping_add(drops.values[i]),
            None => {
                warn!(
                    target: "scrim::apply",
                    grid = name,
                    x,
                    y,
                    "resource drop off the map, skipping"
                );
                skipped += 1;
            }
        }
    }
    skipped
}

impl GameWorld {
    /// Apply the next turn's delta.
    ///
    /// `delta.round_id` must be exactly `self.turn() + 1`; otherwise
    /// [`PlaybackError::OutOfSequence`] is returned and the snapshot is
    /// untouched.
    pub fn apply_turn(&mut self, delta: &TurnDelta) -> Result<TurnSummary, PlaybackError> {
        if delta.round_id != self.turn + 1 {
            return Err(PlaybackError::OutOfSequence {
                current: self.turn,
                received: delta.round_id,
            });
        }
        if self.config.bounds_policy == BoundsPolicy::Reject {
            self.check_drop_bounds(delta)?;
        }

        let mut summary = TurnSummary {
            round: delta.round_id,
            ..TurnSummary::default()
        };

        if let Some(res) = &delta.team_resources {
            let n = group_rows("team_resources", res.rows(), res.is_ragged());
            for i in 0..n {
                match self.team_stats.get_mut(&TeamId(res.team_ids[i])) {
                    Some(stats) => stats.apply_resources(res.lead_changes[i], res.gold_changes[i]),
                    None => {
                        trace!(
                            target: "scrim::apply",
                            team = res.team_ids[i],
                            "resources for unknown team"
                        );
                        summary.skipped += 1;
                    }
                }
            }
        }

        if let Some(moved) = &delta.moved {
            let n = group_rows("moved", moved.rows(), moved.is_ragged());
            let batch = ColumnBatch::new(moved.ids[..n].to_vec())
                .with(BodyColumn::X, moved.xs[..n].to_vec())
                .with(BodyColumn::Y, moved.ys[..n].to_vec());
            summary.moved = self.bodies.alter_bulk(&batch)?;
            summary.skipped += n - summary.moved;
        }

        if let Some(spawned) = &delta.spawned {
            let counts = self.insert_bodies(spawned)?;
            summary.spawned = counts.applied;
            summary.skipped += counts.skipped;
        }

        self.reset_transient_fields()?;

        let dims = self.map_stats.dims;
        if let Some(drops) = &delta.lead_drops {
            summary.skipped += accumulate_drops("lead", &mut self.map_stats.lead, dims, drops);
        }
        if let Some(drops) = &delta.gold_drops {
            summary.skipped += accumulate_drops("gold", &mut self.map_stats.gold, dims, drops);
        }

        let constants = self.meta.constants();
        if delta.round_id % constants.increase_period == 0 {
            self.map_stats.grow_lead(constants.lead_additive_increase);
        }

        if let Some(actions) = &delta.actions {
            let counts = self.apply_actions(actions);
            summary.actions = counts.applied;
            summary.skipped += counts.skipped;
        }

        let counts = self.remove_dead(&delta.died_ids)?;
        summary.died = counts.applied;
        summary.skipped += counts.skipped;

        self.refresh_indicators(delta)?;

        if let Some(strings) = &delta.indicator_strings {
            let n = group_rows("indicator_strings", strings.rows(), strings.is_ragged());
            for i in 0..n {
                self.indicator_strings
                    .insert(strings.ids[i], strings.texts[i].clone());
            }
        }

        if let Some(bytecodes) = &delta.bytecodes {
            let n = group_rows("bytecodes", bytecodes.rows(), bytecodes.is_ragged());
            let batch = ColumnBatch::new(bytecodes.ids[..n].to_vec())
                .with(BodyColumn::BytecodesUsed, bytecodes.used[..n].to_vec());
            let altered = self.bodies.alter_bulk(&batch)?;
            summary.skipped += n - altered;
        }

        if let Some(bids) = &delta.bids {
            let n = group_rows("bids", bids.rows(), bids.is_ragged());
            for i in 0..n {
                let id = bids.ids[i];
                match self.bodies.index_of(id) {
                    Some(row) => {
                        self.bodies.set_at(row, BodyColumn::Bid, bids.amounts[i]);
                        self.bid_robots.push(id);
                    }
                    None => summary.skipped += 1,
                }
            }
        }

        self.record_logs(delta);

        self.turn = delta.round_id;
        debug!(
            target: "scrim::apply",
            round = summary.round,
            moved = summary.moved,
            spawned = summary.spawned,
            died = summary.died,
            actions = summary.actions,
            skipped = summary.skipped,
            "turn applied"
        );
        Ok(summary)
    }

    fn check_drop_bounds(&self, delta: &TurnDelta) -> Result<(), PlaybackError> {
        let dims = self.map_stats.dims;
        for drops in [&delta.lead_drops, &delta.gold_drops].into_iter().flatten() {
            for i in 0..drops.rows() {
                let (x, y) = (drops.xs[i], drops.ys[i]);
                if !dims.contains(x, y) {
                    return Err(PlaybackError::GridOutOfBounds {
                        x,
                        y,
                        width: dims.width(),
                        height: dims.height(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Clear the action fields and bids recorded during the previous turn.
    fn reset_transient_fields(&mut self) -> Result<(), StoreError> {
        let actors = std::mem::take(&mut self.action_robots);
        if !actors.is_empty() {
            let n = actors.len();
            let batch = ColumnBatch::new(actors)
                .with(BodyColumn::Action, vec![-1; n])
                .with(BodyColumn::Target, vec![0; n])
                .with(BodyColumn::TargetX, vec![0; n])
                .with(BodyColumn::TargetY, vec![0; n]);
            self.bodies.alter_bulk(&batch)?;
        }

        let bidders = std::mem::take(&mut self.bid_robots);
        if !bidders.is_empty() {
            let n = bidders.len();
            let batch = ColumnBatch::new(bidders).with(BodyColumn::Bid, vec![0; n]);
            self.bodies.alter_bulk(&batch)?;
        }
        Ok(())
    }

    fn refresh_indicators(&mut self, delta: &TurnDelta) -> Result<(), StoreError> {
        self.indicator_dots.clear();
        if let Some(dots) = &delta.indicator_dots {
            let n = group_rows("indicator_dots", dots.rows(), dots.is_ragged());
            let batch = ColumnBatch::new((0..n as i32).collect())
                .with(DotColumn::Body, dots.ids[..n].to_vec())
                .with(DotColumn::X, dots.xs[..n].to_vec())
                .with(DotColumn::Y, dots.ys[..n].to_vec())
                .with(DotColumn::Red, dots.red[..n].to_vec())
                .with(DotColumn::Green, dots.green[..n].to_vec())
                .with(DotColumn::Blue, dots.blue[..n].to_vec());
            self.indicator_dots.insert_bulk(&batch)?;
        }

        self.indicator_lines.clear();
        if let Some(lines) = &delta.indicator_lines {
            let n = group_rows("indicator_lines", lines.rows(), lines.is_ragged());
            let batch = ColumnBatch::new((0..n as i32).collect())
                .with(LineColumn::Body, lines.ids[..n].to_vec())
                .with(LineColumn::StartX, lines.start_xs[..n].to_vec())
                .with(LineColumn::StartY, lines.start_ys[..n].to_vec())
                .with(LineColumn::EndX, lines.end_xs[..n].to_vec())
                .with(LineColumn::EndY, lines.end_ys[..n].to_vec())
                .with(LineColumn::Red, lines.red[..n].to_vec())
                .with(LineColumn::Green, lines.green[..n].to_vec())
                .with(LineColumn::Blue, lines.blue[..n].to_vec());
            self.indicator_lines.insert_bulk(&batch)?;
        }
        Ok(())
    }

    fn record_logs(&mut self, delta: &TurnDelta) {
        if self.config.process_logs {
            let text = delta.logs.as_deref().unwrap_or("");
            let bucket = parse_round_logs(delta.round_id, text).unwrap_or_default();
            self.logs.push_back(bucket);
        } else {
            self.logs_shift += 1;
        }
        while self.logs.len() > self.config.max_log_rounds {
            self.logs.pop_front();
            self.logs_shift += 1;
        }
    }
}
