//! Spawning and removing bodies, with the matching team-stat updates.

use indexmap::IndexSet;
use scrim_core::{level_index, BodyType, SpawnedBodies, TeamId};
use scrim_store::{ColumnBatch, StoreError};
use tracing::{debug, trace, warn};

use crate::apply::{group_rows, RowCounts};
use crate::schema::{BodyColumn, DiedColumn};
use crate::world::GameWorld;

impl GameWorld {
    /// Insert a spawn batch: level 1, no action, full health for the
    /// type, prototype if it is a non-archon building. Each inserted body
    /// is counted in its team's level-1 bucket.
    ///
    /// Ids already alive (or repeated in the batch) are skipped.
    pub(crate) fn insert_bodies(&mut self, group: &SpawnedBodies) -> Result<RowCounts, StoreError> {
        let n = group_rows("spawned_bodies", group.rows(), group.is_ragged());
        let mut counts = RowCounts::default();
        let mut seen = IndexSet::with_capacity(n);

        let mut ids = Vec::with_capacity(n);
        let mut teams = Vec::with_capacity(n);
        let mut types = Vec::with_capacity(n);
        let mut xs = Vec::with_capacity(n);
        let mut ys = Vec::with_capacity(n);
        let mut hps = Vec::with_capacity(n);
        let mut prototypes = Vec::with_capacity(n);

        for i in 0..n {
            let id = group.ids[i];
            if self.bodies.contains(id) || !seen.insert(id) {
                warn!(target: "scrim::apply", id, "spawned id already alive, skipping");
                counts.skipped += 1;
                continue;
            }
            let team = group.teams[i];
            let raw_type = group.types[i];

            let (hp, prototype) = match BodyType::from_raw(raw_type) {
                Ok(body_type) => {
                    let hp = self
                        .meta
                        .body_type(body_type)
                        .map_or(0, |info| info.health[0]);
                    if let Some(stats) = self.team_stats.get_mut(&TeamId(team)) {
                        stats.adjust(body_type, 0, 1, hp);
                    }
                    (hp, i32::from(body_type.spawns_as_prototype()))
                }
                Err(err) => {
                    warn!(target: "scrim::apply", id, %err, "spawned body has no known type");
                    (0, 0)
                }
            };

            ids.push(id);
            teams.push(team);
            types.push(raw_type);
            xs.push(group.xs[i]);
            ys.push(group.ys[i]);
            hps.push(hp);
            prototypes.push(prototype);
            counts.applied += 1;
        }

        let len = ids.len();
        let batch = ColumnBatch::new(ids)
            .with(BodyColumn::Team, teams)
            .with(BodyColumn::Type, types)
            .with(BodyColumn::X, xs)
            .with(BodyColumn::Y, ys)
            .with(BodyColumn::Action, vec![-1; len])
            .with(BodyColumn::Hp, hps)
            .with(BodyColumn::Level, vec![1; len])
            .with(BodyColumn::Prototype, prototypes);
        self.bodies.insert_bulk(&batch)?;
        Ok(counts)
    }

    /// Replace the died store with this turn's deaths and remove them
    /// from the live store, decrementing team stats first.
    pub(crate) fn remove_dead(&mut self, died_ids: &[i32]) -> Result<RowCounts, StoreError> {
        self.died_bodies.clear();
        let mut counts = RowCounts::default();
        if died_ids.is_empty() {
            return Ok(counts);
        }

        let unique: Vec<i32> = died_ids
            .iter()
            .copied()
            .collect::<IndexSet<i32>>()
            .into_iter()
            .collect();
        let rows = self.bodies.lookup_indices(&unique);

        let mut ids = Vec::with_capacity(unique.len());
        let mut xs = Vec::with_capacity(unique.len());
        let mut ys = Vec::with_capacity(unique.len());

        for (&id, row) in unique.iter().zip(rows) {
            let Some(row) = row else {
                trace!(target: "scrim::apply", id, "died id not alive");
                counts.skipped += 1;
                continue;
            };
            let team = self.bodies.value_at(row, BodyColumn::Team);
            if let Some(stats) = self.team_stats.get_mut(&TeamId(team)) {
                let raw_type = self.bodies.value_at(row, BodyColumn::Type);
                let level = self.bodies.value_at(row, BodyColumn::Level);
                let hp = self.bodies.value_at(row, BodyColumn::Hp);
                match (BodyType::from_raw(raw_type), level_index(level)) {
                    (Ok(body_type), Ok(bucket)) => {
                        if stats.adjust(body_type, bucket, -1, -hp) {
                            debug!(
                                target: "scrim::apply",
                                id,
                                team,
                                "team stat bucket went negative"
                            );
                        }
                    }
                    _ => warn!(
                        target: "scrim::apply",
                        id,
                        raw_type,
                        level,
                        "dead body has no stat bucket"
                    ),
                }
            }
            ids.push(id);
            xs.push(self.bodies.value_at(row, BodyColumn::X));
            ys.push(self.bodies.value_at(row, BodyColumn::Y));
            counts.applied += 1;
        }

        self.bodies.delete_bulk(&ids);
        let batch = ColumnBatch::new(ids)
            .with(DiedColumn::X, xs)
            .with(DiedColumn::Y, ys);
        self.died_bodies.insert_bulk(&batch)?;
        Ok(counts)
    }
}
