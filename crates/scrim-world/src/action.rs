//! Action dispatch.
//!
//! Every action except the map-wide vortex needs a live actor. When the
//! actor is gone the row is skipped entirely, so a dangling entry never
//! touches any other body.

use scrim_core::{level_index, ActionKind, Actions, BodyType, TeamId, MAX_LEVEL};
use scrim_space::GridTransform;
use tracing::{debug, info, trace, warn};

use crate::apply::{group_rows, RowCounts};
use crate::schema::BodyColumn;
use crate::world::GameWorld;

/// How much of the target an action records on its actor.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Record {
    ActionOnly,
    TargetAndPosition,
}

impl GameWorld {
    pub(crate) fn apply_actions(&mut self, group: &Actions) -> RowCounts {
        let n = group_rows("actions", group.rows(), group.is_ragged());
        let mut counts = RowCounts::default();

        for i in 0..n {
            let actor = group.ids[i];
            let raw = group.kinds[i];
            let target = group.targets[i];

            let Some(kind) = ActionKind::from_raw(raw) else {
                debug!(target: "scrim::apply", actor, raw, "unrecognised action kind");
                counts.skipped += 1;
                continue;
            };

            if kind == ActionKind::Vortex {
                self.apply_vortex(target);
                counts.applied += 1;
                continue;
            }
            if kind == ActionKind::DieException {
                info!(
                    target: "scrim::apply",
                    actor,
                    target_id = target,
                    "robot threw an exception"
                );
                counts.applied += 1;
                continue;
            }

            let Some(row) = self.bodies.index_of(actor) else {
                trace!(target: "scrim::apply", actor, ?kind, "action by body that is not alive");
                counts.skipped += 1;
                continue;
            };

            match kind {
                ActionKind::Attack | ActionKind::Repair => {
                    self.record_action(row, actor, kind, target, Record::TargetAndPosition);
                }
                ActionKind::LocalAbyss
                | ActionKind::LocalCharge
                | ActionKind::LocalFury
                | ActionKind::Transmute => {
                    self.record_action(row, actor, kind, target, Record::ActionOnly);
                }
                ActionKind::Transform => {
                    self.record_action(row, actor, kind, target, Record::ActionOnly);
                    let portable = self.bodies.value_at(row, BodyColumn::Portable);
                    self.bodies.set_at(row, BodyColumn::Portable, 1 - portable);
                }
                ActionKind::Mutate => {
                    self.record_action(row, actor, kind, target, Record::ActionOnly);
                    self.mutate(row, actor);
                }
                ActionKind::SpawnUnit => {
                    self.record_action(row, actor, kind, target, Record::ActionOnly);
                    match self.bodies.index_of(target) {
                        Some(child) => self.bodies.set_at(child, BodyColumn::Parent, actor),
                        None => trace!(
                            target: "scrim::apply",
                            actor,
                            target_id = target,
                            "spawned unit not alive"
                        ),
                    }
                }
                ActionKind::ChangeHealth => self.change_health(row, actor, target),
                ActionKind::FullyRepaired => self.bodies.set_at(row, BodyColumn::Prototype, 0),
                ActionKind::MineLead
                | ActionKind::MineGold
                | ActionKind::Abyss
                | ActionKind::Charge
                | ActionKind::Fury
                | ActionKind::Vortex
                | ActionKind::DieException => {}
            }
            counts.applied += 1;
        }
        counts
    }

    /// Store the action on its actor and schedule the reset for next turn.
    fn record_action(
        &mut self,
        row: usize,
        actor: i32,
        kind: ActionKind,
        target: i32,
        record: Record,
    ) {
        self.bodies.set_at(row, BodyColumn::Action, kind.raw());
        if record == Record::TargetAndPosition {
            self.bodies.set_at(row, BodyColumn::Target, target);
            match self.bodies.index_of(target) {
                Some(t) => {
                    let x = self.bodies.value_at(t, BodyColumn::X);
                    let y = self.bodies.value_at(t, BodyColumn::Y);
                    self.bodies.set_at(row, BodyColumn::TargetX, x);
                    self.bodies.set_at(row, BodyColumn::TargetY, y);
                }
                None => trace!(
                    target: "scrim::apply",
                    actor,
                    target_id = target,
                    "action target not alive"
                ),
            }
        }
        self.action_robots.push(actor);
    }

    fn mutate(&mut self, row: usize, actor: i32) {
        let level = self.bodies.value_at(row, BodyColumn::Level);
        let Ok(from) = level_index(level) else {
            warn!(target: "scrim::apply", actor, level, "mutate from invalid level");
            return;
        };
        if level >= MAX_LEVEL {
            warn!(target: "scrim::apply", actor, level, "mutate past max level");
            return;
        }
        let hp = self.bodies.value_at(row, BodyColumn::Hp);
        let team = self.bodies.value_at(row, BodyColumn::Team);
        let raw_type = self.bodies.value_at(row, BodyColumn::Type);
        if let (Some(stats), Ok(body_type)) = (
            self.team_stats.get_mut(&TeamId(team)),
            BodyType::from_raw(raw_type),
        ) {
            let negative = stats.adjust(body_type, from, -1, -hp);
            stats.adjust(body_type, from + 1, 1, hp);
            if negative {
                debug!(target: "scrim::apply", actor, team, "team stat bucket went negative");
            }
        }
        self.bodies.set_at(row, BodyColumn::Level, level + 1);
    }

    fn change_health(&mut self, row: usize, actor: i32, delta: i32) {
        let hp = self.bodies.value_at(row, BodyColumn::Hp);
        self.bodies.set_at(row, BodyColumn::Hp, hp.wrapping_add(delta));

        let team = self.bodies.value_at(row, BodyColumn::Team);
        let raw_type = self.bodies.value_at(row, BodyColumn::Type);
        let level = self.bodies.value_at(row, BodyColumn::Level);
        let Some(stats) = self.team_stats.get_mut(&TeamId(team)) else {
            return;
        };
        match (BodyType::from_raw(raw_type), level_index(level)) {
            (Ok(body_type), Ok(bucket)) => {
                if stats.adjust(body_type, bucket, 0, delta) {
                    debug!(target: "scrim::apply", actor, team, "team stat bucket went negative");
                }
            }
            _ => warn!(
                target: "scrim::apply",
                actor,
                raw_type,
                level,
                "health change without stat bucket"
            ),
        }
    }

    fn apply_vortex(&mut self, selector: i32) {
        let Some(transform) = GridTransform::from_raw(selector) else {
            warn!(target: "scrim::apply", selector, "unknown vortex transform");
            return;
        };
        let dims = self.map_stats.dims;
        if let Err(err) = transform.apply(&mut self.map_stats.rubble, dims) {
            warn!(target: "scrim::apply", ?transform, %err, "vortex not applied");
        }
    }
}

