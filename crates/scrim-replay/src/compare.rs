//! Snapshot comparison.
//!
//! Hash-first: equal digests end the comparison. On mismatch every part
//! of the two snapshots is walked to say where they differ.

use scrim_core::TeamId;
use scrim_store::Schema;
use scrim_world::{BodySchema, DiedColumn, GameWorld};

use crate::hash::world_hash;

/// One difference between two snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Divergence {
    /// The snapshots are at different turns.
    Turn {
        /// Left turn.
        left: i32,
        /// Right turn.
        right: i32,
    },
    /// A body is alive in only one snapshot.
    BodyPresence {
        /// Body id.
        id: i32,
        /// Whether the body is the left snapshot's.
        in_left: bool,
    },
    /// A body is alive in both but one column differs.
    BodyColumn {
        /// Body id.
        id: i32,
        /// Column name.
        column: &'static str,
        /// Left value.
        left: i32,
        /// Right value.
        right: i32,
    },
    /// The sets of bodies that died this turn differ.
    DiedBodies,
    /// A team's aggregates differ, or the team exists on one side only.
    TeamStats {
        /// The team.
        team: TeamId,
    },
    /// A map grid differs; `index` is the first differing cell.
    Grid {
        /// `"rubble"`, `"lead"` or `"gold"`.
        grid: &'static str,
        /// Flat cell index.
        index: usize,
        /// Left value.
        left: i32,
        /// Right value.
        right: i32,
    },
    /// A map grid has a different cell count.
    GridLength {
        /// Grid name.
        grid: &'static str,
        /// Left length.
        left: usize,
        /// Right length.
        right: usize,
    },
    /// A body's indicator string differs or is set on one side only.
    IndicatorString {
        /// Body id.
        id: i32,
    },
}

/// All differences found between two snapshots.
#[derive(Clone, Debug)]
pub struct DivergenceReport {
    /// Turn of the left snapshot.
    pub turn: i32,
    /// Digest of the left snapshot.
    pub left_hash: u64,
    /// Digest of the right snapshot.
    pub right_hash: u64,
    /// Every divergence found.
    pub divergences: Vec<Divergence>,
}

/// Compare two snapshots. Returns `None` when their digests agree.
pub fn compare_worlds(left: &GameWorld, right: &GameWorld) -> Option<DivergenceReport> {
    let left_hash = world_hash(left);
    let right_hash = world_hash(right);
    if left_hash == right_hash {
        return None;
    }

    let mut divergences = Vec::new();
    if left.turn() != right.turn() {
        divergences.push(Divergence::Turn {
            left: left.turn(),
            right: right.turn(),
        });
    }
    compare_bodies(left, right, &mut divergences);
    if died_rows(left) != died_rows(right) {
        divergences.push(Divergence::DiedBodies);
    }
    compare_teams(left, right, &mut divergences);
    compare_grids(left, right, &mut divergences);
    compare_strings(left, right, &mut divergences);

    Some(DivergenceReport {
        turn: left.turn(),
        left_hash,
        right_hash,
        divergences,
    })
}

fn compare_bodies(left: &GameWorld, right: &GameWorld, out: &mut Vec<Divergence>) {
    let (lb, rb) = (left.bodies(), right.bodies());
    for (lrow, &id) in lb.ids().iter().enumerate() {
        let Some(rrow) = rb.index_of(id) else {
            out.push(Divergence::BodyPresence { id, in_left: true });
            continue;
        };
        for spec in BodySchema::COLUMNS {
            let (l, r) = (lb.value_at(lrow, spec.column), rb.value_at(rrow, spec.column));
            if l != r {
                out.push(Divergence::BodyColumn {
                    id,
                    column: spec.name,
                    left: l,
                    right: r,
                });
            }
        }
    }
    for &id in rb.ids() {
        if !lb.contains(id) {
            out.push(Divergence::BodyPresence { id, in_left: false });
        }
    }
}

fn died_rows(world: &GameWorld) -> Vec<(i32, i32, i32)> {
    let mut rows: Vec<_> = world
        .died_bodies()
        .rows()
        .map(|r| (r.id(), r.get(DiedColumn::X), r.get(DiedColumn::Y)))
        .collect();
    rows.sort_unstable();
    rows
}

fn compare_teams(left: &GameWorld, right: &GameWorld, out: &mut Vec<Divergence>) {
    let (lt, rt) = (left.all_team_stats(), right.all_team_stats());
    for (&team, stats) in lt {
        if rt.get(&team) != Some(stats) {
            out.push(Divergence::TeamStats { team });
        }
    }
    for &team in rt.keys() {
        if !lt.contains_key(&team) {
            out.push(Divergence::TeamStats { team });
        }
    }
}

fn compare_grids(left: &GameWorld, right: &GameWorld, out: &mut Vec<Divergence>) {
    let (lm, rm) = (left.map_stats(), right.map_stats());
    let grids = [
        ("rubble", &lm.rubble, &rm.rubble),
        ("lead", &lm.lead, &rm.lead),
        ("gold", &lm.gold, &rm.gold),
    ];
    for (grid, l, r) in grids {
        if l.len() != r.len() {
            out.push(Divergence::GridLength {
                grid,
                left: l.len(),
                right: r.len(),
            });
            continue;
        }
        if let Some(index) = l.iter().zip(r.iter()).position(|(a, b)| a != b) {
            out.push(Divergence::Grid {
                grid,
                index,
                left: l[index],
                right: r[index],
            });
        }
    }
}

fn compare_strings(left: &GameWorld, right: &GameWorld, out: &mut Vec<Divergence>) {
    let (ls, rs) = (left.indicator_strings(), right.indicator_strings());
    for (&id, text) in ls {
        if rs.get(&id) != Some(text) {
            out.push(Divergence::IndicatorString { id });
        }
    }
    for &id in rs.keys() {
        if !ls.contains_key(&id) {
            out.push(Divergence::IndicatorString { id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_core::{ActionKind, BodyType, TurnDelta};
    use scrim_test_utils::{standard_game_header, DeltaBuilder, HeaderBuilder, TEAM_A, TEAM_B};
    use scrim_world::PlaybackConfig;

    fn base() -> GameWorld {
        let header = HeaderBuilder::new(2, 2)
            .rubble(vec![1, 2, 3, 4])
            .body(1, TEAM_A, BodyType::Archon, 0, 0)
            .body(2, TEAM_B, BodyType::Miner, 1, 1)
            .build();
        GameWorld::bootstrap(&standard_game_header(), &header, PlaybackConfig::default()).unwrap()
    }

    #[test]
    fn equal_worlds_have_no_report() {
        let w = base();
        assert!(compare_worlds(&w, &w.copy()).is_none());
    }

    #[test]
    fn moved_body_reports_column() {
        let mut a = base();
        let mut b = base();
        a.apply_turn(&TurnDelta::empty(1)).unwrap();
        b.apply_turn(&DeltaBuilder::new(1).moved(1, 1, 0).build())
            .unwrap();
        let report = compare_worlds(&a, &b).unwrap();
        assert_eq!(report.turn, 1);
        assert_eq!(
            report.divergences,
            vec![Divergence::BodyColumn {
                id: 1,
                column: "x",
                left: 0,
                right: 1
            }]
        );
    }

    #[test]
    fn death_and_vortex_are_located() {
        let mut a = base();
        let mut b = base();
        a.apply_turn(&TurnDelta::empty(1)).unwrap();
        b.apply_turn(
            &DeltaBuilder::new(1)
                .die(2)
                .action(-1, ActionKind::Vortex, 0)
                .build(),
        )
        .unwrap();
        let report = compare_worlds(&a, &b).unwrap();
        assert!(report.divergences.contains(&Divergence::BodyPresence { id: 2, in_left: true }));
        assert!(report.divergences.contains(&Divergence::DiedBodies));
        assert!(report.divergences.contains(&Divergence::TeamStats { team: TeamId(TEAM_B) }));
        assert!(report.divergences.contains(&Divergence::Grid {
            grid: "rubble",
            index: 0,
            left: 1,
            right: 4
        }));
        assert!(!report.divergences.contains(&Divergence::TeamStats { team: TeamId(TEAM_A) }));
    }

    #[test]
    fn turn_and_strings_are_reported() {
        let a = base();
        let mut b = base();
        b.apply_turn(&DeltaBuilder::new(1).indicator_string(9, "hi").build())
            .unwrap();
        let report = compare_worlds(&a, &b).unwrap();
        assert_eq!(report.divergences[0], Divergence::Turn { left: 0, right: 1 });
        assert!(report.divergences.contains(&Divergence::IndicatorString { id: 9 }));
    }
}
