//! End-to-end turn application scenarios.

use scrim_core::{ActionKind, BodyId, BodyType, TeamId, TurnDelta};
use scrim_test_utils::{standard_game_header, DeltaBuilder, HeaderBuilder, TEAM_A, TEAM_B};
use scrim_world::{
    BodyColumn, BoundsPolicy, DiedColumn, DotColumn, GameWorld, PlaybackConfig, PlaybackError,
};

fn world_with(header: HeaderBuilder, config: PlaybackConfig) -> GameWorld {
    GameWorld::bootstrap(&standard_game_header(), &header.build(), config).unwrap()
}

fn world(header: HeaderBuilder) -> GameWorld {
    world_with(header, PlaybackConfig::default())
}

fn two_archons() -> HeaderBuilder {
    HeaderBuilder::new(8, 8)
        .body(1, TEAM_A, BodyType::Archon, 1, 1)
        .body(2, TEAM_B, BodyType::Archon, 6, 6)
}

fn empty_turns(w: &mut GameWorld, count: i32) {
    for _ in 0..count {
        let next = w.turn() + 1;
        w.apply_turn(&TurnDelta::empty(next)).unwrap();
    }
}

fn body(w: &GameWorld, id: i32, col: BodyColumn) -> i32 {
    w.bodies().value(id, col).unwrap()
}

// ── Sequencing ──────────────────────────────────────────────────────

#[test]
fn out_of_sequence_delta_is_rejected_untouched() {
    let mut w = world(two_archons());
    let skipped = DeltaBuilder::new(2).moved(1, 5, 5).build();
    assert_eq!(
        w.apply_turn(&skipped),
        Err(PlaybackError::OutOfSequence {
            current: 0,
            received: 2
        })
    );
    assert_eq!(w.turn(), 0);
    assert_eq!(body(&w, 1, BodyColumn::X), 1);

    w.apply_turn(&TurnDelta::empty(1)).unwrap();
    assert!(w.apply_turn(&TurnDelta::empty(1)).is_err());
    assert_eq!(w.turn(), 1);
}

// ── Spawns and deaths ───────────────────────────────────────────────

#[test]
fn spawn_then_death_restores_counts() {
    let mut w = world(two_archons());
    let before = w.team_stats(TeamId(TEAM_A)).unwrap().clone();

    w.apply_turn(&DeltaBuilder::new(1).spawn(42, TEAM_A, BodyType::Soldier, 3, 4).build())
        .unwrap();
    let stats = w.team_stats(TeamId(TEAM_A)).unwrap();
    assert_eq!(stats.robot_count(BodyType::Soldier, 1), 1);
    assert_eq!(stats.hit_points(BodyType::Soldier, 1), 50);
    assert_eq!(body(&w, 42, BodyColumn::Hp), 50);
    assert_eq!(body(&w, 42, BodyColumn::Level), 1);
    assert_eq!(body(&w, 42, BodyColumn::Action), -1);
    assert_eq!(body(&w, 42, BodyColumn::Prototype), 0);

    let summary = w.apply_turn(&DeltaBuilder::new(2).die(42).build()).unwrap();
    assert_eq!(summary.died, 1);
    assert!(!w.bodies().contains(42));
    let died = w.died_bodies().lookup(42).unwrap();
    assert_eq!((died.get(DiedColumn::X), died.get(DiedColumn::Y)), (3, 4));
    assert_eq!(w.team_stats(TeamId(TEAM_A)).unwrap(), &before);

    w.apply_turn(&TurnDelta::empty(3)).unwrap();
    assert!(w.died_bodies().is_empty());
}

#[test]
fn buildings_spawn_as_prototypes_except_archons() {
    let mut w = world(two_archons());
    w.apply_turn(
        &DeltaBuilder::new(1)
            .spawn(10, TEAM_A, BodyType::Watchtower, 2, 2)
            .spawn(11, TEAM_B, BodyType::Archon, 5, 5)
            .build(),
    )
    .unwrap();
    assert_eq!(body(&w, 10, BodyColumn::Prototype), 1);
    assert_eq!(body(&w, 10, BodyColumn::Hp), 150);
    assert_eq!(body(&w, 11, BodyColumn::Prototype), 0);

    w.apply_turn(&DeltaBuilder::new(2).action(10, ActionKind::FullyRepaired, 0).build())
        .unwrap();
    assert_eq!(body(&w, 10, BodyColumn::Prototype), 0);
}

#[test]
fn repeated_spawn_ids_are_skipped() {
    let mut w = world(two_archons());
    let summary = w
        .apply_turn(
            &DeltaBuilder::new(1)
                .spawn(1, TEAM_B, BodyType::Miner, 0, 0)
                .spawn(20, TEAM_A, BodyType::Miner, 0, 0)
                .spawn(20, TEAM_A, BodyType::Miner, 1, 0)
                .build(),
        )
        .unwrap();
    assert_eq!(summary.spawned, 1);
    assert_eq!(summary.skipped, 2);
    assert_eq!(body(&w, 1, BodyColumn::Type), BodyType::Archon as i32);
    assert_eq!(body(&w, 20, BodyColumn::X), 0);
    assert_eq!(
        w.team_stats(TeamId(TEAM_A)).unwrap().robot_count(BodyType::Miner, 1),
        1
    );
    assert_eq!(
        w.team_stats(TeamId(TEAM_B)).unwrap().robot_count(BodyType::Miner, 1),
        0
    );
}

#[test]
fn neutral_and_unknown_types_do_not_touch_stats() {
    let mut w = world(two_archons());
    let before = w.all_team_stats().clone();
    w.apply_turn(
        &DeltaBuilder::new(1)
            .spawn(30, 0, BodyType::Soldier, 4, 4)
            .spawn_raw(31, TEAM_A, 99, 4, 5)
            .build(),
    )
    .unwrap();
    assert_eq!(w.all_team_stats(), &before);
    assert_eq!(body(&w, 30, BodyColumn::Hp), 50);
    assert_eq!(body(&w, 31, BodyColumn::Hp), 0);

    w.apply_turn(&DeltaBuilder::new(2).die(30).die(31).build()).unwrap();
    assert_eq!(w.all_team_stats(), &before);
    assert_eq!(w.died_bodies().len(), 2);
}

#[test]
fn repeated_and_unknown_died_ids() {
    let mut w = world(
        two_archons().body(5, TEAM_A, BodyType::Miner, 3, 3),
    );
    let summary = w
        .apply_turn(&DeltaBuilder::new(1).die(5).die(5).die(77).build())
        .unwrap();
    assert_eq!(summary.died, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(w.died_bodies().ids(), &[5]);
    assert_eq!(
        w.team_stats(TeamId(TEAM_A)).unwrap().robot_count(BodyType::Miner, 1),
        0
    );
}

// ── Moves, bytecodes, bids ──────────────────────────────────────────

#[test]
fn moves_skip_missing_and_truncate_ragged_groups() {
    let mut w = world(two_archons());
    let mut delta = DeltaBuilder::new(1).moved(1, 2, 3).moved(404, 0, 0).moved(2, 7, 7).build();
    if let Some(m) = delta.moved.as_mut() {
        m.ys.pop();
    }
    let summary = w.apply_turn(&delta).unwrap();
    assert_eq!(summary.moved, 1);
    assert_eq!((body(&w, 1, BodyColumn::X), body(&w, 1, BodyColumn::Y)), (2, 3));
    assert_eq!(body(&w, 2, BodyColumn::X), 6);
}

#[test]
fn bytecodes_and_bids() {
    let mut w = world(two_archons());
    w.apply_turn(
        &DeltaBuilder::new(1)
            .bytecodes(1, 1234)
            .bytecodes(9, 1)
            .bid(2, 15)
            .build(),
    )
    .unwrap();
    assert_eq!(body(&w, 1, BodyColumn::BytecodesUsed), 1234);
    assert_eq!(body(&w, 2, BodyColumn::Bid), 15);

    w.apply_turn(&TurnDelta::empty(2)).unwrap();
    assert_eq!(body(&w, 2, BodyColumn::Bid), 0);
    assert_eq!(body(&w, 1, BodyColumn::BytecodesUsed), 1234);
}

// ── Resources ───────────────────────────────────────────────────────

#[test]
fn team_resources_accumulate() {
    let mut w = world(two_archons());
    w.apply_turn(&DeltaBuilder::new(1).resources(TEAM_A, 10, 1).resources(7, 5, 5).build())
        .unwrap();
    w.apply_turn(&DeltaBuilder::new(2).resources(TEAM_A, 4, 0).build())
        .unwrap();
    let a = w.team_stats(TeamId(TEAM_A)).unwrap();
    assert_eq!((a.lead, a.gold), (14, 1));
    assert_eq!((a.lead_change, a.gold_change), (4, 0));
}

#[test]
fn drops_accumulate_and_growth_only_on_period() {
    let lead = vec![0, 3, -2, 10];
    let mut w = world(HeaderBuilder::new(2, 2).lead(lead.clone()));

    w.apply_turn(&DeltaBuilder::new(1).lead_drop(1, 1, 5).gold_drop(0, 1, 2).build())
        .unwrap();
    assert_eq!(w.map_stats().lead, vec![0, 3, -2, 15]);
    assert_eq!(w.map_stats().gold, vec![0, 0, 2, 0]);

    empty_turns(&mut w, 18);
    assert_eq!(w.turn(), 19);
    assert_eq!(w.map_stats().lead, vec![0, 3, -2, 15]);

    empty_turns(&mut w, 1);
    assert_eq!(w.map_stats().lead, vec![0, 8, 0, 20]);
    assert_eq!(w.map_stats().gold, vec![0, 0, 2, 0]);
}

#[test]
fn extreme_drop_wraps_the_cell() {
    let mut w = world(HeaderBuilder::new(2, 2).lead(vec![1, 0, 0, 0]));
    w.apply_turn(
        &DeltaBuilder::new(1)
            .lead_drop(0, 0, i32::MAX)
            .gold_drop(1, 0, i32::MIN)
            .build(),
    )
    .unwrap();
    assert_eq!(w.map_stats().lead, vec![i32::MIN, 0, 0, 0]);
    w.apply_turn(&DeltaBuilder::new(2).gold_drop(1, 0, -1).build())
        .unwrap();
    assert_eq!(w.map_stats().gold, vec![0, i32::MAX, 0, 0]);
}

#[test]
fn out_of_bounds_drops_are_skipped_by_default() {
    let mut w = world(HeaderBuilder::new(2, 2));
    let summary = w
        .apply_turn(&DeltaBuilder::new(1).lead_drop(2, 0, 9).lead_drop(0, 0, 1).build())
        .unwrap();
    assert_eq!(summary.skipped, 1);
    assert_eq!(w.map_stats().lead, vec![1, 0, 0, 0]);
}

#[test]
fn out_of_bounds_drops_reject_before_mutation() {
    let config = PlaybackConfig {
        bounds_policy: BoundsPolicy::Reject,
        ..PlaybackConfig::default()
    };
    let mut w = world_with(two_archons(), config);
    let delta = DeltaBuilder::new(1)
        .moved(1, 4, 4)
        .lead_drop(0, 0, 1)
        .gold_drop(-1, 3, 1)
        .build();
    assert_eq!(
        w.apply_turn(&delta),
        Err(PlaybackError::GridOutOfBounds {
            x: -1,
            y: 3,
            width: 8,
            height: 8
        })
    );
    assert_eq!(w.turn(), 0);
    assert_eq!(body(&w, 1, BodyColumn::X), 1);
    assert!(w.map_stats().lead.iter().all(|&v| v == 0));
}

// ── Actions ─────────────────────────────────────────────────────────

#[test]
fn attack_records_target_position_for_one_turn() {
    let mut w = world(two_archons());
    w.apply_turn(&DeltaBuilder::new(1).action(1, ActionKind::Attack, 2).build())
        .unwrap();
    assert_eq!(body(&w, 1, BodyColumn::Action), ActionKind::Attack.raw());
    assert_eq!(body(&w, 1, BodyColumn::Target), 2);
    assert_eq!(
        (body(&w, 1, BodyColumn::TargetX), body(&w, 1, BodyColumn::TargetY)),
        (6, 6)
    );

    w.apply_turn(&DeltaBuilder::new(2).moved(2, 5, 5).build()).unwrap();
    assert_eq!(body(&w, 1, BodyColumn::Action), -1);
    assert_eq!(body(&w, 1, BodyColumn::Target), 0);
    assert_eq!(body(&w, 1, BodyColumn::TargetX), 0);
}

#[test]
fn action_issued_this_turn_survives_the_reset() {
    let mut w = world(two_archons());
    w.apply_turn(&DeltaBuilder::new(1).action(1, ActionKind::Attack, 2).build())
        .unwrap();
    w.apply_turn(&DeltaBuilder::new(2).action(1, ActionKind::LocalFury, 0).build())
        .unwrap();
    assert_eq!(body(&w, 1, BodyColumn::Action), ActionKind::LocalFury.raw());
    assert_eq!(body(&w, 1, BodyColumn::Target), 0);
}

#[test]
fn missing_actor_leaves_other_rows_alone() {
    let mut w = world(two_archons());
    let before = w.bodies().clone();
    let summary = w
        .apply_turn(
            &DeltaBuilder::new(1)
                .action(99, ActionKind::Attack, 2)
                .action(99, ActionKind::SpawnUnit, 2)
                .action(99, ActionKind::ChangeHealth, -10)
                .build(),
        )
        .unwrap();
    assert_eq!(summary.actions, 0);
    assert_eq!(summary.skipped, 3);
    assert_eq!(w.bodies(), &before);

    w.apply_turn(
        &DeltaBuilder::new(2)
            .action(98, ActionKind::Transform, 0)
            .action(1, ActionKind::Transform, 0)
            .build(),
    )
    .unwrap();
    assert_eq!(body(&w, 1, BodyColumn::Portable), 1);
    assert_eq!(body(&w, 2, BodyColumn::Portable), 0);
}

#[test]
fn transform_toggles_portable() {
    let mut w = world(two_archons());
    w.apply_turn(&DeltaBuilder::new(1).action(1, ActionKind::Transform, 0).build())
        .unwrap();
    assert_eq!(body(&w, 1, BodyColumn::Portable), 1);
    w.apply_turn(&DeltaBuilder::new(2).action(1, ActionKind::Transform, 0).build())
        .unwrap();
    assert_eq!(body(&w, 1, BodyColumn::Portable), 0);
}

#[test]
fn mutate_moves_stat_buckets_until_max_level() {
    let mut w = world(two_archons());
    for round in 1..=3 {
        w.apply_turn(&DeltaBuilder::new(round).action(1, ActionKind::Mutate, 0).build())
            .unwrap();
    }
    assert_eq!(body(&w, 1, BodyColumn::Level), 3);
    assert_eq!(body(&w, 1, BodyColumn::Action), ActionKind::Mutate.raw());
    let a = w.team_stats(TeamId(TEAM_A)).unwrap();
    assert_eq!(a.robot_count(BodyType::Archon, 1), 0);
    assert_eq!(a.robot_count(BodyType::Archon, 2), 0);
    assert_eq!(a.robot_count(BodyType::Archon, 3), 1);
    assert_eq!(a.hit_points(BodyType::Archon, 3), 1000);

    w.apply_turn(&DeltaBuilder::new(4).die(1).build()).unwrap();
    let a = w.team_stats(TeamId(TEAM_A)).unwrap();
    assert_eq!(a.robots_of(BodyType::Archon), 0);
    assert_eq!(a.hit_points(BodyType::Archon, 3), 0);
}

#[test]
fn change_health_updates_body_and_team_sum() {
    let mut w = world(two_archons());
    w.apply_turn(&DeltaBuilder::new(1).action(2, ActionKind::ChangeHealth, -40).build())
        .unwrap();
    assert_eq!(body(&w, 2, BodyColumn::Hp), 960);
    assert_eq!(body(&w, 2, BodyColumn::Action), -1);
    let b = w.team_stats(TeamId(TEAM_B)).unwrap();
    assert_eq!(b.hit_points(BodyType::Archon, 1), 960);
}

#[test]
fn change_health_wraps_at_the_edge() {
    let mut w = world(two_archons());
    w.apply_turn(&DeltaBuilder::new(1).action(2, ActionKind::ChangeHealth, i32::MAX).build())
        .unwrap();
    assert_eq!(body(&w, 2, BodyColumn::Hp), 1000i32.wrapping_add(i32::MAX));
    let b = w.team_stats(TeamId(TEAM_B)).unwrap();
    assert_eq!(b.hit_points(BodyType::Archon, 1), 1000i32.wrapping_add(i32::MAX));
}

#[test]
fn spawn_unit_links_parent() {
    let mut w = world(two_archons());
    w.apply_turn(
        &DeltaBuilder::new(1)
            .spawn(50, TEAM_A, BodyType::Builder, 2, 1)
            .action(1, ActionKind::SpawnUnit, 50)
            .build(),
    )
    .unwrap();
    assert_eq!(body(&w, 50, BodyColumn::Parent), 1);
    assert_eq!(body(&w, 1, BodyColumn::Action), ActionKind::SpawnUnit.raw());
}

#[test]
fn repair_records_target_position() {
    let mut w = world(two_archons().body(3, TEAM_A, BodyType::Builder, 2, 2));
    w.apply_turn(&DeltaBuilder::new(1).action(3, ActionKind::Repair, 1).build())
        .unwrap();
    assert_eq!(body(&w, 3, BodyColumn::Target), 1);
    assert_eq!(
        (body(&w, 3, BodyColumn::TargetX), body(&w, 3, BodyColumn::TargetY)),
        (1, 1)
    );
}

#[test]
fn transmute_and_unknown_kinds_leave_resources() {
    let mut w = world(two_archons());
    let before = w.all_team_stats().clone();
    let summary = w
        .apply_turn(
            &DeltaBuilder::new(1)
                .action(1, ActionKind::Transmute, 100)
                .action(1, ActionKind::MineGold, 0)
                .action_raw(1, 42, 0)
                .action(-1, ActionKind::DieException, 0)
                .build(),
        )
        .unwrap();
    assert_eq!(summary.actions, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(w.all_team_stats(), &before);
    assert_eq!(body(&w, 1, BodyColumn::Action), ActionKind::Transmute.raw());
}

#[test]
fn vortex_permutes_rubble_only() {
    let mut w = world(
        HeaderBuilder::new(2, 2)
            .rubble(vec![1, 2, 3, 4])
            .lead(vec![5, 6, 7, 8]),
    );
    w.apply_turn(&DeltaBuilder::new(1).action(-1, ActionKind::Vortex, 0).build())
        .unwrap();
    // Every cycle of a 2x2 is started twice: a half turn.
    assert_eq!(w.map_stats().rubble, vec![4, 3, 2, 1]);
    assert_eq!(w.map_stats().lead, vec![5, 6, 7, 8]);

    for round in 2..=4 {
        w.apply_turn(&DeltaBuilder::new(round).action(-1, ActionKind::Vortex, 0).build())
            .unwrap();
    }
    assert_eq!(w.map_stats().rubble, vec![1, 2, 3, 4]);

    w.apply_turn(&DeltaBuilder::new(5).action(-1, ActionKind::Vortex, 1).build())
        .unwrap();
    assert_eq!(w.map_stats().rubble, vec![2, 1, 4, 3]);
    w.apply_turn(&DeltaBuilder::new(6).action(-1, ActionKind::Vortex, 2).build())
        .unwrap();
    assert_eq!(w.map_stats().rubble, vec![4, 3, 2, 1]);
}

#[test]
fn vortex_rotation_on_odd_map() {
    let mut w = world(HeaderBuilder::new(3, 3).rubble((1..=9).collect()));
    w.apply_turn(&DeltaBuilder::new(1).action(-1, ActionKind::Vortex, 0).build())
        .unwrap();
    assert_eq!(w.map_stats().rubble, vec![3, 8, 9, 6, 5, 4, 1, 2, 7]);
}

#[test]
fn rotation_on_rectangular_map_is_skipped() {
    let mut w = world(HeaderBuilder::new(3, 2).rubble(vec![1, 2, 3, 4, 5, 6]));
    w.apply_turn(&DeltaBuilder::new(1).action(-1, ActionKind::Vortex, 0).build())
        .unwrap();
    assert_eq!(w.map_stats().rubble, vec![1, 2, 3, 4, 5, 6]);
}

// ── Indicators and logs ─────────────────────────────────────────────

#[test]
fn indicator_strings_persist_while_dots_expire() {
    let mut w = world(two_archons());
    w.apply_turn(
        &DeltaBuilder::new(1)
            .indicator_string(7, "scouting")
            .dot(1, 3, 3, [255, 0, 0])
            .dot(1, 4, 4, [0, 0, 255])
            .line(2, (0, 0), (5, 5), [0, 255, 0])
            .build(),
    )
    .unwrap();
    assert_eq!(w.indicator_dots().len(), 2);
    assert_eq!(w.indicator_dots().column(DotColumn::Body).iter().collect::<Vec<_>>(), vec![1, 1]);
    assert_eq!(w.indicator_lines().len(), 1);

    w.apply_turn(&TurnDelta::empty(2)).unwrap();
    assert!(w.indicator_dots().is_empty());
    assert!(w.indicator_lines().is_empty());

    empty_turns(&mut w, 49);
    assert_eq!(w.turn(), 51);
    assert_eq!(w.indicator_string(BodyId(7)), Some("scouting"));

    w.apply_turn(&DeltaBuilder::new(52).indicator_string(7, "retreat").build())
        .unwrap();
    assert_eq!(w.indicator_string(BodyId(7)), Some("retreat"));
}

#[test]
fn robot_logs_are_bucketed_and_trimmed() {
    let config = PlaybackConfig {
        max_log_rounds: 2,
        ..PlaybackConfig::default()
    };
    let mut w = world_with(two_archons(), config);
    w.apply_turn(&DeltaBuilder::new(1).logs("[A:ARCHON#1@1] one").build())
        .unwrap();
    w.apply_turn(&DeltaBuilder::new(2).logs("not a header").build())
        .unwrap();
    w.apply_turn(&DeltaBuilder::new(3).logs("[B:ARCHON#2@3] three\nmore").build())
        .unwrap();

    assert_eq!(w.logs_shift(), 2);
    assert!(w.logs_for_round(1).is_none());
    assert_eq!(w.logs_for_round(2), Some(&[][..]));
    let three = w.logs_for_round(3).unwrap();
    assert_eq!(three.len(), 1);
    assert_eq!(three[0].text, "three\nmore");
    assert_eq!(w.log_buckets().count(), 2);
}

#[test]
fn disabled_logs_keep_alignment() {
    let config = PlaybackConfig {
        process_logs: false,
        ..PlaybackConfig::default()
    };
    let mut w = world_with(two_archons(), config);
    w.apply_turn(&DeltaBuilder::new(1).logs("[A:ARCHON#1@1] one").build())
        .unwrap();
    empty_turns(&mut w, 2);
    assert_eq!(w.log_buckets().count(), 0);
    assert_eq!(w.logs_shift(), 4);
}

// ── Copies ──────────────────────────────────────────────────────────

#[test]
fn copy_is_independent() {
    let mut original = world(
        two_archons()
            .rubble((0..64).collect())
            .body(3, TEAM_A, BodyType::Miner, 2, 2),
    );
    original
        .apply_turn(
            &DeltaBuilder::new(1)
                .action(1, ActionKind::Attack, 2)
                .indicator_string(1, "hi")
                .build(),
        )
        .unwrap();
    let snapshot = original.copy();

    let mut copy = original.copy();
    copy.apply_turn(
        &DeltaBuilder::new(2)
            .moved(3, 0, 0)
            .die(2)
            .resources(TEAM_A, 100, 100)
            .lead_drop(0, 0, 9)
            .action(-1, ActionKind::Vortex, 1)
            .indicator_string(1, "bye")
            .build(),
    )
    .unwrap();

    assert_eq!(original.turn(), 1);
    assert_eq!(original.bodies(), snapshot.bodies());
    assert_eq!(original.all_team_stats(), snapshot.all_team_stats());
    assert_eq!(original.map_stats(), snapshot.map_stats());
    assert_eq!(original.indicator_string(BodyId(1)), Some("hi"));
    assert_eq!(body(&original, 1, BodyColumn::Action), ActionKind::Attack.raw());

    // The original still owns its scratch list: its next turn resets the attack.
    original.apply_turn(&TurnDelta::empty(2)).unwrap();
    assert_eq!(body(&original, 1, BodyColumn::Action), -1);
}

#[test]
fn copy_from_overwrites_everything() {
    let mut a = world(two_archons());
    let mut b = world(two_archons());
    a.apply_turn(&DeltaBuilder::new(1).die(2).lead_drop(0, 0, 3).build())
        .unwrap();
    b.copy_from(&a);
    assert_eq!(b.turn(), 1);
    assert_eq!(b.bodies(), a.bodies());
    assert_eq!(b.died_bodies(), a.died_bodies());
    assert_eq!(b.map_stats(), a.map_stats());
}
