use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scrim_core::{ActionKind, BodyType, GameHeader, MatchHeader, TurnDelta};

use crate::delta::DeltaBuilder;
use crate::header::{standard_game_header, HeaderBuilder, TEAM_A, TEAM_B};

const SIZE: i32 = 16;
const VORTEX_PERIOD: i32 = 100;

/// A complete, internally consistent recorded match.
#[derive(Clone, Debug)]
pub struct SyntheticMatch {
    pub game: GameHeader,
    pub header: MatchHeader,
    pub deltas: Vec<TurnDelta>,
}

#[derive(Clone, Copy, Debug)]
struct Unit {
    id: i32,
    team: i32,
    body_type: BodyType,
    level: i32,
    x: i32,
    y: i32,
}

fn team_letter(team: i32) -> char {
    if team == TEAM_A {
        'A'
    } else {
        'B'
    }
}

fn step(rng: &mut ChaCha8Rng, v: i32) -> i32 {
    (v + rng.gen_range(-1..=1)).clamp(0, SIZE - 1)
}

/// Generate a match on a 16×16 map with `turns` deltas.
///
/// Every id a move, action or death references is alive at that point
/// and archons never die. The same seed always yields the same match.
pub fn synthetic_match(seed: u64, turns: usize) -> SyntheticMatch {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells = (SIZE * SIZE) as usize;

    let rubble: Vec<i32> = (0..cells).map(|_| rng.gen_range(0..100)).collect();
    let lead: Vec<i32> = (0..cells)
        .map(|_| if rng.gen_bool(0.15) { rng.gen_range(1..50) } else { 0 })
        .collect();

    let mut living = vec![
        Unit {
            id: 1,
            team: TEAM_A,
            body_type: BodyType::Archon,
            level: 1,
            x: 1,
            y: 1,
        },
        Unit {
            id: 2,
            team: TEAM_B,
            body_type: BodyType::Archon,
            level: 1,
            x: SIZE - 2,
            y: SIZE - 2,
        },
        Unit {
            id: 3,
            team: TEAM_A,
            body_type: BodyType::Miner,
            level: 1,
            x: 2,
            y: 1,
        },
        Unit {
            id: 4,
            team: TEAM_B,
            body_type: BodyType::Miner,
            level: 1,
            x: SIZE - 3,
            y: SIZE - 2,
        },
    ];
    let mut next_id = 5;

    let mut header = HeaderBuilder::new(SIZE, SIZE)
        .name("synthetic")
        .seed(seed as i32)
        .rubble(rubble)
        .lead(lead)
        .anomaly(VORTEX_PERIOD / 2, 3);
    for u in &living {
        header = header.body(u.id, u.team, u.body_type, u.x, u.y);
    }

    let mut deltas = Vec::with_capacity(turns);
    for round in 1..=turns as i32 {
        let mut b = DeltaBuilder::new(round);
        let before = living.len();

        for team in [TEAM_A, TEAM_B] {
            b = b.resources(team, rng.gen_range(0..10), rng.gen_range(0..3));
        }

        for u in living.iter_mut().filter(|u| !u.body_type.is_building()) {
            if rng.gen_bool(0.5) {
                u.x = step(&mut rng, u.x);
                u.y = step(&mut rng, u.y);
                b = b.moved(u.id, u.x, u.y);
            }
        }

        let mut spawned = Vec::new();
        for u in living.iter().filter(|u| u.body_type == BodyType::Archon) {
            if rng.gen_bool(0.3) {
                let body_type = match rng.gen_range(0..4) {
                    0 => BodyType::Miner,
                    1 => BodyType::Builder,
                    2 => BodyType::Soldier,
                    _ => BodyType::Sage,
                };
                let child = Unit {
                    id: next_id,
                    team: u.team,
                    body_type,
                    level: 1,
                    x: step(&mut rng, u.x),
                    y: step(&mut rng, u.y),
                };
                next_id += 1;
                b = b
                    .spawn(child.id, child.team, child.body_type, child.x, child.y)
                    .action(u.id, ActionKind::SpawnUnit, child.id);
                spawned.push(child);
            }
        }
        for u in living.iter().filter(|u| u.body_type == BodyType::Builder) {
            if rng.gen_bool(0.05) {
                let tower = Unit {
                    id: next_id,
                    team: u.team,
                    body_type: BodyType::Watchtower,
                    level: 1,
                    x: u.x,
                    y: step(&mut rng, u.y),
                };
                next_id += 1;
                b = b
                    .spawn(tower.id, tower.team, tower.body_type, tower.x, tower.y)
                    .action(u.id, ActionKind::SpawnUnit, tower.id);
                spawned.push(tower);
            }
        }
        living.extend(spawned);

        for i in 0..living.len() {
            let u = living[i];
            match u.body_type {
                BodyType::Soldier | BodyType::Watchtower if rng.gen_bool(0.3) => {
                    let victim = living[rng.gen_range(0..living.len())];
                    if victim.id != u.id {
                        b = b
                            .action(u.id, ActionKind::Attack, victim.id)
                            .action(victim.id, ActionKind::ChangeHealth, -3);
                    }
                }
                BodyType::Miner if rng.gen_bool(0.4) => {
                    b = b
                        .action(u.id, ActionKind::MineLead, 0)
                        .lead_drop(u.x, u.y, -1);
                }
                BodyType::Builder if rng.gen_bool(0.2) => {
                    let target = living[rng.gen_range(0..living.len())];
                    b = b.action(u.id, ActionKind::Repair, target.id);
                }
                BodyType::Archon | BodyType::Watchtower if u.level < 3 && rng.gen_bool(0.02) => {
                    living[i].level += 1;
                    b = b.action(u.id, ActionKind::Mutate, 0);
                }
                BodyType::Archon if rng.gen_bool(0.05) => {
                    b = b.action(u.id, ActionKind::Transform, 0);
                }
                BodyType::Sage if rng.gen_bool(0.1) => {
                    b = b.action(u.id, ActionKind::LocalCharge, 0);
                }
                _ => {}
            }
        }

        if round % VORTEX_PERIOD == VORTEX_PERIOD / 2 {
            b = b.action(-1, ActionKind::Vortex, rng.gen_range(0..3));
        }

        for _ in 0..rng.gen_range(0..3) {
            b = b.lead_drop(rng.gen_range(0..SIZE), rng.gen_range(0..SIZE), rng.gen_range(1..20));
        }
        if rng.gen_bool(0.1) {
            b = b.gold_drop(rng.gen_range(0..SIZE), rng.gen_range(0..SIZE), rng.gen_range(1..5));
        }

        // Only bodies that existed before this turn may die in it.
        let mut dead = Vec::new();
        for u in &living[..before] {
            if u.body_type != BodyType::Archon && rng.gen_bool(0.04) {
                dead.push(u.id);
            }
        }
        for &id in &dead {
            b = b.die(id);
        }
        living.retain(|u| !dead.contains(&u.id));

        let mut log = String::new();
        for u in &living {
            b = b.bytecodes(u.id, rng.gen_range(0..10_000));
            if rng.gen_bool(0.05) {
                b = b.dot(u.id, u.x, u.y, [255, 0, rng.gen_range(0..256)]);
            }
            if rng.gen_bool(0.02) {
                let end = (step(&mut rng, u.x), step(&mut rng, u.y));
                b = b.line(u.id, (u.x, u.y), end, [0, 255, 0]);
            }
            if rng.gen_bool(0.03) {
                b = b.indicator_string(u.id, &format!("r{round}"));
            }
            if rng.gen_bool(0.02) {
                log.push_str(&format!(
                    "[{}:{}#{}@{}] hello\n",
                    team_letter(u.team),
                    u.body_type.name(),
                    u.id,
                    round
                ));
            }
        }
        if !log.is_empty() {
            b = b.logs(&log);
        }

        deltas.push(b.build());
    }

    SyntheticMatch {
        game: standard_game_header(),
        header: header.build(),
        deltas,
    }
}
