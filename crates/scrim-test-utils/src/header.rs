use scrim_core::{
    BodyType, BodyTypeRecord, Constants, GameHeader, Location, MapRecord, MatchHeader,
    SpawnedBodies, TeamRecord,
};

pub const TEAM_A: i32 = 1;
pub const TEAM_B: i32 = 2;

/// Hit points per level used by [`standard_game_header`].
pub fn standard_health(body_type: BodyType) -> [i32; 3] {
    match body_type {
        BodyType::Archon => [1000, 1100, 1200],
        BodyType::Laboratory => [100, 110, 120],
        BodyType::Watchtower => [150, 165, 180],
        BodyType::Miner => [40, 40, 40],
        BodyType::Builder => [30, 30, 30],
        BodyType::Soldier => [50, 50, 50],
        BodyType::Sage => [100, 100, 100],
    }
}

/// Two teams (ids 1 and 2), every body type, default constants
/// (growth every 20 rounds by 5).
pub fn standard_game_header() -> GameHeader {
    GameHeader {
        spec_version: Some("2022.0.0".into()),
        teams: vec![
            TeamRecord {
                team_id: TEAM_A,
                name: Some("alpha".into()),
                package_name: Some("alphaplayer".into()),
            },
            TeamRecord {
                team_id: TEAM_B,
                name: Some("bravo".into()),
                package_name: Some("bravoplayer".into()),
            },
        ],
        body_types: BodyType::ALL
            .into_iter()
            .map(|t| BodyTypeRecord {
                body_type: t as i32,
                build_cost_lead: [50, 300, 800],
                build_cost_gold: [0, 0, 0],
                action_cooldown: 10,
                movement_cooldown: 20,
                health: standard_health(t),
                damage: [3, 4, 5],
                action_radius_squared: 13,
                vision_radius_squared: 20,
                bytecode_limit: 10_000,
            })
            .collect(),
        constants: Constants::default(),
    }
}

/// Builds a [`MatchHeader`] for a `width × height` map with corners at
/// `(0, 0)` and `(width, height)`.
#[derive(Clone, Debug)]
pub struct HeaderBuilder {
    map: MapRecord,
    bodies: SpawnedBodies,
    max_rounds: i32,
}

impl HeaderBuilder {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            map: MapRecord {
                name: Some("testmap".into()),
                min_corner: Location::new(0, 0),
                max_corner: Location::new(width, height),
                ..MapRecord::default()
            },
            bodies: SpawnedBodies::default(),
            max_rounds: 2000,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.map.name = Some(name.into());
        self
    }

    pub fn origin(mut self, x: i32, y: i32) -> Self {
        let w = self.map.max_corner.x - self.map.min_corner.x;
        let h = self.map.max_corner.y - self.map.min_corner.y;
        self.map.min_corner = Location::new(x, y);
        self.map.max_corner = Location::new(x + w, y + h);
        self
    }

    pub fn rubble(mut self, rubble: Vec<i32>) -> Self {
        self.map.rubble = rubble;
        self
    }

    pub fn lead(mut self, lead: Vec<i32>) -> Self {
        self.map.lead = lead;
        self
    }

    pub fn seed(mut self, seed: i32) -> Self {
        self.map.random_seed = seed;
        self
    }

    pub fn symmetry(mut self, raw: i32) -> Self {
        self.map.symmetry = raw;
        self
    }

    pub fn anomaly(mut self, round: i32, raw_kind: i32) -> Self {
        self.map.anomaly_rounds.push(round);
        self.map.anomalies.push(raw_kind);
        self
    }

    pub fn body(mut self, id: i32, team: i32, body_type: BodyType, x: i32, y: i32) -> Self {
        self.bodies.ids.push(id);
        self.bodies.teams.push(team);
        self.bodies.types.push(body_type as i32);
        self.bodies.xs.push(x);
        self.bodies.ys.push(y);
        self
    }

    pub fn max_rounds(mut self, rounds: i32) -> Self {
        self.max_rounds = rounds;
        self
    }

    pub fn build(self) -> MatchHeader {
        let mut map = self.map;
        if !self.bodies.ids.is_empty() {
            map.bodies = Some(self.bodies);
        }
        MatchHeader {
            map,
            max_rounds: self.max_rounds,
        }
    }
}
