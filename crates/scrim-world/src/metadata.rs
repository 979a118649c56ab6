//! Immutable game metadata parsed from the game header.
//!
//! A [`Metadata`] is built once and shared through an `Arc` by a
//! snapshot and every copy of it; nothing mutates it after parsing.

use indexmap::IndexMap;
use scrim_core::{level_index, BodyType, BodyTypeRecord, Constants, GameHeader, TeamId};

use crate::error::BootstrapError;

/// Spec version reported when the header carries none.
pub const UNKNOWN_SPEC_VERSION: &str = "UNKNOWN SPEC";
/// Team name reported when the header carries none.
pub const UNKNOWN_TEAM: &str = "UNKNOWN TEAM";
/// Package name reported when the header carries none.
pub const UNKNOWN_PACKAGE: &str = "UNKNOWN PACKAGE";

/// One entry of the team roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamInfo {
    /// Team id.
    pub team_id: TeamId,
    /// Display name.
    pub name: String,
    /// Player package name.
    pub package_name: String,
}

/// Static properties of a body type. Per-level arrays are indexed by
/// `level - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyTypeInfo {
    /// The body type.
    pub body_type: BodyType,
    /// Lead cost per level.
    pub build_cost_lead: [i32; 3],
    /// Gold cost per level.
    pub build_cost_gold: [i32; 3],
    /// Action cooldown.
    pub action_cooldown: i32,
    /// Movement cooldown.
    pub movement_cooldown: i32,
    /// Hit points per level.
    pub health: [i32; 3],
    /// Damage per level.
    pub damage: [i32; 3],
    /// Squared action radius.
    pub action_radius_squared: i32,
    /// Squared vision radius.
    pub vision_radius_squared: i32,
    /// Per-turn bytecode budget.
    pub bytecode_limit: i32,
}

impl BodyTypeInfo {
    fn from_record(body_type: BodyType, r: &BodyTypeRecord) -> Self {
        Self {
            body_type,
            build_cost_lead: r.build_cost_lead,
            build_cost_gold: r.build_cost_gold,
            action_cooldown: r.action_cooldown,
            movement_cooldown: r.movement_cooldown,
            health: r.health,
            damage: r.damage,
            action_radius_squared: r.action_radius_squared,
            vision_radius_squared: r.vision_radius_squared,
            bytecode_limit: r.bytecode_limit,
        }
    }

    /// Hit points at `level`, or `None` for an invalid level.
    pub fn health_at(&self, level: i32) -> Option<i32> {
        level_index(level).ok().map(|i| self.health[i])
    }
}

/// Match constants that drive periodic resource growth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchConstants {
    /// Growth happens on rounds divisible by this period. Always positive.
    pub increase_period: i32,
    /// Added to every positive lead cell on a growth round.
    pub lead_additive_increase: i32,
}

impl TryFrom<&Constants> for MatchConstants {
    type Error = BootstrapError;

    fn try_from(c: &Constants) -> Result<Self, Self::Error> {
        if c.increase_period <= 0 {
            return Err(BootstrapError::InvalidConstants {
                increase_period: c.increase_period,
            });
        }
        Ok(Self {
            increase_period: c.increase_period,
            lead_additive_increase: c.lead_additive_increase,
        })
    }
}

/// Everything about a game that is fixed before the first turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    spec_version: String,
    teams: IndexMap<TeamId, TeamInfo>,
    types: [Option<BodyTypeInfo>; BodyType::COUNT],
    constants: MatchConstants,
}

impl Metadata {
    /// Parse the game header.
    ///
    /// Missing strings fall back to the `UNKNOWN_*` sentinels. Repeated
    /// team ids or body types, unknown body types and a non-positive
    /// growth period are rejected.
    pub fn parse(header: &GameHeader) -> Result<Self, BootstrapError> {
        let mut teams = IndexMap::with_capacity(header.teams.len());
        for t in &header.teams {
            let team_id = TeamId(t.team_id);
            let info = TeamInfo {
                team_id,
                name: non_empty_or(&t.name, UNKNOWN_TEAM),
                package_name: non_empty_or(&t.package_name, UNKNOWN_PACKAGE),
            };
            if teams.insert(team_id, info).is_some() {
                return Err(BootstrapError::DuplicateTeam {
                    team_id: t.team_id,
                });
            }
        }

        let mut types: [Option<BodyTypeInfo>; BodyType::COUNT] = Default::default();
        for r in &header.body_types {
            let body_type = BodyType::from_raw(r.body_type)?;
            let slot = &mut types[body_type.index()];
            if slot.is_some() {
                return Err(BootstrapError::DuplicateBodyType { raw: r.body_type });
            }
            *slot = Some(BodyTypeInfo::from_record(body_type, r));
        }

        Ok(Self {
            spec_version: non_empty_or(&header.spec_version, UNKNOWN_SPEC_VERSION),
            teams,
            types,
            constants: MatchConstants::try_from(&header.constants)?,
        })
    }

    /// Schema version string.
    pub fn spec_version(&self) -> &str {
        &self.spec_version
    }

    /// Team roster in header order.
    pub fn teams(&self) -> impl Iterator<Item = &TeamInfo> {
        self.teams.values()
    }

    /// One team's roster entry.
    pub fn team(&self, team: TeamId) -> Option<&TeamInfo> {
        self.teams.get(&team)
    }

    /// Properties of a body type, if the header described it.
    pub fn body_type(&self, body_type: BodyType) -> Option<&BodyTypeInfo> {
        self.types[body_type.index()].as_ref()
    }

    /// Match constants.
    pub fn constants(&self) -> MatchConstants {
        self.constants
    }
}

fn non_empty_or(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref() {
        Some(s) if !s.is_empty() => s.to_owned(),
        _ => fallback.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_core::TeamRecord;

    fn header() -> GameHeader {
        GameHeader {
            spec_version: Some("2022.1".into()),
            teams: vec![
                TeamRecord {
                    team_id: 1,
                    name: Some("red".into()),
                    package_name: None,
                },
                TeamRecord {
                    team_id: 2,
                    name: Some(String::new()),
                    package_name: Some("bluebot".into()),
                },
            ],
            body_types: vec![BodyTypeRecord {
                body_type: BodyType::Soldier as i32,
                health: [50, 0, 0],
                ..BodyTypeRecord::default()
            }],
            constants: Constants::default(),
        }
    }

    #[test]
    fn parse_fills_sentinels() {
        let meta = Metadata::parse(&header()).unwrap();
        assert_eq!(meta.spec_version(), "2022.1");
        let red = meta.team(TeamId(1)).unwrap();
        assert_eq!(red.package_name, UNKNOWN_PACKAGE);
        let blue = meta.team(TeamId(2)).unwrap();
        assert_eq!(blue.name, UNKNOWN_TEAM);
        assert_eq!(blue.package_name, "bluebot");
        assert_eq!(meta.teams().count(), 2);

        let empty = Metadata::parse(&GameHeader::default()).unwrap();
        assert_eq!(empty.spec_version(), UNKNOWN_SPEC_VERSION);
    }

    #[test]
    fn body_types_are_indexed_by_kind() {
        let meta = Metadata::parse(&header()).unwrap();
        let soldier = meta.body_type(BodyType::Soldier).unwrap();
        assert_eq!(soldier.health_at(1), Some(50));
        assert_eq!(soldier.health_at(4), None);
        assert!(meta.body_type(BodyType::Miner).is_none());
    }

    #[test]
    fn duplicates_and_unknowns_rejected() {
        let mut h = header();
        h.teams.push(h.teams[0].clone());
        assert!(matches!(
            Metadata::parse(&h),
            Err(BootstrapError::DuplicateTeam { team_id: 1 })
        ));

        let mut h = header();
        h.body_types.push(h.body_types[0].clone());
        assert!(matches!(
            Metadata::parse(&h),
            Err(BootstrapError::DuplicateBodyType { raw: 5 })
        ));

        let mut h = header();
        h.body_types[0].body_type = 12;
        assert!(matches!(
            Metadata::parse(&h),
            Err(BootstrapError::UnknownBodyType(_))
        ));
    }

    #[test]
    fn non_positive_period_rejected() {
        let mut h = header();
        h.constants.increase_period = 0;
        assert!(matches!(
            Metadata::parse(&h),
            Err(BootstrapError::InvalidConstants { increase_period: 0 })
        ));
    }
}
