//! Schema enumerations: body types, action kinds, map symmetry, anomalies.
//!
//! Raw discriminants match the match-log schema. Conversions from raw
//! values are explicit so that unknown values are surfaced at the
//! boundary instead of silently indexing past a table.

use crate::error::KindError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest upgrade level a body can reach. Levels are `1..=MAX_LEVEL`.
pub const MAX_LEVEL: i32 = 3;

// ── BodyType ────────────────────────────────────────────────────

/// The kind of a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum BodyType {
    /// Portable headquarters building; spawns units and heals.
    Archon = 0,
    /// Converts lead into gold.
    Laboratory = 1,
    /// Defensive turret.
    Watchtower = 2,
    /// Mines lead and gold.
    Miner = 3,
    /// Builds and repairs buildings.
    Builder = 4,
    /// Ranged attacker.
    Soldier = 5,
    /// Gold-costing unit that triggers local anomalies.
    Sage = 6,
}

impl BodyType {
    /// Number of body types in the schema.
    pub const COUNT: usize = 7;

    /// All body types in discriminant order.
    pub const ALL: [BodyType; Self::COUNT] = [
        Self::Archon,
        Self::Laboratory,
        Self::Watchtower,
        Self::Miner,
        Self::Builder,
        Self::Soldier,
        Self::Sage,
    ];

    /// Dense index of this type, usable for per-type tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Convert a raw schema value.
    pub fn from_raw(raw: i32) -> Result<Self, KindError> {
        usize::try_from(raw)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(KindError::UnknownBodyType { raw })
    }

    /// Whether this type is a building (stationary unless transformed).
    pub fn is_building(self) -> bool {
        matches!(self, Self::Archon | Self::Laboratory | Self::Watchtower)
    }

    /// Whether a freshly spawned body of this type is a prototype
    /// (under construction). Archons are never prototypes.
    pub fn spawns_as_prototype(self) -> bool {
        self.is_building() && self != Self::Archon
    }

    /// Upper-case schema name, as printed in robot log headers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Archon => "ARCHON",
            Self::Laboratory => "LABORATORY",
            Self::Watchtower => "WATCHTOWER",
            Self::Miner => "MINER",
            Self::Builder => "BUILDER",
            Self::Soldier => "SOLDIER",
            Self::Sage => "SAGE",
        }
    }

    /// Parse an upper-case schema name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl TryFrom<i32> for BodyType {
    type Error = KindError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert a 1-based body level into a 0-based bucket index.
pub fn level_index(level: i32) -> Result<usize, KindError> {
    if (1..=MAX_LEVEL).contains(&level) {
        Ok((level - 1) as usize)
    } else {
        Err(KindError::InvalidLevel {
            level,
            max: MAX_LEVEL,
        })
    }
}

// ── ActionKind ──────────────────────────────────────────────────

/// An action recorded in a turn delta.
///
/// The meaning of the accompanying `target` value depends on the kind:
/// a body id for `Attack`/`SpawnUnit`/`Repair`, a signed hit-point delta
/// for `ChangeHealth`, a transform selector for `Vortex`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ActionKind {
    /// Damage a target body.
    Attack = 0,
    /// Spawn a unit; target is the new body.
    SpawnUnit = 1,
    /// Mine lead at a location.
    MineLead = 2,
    /// Mine gold at a location.
    MineGold = 3,
    /// Convert lead into gold.
    Transmute = 4,
    /// Toggle a building between portable and turret mode.
    Transform = 5,
    /// Upgrade a building one level.
    Mutate = 6,
    /// Repair a target body.
    Repair = 7,
    /// Hit points changed by `target`.
    ChangeHealth = 8,
    /// A prototype building finished construction.
    FullyRepaired = 9,
    /// Sage-local abyss anomaly.
    LocalAbyss = 10,
    /// Sage-local charge anomaly.
    LocalCharge = 11,
    /// Sage-local fury anomaly.
    LocalFury = 12,
    /// Global abyss anomaly.
    Abyss = 13,
    /// Global charge anomaly.
    Charge = 14,
    /// Global fury anomaly.
    Fury = 15,
    /// Global vortex anomaly; permutes the rubble grid.
    Vortex = 16,
    /// The robot's player code threw.
    DieException = 17,
}

impl ActionKind {
    const ALL: [ActionKind; 18] = [
        Self::Attack,
        Self::SpawnUnit,
        Self::MineLead,
        Self::MineGold,
        Self::Transmute,
        Self::Transform,
        Self::Mutate,
        Self::Repair,
        Self::ChangeHealth,
        Self::FullyRepaired,
        Self::LocalAbyss,
        Self::LocalCharge,
        Self::LocalFury,
        Self::Abyss,
        Self::Charge,
        Self::Fury,
        Self::Vortex,
        Self::DieException,
    ];

    /// Convert a raw schema value; `None` for unrecognised kinds.
    pub fn from_raw(raw: i32) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// The raw schema value, as stored in the body `action` column.
    pub fn raw(self) -> i32 {
        self as i32
    }
}

// ── Symmetry / AnomalyKind ──────────────────────────────────────

/// Map symmetry tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    /// 180° rotational symmetry.
    Rotational,
    /// Mirrored across the horizontal axis.
    Horizontal,
    /// Mirrored across the vertical axis.
    Vertical,
    /// A value this build does not know about.
    Unknown(i32),
}

impl Symmetry {
    /// Convert a raw schema value.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Rotational,
            1 => Self::Horizontal,
            2 => Self::Vertical,
            other => Self::Unknown(other),
        }
    }
}

impl Default for Symmetry {
    fn default() -> Self {
        Self::Rotational
    }
}

/// Kind of a scheduled map-wide anomaly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyKind {
    /// Removes a share of every team's resources.
    Abyss,
    /// Damages droids near many allies.
    Charge,
    /// Damages buildings in turret mode.
    Fury,
    /// Permutes the rubble grid.
    Vortex,
    /// End-of-game marker.
    Singularity,
    /// A value this build does not know about.
    Unknown(i32),
}

impl AnomalyKind {
    /// Convert a raw schema value.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Abyss,
            1 => Self::Charge,
            2 => Self::Fury,
            3 => Self::Vortex,
            4 => Self::Singularity,
            other => Self::Unknown(other),
        }
    }
}
