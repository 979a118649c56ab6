//! Decoded match records: the one-time headers and per-turn deltas.
//!
//! These are the shapes the codec layer produces. Every per-turn group
//! is columnar (parallel arrays, row `i` of each array describes one
//! event) and optional: an absent group means "no events of that kind
//! this turn". Parallel arrays of unequal length are tolerated; consumers
//! use [`rows()`](Moves::rows), which truncates to the shortest column,
//! and may report the mismatch via `is_ragged()`.

use serde::{Deserialize, Serialize};

use crate::id::Location;

fn shortest(lens: &[usize]) -> usize {
    lens.iter().copied().min().unwrap_or(0)
}

fn ragged(lens: &[usize]) -> bool {
    lens.windows(2).any(|w| w[0] != w[1])
}

/// Implements `rows()`/`is_ragged()` for a columnar group.
macro_rules! columnar {
    ($ty:ty, $($col:ident),+) => {
        impl $ty {
            /// Number of complete rows (the shortest column's length).
            pub fn rows(&self) -> usize {
                shortest(&[$(self.$col.len()),+])
            }

            /// Whether the parallel columns disagree in length.
            pub fn is_ragged(&self) -> bool {
                ragged(&[$(self.$col.len()),+])
            }
        }
    };
}

// ── Headers ─────────────────────────────────────────────────────

/// One team entry from the game header.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamRecord {
    /// Team id (1-based; 0 is reserved for neutral).
    pub team_id: i32,
    /// Display name, if the log carries one.
    pub name: Option<String>,
    /// Player package name, if the log carries one.
    pub package_name: Option<String>,
}

/// Static properties of one body type.
///
/// Per-level arrays are indexed by `level - 1`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyTypeRecord {
    /// Raw body-type discriminant.
    pub body_type: i32,
    /// Lead cost to build (level 1) or mutate to level 2 and 3.
    pub build_cost_lead: [i32; 3],
    /// Gold cost to build (level 1) or mutate to level 2 and 3.
    pub build_cost_gold: [i32; 3],
    /// Turns of cooldown added by an action.
    pub action_cooldown: i32,
    /// Turns of cooldown added by a move.
    pub movement_cooldown: i32,
    /// Maximum hit points per level.
    pub health: [i32; 3],
    /// Damage (negative heals) per level.
    pub damage: [i32; 3],
    /// Squared action radius.
    pub action_radius_squared: i32,
    /// Squared vision radius.
    pub vision_radius_squared: i32,
    /// Bytecode budget per turn.
    pub bytecode_limit: i32,
}

/// Match-wide numeric constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constants {
    /// Resource growth happens on turns divisible by this period.
    pub increase_period: i32,
    /// Amount added to every positive lead cell on a growth turn.
    pub lead_additive_increase: i32,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            increase_period: 20,
            lead_additive_increase: 5,
        }
    }
}

/// The game header: everything shared by all matches of a game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameHeader {
    /// Schema version string.
    pub spec_version: Option<String>,
    /// Team roster.
    pub teams: Vec<TeamRecord>,
    /// Body-type table.
    pub body_types: Vec<BodyTypeRecord>,
    /// Match constants.
    pub constants: Constants,
}

/// The initial map of one match.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapRecord {
    /// Map name.
    pub name: Option<String>,
    /// Lower corner of the map rectangle.
    pub min_corner: Location,
    /// Upper (exclusive) corner of the map rectangle.
    pub max_corner: Location,
    /// Bodies present at turn 0.
    pub bodies: Option<SpawnedBodies>,
    /// Seed the match was generated with (informational).
    pub random_seed: i32,
    /// Row-major rubble values.
    pub rubble: Vec<i32>,
    /// Row-major initial lead deposits.
    pub lead: Vec<i32>,
    /// Raw symmetry tag.
    pub symmetry: i32,
    /// Raw anomaly kinds, parallel to `anomaly_rounds`.
    pub anomalies: Vec<i32>,
    /// Round of each scheduled anomaly.
    pub anomaly_rounds: Vec<i32>,
}

/// The header of one match.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchHeader {
    /// The match's map.
    pub map: MapRecord,
    /// Number of rounds the match may last.
    pub max_rounds: i32,
}

// ── Turn groups ─────────────────────────────────────────────────

/// Newly spawned bodies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnedBodies {
    /// Body ids.
    pub ids: Vec<i32>,
    /// Owning team ids.
    pub teams: Vec<i32>,
    /// Raw body types.
    pub types: Vec<i32>,
    /// Spawn columns.
    pub xs: Vec<i32>,
    /// Spawn rows.
    pub ys: Vec<i32>,
}
columnar!(SpawnedBodies, ids, teams, types, xs, ys);

/// Per-team resource changes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamResources {
    /// Team ids.
    pub team_ids: Vec<i32>,
    /// Lead gained (or lost) this turn.
    pub lead_changes: Vec<i32>,
    /// Gold gained (or lost) this turn.
    pub gold_changes: Vec<i32>,
}
columnar!(TeamResources, team_ids, lead_changes, gold_changes);

/// Bodies that moved.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Moves {
    /// Body ids.
    pub ids: Vec<i32>,
    /// New columns.
    pub xs: Vec<i32>,
    /// New rows.
    pub ys: Vec<i32>,
}
columnar!(Moves, ids, xs, ys);

/// Actions performed this turn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actions {
    /// Acting body ids (`-1` for map-wide actions).
    pub ids: Vec<i32>,
    /// Raw action kinds.
    pub kinds: Vec<i32>,
    /// Kind-dependent target values.
    pub targets: Vec<i32>,
}
columnar!(Actions, ids, kinds, targets);

/// Resource amounts dropped on tiles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceDrops {
    /// Tile columns.
    pub xs: Vec<i32>,
    /// Tile rows.
    pub ys: Vec<i32>,
    /// Amount added to the tile (may be negative when mined).
    pub values: Vec<i32>,
}
columnar!(ResourceDrops, xs, ys, values);

/// Debug dots drawn by robots this turn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorDots {
    /// Drawing body ids.
    pub ids: Vec<i32>,
    /// Dot columns.
    pub xs: Vec<i32>,
    /// Dot rows.
    pub ys: Vec<i32>,
    /// Red channel.
    pub red: Vec<i32>,
    /// Green channel.
    pub green: Vec<i32>,
    /// Blue channel.
    pub blue: Vec<i32>,
}
columnar!(IndicatorDots, ids, xs, ys, red, green, blue);

/// Debug lines drawn by robots this turn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorLines {
    /// Drawing body ids.
    pub ids: Vec<i32>,
    /// Start columns.
    pub start_xs: Vec<i32>,
    /// Start rows.
    pub start_ys: Vec<i32>,
    /// End columns.
    pub end_xs: Vec<i32>,
    /// End rows.
    pub end_ys: Vec<i32>,
    /// Red channel.
    pub red: Vec<i32>,
    /// Green channel.
    pub green: Vec<i32>,
    /// Blue channel.
    pub blue: Vec<i32>,
}
columnar!(
    IndicatorLines,
    ids,
    start_xs,
    start_ys,
    end_xs,
    end_ys,
    red,
    green,
    blue
);

/// Debug strings set by robots this turn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorStrings {
    /// Body ids.
    pub ids: Vec<i32>,
    /// Replacement text for each body.
    pub texts: Vec<String>,
}
columnar!(IndicatorStrings, ids, texts);

/// Bytecodes used by each body this turn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bytecodes {
    /// Body ids.
    pub ids: Vec<i32>,
    /// Bytecodes used.
    pub used: Vec<i32>,
}
columnar!(Bytecodes, ids, used);

/// Pending bids placed this turn (legacy schema group).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bids {
    /// Bidding body ids.
    pub ids: Vec<i32>,
    /// Bid amounts.
    pub amounts: Vec<i32>,
}
columnar!(Bids, ids, amounts);

/// Everything that changed during one turn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnDelta {
    /// The turn this delta produces; must be the snapshot's turn plus one.
    pub round_id: i32,
    /// Per-team resource changes.
    pub team_resources: Option<TeamResources>,
    /// Position updates.
    pub moved: Option<Moves>,
    /// New bodies.
    pub spawned: Option<SpawnedBodies>,
    /// Ids of bodies that died.
    pub died_ids: Vec<i32>,
    /// Actions.
    pub actions: Option<Actions>,
    /// Lead dropped or mined.
    pub lead_drops: Option<ResourceDrops>,
    /// Gold dropped or mined.
    pub gold_drops: Option<ResourceDrops>,
    /// Indicator dots.
    pub indicator_dots: Option<IndicatorDots>,
    /// Indicator lines.
    pub indicator_lines: Option<IndicatorLines>,
    /// Indicator strings.
    pub indicator_strings: Option<IndicatorStrings>,
    /// Bytecode usage.
    pub bytecodes: Option<Bytecodes>,
    /// Pending bids.
    pub bids: Option<Bids>,
    /// Raw robot log text printed this turn.
    pub logs: Option<String>,
}

impl TurnDelta {
    /// An empty delta for `round_id`.
    pub fn empty(round_id: i32) -> Self {
        Self {
            round_id,
            ..Self::default()
        }
    }
}
