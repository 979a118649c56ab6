//! Per-team and per-map aggregate views.

use scrim_core::{level_index, AnomalyKind, BodyType, Location, Symmetry};
use scrim_space::GridDims;
use smallvec::SmallVec;

// ── TeamStats ─────────────────────────────────────────────────────

/// Aggregates for one team.
///
/// `robots` and `total_hp` are indexed `[body_type][level - 1]`. They are
/// not clamped: a desynchronised log can drive them negative.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamStats {
    /// Live body count per type and level.
    pub robots: [[i32; 3]; BodyType::COUNT],
    /// Summed hit points per type and level.
    pub total_hp: [[i32; 3]; BodyType::COUNT],
    /// Cumulative lead.
    pub lead: i32,
    /// Cumulative gold.
    pub gold: i32,
    /// Lead change in the most recent turn that reported one.
    pub lead_change: i32,
    /// Gold change in the most recent turn that reported one.
    pub gold_change: i32,
}

impl TeamStats {
    /// Live bodies of `body_type` at `level` (0 for invalid levels).
    pub fn robot_count(&self, body_type: BodyType, level: i32) -> i32 {
        level_index(level)
            .map(|l| self.robots[body_type.index()][l])
            .unwrap_or(0)
    }

    /// Summed hit points of `body_type` at `level` (0 for invalid levels).
    pub fn hit_points(&self, body_type: BodyType, level: i32) -> i32 {
        level_index(level)
            .map(|l| self.total_hp[body_type.index()][l])
            .unwrap_or(0)
    }

    /// Live bodies of `body_type` across all levels.
    pub fn robots_of(&self, body_type: BodyType) -> i32 {
        self.robots[body_type.index()]
            .iter()
            .fold(0, |acc, &n| acc.wrapping_add(n))
    }

    /// Add to one `(type, level)` bucket, wrapping on overflow. Returns
    /// `true` when either counter ends up negative.
    pub(crate) fn adjust(
        &mut self,
        body_type: BodyType,
        level: usize,
        count: i32,
        hp: i32,
    ) -> bool {
        let t = body_type.index();
        let robots = &mut self.robots[t][level];
        *robots = robots.wrapping_add(count);
        let total = &mut self.total_hp[t][level];
        *total = total.wrapping_add(hp);
        self.robots[t][level] < 0 || self.total_hp[t][level] < 0
    }

    /// Apply one turn's resource change.
    pub(crate) fn apply_resources(&mut self, lead: i32, gold: i32) {
        self.lead = self.lead.wrapping_add(lead);
        self.gold = self.gold.wrapping_add(gold);
        self.lead_change = lead;
        self.gold_change = gold;
    }
}

// ── MapStats ──────────────────────────────────────────────────────

/// Whole-map state: geometry, tile grids and the anomaly schedule.
///
/// `rubble`, `lead` and `gold` always hold `dims.cell_count()` values,
/// row-major, relative to `min_corner`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapStats {
    /// Map name.
    pub name: String,
    /// Lower corner.
    pub min_corner: Location,
    /// Upper (exclusive) corner.
    pub max_corner: Location,
    /// Grid dimensions derived from the corners.
    pub dims: GridDims,
    /// Informational generator seed.
    pub random_seed: i32,
    /// Rubble per cell.
    pub rubble: Vec<i32>,
    /// Lead deposit per cell.
    pub lead: Vec<i32>,
    /// Gold deposit per cell.
    pub gold: Vec<i32>,
    /// Map symmetry.
    pub symmetry: Symmetry,
    /// Scheduled anomalies as `(round, kind)`.
    pub anomalies: SmallVec<[(i32, AnomalyKind); 8]>,
}

impl MapStats {
    /// Flat grid index of a map-relative location.
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.dims.index(x, y)
    }

    /// Map-relative location of a flat grid index.
    pub fn location(&self, index: usize) -> Option<Location> {
        self.dims.location(index)
    }

    /// Anomalies scheduled for `round`.
    pub fn anomalies_at(&self, round: i32) -> impl Iterator<Item = AnomalyKind> + '_ {
        self.anomalies
            .iter()
            .filter(move |(r, _)| *r == round)
            .map(|&(_, kind)| kind)
    }

    /// Add `value` to every positive lead cell; other cells become 0.
    pub(crate) fn grow_lead(&mut self, value: i32) {
        for cell in &mut self.lead {
            *cell = if *cell > 0 { cell.wrapping_add(value) } else { 0 };
        }
    }
}
