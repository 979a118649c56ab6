//! The world snapshot and its read accessors.

use std::collections::VecDeque;
use std::sync::Arc;

use indexmap::IndexMap;
use scrim_core::{BodyId, TeamId};

use crate::config::PlaybackConfig;
use crate::logs::RobotLog;
use crate::metadata::Metadata;
use crate::schema::{BodyStore, DiedStore, DotStore, LineStore};
use crate::stats::{MapStats, TeamStats};

/// A frozen image of a match at one turn.
///
/// Mutated only by bootstrap and [`apply_turn`](GameWorld::apply_turn).
/// [`copy`](GameWorld::copy) yields an independent deep clone; the two
/// share nothing mutable (metadata is immutable and shared by `Arc`).
#[derive(Clone, Debug)]
pub struct GameWorld {
    pub(crate) meta: Arc<Metadata>,
    pub(crate) config: PlaybackConfig,
    pub(crate) turn: i32,

    pub(crate) bodies: BodyStore,
    pub(crate) died_bodies: DiedStore,
    pub(crate) indicator_dots: DotStore,
    pub(crate) indicator_lines: LineStore,
    pub(crate) indicator_strings: IndexMap<i32, String>,

    pub(crate) team_stats: IndexMap<TeamId, TeamStats>,
    pub(crate) map_stats: MapStats,

    /// Bodies whose action fields must be reset at the next turn.
    pub(crate) action_robots: Vec<i32>,
    /// Bodies whose bid must be reset at the next turn.
    pub(crate) bid_robots: Vec<i32>,

    pub(crate) logs: VecDeque<Vec<RobotLog>>,
    /// `logs[i]` holds round `i + logs_shift`.
    pub(crate) logs_shift: i32,
}

impl GameWorld {
    /// An empty turn-0 world with zeroed stats for every rostered team.
    ///
    /// Most callers want [`bootstrap`](GameWorld::bootstrap) instead.
    pub fn new(meta: Arc<Metadata>, config: PlaybackConfig) -> Self {
        let team_stats = meta
            .teams()
            .map(|t| (t.team_id, TeamStats::default()))
            .collect();
        Self {
            meta,
            config,
            turn: 0,
            bodies: BodyStore::new(),
            died_bodies: DiedStore::new(),
            indicator_dots: DotStore::new(),
            indicator_lines: LineStore::new(),
            indicator_strings: IndexMap::new(),
            team_stats,
            map_stats: MapStats {
                name: "????".to_owned(),
                ..MapStats::default()
            },
            action_robots: Vec::new(),
            bid_robots: Vec::new(),
            logs: VecDeque::new(),
            logs_shift: 1,
        }
    }

    /// An independent deep copy of this snapshot.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Overwrite this snapshot with a deep copy of `source`, reusing
    /// this snapshot's buffers where possible.
    pub fn copy_from(&mut self, source: &Self) {
        self.meta = Arc::clone(&source.meta);
        self.config.clone_from(&source.config);
        self.turn = source.turn;
        self.bodies.copy_from(&source.bodies);
        self.died_bodies.copy_from(&source.died_bodies);
        self.indicator_dots.copy_from(&source.indicator_dots);
        self.indicator_lines.copy_from(&source.indicator_lines);
        self.indicator_strings.clone_from(&source.indicator_strings);
        self.team_stats.clone_from(&source.team_stats);
        self.map_stats.clone_from(&source.map_stats);
        self.action_robots.clone_from(&source.action_robots);
        self.bid_robots.clone_from(&source.bid_robots);
        self.logs.clone_from(&source.logs);
        self.logs_shift = source.logs_shift;
    }

    // ── Accessors ─────────────────────────────────────────────────

    /// The turn this snapshot represents.
    pub fn turn(&self) -> i32 {
        self.turn
    }

    /// Game metadata.
    pub fn meta(&self) -> &Arc<Metadata> {
        &self.meta
    }

    /// Playback configuration.
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Live bodies.
    pub fn bodies(&self) -> &BodyStore {
        &self.bodies
    }

    /// Bodies that died during the most recent turn.
    pub fn died_bodies(&self) -> &DiedStore {
        &self.died_bodies
    }

    /// Indicator dots of the most recent turn.
    pub fn indicator_dots(&self) -> &DotStore {
        &self.indicator_dots
    }

    /// Indicator lines of the most recent turn.
    pub fn indicator_lines(&self) -> &LineStore {
        &self.indicator_lines
    }

    /// The latest indicator string of a body, if it ever set one.
    pub fn indicator_string(&self, id: BodyId) -> Option<&str> {
        self.indicator_strings.get(&id.0).map(String::as_str)
    }

    /// All indicator strings keyed by body id.
    pub fn indicator_strings(&self) -> &IndexMap<i32, String> {
        &self.indicator_strings
    }

    /// Stats of one team.
    pub fn team_stats(&self, team: TeamId) -> Option<&TeamStats> {
        self.team_stats.get(&team)
    }

    /// Stats of every rostered team.
    pub fn all_team_stats(&self) -> &IndexMap<TeamId, TeamStats> {
        &self.team_stats
    }

    /// Map geometry and grids.
    pub fn map_stats(&self) -> &MapStats {
        &self.map_stats
    }

    /// Parsed robot logs for `round`, if still retained.
    pub fn logs_for_round(&self, round: i32) -> Option<&[RobotLog]> {
        let i = usize::try_from(round - self.logs_shift).ok()?;
        self.logs.get(i).map(Vec::as_slice)
    }

    /// Retained log buckets, oldest first.
    pub fn log_buckets(&self) -> impl Iterator<Item = &[RobotLog]> {
        self.logs.iter().map(Vec::as_slice)
    }

    /// Round held by the first retained log bucket.
    pub fn logs_shift(&self) -> i32 {
        self.logs_shift
    }
}
