//! Errors surfaced by bootstrap and turn application.

use scrim_core::KindError;
use scrim_space::SpaceError;
use scrim_store::StoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors from building the turn-0 snapshot out of the match headers.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The team roster lists the same team id twice.
    #[error("team {team_id} listed twice in the game header")]
    DuplicateTeam {
        /// The repeated team id.
        team_id: i32,
    },
    /// The body-type table lists the same body type twice.
    #[error("body type {raw} listed twice in the game header")]
    DuplicateBodyType {
        /// The repeated raw body type.
        raw: i32,
    },
    /// The body-type table names a type this build does not know.
    #[error("body type table: {0}")]
    UnknownBodyType(#[from] KindError),
    /// A match constant is unusable.
    #[error("increase_period must be positive, got {increase_period}")]
    InvalidConstants {
        /// The configured growth period.
        increase_period: i32,
    },
    /// Map dimensions or grid sizes are inconsistent.
    #[error("map grid: {0}")]
    Grid(#[from] SpaceError),
    /// A map layer does not match the map's dimensions.
    #[error("map layer '{layer}' has {found} cells, expected {expected}")]
    LayerSize {
        /// Layer name.
        layer: &'static str,
        /// `width × height`.
        expected: usize,
        /// Supplied length.
        found: usize,
    },
    /// Inserting the map's pre-placed bodies failed.
    #[error("initial bodies: {0}")]
    Store(#[from] StoreError),
    /// The playback configuration is invalid.
    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from [`GameWorld::apply_turn`](crate::GameWorld::apply_turn).
///
/// `OutOfSequence` and `GridOutOfBounds` are raised before the snapshot
/// is touched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The delta does not immediately follow the snapshot's turn.
    #[error("bad round: snapshot is at turn {current}, delta is for round {received}")]
    OutOfSequence {
        /// The snapshot's turn.
        current: i32,
        /// The delta's round id.
        received: i32,
    },
    /// A resource drop lies outside the map (only under
    /// [`BoundsPolicy::Reject`](crate::BoundsPolicy::Reject)).
    #[error("resource drop at ({x}, {y}) outside {width}x{height} map")]
    GridOutOfBounds {
        /// Drop x.
        x: i32,
        /// Drop y.
        y: i32,
        /// Map width.
        width: u32,
        /// Map height.
        height: u32,
    },
    /// A store rejected a batch the engine had already filtered; the
    /// snapshot may be partially updated.
    #[error(transparent)]
    Store(#[from] StoreError),
}
