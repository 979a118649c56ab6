//! World-state reconstruction for Scrim replays.
//!
//! A [`GameWorld`] is the in-memory snapshot of a recorded match at one
//! turn. It is built once from the match headers ([`GameWorld::bootstrap`])
//! and then advanced strictly one turn at a time by
//! [`GameWorld::apply_turn`], which consumes a decoded
//! [`TurnDelta`](scrim_core::TurnDelta) and keeps every aggregate view
//! (team statistics, resource grids, transient annotations) consistent
//! with the live body store.
//!
//! The engine never steps backwards. Seeking is built on top by keeping
//! deep copies ([`GameWorld::copy`]) as checkpoints and replaying forward.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod action;
pub mod apply;
pub mod bootstrap;
pub mod config;
pub mod error;
mod lifecycle;
pub mod logs;
pub mod metadata;
pub mod schema;
pub mod stats;
pub mod world;

pub use apply::TurnSummary;
pub use config::{BoundsPolicy, ConfigError, PlaybackConfig};
pub use error::{BootstrapError, PlaybackError};
pub use logs::{parse_round_logs, RobotLog};
pub use metadata::{BodyTypeInfo, MatchConstants, Metadata, TeamInfo};
pub use schema::{
    BodyColumn, BodySchema, BodyStore, DiedColumn, DiedSchema, DiedStore, DotColumn, DotSchema,
    DotStore, LineColumn, LineSchema, LineStore,
};
pub use stats::{MapStats, TeamStats};
pub use world::GameWorld;
