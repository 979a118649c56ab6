//! Scrim: incremental world-state reconstruction for recorded grid-strategy
//! matches.
//!
//! This is the facade crate re-exporting the public API of every Scrim
//! sub-crate.
//!
//! # Quick start
//!
//! ```rust
//! use scrim::prelude::*;
//!
//! let game = GameHeader {
//!     teams: vec![TeamRecord { team_id: 1, ..TeamRecord::default() }],
//!     ..GameHeader::default()
//! };
//! let header = MatchHeader {
//!     map: MapRecord {
//!         max_corner: Location::new(4, 4),
//!         ..MapRecord::default()
//!     },
//!     max_rounds: 100,
//! };
//!
//! let mut timeline = Timeline::bootstrap(&game, &header, PlaybackConfig::default()).unwrap();
//! for round in 1..=3 {
//!     timeline.push_delta(TurnDelta::empty(round)).unwrap();
//! }
//! timeline.seek(3).unwrap();
//! assert_eq!(timeline.current().turn(), 3);
//! assert_eq!(timeline.current().map_stats().lead.len(), 16);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `scrim-core` | Ids, kind enums, header and delta records |
//! | [`store`] | `scrim-store` | Columnar entity store |
//! | [`space`] | `scrim-space` | Grid dimensions and in-place transforms |
//! | [`world`] | `scrim-world` | Snapshot, bootstrap and turn application |
//! | [`replay`] | `scrim-replay` | Checkpointed seeking, hashing, comparison |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Ids, kind enums and decoded records (`scrim-core`).
pub use scrim_core as types;

/// Columnar entity store (`scrim-store`).
pub use scrim_store as store;

/// Grid dimensions and transforms (`scrim-space`).
pub use scrim_space as space;

/// World snapshot and the turn-application engine (`scrim-world`).
///
/// [`world::GameWorld`] is also in the [`prelude`].
pub use scrim_world as world;

/// Checkpointed seeking and snapshot verification (`scrim-replay`).
pub use scrim_replay as replay;

/// Common imports for driving a replay.
pub mod prelude {
    // Records
    pub use scrim_core::{
        ActionKind, BodyId, BodyType, GameHeader, Location, MapRecord, MatchHeader, TeamId,
        TeamRecord, TurnDelta,
    };

    // World
    pub use scrim_world::{
        BodyColumn, BootstrapError, BoundsPolicy, GameWorld, PlaybackConfig, PlaybackError,
        TurnSummary,
    };

    // Replay
    pub use scrim_replay::{compare_worlds, world_hash, ReplayError, Timeline};
}
