//! Core types for the Scrim match replay engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace:
//! strongly-typed ids, the body/action/anomaly enumerations of the game
//! schema, and the decoded header and turn-delta records handed to the
//! world by the codec layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod kind;
pub mod record;

pub use error::KindError;
pub use id::{BodyId, Location, TeamId};
pub use kind::{level_index, ActionKind, AnomalyKind, BodyType, Symmetry, MAX_LEVEL};
pub use record::{
    Actions, Bids, BodyTypeRecord, Bytecodes, Constants, GameHeader, IndicatorDots,
    IndicatorLines, IndicatorStrings, MapRecord, MatchHeader, Moves, ResourceDrops,
    SpawnedBodies, TeamRecord, TeamResources, TurnDelta,
};
