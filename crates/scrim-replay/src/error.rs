//! Error types for the replay timeline.

use scrim_world::{BootstrapError, PlaybackError};
use thiserror::Error;

/// Errors from building or driving a [`Timeline`](crate::Timeline).
#[derive(Debug, Error)]
pub enum ReplayError {
    /// A pushed delta is not for the turn after the last stored one.
    #[error("delta for round {received} pushed, expected round {expected}")]
    OutOfOrderDelta {
        /// The round the timeline expected next.
        expected: i32,
        /// The round of the pushed delta.
        received: i32,
    },
    /// A seek asked for a turn that no stored delta reaches.
    #[error("turn {turn} unavailable, deltas reach turn {max}")]
    TurnUnavailable {
        /// The requested turn.
        turn: i32,
        /// The last reachable turn.
        max: i32,
    },
    /// The initial snapshot could not be built.
    #[error("bootstrap failed: {0}")]
    Bootstrap(#[from] BootstrapError),
    /// Applying a stored delta failed.
    #[error("playback failed: {0}")]
    Playback(#[from] PlaybackError),
}
