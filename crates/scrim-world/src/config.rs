//! Playback configuration and its validation.
//!
//! [`PlaybackConfig`] is plain data with sensible defaults. Hosts either
//! build it in code or load it from JSON with
//! [`from_json_str`](PlaybackConfig::from_json_str); both paths should be
//! followed by [`validate`](PlaybackConfig::validate), which
//! [`GameWorld::bootstrap`](crate::GameWorld::bootstrap) also calls.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── BoundsPolicy ──────────────────────────────────────────────────

/// What to do with a resource drop whose coordinates fall outside the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// Ignore the drop and log a warning.
    #[default]
    Skip,
    /// Fail the whole turn with
    /// [`PlaybackError::GridOutOfBounds`](crate::PlaybackError::GridOutOfBounds)
    /// before anything is mutated.
    Reject,
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected while loading or validating a [`PlaybackConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `max_log_rounds` is zero.
    #[error("max_log_rounds must be at least 1")]
    ZeroLogRounds,
    /// `checkpoint_interval` is zero.
    #[error("checkpoint_interval must be at least 1")]
    ZeroCheckpointInterval,
    /// The JSON document could not be parsed.
    #[error("invalid playback config: {0}")]
    Parse(#[from] serde_json::Error),
}

// ── PlaybackConfig ────────────────────────────────────────────────

/// Knobs for turn application and checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Parse per-round robot log text. Default: true.
    pub process_logs: bool,
    /// Most recent rounds of parsed logs kept. Default: 25. Minimum: 1.
    pub max_log_rounds: usize,
    /// Out-of-bounds resource drop handling. Default: [`BoundsPolicy::Skip`].
    pub bounds_policy: BoundsPolicy,
    /// Turns between timeline checkpoints. Default: 50. Minimum: 1.
    pub checkpoint_interval: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            process_logs: true,
            max_log_rounds: 25,
            bounds_policy: BoundsPolicy::Skip,
            checkpoint_interval: 50,
        }
    }
}

impl PlaybackConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_log_rounds == 0 {
            return Err(ConfigError::ZeroLogRounds);
        }
        if self.checkpoint_interval == 0 {
            return Err(ConfigError::ZeroCheckpointInterval);
        }
        Ok(())
    }

    /// Parse a JSON document and validate it. Missing fields take their
    /// defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
