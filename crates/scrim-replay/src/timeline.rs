//! Checkpointed random-access playback over a forward-only engine.

use std::collections::BTreeMap;

use scrim_core::{GameHeader, MatchHeader, TurnDelta};
use scrim_world::{GameWorld, PlaybackConfig};
use tracing::{debug, trace};

use crate::error::ReplayError;

/// A live snapshot plus everything needed to move it to any received turn.
///
/// Deltas are stored as they arrive. A deep copy of the snapshot is kept
/// every `checkpoint_interval` turns (and always at the starting turn);
/// seeking backwards restores the nearest checkpoint at or before the
/// target and steps forward from there.
#[derive(Debug)]
pub struct Timeline {
    current: GameWorld,
    /// Turn of the snapshot the timeline was created with.
    base_turn: i32,
    /// `deltas[i]` is for round `base_turn + 1 + i`.
    deltas: Vec<TurnDelta>,
    checkpoints: BTreeMap<i32, GameWorld>,
    interval: i32,
}

impl Timeline {
    /// Start a timeline at `initial`, which becomes the first checkpoint.
    pub fn new(initial: GameWorld) -> Self {
        let base_turn = initial.turn();
        let interval = i32::try_from(initial.config().checkpoint_interval)
            .unwrap_or(i32::MAX)
            .max(1);
        let mut checkpoints = BTreeMap::new();
        checkpoints.insert(base_turn, initial.copy());
        Self {
            current: initial,
            base_turn,
            deltas: Vec::new(),
            checkpoints,
            interval,
        }
    }

    /// Bootstrap turn 0 from the headers and start a timeline there.
    pub fn bootstrap(
        game: &GameHeader,
        header: &MatchHeader,
        config: PlaybackConfig,
    ) -> Result<Self, ReplayError> {
        Ok(Self::new(GameWorld::bootstrap(game, header, config)?))
    }

    /// The live snapshot.
    pub fn current(&self) -> &GameWorld {
        &self.current
    }

    /// Turn of the live snapshot.
    pub fn turn(&self) -> i32 {
        self.current.turn()
    }

    /// The last turn the stored deltas reach.
    pub fn max_turn(&self) -> i32 {
        self.base_turn + self.deltas.len() as i32
    }

    /// Turns for which a checkpoint is held, ascending.
    pub fn checkpoint_turns(&self) -> impl Iterator<Item = i32> + '_ {
        self.checkpoints.keys().copied()
    }

    /// Store the delta for the turn after [`max_turn`](Self::max_turn).
    pub fn push_delta(&mut self, delta: TurnDelta) -> Result<(), ReplayError> {
        let expected = self.max_turn() + 1;
        if delta.round_id != expected {
            return Err(ReplayError::OutOfOrderDelta {
                expected,
                received: delta.round_id,
            });
        }
        self.deltas.push(delta);
        Ok(())
    }

    /// Apply the next stored delta. Returns `false` when none is left.
    pub fn step_forward(&mut self) -> Result<bool, ReplayError> {
        let next = self.current.turn() - self.base_turn;
        let Some(delta) = usize::try_from(next).ok().and_then(|i| self.deltas.get(i)) else {
            return Ok(false);
        };
        self.current.apply_turn(delta)?;

        let turn = self.current.turn();
        if turn % self.interval == 0 && !self.checkpoints.contains_key(&turn) {
            self.checkpoints.insert(turn, self.current.copy());
            trace!(target: "scrim::timeline", turn, "checkpoint stored");
        }
        Ok(true)
    }

    /// Move the live snapshot to `turn`.
    ///
    /// Steps forward from the live snapshot unless a checkpoint lies
    /// between it and `turn`, or `turn` is behind it; then the nearest
    /// checkpoint at or before `turn` is restored first.
    pub fn seek(&mut self, turn: i32) -> Result<(), ReplayError> {
        let max = self.max_turn();
        if turn < self.base_turn || turn > max {
            return Err(ReplayError::TurnUnavailable { turn, max });
        }

        let current = self.current.turn();
        if let Some((&at, checkpoint)) = self.checkpoints.range(..=turn).next_back() {
            if turn < current || at > current {
                debug!(
                    target: "scrim::timeline",
                    from = current,
                    to = turn,
                    checkpoint = at,
                    "restoring checkpoint"
                );
                self.current.copy_from(checkpoint);
            }
        }

        while self.current.turn() < turn {
            self.step_forward()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_test_utils::{standard_game_header, HeaderBuilder};

    fn timeline(interval: u32, turns: i32) -> Timeline {
        let config = PlaybackConfig {
            checkpoint_interval: interval,
            ..PlaybackConfig::default()
        };
        let mut t = Timeline::bootstrap(
            &standard_game_header(),
            &HeaderBuilder::new(4, 4).build(),
            config,
        )
        .unwrap();
        for round in 1..=turns {
            t.push_delta(TurnDelta::empty(round)).unwrap();
        }
        t
    }

    #[test]
    fn deltas_must_arrive_in_order() {
        let mut t = timeline(10, 2);
        assert!(matches!(
            t.push_delta(TurnDelta::empty(4)),
            Err(ReplayError::OutOfOrderDelta {
                expected: 3,
                received: 4
            })
        ));
        assert_eq!(t.max_turn(), 2);
    }

    #[test]
    fn stepping_stops_at_the_end() {
        let mut t = timeline(10, 2);
        assert!(t.step_forward().unwrap());
        assert!(t.step_forward().unwrap());
        assert!(!t.step_forward().unwrap());
        assert_eq!(t.turn(), 2);
    }

    #[test]
    fn checkpoints_follow_the_interval() {
        let mut t = timeline(3, 10);
        t.seek(10).unwrap();
        assert_eq!(t.checkpoint_turns().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
    }

    #[test]
    fn seek_out_of_range() {
        let mut t = timeline(5, 4);
        assert!(matches!(
            t.seek(5),
            Err(ReplayError::TurnUnavailable { turn: 5, max: 4 })
        ));
        assert!(t.seek(-1).is_err());
        assert_eq!(t.turn(), 0);
    }

    #[test]
    fn backward_seek_restores_then_replays() {
        let mut t = timeline(4, 12);
        t.seek(12).unwrap();
        t.seek(6).unwrap();
        assert_eq!(t.turn(), 6);
        t.seek(0).unwrap();
        assert_eq!(t.turn(), 0);
        t.seek(9).unwrap();
        assert_eq!(t.turn(), 9);
    }
}
