//! Building the turn-0 snapshot from the game and match headers.

use std::sync::Arc;

use scrim_core::{AnomalyKind, GameHeader, MatchHeader, Symmetry};
use scrim_space::GridDims;
use tracing::{info, warn};

use crate::config::PlaybackConfig;
use crate::error::BootstrapError;
use crate::metadata::Metadata;
use crate::world::GameWorld;

impl GameWorld {
    /// Parse the game header, validate `config` and load the match's map
    /// and pre-placed bodies into a fresh turn-0 snapshot.
    pub fn bootstrap(
        game: &GameHeader,
        header: &MatchHeader,
        config: PlaybackConfig,
    ) -> Result<Self, BootstrapError> {
        config.validate()?;
        let meta = Arc::new(Metadata::parse(game)?);
        let mut world = Self::new(meta, config);
        world.load_match_header(header)?;
        Ok(world)
    }

    /// Load the map of `header` into this snapshot.
    ///
    /// An empty rubble or lead layer is read as all zeros; a non-empty
    /// layer must match the map's cell count. The gold layer always starts
    /// at zero. Pre-placed bodies go through the same path as spawns.
    pub fn load_match_header(&mut self, header: &MatchHeader) -> Result<(), BootstrapError> {
        let map = &header.map;
        let dims = GridDims::from_corners(map.min_corner, map.max_corner)?;
        let cells = dims.cell_count();
        let rubble = layer("rubble", &map.rubble, cells)?;
        let lead = layer("lead", &map.lead, cells)?;

        let stats = &mut self.map_stats;
        if let Some(name) = map.name.as_deref().filter(|n| !n.is_empty()) {
            name.clone_into(&mut stats.name);
        }
        stats.min_corner = map.min_corner;
        stats.max_corner = map.max_corner;
        stats.dims = dims;
        stats.random_seed = map.random_seed;
        stats.rubble = rubble;
        stats.lead = lead;
        stats.gold = vec![0; cells];
        stats.symmetry = Symmetry::from_raw(map.symmetry);

        if map.anomalies.len() != map.anomaly_rounds.len() {
            warn!(
                target: "scrim::bootstrap",
                kinds = map.anomalies.len(),
                rounds = map.anomaly_rounds.len(),
                "anomaly schedule columns differ in length, truncating"
            );
        }
        stats.anomalies = map
            .anomaly_rounds
            .iter()
            .zip(&map.anomalies)
            .map(|(&round, &kind)| (round, AnomalyKind::from_raw(kind)))
            .collect();

        let mut initial = 0;
        if let Some(bodies) = &map.bodies {
            initial = self.insert_bodies(bodies)?.applied;
        }

        info!(
            target: "scrim::bootstrap",
            map = %self.map_stats.name,
            width = dims.width(),
            height = dims.height(),
            bodies = initial,
            teams = self.team_stats.len(),
            "match loaded"
        );
        Ok(())
    }
}

fn layer(name: &'static str, values: &[i32], cells: usize) -> Result<Vec<i32>, BootstrapError> {
    if values.is_empty() {
        return Ok(vec![0; cells]);
    }
    if values.len() != cells {
        return Err(BootstrapError::LayerSize {
            layer: name,
            expected: cells,
            found: values.len(),
        });
    }
    Ok(values.to_vec())
}
