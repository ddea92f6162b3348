//! Scoring one observation against one simulation run.

use tracing::debug;

use skua_fss::{ScaleScore, score_scales};
use skua_grid::{BoundingBox, Grid};
use skua_raster::{EventSet, densify, rasterize};
use skua_time::nearest_snapshot;

use crate::config::ScoreConfig;
use crate::error::ScoreError;
use crate::run::{Observation, SimulationRun};

/// Result of scoring one observation against one run.
#[derive(Debug, Clone)]
pub struct Scorecard {
    /// Identifier of the scored observation.
    pub observation_id: String,
    /// Index of the snapshot the observation was aligned to.
    pub snapshot_index: usize,
    /// The sparse event set the scores were derived from.
    pub event_set: EventSet,
    /// FSS per neighborhood scale, ascending.
    pub scores: Vec<ScaleScore>,
}

impl Scorecard {
    /// Reduces the score table to one scalar: the smallest defined FSS
    /// across the scale ladder. None when every scale is undefined.
    pub fn reduced(&self) -> Option<f64> {
        self.scores
            .iter()
            .filter(|s| s.is_defined())
            .map(|s| s.fss)
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
    }
}

/// Runs the full pipeline for one observation: nearest-snapshot alignment,
/// grid construction over the union of both footprints, rasterization,
/// densification, and multi-scale FSS.
///
/// # Errors
///
/// Propagates alignment, grid, rasterization, and scoring failures. An
/// observation with no finite vertex, or a snapshot with no finite parcel,
/// surfaces as [`skua_grid::GridError::EmptyPointSet`].
pub fn score_observation(
    run: &SimulationRun,
    observation: &Observation,
    config: &ScoreConfig,
) -> Result<Scorecard, ScoreError> {
    let timeline = run.timeline();
    let snapshot_index = nearest_snapshot(&timeline, observation.stamp.day_fraction())?;
    let parcels = &run.snapshots[snapshot_index].parcels;

    let model_bounds = BoundingBox::from_points(parcels.iter().map(|p| (p.lon, p.lat)))?;
    let observed_bounds = BoundingBox::from_rings(&observation.rings)?;
    let bounds = model_bounds.union(&observed_bounds);

    let grid = Grid::build(&bounds, config.grid_resolution_deg())?;
    let event_set = rasterize(&grid, parcels, &observation.rings);
    let fields = densify(&event_set)?;

    let (ny, nx) = fields.model.shape();
    let scores = score_scales(
        fields.model.values(),
        fields.observation.values(),
        ny,
        nx,
        config.threshold(),
        &config.scales(),
    )?;

    debug!(
        observation = %observation.id,
        snapshot_index,
        cells = event_set.len(),
        scales = scores.len(),
        "scored observation"
    );

    Ok(Scorecard {
        observation_id: observation.id.clone(),
        snapshot_index,
        event_set,
        scores,
    })
}
