//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use skua_score::ScoreConfig;
use skua_time::SimulationStart;

use crate::config::{FssToml, GridToml, SimulationToml};

/// Builds a [`ScoreConfig`] from the TOML grid and FSS configuration.
pub fn build_score_config(grid: &GridToml, fss: &FssToml) -> ScoreConfig {
    ScoreConfig::default()
        .with_grid_resolution_km(grid.resolution_km)
        .with_threshold(fss.threshold)
        .with_scale_range(fss.scale_start, fss.scale_stop, fss.scale_step)
}

/// Builds a validated [`SimulationStart`] from the TOML simulation section.
pub fn build_start(simulation: &SimulationToml) -> Result<SimulationStart> {
    SimulationStart::new(
        simulation.year,
        simulation.month,
        simulation.day,
        simulation.hour,
        simulation.minute,
    )
    .context("invalid simulation start time")
}
