//! Score command: one observation against one simulation run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use skua_io::{read_observation, read_run, write_event_set, write_score_table};
use skua_score::{Scorecard, score_observation};

use crate::cli::ScoreArgs;
use crate::config::SkuaConfig;
use crate::convert;

/// Run the single-observation scoring pipeline.
pub fn run(args: ScoreArgs) -> Result<()> {
    let _cmd = info_span!("score").entered();

    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: SkuaConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    let start = convert::build_start(&config.simulation)?;
    let score_config = convert::build_score_config(&config.grid, &config.fss);

    info!(path = %config.simulation.netcdf.display(), "reading simulation run");
    let run = read_run(&config.simulation.netcdf, config.simulation.id.clone(), start)
        .with_context(|| format!("failed to read NetCDF: {}", config.simulation.netcdf.display()))?;
    info!(snapshots = run.snapshots.len(), "simulation run loaded");

    info!(path = %args.observation.display(), "reading observation");
    let observation = read_observation(&args.observation)
        .with_context(|| format!("failed to read GeoJSON: {}", args.observation.display()))?;

    let card = score_observation(&run, &observation, &score_config)
        .with_context(|| format!("failed to score observation '{}'", observation.id))?;

    let out_dir = output_dir(&args.output, &config);
    write_outputs(&out_dir, &run.id, &card)?;

    match card.reduced() {
        Some(score) => println!("{} {score:.6}", card.observation_id),
        None => println!("{} undefined", card.observation_id),
    }
    Ok(())
}

/// Output directory: CLI override, then config, then the working directory.
pub fn output_dir(cli_output: &Option<PathBuf>, config: &SkuaConfig) -> PathBuf {
    cli_output
        .clone()
        .or_else(|| config.io.output.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Writes the score table and event set for one scorecard.
///
/// The file names carry the lead time of the aligned snapshot in hours.
pub fn write_outputs(dir: &Path, run_id: &str, card: &Scorecard) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

    let hours = card.snapshot_index as u32 + 1;
    write_score_table(dir, run_id, hours, &card.scores)
        .with_context(|| format!("failed to write score table for '{}'", card.observation_id))?;
    write_event_set(dir, run_id, hours, &card.event_set)
        .with_context(|| format!("failed to write event set for '{}'", card.observation_id))?;
    Ok(())
}
