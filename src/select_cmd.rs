//! Select command: rank candidate observations against one run.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use skua_io::{read_observation, read_run};
use skua_score::{Observation, select_best};

use crate::cli::SelectArgs;
use crate::config::SkuaConfig;
use crate::convert;
use crate::score_cmd;

/// Run the multi-observation selection pipeline.
pub fn run(args: SelectArgs) -> Result<()> {
    let _cmd = info_span!("select").entered();

    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: SkuaConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    let start = convert::build_start(&config.simulation)?;
    let score_config = convert::build_score_config(&config.grid, &config.fss);

    info!(path = %config.simulation.netcdf.display(), "reading simulation run");
    let run = read_run(&config.simulation.netcdf, config.simulation.id.clone(), start)
        .with_context(|| format!("failed to read NetCDF: {}", config.simulation.netcdf.display()))?;

    let observations: Vec<Observation> = args
        .observations
        .iter()
        .map(|path| {
            read_observation(path)
                .with_context(|| format!("failed to read GeoJSON: {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    info!(candidates = observations.len(), "observations loaded");

    let selection = select_best(&run, &observations, &score_config)
        .context("failed to select an observation")?;

    let out_dir = score_cmd::output_dir(&args.output, &config);
    for card in &selection.scorecards {
        score_cmd::write_outputs(&out_dir, &run.id, card)?;
    }

    println!(
        "{} {:.6}",
        selection.best_card().observation_id,
        selection.score
    );
    Ok(())
}
