use std::path::PathBuf;

use serde::Deserialize;

/// Top-level skua configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkuaConfig {
    /// Simulation run settings.
    pub simulation: SimulationToml,

    /// Grid settings.
    #[serde(default)]
    pub grid: GridToml,

    /// FSS settings.
    #[serde(default)]
    pub fss: FssToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationToml {
    /// Path to the simulator's NetCDF parcel output.
    pub netcdf: PathBuf,

    /// Run identifier, used in output file names.
    #[serde(default = "default_run_id")]
    pub id: String,

    /// Spill release year.
    pub year: i32,
    /// Spill release month (1..=12).
    pub month: u8,
    /// Spill release day of month.
    pub day: u8,
    /// Spill release hour (0..=23).
    pub hour: u8,
    /// Spill release minute (0..=59).
    #[serde(default)]
    pub minute: u8,
}

fn default_run_id() -> String {
    "spill".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridToml {
    /// Grid cell size in kilometres.
    #[serde(default = "default_resolution_km")]
    pub resolution_km: f64,
}

impl Default for GridToml {
    fn default() -> Self {
        Self {
            resolution_km: default_resolution_km(),
        }
    }
}

fn default_resolution_km() -> f64 {
    0.15
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FssToml {
    /// Binarization threshold for both presence fields.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// First neighborhood scale in cells.
    #[serde(default = "default_scale_start")]
    pub scale_start: usize,
    /// End of the scale range (exclusive).
    #[serde(default = "default_scale_stop")]
    pub scale_stop: usize,
    /// Step between scales.
    #[serde(default = "default_scale_step")]
    pub scale_step: usize,
}

impl Default for FssToml {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            scale_start: default_scale_start(),
            scale_stop: default_scale_stop(),
            scale_step: default_scale_step(),
        }
    }
}

fn default_threshold() -> f64 {
    1.0
}
fn default_scale_start() -> usize {
    1
}
fn default_scale_stop() -> usize {
    150
}
fn default_scale_step() -> usize {
    2
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Directory the score and event-set tables are written to.
    pub output: Option<PathBuf>,
}
