//! # skua-score
//!
//! The end-to-end verification pipeline: align an observation to the
//! nearest simulated snapshot, build a common grid over both footprints,
//! rasterize, densify, and score across neighborhood scales. The selector
//! on top ranks several candidate observations against one run and keeps
//! the most comparable one.

mod config;
mod error;
mod run;
mod score;
mod select;

pub use config::ScoreConfig;
pub use error::ScoreError;
pub use run::{Observation, SimulationRun, Snapshot};
pub use score::{Scorecard, score_observation};
pub use select::{Selection, select_best};
