//! Error types for skua-score.

use skua_fss::FssError;
use skua_grid::GridError;
use skua_raster::RasterError;
use skua_time::TimeError;

/// Error type for all fallible operations in the skua-score crate.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// Timestamp parsing or alignment failed.
    #[error(transparent)]
    Time(#[from] TimeError),

    /// Grid construction failed.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Rasterization or densification failed.
    #[error(transparent)]
    Raster(#[from] RasterError),

    /// FSS evaluation failed.
    #[error(transparent)]
    Fss(#[from] FssError),

    /// Returned by the selector when no candidate observation falls within
    /// the simulated horizon.
    #[error("no observation falls within the simulated horizon")]
    NoComparableObservation,

    /// Returned by the selector when every surviving candidate scored
    /// undefined at every neighborhood scale.
    #[error("all candidate observations scored undefined at every scale")]
    AllScoresUndefined,
}
