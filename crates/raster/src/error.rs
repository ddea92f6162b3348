//! Error types for skua-raster.

/// Error type for all fallible operations in the skua-raster crate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    /// Returned when densification is attempted on an empty event set.
    #[error("cannot densify an empty event set")]
    EmptyEventSet,
}
