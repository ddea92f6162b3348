//! Error types for skua-fss.

/// Error type for all fallible operations in the skua-fss crate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FssError {
    /// Returned when the two fields do not share the declared shape.
    #[error("field shape mismatch: expected {expected} values, forecast has {fct}, observation has {obs}")]
    ShapeMismatch {
        /// Values implied by the declared `ny * nx`.
        expected: usize,
        /// Length of the forecast slice.
        fct: usize,
        /// Length of the observation slice.
        obs: usize,
    },

    /// Returned when a neighborhood scale of zero cells is requested.
    #[error("neighborhood scale must be at least 1 cell")]
    InvalidScale,
}
