//! Error types for skua-grid.

/// Error type for all fallible operations in the skua-grid crate.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Returned when the requested extent is empty, inverted, or not finite.
    #[error(
        "degenerate extent: lon [{lon_min}, {lon_max}], lat [{lat_min}, {lat_max}]"
    )]
    DegenerateExtent {
        /// Western bound in degrees.
        lon_min: f64,
        /// Eastern bound in degrees.
        lon_max: f64,
        /// Southern bound in degrees.
        lat_min: f64,
        /// Northern bound in degrees.
        lat_max: f64,
    },

    /// Returned when the cell size is zero, negative, or not finite.
    #[error("invalid grid resolution: {cell_size} degrees")]
    InvalidResolution {
        /// Offending cell size in degrees.
        cell_size: f64,
    },

    /// Returned when an extent is requested from an empty point set.
    #[error("cannot derive an extent from an empty point set")]
    EmptyPointSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_degenerate_extent() {
        let err = GridError::DegenerateExtent {
            lon_min: 1.0,
            lon_max: 1.0,
            lat_min: 0.0,
            lat_max: 2.0,
        };
        assert_eq!(
            err.to_string(),
            "degenerate extent: lon [1, 1], lat [0, 2]"
        );
    }

    #[test]
    fn display_invalid_resolution() {
        let err = GridError::InvalidResolution { cell_size: -0.5 };
        assert_eq!(err.to_string(), "invalid grid resolution: -0.5 degrees");
    }

    #[test]
    fn display_empty_point_set() {
        assert_eq!(
            GridError::EmptyPointSet.to_string(),
            "cannot derive an extent from an empty point set"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<GridError>();
    }
}
