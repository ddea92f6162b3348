//! Error types for skua-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the skua-io crate.
///
/// Covers plain I/O failures, format-specific errors from the NetCDF and
/// JSON libraries, and data-model mismatches encountered when reading
/// simulation output or observation products.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the NetCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying NetCDF failure.
        reason: String,
    },

    /// Wraps an error originating from the JSON parser.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying JSON failure.
        reason: String,
    },

    /// Wraps a plain filesystem error.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying filesystem failure.
        reason: String,
    },

    /// Wraps a timestamp error raised while interpreting an identifier.
    #[error("time error: {reason}")]
    Time {
        /// Description of the underlying timestamp failure.
        reason: String,
    },

    /// Returned when a required variable is not present in a file.
    #[error("variable '{name}' not found in {}", path.display())]
    MissingVariable {
        /// Name of the missing variable.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a required attribute is not present in a file.
    #[error("attribute '{name}' not found in {}", path.display())]
    MissingAttribute {
        /// Name of the missing attribute.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a requested snapshot index exceeds the file's time axis.
    #[error("snapshot index {index} out of range: file holds {count} snapshots")]
    SnapshotOutOfRange {
        /// Requested snapshot index.
        index: usize,
        /// Number of snapshots in the file.
        count: usize,
    },

    /// Returned when a GeoJSON geometry is not a polygon family member.
    #[error("unsupported geometry type '{kind}': expected Polygon or MultiPolygon")]
    UnsupportedGeometry {
        /// The geometry type encountered.
        kind: String,
    },

    /// Returned when a feature carries no IDENTIFIER property.
    #[error("observation feature has no IDENTIFIER property")]
    MissingIdentifier,
}

impl From<netcdf::Error> for IoError {
    fn from(e: netcdf::Error) -> Self {
        IoError::Netcdf {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}

impl From<skua_time::TimeError> for IoError {
    fn from(e: skua_time::TimeError) -> Self {
        IoError::Time {
            reason: e.to_string(),
        }
    }
}
