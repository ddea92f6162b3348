//! Error types for skua-time.

/// Error type for all fallible operations in the skua-time crate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// Returned when an observation identifier is shorter than the
    /// fixed-width timestamp it must carry.
    #[error("observation identifier too short: need at least 13 characters, got {len}")]
    IdentifierTooShort {
        /// Length of the offending identifier.
        len: usize,
    },

    /// Returned when a timestamp field of an identifier is not numeric.
    #[error("non-numeric {field} field in observation identifier '{id}'")]
    NonNumericField {
        /// Name of the field that failed to parse.
        field: &'static str,
        /// The full identifier string.
        id: String,
    },

    /// Returned when year/month/day do not form a valid calendar date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u8,
        /// Day component.
        day: u8,
    },

    /// Returned when the time-of-day components are out of range.
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTimeOfDay {
        /// Hour component.
        hour: u8,
        /// Minute component.
        minute: u8,
    },

    /// Returned when alignment is attempted against an empty timeline.
    #[error("snapshot timeline is empty")]
    EmptyTimeline,
}
