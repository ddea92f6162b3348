//! # skua-time
//!
//! Day-fraction timestamps and snapshot alignment. Observation identifiers
//! and simulation start times are reduced to a common real-valued time axis
//! (proleptic-Gregorian ordinal days plus fractional hours), on which the
//! nearest simulator snapshot is selected for each observation.

mod align;
mod error;
mod stamp;
mod timeline;

pub use align::nearest_snapshot;
pub use error::TimeError;
pub use stamp::{ObservationStamp, SimulationStart};
pub use timeline::snapshot_timeline;
