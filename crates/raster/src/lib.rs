//! # skua-raster
//!
//! Projects the two heterogeneous footprint sources onto the shared
//! verification grid: simulated parcels (points) and the observed slick
//! (polygon rings) each mark per-cell presence flags in a sparse event set,
//! which is then densified into complete 0/1 fields for scoring.

mod densify;
mod error;
mod event_set;
mod field;
mod parcel;
mod rasterize;

pub use densify::{DenseFields, densify};
pub use error::RasterError;
pub use event_set::{EventRecord, EventSet, Flag};
pub use field::DenseField;
pub use parcel::Parcel;
pub use rasterize::rasterize;
