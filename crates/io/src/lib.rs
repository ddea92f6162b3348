//! # skua-io
//!
//! Read simulated parcel clouds from NetCDF and observed slick outlines
//! from GeoJSON, and write the scoring outputs as whitespace-separated
//! text tables. Bridges external file formats into skua's in-memory types.

mod error;
mod geojson;
mod netcdf_read;
mod writer;

pub use error::IoError;
pub use geojson::{parse_observation, read_observation};
pub use netcdf_read::{read_parcels, read_run, snapshot_count};
pub use writer::{write_event_set, write_score_table};
