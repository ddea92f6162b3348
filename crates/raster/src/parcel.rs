//! Simulated surface parcels.

/// One simulated particle at a fixed timestep, already filtered to
/// floating status by the reader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parcel {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Surface volume in tonnes. Carried for the event-set output;
    /// presence rasterization does not weight by it.
    pub volume: f64,
}

impl Parcel {
    /// Creates a parcel.
    pub fn new(lon: f64, lat: f64, volume: f64) -> Self {
        Self { lon, lat, volume }
    }
}
