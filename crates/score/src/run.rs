//! Inputs to the pipeline: simulation runs and observed slicks.

use skua_grid::geom::Ring;
use skua_raster::Parcel;
use skua_time::{ObservationStamp, SimulationStart, TimeError, snapshot_timeline};

/// One hourly output of the simulator.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Surface parcels present at this hour.
    pub parcels: Vec<Parcel>,
}

/// A completed simulation run with its hourly snapshots.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// Run identifier, carried through to output names.
    pub id: String,
    /// Release time of the spill.
    pub start: SimulationStart,
    /// Hourly snapshots; snapshot `i` is `i + 1` hours after the start.
    pub snapshots: Vec<Snapshot>,
}

impl SimulationRun {
    /// Simulated length in hours, one per snapshot.
    pub fn length_hours(&self) -> u32 {
        self.snapshots.len() as u32
    }

    /// Day-fraction times of the snapshots.
    pub fn timeline(&self) -> Vec<f64> {
        snapshot_timeline(&self.start, self.length_hours())
    }
}

/// An observed slick: acquisition stamp plus polygon exterior rings.
#[derive(Debug, Clone)]
pub struct Observation {
    /// Source identifier the stamp was parsed from.
    pub id: String,
    /// Acquisition time.
    pub stamp: ObservationStamp,
    /// Slick outline, one ring per polygon exterior.
    pub rings: Vec<Ring>,
}

impl Observation {
    /// Builds an observation from an identifier carrying the fixed-width
    /// timestamp, as found in observation product names.
    ///
    /// # Errors
    ///
    /// Propagates [`ObservationStamp::parse`] failures.
    pub fn from_identifier(id: impl Into<String>, rings: Vec<Ring>) -> Result<Self, TimeError> {
        let id = id.into();
        let stamp = ObservationStamp::parse(&id)?;
        Ok(Self { id, stamp, rings })
    }
}
