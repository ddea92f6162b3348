//! Snapshot timeline construction.

use crate::stamp::SimulationStart;

/// Builds the day-fraction times of the simulator's hourly snapshots.
///
/// The simulator writes one snapshot per hour and the first snapshot lands
/// one hour after the start time, so snapshot `i` sits at
/// `start + (i + 1) / 24` days. A zero-length run yields an empty timeline.
pub fn snapshot_timeline(start: &SimulationStart, length_hours: u32) -> Vec<f64> {
    let t0 = start.day_fraction();
    (0..length_hours)
        .map(|i| t0 + f64::from(i + 1) / 24.0)
        .collect()
}
