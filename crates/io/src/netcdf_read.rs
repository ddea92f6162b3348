//! Simulation output extraction from NetCDF parcel files.

use std::path::Path;

use netcdf::AttributeValue;
use tracing::debug;

use skua_raster::Parcel;
use skua_score::{SimulationRun, Snapshot};
use skua_time::SimulationStart;

use crate::error::IoError;

/// Barrels to cubic metres.
const BARREL_M3: f64 = 0.158987;

/// Open a NetCDF file at `path`, returning [`IoError::FileNotFound`] if the
/// path does not exist on disk.
fn open_file(path: &Path) -> Result<netcdf::File, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(netcdf::open(path)?)
}

/// Read one 2-D `[time, parcel]` variable at a fixed time index.
fn read_snapshot_var(
    file: &netcdf::File,
    name: &str,
    time_index: usize,
    path: &Path,
) -> Result<Vec<f64>, IoError> {
    let var = file.variable(name).ok_or_else(|| IoError::MissingVariable {
        name: name.to_string(),
        path: path.to_path_buf(),
    })?;
    Ok(var.get_values::<f64, _>((time_index, ..))?)
}

/// Read the oil density (kg/m3) from the `oil_density` attribute the
/// simulator puts on the `non_evaporative_volume` variable.
fn read_oil_density(file: &netcdf::File, path: &Path) -> Result<f64, IoError> {
    let var = file
        .variable("non_evaporative_volume")
        .ok_or_else(|| IoError::MissingVariable {
            name: "non_evaporative_volume".to_string(),
            path: path.to_path_buf(),
        })?;
    let value = var
        .attribute_value("oil_density")
        .ok_or_else(|| IoError::MissingAttribute {
            name: "oil_density".to_string(),
            path: path.to_path_buf(),
        })??;
    match value {
        AttributeValue::Double(d) => Ok(d),
        AttributeValue::Float(f) => Ok(f64::from(f)),
        other => Err(IoError::Netcdf {
            reason: format!("attribute 'oil_density' has non-numeric type: {other:?}"),
        }),
    }
}

/// Number of hourly snapshots in a simulation output file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] for a missing path and
/// [`IoError::Netcdf`] if the file has no `time` dimension.
pub fn snapshot_count(path: &Path) -> Result<usize, IoError> {
    let file = open_file(path)?;
    file.dimension("time")
        .map(|d| d.len())
        .ok_or_else(|| IoError::Netcdf {
            reason: format!("no 'time' dimension in {}", path.display()),
        })
}

/// Reads the floating parcels of one snapshot from a simulation output file.
///
/// A parcel is kept when its `particle_status` is in `(0, 2]`, the range
/// the simulator uses for oil on the surface. The parcel volume in tonnes
/// combines the evaporative and non-evaporative barrel volumes with the
/// file-level oil density.
///
/// # Errors
///
/// Returns [`IoError::SnapshotOutOfRange`] when `time_index` exceeds the
/// time axis, and propagates missing-variable and NetCDF failures.
pub fn read_parcels(path: &Path, time_index: usize) -> Result<Vec<Parcel>, IoError> {
    let file = open_file(path)?;
    let count = file
        .dimension("time")
        .map(|d| d.len())
        .ok_or_else(|| IoError::Netcdf {
            reason: format!("no 'time' dimension in {}", path.display()),
        })?;
    if time_index >= count {
        return Err(IoError::SnapshotOutOfRange {
            index: time_index,
            count,
        });
    }

    let lats = read_snapshot_var(&file, "latitude", time_index, path)?;
    let lons = read_snapshot_var(&file, "longitude", time_index, path)?;
    let evaporative = read_snapshot_var(&file, "evaporative_volume", time_index, path)?;
    let non_evaporative = read_snapshot_var(&file, "non_evaporative_volume", time_index, path)?;
    let status = read_snapshot_var(&file, "particle_status", time_index, path)?;
    let density = read_oil_density(&file, path)?;

    let mut parcels = Vec::new();
    for i in 0..lats.len() {
        if !(status[i] > 0.0 && status[i] <= 2.0) {
            continue;
        }
        let barrels = evaporative[i] + non_evaporative[i];
        let tonnes = barrels * BARREL_M3 * density / 1000.0;
        parcels.push(Parcel::new(lons[i], lats[i], tonnes));
    }

    debug!(
        path = %path.display(),
        time_index,
        total = lats.len(),
        floating = parcels.len(),
        "read snapshot parcels"
    );
    Ok(parcels)
}

/// Reads a complete simulation run: every hourly snapshot in the file.
///
/// # Errors
///
/// Propagates [`read_parcels`] failures.
pub fn read_run(path: &Path, id: impl Into<String>, start: SimulationStart) -> Result<SimulationRun, IoError> {
    let count = snapshot_count(path)?;
    let mut snapshots = Vec::with_capacity(count);
    for t in 0..count {
        snapshots.push(Snapshot {
            parcels: read_parcels(path, t)?,
        });
    }
    Ok(SimulationRun {
        id: id.into(),
        start,
        snapshots,
    })
}
