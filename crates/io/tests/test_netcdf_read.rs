//! Integration tests for NetCDF parcel extraction.

use std::path::{Path, PathBuf};

use approx::assert_abs_diff_eq;
use skua_io::{IoError, read_parcels, read_run, snapshot_count};
use skua_time::SimulationStart;
use tempfile::tempdir;

/// Minimal simulator output fixture: `[time, parcel]` variables with the
/// oil density attached to `non_evaporative_volume`.
struct FixtureBuilder {
    nt: usize,
    np: usize,
    status: Vec<f64>,
    evaporative: Vec<f64>,
    non_evaporative: Vec<f64>,
    oil_density: f64,
    skip_var: Option<&'static str>,
    skip_density: bool,
}

impl FixtureBuilder {
    fn new(nt: usize, np: usize) -> Self {
        Self {
            nt,
            np,
            status: vec![1.0; nt * np],
            evaporative: vec![0.5; nt * np],
            non_evaporative: vec![1.0; nt * np],
            oil_density: 900.0,
            skip_var: None,
            skip_density: false,
        }
    }

    fn with_status(mut self, status: Vec<f64>) -> Self {
        assert_eq!(status.len(), self.nt * self.np);
        self.status = status;
        self
    }

    fn with_volumes(mut self, evaporative: Vec<f64>, non_evaporative: Vec<f64>) -> Self {
        self.evaporative = evaporative;
        self.non_evaporative = non_evaporative;
        self
    }

    fn without_var(mut self, name: &'static str) -> Self {
        self.skip_var = Some(name);
        self
    }

    fn without_density(mut self) -> Self {
        self.skip_density = true;
        self
    }

    fn write(&self, dir: &Path) -> PathBuf {
        let path = dir.join("spill.nc");
        let mut file = netcdf::create(&path).expect("create NetCDF file");

        file.add_dimension("time", self.nt).expect("add dim time");
        file.add_dimension("parcel", self.np).expect("add dim parcel");

        let n = self.nt * self.np;
        let lats: Vec<f64> = (0..n).map(|i| 40.0 + (i % self.np) as f64 * 0.01).collect();
        let lons: Vec<f64> = (0..n).map(|i| 15.0 + (i % self.np) as f64 * 0.01).collect();

        let fields: [(&str, &[f64]); 5] = [
            ("latitude", &lats),
            ("longitude", &lons),
            ("evaporative_volume", &self.evaporative),
            ("non_evaporative_volume", &self.non_evaporative),
            ("particle_status", &self.status),
        ];
        for (name, data) in fields {
            if self.skip_var == Some(name) {
                continue;
            }
            let mut var = file
                .add_variable::<f64>(name, &["time", "parcel"])
                .expect("add variable");
            var.put_values(data, ..).expect("put values");
            // The simulator carries the density on this variable.
            if name == "non_evaporative_volume" && !self.skip_density {
                var.put_attribute("oil_density", self.oil_density)
                    .expect("add oil_density");
            }
        }

        path
    }
}

#[test]
fn snapshot_count_reads_time_dimension() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(3, 4).write(dir.path());
    assert_eq!(snapshot_count(&path).unwrap(), 3);
}

#[test]
fn only_floating_parcels_survive() {
    // Status 0 is unreleased, (0, 2] is floating, above 2 is stranded.
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(1, 4)
        .with_status(vec![0.0, 1.0, 2.0, 3.0])
        .write(dir.path());

    let parcels = read_parcels(&path, 0).unwrap();
    assert_eq!(parcels.len(), 2);
    assert_abs_diff_eq!(parcels[0].lon, 15.01, epsilon = 1e-9);
    assert_abs_diff_eq!(parcels[1].lon, 15.02, epsilon = 1e-9);
}

#[test]
fn volume_combines_barrels_and_density() {
    // 1 + 2 barrels at 900 kg/m3: 3 * 0.158987 * 900 / 1000 tonnes.
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(1, 1)
        .with_volumes(vec![1.0], vec![2.0])
        .write(dir.path());

    let parcels = read_parcels(&path, 0).unwrap();
    assert_eq!(parcels.len(), 1);
    assert_abs_diff_eq!(parcels[0].volume, 0.4292649, epsilon = 1e-7);
}

#[test]
fn snapshot_index_out_of_range() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(2, 3).write(dir.path());

    let err = read_parcels(&path, 2).unwrap_err();
    assert!(matches!(
        err,
        IoError::SnapshotOutOfRange { index: 2, count: 2 }
    ));
}

#[test]
fn missing_variable_is_reported() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(1, 2)
        .without_var("particle_status")
        .write(dir.path());

    let err = read_parcels(&path, 0).unwrap_err();
    assert!(matches!(err, IoError::MissingVariable { name, .. } if name == "particle_status"));
}

#[test]
fn missing_oil_density_attribute_is_reported() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(1, 2).without_density().write(dir.path());

    let err = read_parcels(&path, 0).unwrap_err();
    assert!(matches!(err, IoError::MissingAttribute { name, .. } if name == "oil_density"));
}

#[test]
fn missing_file_is_reported() {
    let err = snapshot_count(Path::new("/nonexistent/spill.nc")).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}

#[test]
fn read_run_collects_every_snapshot() {
    let dir = tempdir().unwrap();
    let path = FixtureBuilder::new(3, 4).write(dir.path());
    let start = SimulationStart::new(2021, 8, 1, 6, 0).unwrap();

    let run = read_run(&path, "spill42", start).unwrap();
    assert_eq!(run.id, "spill42");
    assert_eq!(run.snapshots.len(), 3);
    assert_eq!(run.length_hours(), 3);
    for snapshot in &run.snapshots {
        assert_eq!(snapshot.parcels.len(), 4);
    }
}
