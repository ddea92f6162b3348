//! Densification of the sparse event set.

use std::cmp::Ordering;

use crate::error::RasterError;
use crate::event_set::EventSet;
use crate::field::DenseField;

/// The dense model and observation fields over the grid's center mesh.
#[derive(Debug, Clone)]
pub struct DenseFields {
    /// Sorted unique center longitudes (column coordinates).
    pub xs: Vec<f64>,
    /// Sorted unique center latitudes (row coordinates).
    pub ys: Vec<f64>,
    /// Simulated-presence field.
    pub model: DenseField,
    /// Observed-presence field.
    pub observation: DenseField,
}

fn sorted_unique(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    v.dedup();
    v
}

/// Fills the sparse event set into complete rectangular 0/1 arrays.
///
/// The mesh is the sorted set of unique center longitudes crossed with the
/// unique center latitudes; since the event set holds exactly one record
/// per mesh point, the nearest known label for every mesh point is the
/// point's own record, and the fill reduces to an exact reindex. Channels
/// left unset by rasterization resolve to 0, so no unset value survives.
///
/// # Errors
///
/// Returns [`RasterError::EmptyEventSet`] if the table has no records.
pub fn densify(event_set: &EventSet) -> Result<DenseFields, RasterError> {
    if event_set.is_empty() {
        return Err(RasterError::EmptyEventSet);
    }

    let xs = sorted_unique(event_set.records().iter().map(|r| r.center_lon));
    let ys = sorted_unique(event_set.records().iter().map(|r| r.center_lat));
    let (ny, nx) = (ys.len(), xs.len());

    let mut model = DenseField::zeros(ny, nx);
    let mut observation = DenseField::zeros(ny, nx);

    for rec in event_set.records() {
        // Center coordinates are generated from the same arithmetic that
        // produced xs/ys, so the exact-match search cannot fail.
        let ix = xs
            .binary_search_by(|v| v.partial_cmp(&rec.center_lon).unwrap_or(Ordering::Equal))
            .expect("record center lies on the mesh");
        let iy = ys
            .binary_search_by(|v| v.partial_cmp(&rec.center_lat).unwrap_or(Ordering::Equal))
            .expect("record center lies on the mesh");

        if rec.model.is_set() {
            model.set(iy, ix, 1.0);
        }
        if rec.observed.is_set() {
            observation.set(iy, ix, 1.0);
        }
    }

    Ok(DenseFields {
        xs,
        ys,
        model,
        observation,
    })
}
