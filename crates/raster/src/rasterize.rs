//! The three rasterization passes.

use tracing::debug;

use skua_grid::geom::{Ring, rect_intersects_ring};
use skua_grid::Grid;

use crate::event_set::{EventSet, Flag};
use crate::parcel::Parcel;

/// Rasterizes both footprints onto `grid`, producing the sparse event set.
///
/// Three independent passes over the same grid:
///
/// 1. model: any cell containing at least one parcel is marked present
///    (binary presence; parcel volume is not used),
/// 2. observation: any cell whose extent has non-empty overlap with some
///    observation ring is marked present,
/// 3. overlap: model-present cells that also overlap the observation are
///    marked, as a diagnostic channel the scorer does not consume.
///
/// Empty parcel lists or empty ring sets are not errors; they leave the
/// corresponding channel entirely unset.
pub fn rasterize(grid: &Grid, parcels: &[Parcel], observation: &[Ring]) -> EventSet {
    let mut set = EventSet::from_grid(grid);

    let mut parcels_placed = 0usize;
    for parcel in parcels {
        if let Some(index) = grid.locate(parcel.lon, parcel.lat) {
            set.records_mut()[index].model = Flag::Set;
            parcels_placed += 1;
        }
    }

    let mut observed_cells = 0usize;
    if !observation.is_empty() {
        for record in set.records_mut() {
            let rect = grid.cell_extent(record.cell_index);
            if observation.iter().any(|r| rect_intersects_ring(&rect, r)) {
                record.observed = Flag::Set;
                observed_cells += 1;
            }
        }
    }

    // The overlap pass applies the observation predicate to model-present
    // cells, which is exactly the conjunction of the first two channels.
    for record in set.records_mut() {
        if record.model.is_set() && record.observed.is_set() {
            record.overlap = Flag::Set;
        }
    }

    debug!(
        cells = set.len(),
        parcels = parcels.len(),
        parcels_placed,
        observed_cells,
        "rasterized event set"
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use skua_grid::BoundingBox;

    fn grid_2x2() -> Grid {
        Grid::build(&BoundingBox::new(0.0, 0.0, 1.0, 1.0), 0.5).unwrap()
    }

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Ring {
        Ring::new(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
    }

    #[test]
    fn model_pass_marks_containing_cell() {
        let grid = grid_2x2();
        let parcels = [Parcel::new(0.25, 0.25, 3.0), Parcel::new(0.26, 0.24, 1.0)];
        let set = rasterize(&grid, &parcels, &[]);

        assert_eq!(set.records()[0].model, Flag::Set);
        for rec in &set.records()[1..] {
            assert_eq!(rec.model, Flag::Unset);
        }
    }

    #[test]
    fn parcels_outside_grid_are_ignored() {
        let grid = grid_2x2();
        let parcels = [Parcel::new(5.0, 5.0, 1.0), Parcel::new(f64::NAN, 0.2, 1.0)];
        let set = rasterize(&grid, &parcels, &[]);
        assert!(set.records().iter().all(|r| r.model == Flag::Unset));
    }

    #[test]
    fn observation_pass_marks_intersecting_cells() {
        let grid = grid_2x2();
        // Covers the lower-left quadrant only.
        let rings = [square(0.1, 0.1, 0.4, 0.4)];
        let set = rasterize(&grid, &[], &rings);

        assert_eq!(set.records()[0].observed, Flag::Set);
        for rec in &set.records()[1..] {
            assert_eq!(rec.observed, Flag::Unset);
        }
    }

    #[test]
    fn observation_spanning_cells_marks_all_of_them() {
        let grid = grid_2x2();
        // Straddles all four cells.
        let rings = [square(0.4, 0.4, 0.6, 0.6)];
        let set = rasterize(&grid, &[], &rings);
        assert!(set.records().iter().all(|r| r.observed == Flag::Set));
    }

    #[test]
    fn overlap_requires_both_channels() {
        let grid = grid_2x2();
        let parcels = [Parcel::new(0.25, 0.25, 1.0), Parcel::new(0.75, 0.75, 1.0)];
        let rings = [square(0.1, 0.1, 0.4, 0.4)];
        let set = rasterize(&grid, &parcels, &rings);

        assert_eq!(set.records()[0].overlap, Flag::Set);
        assert_eq!(set.records()[3].model, Flag::Set);
        assert_eq!(set.records()[3].overlap, Flag::Unset);
    }

    #[test]
    fn empty_inputs_leave_channels_unset() {
        let grid = grid_2x2();
        let set = rasterize(&grid, &[], &[]);
        assert_eq!(set.len(), grid.cell_count());
        for rec in set.records() {
            assert_eq!(rec.model, Flag::Unset);
            assert_eq!(rec.observed, Flag::Unset);
            assert_eq!(rec.overlap, Flag::Unset);
        }
    }

    #[test]
    fn untouched_channel_stays_unset_not_zero() {
        let grid = grid_2x2();
        let parcels = [Parcel::new(0.25, 0.25, 1.0)];
        let set = rasterize(&grid, &parcels, &[]);
        // The observation channel was never touched anywhere.
        assert!(set.records().iter().all(|r| r.observed == Flag::Unset));
        // And the model channel is unset, not 0, where no parcel landed.
        assert!(set.records()[1].model.as_f64().is_nan());
    }
}
