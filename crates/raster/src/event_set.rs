//! Sparse per-cell event table.

use skua_grid::Grid;

/// Per-cell, per-channel presence flag.
///
/// A channel is `Unset` until a rasterization pass touches the cell;
/// "not touched" is distinct from "touched and absent" until
/// densification maps the remaining `Unset` flags to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flag {
    /// No pass has marked this cell.
    #[default]
    Unset,
    /// Presence detected in this cell.
    Set,
}

impl Flag {
    /// True if the flag has been marked.
    pub fn is_set(self) -> bool {
        matches!(self, Flag::Set)
    }

    /// Numeric form used by the event-set table: 1 for set, NaN for unset.
    pub fn as_f64(self) -> f64 {
        match self {
            Flag::Set => 1.0,
            Flag::Unset => f64::NAN,
        }
    }
}

/// One row of the event set: a grid cell and its three channel flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRecord {
    /// Grid cell index (generation order).
    pub cell_index: usize,
    /// Longitude of the cell center in degrees.
    pub center_lon: f64,
    /// Latitude of the cell center in degrees.
    pub center_lat: f64,
    /// Simulated-oil presence.
    pub model: Flag,
    /// Observed-oil presence.
    pub observed: Flag,
    /// Diagnostic: model presence coinciding with the observation.
    pub overlap: Flag,
}

/// The sparse event table, one record per grid cell in cell-index order.
#[derive(Debug, Clone)]
pub struct EventSet {
    records: Vec<EventRecord>,
}

impl EventSet {
    /// Creates an all-unset event set covering every cell of `grid`.
    pub fn from_grid(grid: &Grid) -> Self {
        let records = grid
            .cells()
            .iter()
            .map(|cell| EventRecord {
                cell_index: cell.index,
                center_lon: cell.center_lon,
                center_lat: cell.center_lat,
                model: Flag::Unset,
                observed: Flag::Unset,
                overlap: Flag::Unset,
            })
            .collect();
        Self { records }
    }

    /// Number of records; always equals the cell count of the source grid.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in cell-index order.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [EventRecord] {
        &mut self.records
    }
}
