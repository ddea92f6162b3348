//! Uniform square-cell verification grid.

use crate::bbox::BoundingBox;
use crate::error::GridError;

/// One grid cell, identified by its position in generation order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Position in generation order; consumers depend on this index.
    pub index: usize,
    /// Longitude of the cell center in degrees.
    pub center_lon: f64,
    /// Latitude of the cell center in degrees.
    pub center_lat: f64,
}

/// Ordered lattice of square cells tiling a bounding box.
///
/// Cells are generated column-major (longitude-major, latitude-minor) with
/// half-open stepping: cell origins are `min + k * cell_size` for every `k`
/// with `min + k * cell_size < max`, so the final row and column may extend
/// slightly past the nominal maximum. Cell `index` equals the generation
/// order and is stable for a given extent and resolution.
#[derive(Debug, Clone)]
pub struct Grid {
    lon_min: f64,
    lat_min: f64,
    cell_size: f64,
    nx: usize,
    ny: usize,
    cells: Vec<Cell>,
}

/// Number of half-open steps of `cell_size` covering `[min, max)`.
fn axis_steps(min: f64, max: f64, cell_size: f64) -> usize {
    let mut k = 0usize;
    while min + (k as f64) * cell_size < max {
        k += 1;
    }
    k
}

impl Grid {
    /// Builds the grid covering `bbox` at `cell_size` degrees.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidResolution`] if `cell_size` is not a
    /// finite positive number, and [`GridError::DegenerateExtent`] if the
    /// box is empty, inverted, or has non-finite bounds.
    pub fn build(bbox: &BoundingBox, cell_size: f64) -> Result<Self, GridError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidResolution { cell_size });
        }
        let finite = bbox.lon_min.is_finite()
            && bbox.lon_max.is_finite()
            && bbox.lat_min.is_finite()
            && bbox.lat_max.is_finite();
        if !finite || bbox.lon_min >= bbox.lon_max || bbox.lat_min >= bbox.lat_max {
            return Err(GridError::DegenerateExtent {
                lon_min: bbox.lon_min,
                lon_max: bbox.lon_max,
                lat_min: bbox.lat_min,
                lat_max: bbox.lat_max,
            });
        }

        let nx = axis_steps(bbox.lon_min, bbox.lon_max, cell_size);
        let ny = axis_steps(bbox.lat_min, bbox.lat_max, cell_size);

        let mut cells = Vec::with_capacity(nx * ny);
        for ix in 0..nx {
            let center_lon = bbox.lon_min + (ix as f64 + 0.5) * cell_size;
            for iy in 0..ny {
                let center_lat = bbox.lat_min + (iy as f64 + 0.5) * cell_size;
                cells.push(Cell {
                    index: cells.len(),
                    center_lon,
                    center_lat,
                });
            }
        }

        Ok(Self {
            lon_min: bbox.lon_min,
            lat_min: bbox.lat_min,
            cell_size,
            nx,
            ny,
            cells,
        })
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (longitude steps).
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of rows (latitude steps).
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Cell side length in degrees.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Cells in generation order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Index of the cell containing `(lon, lat)`, or `None` for points
    /// outside the lattice or with non-finite coordinates.
    ///
    /// Containment is resolved by integer division of the offset from the
    /// grid origin; points on the shared edge between two cells land in the
    /// higher-indexed one.
    pub fn locate(&self, lon: f64, lat: f64) -> Option<usize> {
        if !lon.is_finite() || !lat.is_finite() {
            return None;
        }
        let fx = (lon - self.lon_min) / self.cell_size;
        let fy = (lat - self.lat_min) / self.cell_size;
        if fx < 0.0 || fy < 0.0 {
            return None;
        }
        let ix = fx.floor() as usize;
        let iy = fy.floor() as usize;
        if ix >= self.nx || iy >= self.ny {
            return None;
        }
        Some(ix * self.ny + iy)
    }

    /// Spatial extent of the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.cell_count()`.
    pub fn cell_extent(&self, index: usize) -> BoundingBox {
        assert!(index < self.cells.len(), "cell index out of range");
        let ix = index / self.ny;
        let iy = index % self.ny;
        let lon0 = self.lon_min + (ix as f64) * self.cell_size;
        let lat0 = self.lat_min + (iy as f64) * self.cell_size;
        BoundingBox::new(lon0, lat0, lon0 + self.cell_size, lat0 + self.cell_size)
    }
}
