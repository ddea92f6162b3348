//! Dense rectangular fields.

/// A complete 2D field over the grid's unique center coordinates,
/// stored row-major with latitude as the row axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseField {
    ny: usize,
    nx: usize,
    values: Vec<f64>,
}

impl DenseField {
    /// Creates a zero-filled field of `ny` rows by `nx` columns.
    pub fn zeros(ny: usize, nx: usize) -> Self {
        Self {
            ny,
            nx,
            values: vec![0.0; ny * nx],
        }
    }

    /// Returns `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.ny, self.nx)
    }

    /// Row-major backing slice.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at row `iy`, column `ix`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn get(&self, iy: usize, ix: usize) -> f64 {
        assert!(iy < self.ny && ix < self.nx, "field position out of range");
        self.values[iy * self.nx + ix]
    }

    pub(crate) fn set(&mut self, iy: usize, ix: usize, value: f64) {
        self.values[iy * self.nx + ix] = value;
    }
}
