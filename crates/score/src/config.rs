//! Scoring configuration.

/// Kilometres per degree of latitude used to convert grid resolution.
const KM_PER_DEGREE: f64 = 110.0;

/// Configuration for the verification pipeline.
///
/// Use the builder methods to customise parameters.
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    grid_resolution_km: f64,
    threshold: f64,
    scale_start: usize,
    scale_stop: usize,
    scale_step: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            grid_resolution_km: 0.15,
            threshold: 1.0,
            scale_start: 1,
            scale_stop: 150,
            scale_step: 2,
        }
    }
}

impl ScoreConfig {
    /// Set the grid cell size in kilometres.
    pub fn with_grid_resolution_km(mut self, km: f64) -> Self {
        self.grid_resolution_km = km;
        self
    }

    /// Set the binarization threshold applied to both fields.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the neighborhood scale ladder as a half-open stepped range
    /// `start..stop` in cells.
    pub fn with_scale_range(mut self, start: usize, stop: usize, step: usize) -> Self {
        self.scale_start = start;
        self.scale_stop = stop;
        self.scale_step = step;
        self
    }

    /// Returns the grid cell size in kilometres.
    pub fn grid_resolution_km(&self) -> f64 {
        self.grid_resolution_km
    }

    /// Returns the grid cell size in degrees, using the flat conversion
    /// of 110 km per degree.
    pub fn grid_resolution_deg(&self) -> f64 {
        self.grid_resolution_km / KM_PER_DEGREE
    }

    /// Returns the binarization threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the neighborhood scales to evaluate, in ascending order.
    pub fn scales(&self) -> Vec<usize> {
        if self.scale_step == 0 {
            return vec![self.scale_start];
        }
        (self.scale_start..self.scale_stop)
            .step_by(self.scale_step)
            .collect()
    }
}
