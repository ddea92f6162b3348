//! FSS accumulation and the multi-scale score table.

use crate::error::FssError;
use crate::filter::uniform_filter;

/// Streaming accumulator for the Fractions Skill Score at one neighborhood
/// scale.
///
/// Field pairs are binarized at the threshold, averaged over the square
/// neighborhood, and folded into three running sums. The score can be read
/// after any number of [`accumulate`](Self::accumulate) calls.
#[derive(Debug, Clone)]
pub struct FssAccumulator {
    threshold: f64,
    scale: usize,
    sum_fct_sq: f64,
    sum_fct_obs: f64,
    sum_obs_sq: f64,
}

impl FssAccumulator {
    /// Creates an empty accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`FssError::InvalidScale`] if `scale` is zero.
    pub fn new(threshold: f64, scale: usize) -> Result<Self, FssError> {
        if scale == 0 {
            return Err(FssError::InvalidScale);
        }
        Ok(Self {
            threshold,
            scale,
            sum_fct_sq: 0.0,
            sum_fct_obs: 0.0,
            sum_obs_sq: 0.0,
        })
    }

    /// Folds one forecast/observation field pair into the running sums.
    ///
    /// Non-finite values compare below any finite threshold, so they never
    /// count as an occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`FssError::ShapeMismatch`] if either slice does not hold
    /// `ny * nx` values.
    pub fn accumulate(
        &mut self,
        fct: &[f64],
        obs: &[f64],
        ny: usize,
        nx: usize,
    ) -> Result<(), FssError> {
        let expected = ny * nx;
        if fct.len() != expected || obs.len() != expected {
            return Err(FssError::ShapeMismatch {
                expected,
                fct: fct.len(),
                obs: obs.len(),
            });
        }

        let fct_bin = binarize(fct, self.threshold);
        let obs_bin = binarize(obs, self.threshold);

        let fct_frac = uniform_filter(&fct_bin, ny, nx, self.scale);
        let obs_frac = uniform_filter(&obs_bin, ny, nx, self.scale);

        for (f, o) in fct_frac.iter().zip(&obs_frac) {
            self.sum_fct_sq += f * f;
            self.sum_fct_obs += f * o;
            self.sum_obs_sq += o * o;
        }
        Ok(())
    }

    /// Computes the score from the running sums.
    ///
    /// Returns NaN when both fraction fields were empty everywhere, in
    /// which case the score carries no information.
    pub fn compute(&self) -> f64 {
        let numer = self.sum_fct_sq - 2.0 * self.sum_fct_obs + self.sum_obs_sq;
        let denom = self.sum_fct_sq + self.sum_obs_sq;
        if denom == 0.0 {
            return f64::NAN;
        }
        1.0 - numer / denom
    }
}

fn binarize(field: &[f64], threshold: f64) -> Vec<f64> {
    field
        .iter()
        .map(|&v| {
            let v = if v.is_finite() { v } else { threshold - 1.0 };
            if v >= threshold { 1.0 } else { 0.0 }
        })
        .collect()
}

/// Single-pair FSS at one scale.
///
/// # Errors
///
/// Propagates the [`FssAccumulator`] errors.
pub fn fss(
    fct: &[f64],
    obs: &[f64],
    ny: usize,
    nx: usize,
    threshold: f64,
    scale: usize,
) -> Result<f64, FssError> {
    let mut acc = FssAccumulator::new(threshold, scale)?;
    acc.accumulate(fct, obs, ny, nx)?;
    Ok(acc.compute())
}

/// One row of the multi-scale score table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleScore {
    /// Neighborhood side length in cells.
    pub scale: usize,
    /// Score at that scale; NaN when undefined.
    pub fss: f64,
}

impl ScaleScore {
    /// True unless the score is NaN.
    pub fn is_defined(&self) -> bool {
        !self.fss.is_nan()
    }
}

/// Scores one field pair at every requested neighborhood scale.
///
/// # Errors
///
/// Propagates the [`FssAccumulator`] errors.
pub fn score_scales(
    fct: &[f64],
    obs: &[f64],
    ny: usize,
    nx: usize,
    threshold: f64,
    scales: &[usize],
) -> Result<Vec<ScaleScore>, FssError> {
    let mut table = Vec::with_capacity(scales.len());
    for &scale in scales {
        table.push(ScaleScore {
            scale,
            fss: fss(fct, obs, ny, nx, threshold, scale)?,
        });
    }
    Ok(table)
}
