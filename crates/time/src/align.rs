//! Nearest-snapshot alignment.

use crate::error::TimeError;

/// Returns the index of the snapshot time closest to `target`.
///
/// Ties are resolved to the first occurrence.
///
/// # Errors
///
/// Returns [`TimeError::EmptyTimeline`] if `times` is empty.
pub fn nearest_snapshot(times: &[f64], target: f64) -> Result<usize, TimeError> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &t) in times.iter().enumerate() {
        let dist = (t - target).abs();
        match best {
            Some((_, d)) if dist >= d => {}
            _ => best = Some((i, dist)),
        }
    }
    best.map(|(i, _)| i).ok_or(TimeError::EmptyTimeline)
}
