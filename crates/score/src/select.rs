//! Choosing the most comparable observation for a run.

use tracing::{debug, info};

use crate::config::ScoreConfig;
use crate::error::ScoreError;
use crate::run::{Observation, SimulationRun};
use crate::score::{Scorecard, score_observation};

/// Outcome of ranking several candidate observations against one run.
#[derive(Debug, Clone)]
pub struct Selection {
    /// One scorecard per candidate inside the simulated horizon, in
    /// candidate order.
    pub scorecards: Vec<Scorecard>,
    /// Index of the winning scorecard.
    pub best: usize,
    /// Reduced scalar of the winner.
    pub score: f64,
}

impl Selection {
    /// The winning scorecard.
    pub fn best_card(&self) -> &Scorecard {
        &self.scorecards[self.best]
    }
}

/// Index and value of the largest defined scalar, first on ties.
fn pick_best(reduced: &[Option<f64>]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, r) in reduced.iter().enumerate() {
        if let Some(v) = *r {
            match best {
                Some((_, b)) if v <= b => {}
                _ => best = Some((i, v)),
            }
        }
    }
    best
}

/// Scores every candidate acquired within the simulated horizon and keeps
/// the one with the largest reduced scalar.
///
/// A candidate is comparable when its acquisition time precedes the end of
/// the run, measured from the spill release. Candidates whose score table
/// is undefined at every scale stay in the returned scorecards but cannot
/// win.
///
/// # Errors
///
/// Returns [`ScoreError::NoComparableObservation`] when the horizon filter
/// leaves no candidate, [`ScoreError::AllScoresUndefined`] when no survivor
/// has a defined score, and propagates per-candidate pipeline failures.
pub fn select_best(
    run: &SimulationRun,
    observations: &[Observation],
    config: &ScoreConfig,
) -> Result<Selection, ScoreError> {
    let horizon = run.start.day_fraction() + f64::from(run.length_hours()) / 24.0;

    let comparable: Vec<&Observation> = observations
        .iter()
        .filter(|obs| {
            let inside = obs.stamp.day_fraction() < horizon;
            if !inside {
                debug!(observation = %obs.id, "acquired past the simulated horizon, skipped");
            }
            inside
        })
        .collect();
    if comparable.is_empty() {
        return Err(ScoreError::NoComparableObservation);
    }

    let mut scorecards = Vec::with_capacity(comparable.len());
    for obs in &comparable {
        scorecards.push(score_observation(run, obs, config)?);
    }

    let reduced: Vec<Option<f64>> = scorecards.iter().map(Scorecard::reduced).collect();
    let (best, score) = pick_best(&reduced).ok_or(ScoreError::AllScoresUndefined)?;

    info!(
        run = %run.id,
        candidates = observations.len(),
        comparable = scorecards.len(),
        winner = %scorecards[best].observation_id,
        score,
        "selected observation"
    );

    Ok(Selection {
        scorecards,
        best,
        score,
    })
}
