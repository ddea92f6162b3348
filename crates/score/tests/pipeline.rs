//! End-to-end pipeline tests: alignment, gridding, rasterization, scoring
//! and selection on small hand-built runs.

use approx::assert_abs_diff_eq;
use skua_grid::geom::Ring;
use skua_raster::Parcel;
use skua_score::{
    Observation, ScoreConfig, ScoreError, SimulationRun, Snapshot, score_observation, select_best,
};
use skua_time::SimulationStart;

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Ring {
    Ring::new(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
}

/// Parcels occupying all four cells of the 2x2 grid spanned by the ring
/// `(0.01, 0.01)..(0.49, 0.49)` at 0.25 degree resolution.
fn matching_parcels() -> Vec<Parcel> {
    vec![
        Parcel::new(0.1, 0.1, 1.0),
        Parcel::new(0.1, 0.4, 1.0),
        Parcel::new(0.4, 0.1, 1.0),
        Parcel::new(0.4, 0.4, 1.0),
    ]
}

fn run_with(snapshots: Vec<Snapshot>) -> SimulationRun {
    SimulationRun {
        id: "spill42".to_string(),
        start: SimulationStart::new(2021, 8, 1, 6, 0).unwrap(),
        snapshots,
    }
}

/// 0.25 degrees per cell under the flat 110 km/degree conversion.
fn config_quarter_degree() -> ScoreConfig {
    ScoreConfig::default().with_grid_resolution_km(27.5)
}

#[test]
fn perfect_match_scores_one_at_every_scale() {
    let run = run_with(vec![Snapshot {
        parcels: matching_parcels(),
    }]);
    let obs =
        Observation::from_identifier("20210801_0700", vec![square(0.01, 0.01, 0.49, 0.49)])
            .unwrap();
    let config = config_quarter_degree().with_scale_range(1, 10, 2);

    let card = score_observation(&run, &obs, &config).unwrap();
    assert_eq!(card.scores.len(), 5);
    for s in &card.scores {
        assert_abs_diff_eq!(s.fss, 1.0, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(card.reduced().unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn alignment_picks_the_nearest_snapshot() {
    // Only snapshot 5 (12:00) carries the matching footprint; the others
    // sit far away from the observed slick.
    let far = Snapshot {
        parcels: vec![Parcel::new(5.0, 5.0, 1.0), Parcel::new(5.1, 5.1, 1.0)],
    };
    let mut snapshots = vec![far; 24];
    snapshots[5] = Snapshot {
        parcels: matching_parcels(),
    };
    let run = run_with(snapshots);

    let obs =
        Observation::from_identifier("20210801_1200", vec![square(0.01, 0.01, 0.49, 0.49)])
            .unwrap();
    let card = score_observation(&run, &obs, &config_quarter_degree()).unwrap();

    assert_eq!(card.snapshot_index, 5);
    assert_abs_diff_eq!(card.reduced().unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn disjoint_footprints_recover_at_coarse_scales() {
    // Parcels in the lower-left cell, slick in the upper-right cell of a
    // 2x2 grid at 0.4 degree resolution.
    let run = run_with(vec![Snapshot {
        parcels: vec![Parcel::new(0.1, 0.1, 1.0), Parcel::new(0.2, 0.2, 1.0)],
    }]);
    let obs =
        Observation::from_identifier("20210801_0700", vec![square(0.6, 0.6, 0.85, 0.85)]).unwrap();
    let config = ScoreConfig::default()
        .with_grid_resolution_km(44.0)
        .with_scale_range(1, 4, 2);

    let card = score_observation(&run, &obs, &config).unwrap();
    assert_abs_diff_eq!(card.scores[0].fss, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(card.scores[1].fss, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(card.reduced().unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn scoring_is_deterministic() {
    let run = run_with(vec![Snapshot {
        parcels: matching_parcels(),
    }]);
    let obs =
        Observation::from_identifier("20210801_0700", vec![square(0.01, 0.01, 0.3, 0.3)]).unwrap();
    let config = config_quarter_degree();

    let a = score_observation(&run, &obs, &config).unwrap();
    let b = score_observation(&run, &obs, &config).unwrap();
    assert_eq!(a.snapshot_index, b.snapshot_index);
    assert_eq!(a.scores.len(), b.scores.len());
    for (x, y) in a.scores.iter().zip(&b.scores) {
        assert_eq!(x.scale, y.scale);
        assert_eq!(x.fss.to_bits(), y.fss.to_bits());
    }
}

#[test]
fn selector_prefers_the_better_matching_observation() {
    let run = run_with(vec![
        Snapshot {
            parcels: matching_parcels()
        };
        24
    ]);
    let matching =
        Observation::from_identifier("20210801_0800", vec![square(0.01, 0.01, 0.49, 0.49)])
            .unwrap();
    let displaced =
        Observation::from_identifier("20210801_1500", vec![square(2.0, 2.0, 2.4, 2.4)]).unwrap();
    let config = config_quarter_degree().with_scale_range(1, 4, 2);

    let selection = select_best(&run, &[displaced, matching], &config).unwrap();
    assert_eq!(selection.scorecards.len(), 2);
    assert_eq!(selection.best_card().observation_id, "20210801_0800");
    assert_abs_diff_eq!(selection.score, 1.0, epsilon = 1e-12);
}

#[test]
fn selector_drops_observations_past_the_horizon() {
    // 24 hour run from 2021-08-01 06:00; the horizon closes at 08-02 06:00.
    let run = run_with(vec![
        Snapshot {
            parcels: matching_parcels()
        };
        24
    ]);
    let late =
        Observation::from_identifier("20210803_0000", vec![square(0.01, 0.01, 0.49, 0.49)])
            .unwrap();
    let inside =
        Observation::from_identifier("20210801_0800", vec![square(0.01, 0.01, 0.49, 0.49)])
            .unwrap();
    let config = config_quarter_degree().with_scale_range(1, 4, 2);

    let selection = select_best(&run, &[late.clone(), inside], &config).unwrap();
    assert_eq!(selection.scorecards.len(), 1);
    assert_eq!(selection.best_card().observation_id, "20210801_0800");

    let err = select_best(&run, &[late], &config).unwrap_err();
    assert!(matches!(err, ScoreError::NoComparableObservation));
}

#[test]
fn selector_reports_fully_undefined_score_tables() {
    // A threshold above 1 binarizes both presence fields to all zeros, so
    // every scale is undefined for every candidate.
    let run = run_with(vec![Snapshot {
        parcels: matching_parcels(),
    }]);
    let obs =
        Observation::from_identifier("20210801_0630", vec![square(0.01, 0.01, 0.49, 0.49)])
            .unwrap();
    let config = config_quarter_degree()
        .with_threshold(2.0)
        .with_scale_range(1, 4, 2);

    let err = select_best(&run, &[obs], &config).unwrap_err();
    assert!(matches!(err, ScoreError::AllScoresUndefined));
}

#[test]
fn observation_at_the_horizon_boundary_is_excluded() {
    // A single-snapshot run closes its horizon exactly one hour after the
    // start; an observation stamped right on that instant is not strictly
    // inside and must not be comparable.
    let run = run_with(vec![Snapshot {
        parcels: matching_parcels(),
    }]);
    let obs =
        Observation::from_identifier("20210801_0700", vec![square(0.01, 0.01, 0.49, 0.49)])
            .unwrap();
    let config = config_quarter_degree().with_scale_range(1, 4, 2);

    let err = select_best(&run, &[obs], &config).unwrap_err();
    assert!(matches!(err, ScoreError::NoComparableObservation));
}
