//! Chi-square survival function cross-checked against statrs
//!
//! The Stirling log-gamma approximation is coarse below k = 1.5, so the
//! comparison starts at three degrees of freedom.

use sospecha::chi_square::{chisqr_p_value, chisqr_p_value_with, chisquare};
use sospecha::config::SeriesConfig;
use statrs::distribution::{ChiSquared, ContinuousCDF};

const STATS: [f64; 13] = [
    0.1, 0.5, 1.0, 2.0, 3.0, 5.0, 8.0, 12.0, 20.0, 30.0, 45.0, 60.0, 100.0,
];

fn reference_sf(dof: usize, stat: f64) -> f64 {
    let dist = ChiSquared::new(dof as f64).unwrap();
    1.0 - dist.cdf(stat)
}

#[test]
fn test_p_value_matches_statrs_for_moderate_dof() {
    for dof in 3..=30 {
        for &stat in &STATS {
            let ours = chisqr_p_value(dof, stat);
            let reference = reference_sf(dof, stat);
            assert!(
                (ours - reference).abs() < 1e-4,
                "dof {} stat {}: {} vs statrs {}",
                dof,
                stat,
                ours,
                reference
            );
        }
    }
}

#[test]
fn test_p_value_two_dof_is_exact() {
    for &stat in &STATS {
        let ours = chisqr_p_value(2, stat);
        let reference = reference_sf(2, stat);
        assert!((ours - reference).abs() < 1e-12, "stat {}", stat);
    }
}

#[test]
fn test_converging_series_matches_statrs() {
    let series = SeriesConfig::converging(1e-15);
    for dof in [3, 5, 8, 13] {
        for &stat in &STATS {
            let ours = chisqr_p_value_with(dof, stat, &series);
            assert!((ours - reference_sf(dof, stat)).abs() < 1e-4);
        }
    }
}

#[test]
fn test_goodness_of_fit_matches_statrs() {
    let observed = [12.0, 9.0, 14.0, 5.0, 10.0];
    let expected = [10.0; 5];
    let test = chisquare(&observed, &expected).unwrap();

    // (4 + 1 + 16 + 25 + 0) / 10
    assert!((test.statistic - 4.6).abs() < 1e-12);
    assert_eq!(test.dof, 4);
    assert!((test.pvalue - reference_sf(4, 4.6)).abs() < 1e-4);
}
