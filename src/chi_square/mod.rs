// Chi-square goodness-of-fit with a self-contained p-value
//
// p = 1 − γ(k, v) / Γ(k) with k = dof/2, v = stat/2. Both gammas come from the
// approximations in `gamma`; no statistics library sits on this path.
//
// Guards:
// - dof < 1 or stat not >= 0: p = 0.0
// - dof = 2: exact survival function exp(−stat/2)
// - stat = 0: p = 1.0
// - non-finite ln γ(k, v), or approximated ratio above 1: p = 1e-14

mod gamma;

pub use gamma::{log_gamma_stirling, log_lower_incomplete_gamma};

use crate::config::SeriesConfig;
use crate::coverage::CoverageCounts;
use crate::error::{ensure_same_len, MetricsError, Result};
use crate::score::round6;
use serde::Serialize;

/// Sentinel p-value when the gamma approximation breaks down
pub const P_VALUE_FLOOR: f64 = 1e-14;

/// Result of a chi-square goodness-of-fit test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChiSquareTest {
    /// Σ (o − e)² / e, unrounded
    pub statistic: f64,

    /// Upper-tail p-value, rounded to 6 digits
    pub pvalue: f64,

    /// Degrees of freedom (number of cells − 1)
    pub dof: usize,
}

impl ChiSquareTest {
    /// 1 − p: confidence that observed counts depart from expectation
    ///
    /// Used as a suspiciousness value when ranking features.
    pub fn confidence(&self) -> f64 {
        1.0 - self.pvalue
    }
}

/// Upper-tail chi-square probability for `stat` at `dof` degrees of freedom
///
/// # Example
/// ```
/// use sospecha::chi_square::chisqr_p_value;
///
/// assert_eq!(chisqr_p_value(2, 1.0), (-0.5f64).exp());
/// ```
pub fn chisqr_p_value(dof: usize, stat: f64) -> f64 {
    chisqr_p_value_with(dof, stat, &SeriesConfig::default())
}

/// [`chisqr_p_value`] with an explicit series truncation rule
pub fn chisqr_p_value_with(dof: usize, stat: f64, series: &SeriesConfig) -> f64 {
    if dof < 1 || stat.is_nan() || stat < 0.0 {
        return 0.0;
    }

    let k = dof as f64 * 0.5;
    let v = stat * 0.5;

    if dof == 2 {
        return (-v).exp();
    }
    if v == 0.0 {
        return 1.0;
    }

    let log_incomplete = log_lower_incomplete_gamma(k, v, series);
    if !log_incomplete.is_finite() {
        tracing::debug!(
            dof,
            stat,
            log_incomplete,
            "incomplete gamma degenerate, flooring p-value"
        );
        return P_VALUE_FLOOR;
    }

    let ratio = (log_incomplete - log_gamma_stirling(k)).exp();
    if ratio > 1.0 {
        tracing::debug!(dof, stat, ratio, "gamma ratio above 1, flooring p-value");
        return P_VALUE_FLOOR;
    }

    1.0 - ratio
}

/// Chi-square goodness-of-fit of `observed` against `expected`
///
/// # Example
/// ```
/// use sospecha::chi_square::chisquare;
///
/// let test = chisquare(&[8.0, 7.0, 7.0], &[8.0, 8.0, 8.0]).unwrap();
/// assert_eq!(test.statistic, 0.25);
/// assert_eq!(test.pvalue, 0.882497);
/// ```
pub fn chisquare(observed: &[f64], expected: &[f64]) -> Result<ChiSquareTest> {
    chisquare_with(observed, expected, &SeriesConfig::default())
}

/// [`chisquare`] with an explicit series truncation rule
pub fn chisquare_with(
    observed: &[f64],
    expected: &[f64],
    series: &SeriesConfig,
) -> Result<ChiSquareTest> {
    ensure_same_len("chisquare", observed.len(), expected.len())?;
    if observed.is_empty() {
        return Err(MetricsError::EmptyInput("chisquare observed counts"));
    }

    let statistic: f64 = observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| (o - e) * (o - e) / e)
        .sum();
    let dof = observed.len() - 1;
    let pvalue = round6(chisqr_p_value_with(dof, statistic, series));

    Ok(ChiSquareTest {
        statistic,
        pvalue,
        dof,
    })
}

impl CoverageCounts {
    /// Counts expected if coverage were independent of the outcome
    ///
    /// Same cell order as [`CoverageCounts::as_array`].
    pub fn expected_under_independence(&self) -> [f64; 4] {
        let n = self.total();
        let fail_ratio = self.total_failing() / n;
        let success_ratio = 1.0 - fail_ratio;
        let cover = self.covered();
        let uncover = n - cover;

        [
            cover * fail_ratio,
            uncover * fail_ratio,
            cover * success_ratio,
            uncover * success_ratio,
        ]
    }

    /// Chi-square test of these counts against independence
    pub fn chi_square(&self, series: &SeriesConfig) -> Result<ChiSquareTest> {
        chisquare_with(&self.as_array(), &self.expected_under_independence(), series)
    }
}

/// Chi-square test of coverage against outcome for raw observations
pub fn coverage_chi_square(feature: &[f64], label: &[u8]) -> Result<ChiSquareTest> {
    CoverageCounts::from_observations(feature, label)?.chi_square(&SeriesConfig::default())
}
