// Log-domain gamma approximations for chi-square p-values
//
// Lower incomplete gamma via its power series:
//   γ(s, z) = z^s · e^{-z} · Σ_{k≥0} z^k / (s(s+1)…(s+k))
// Each term is formed as exp(Σ log z − Σ log(s+i)) so large z^k and large
// rising factorials never materialize.
//
// Complete gamma via a Stirling-type closed form with a single
// 1/(12n − 1/(10n)) correction, taken in logs so it cannot overflow.

use crate::config::SeriesConfig;
use std::f64::consts::{E, TAU};

/// ln γ(s, z) by the truncated power series
///
/// Returns 0.0 for negative `z`. May return ±∞ or NaN for degenerate
/// inputs (z = 0, z = ∞, or terms overflowing); callers guard on that.
pub fn log_lower_incomplete_gamma(s: f64, z: f64, series: &SeriesConfig) -> f64 {
    if z < 0.0 {
        return 0.0;
    }
    let scale = z.ln() * s - z - s.ln();
    series_sum(s, z, series).ln() + scale
}

/// Σ_{k=0}^{M} z^k / ((s+1)…(s+k)), with the k = 0 term equal to 1
fn series_sum(s: f64, z: f64, series: &SeriesConfig) -> f64 {
    let log_z = z.ln();
    let mut sum = 1.0;
    let mut log_nom = 0.0;
    let mut log_denom = 0.0;
    let mut shifted = s;

    for _ in 0..series.max_terms {
        log_nom += log_z;
        shifted += 1.0;
        log_denom += shifted.ln();
        let term = (log_nom - log_denom).exp();
        sum += term;

        if let Some(tol) = series.tolerance {
            if term < tol * sum {
                break;
            }
        }
    }

    sum
}

/// ln Γ(n) by Stirling's approximation
///
/// Γ(n) ≈ ((n + 1/(12n − 1/(10n))) / e)^n · sqrt(2π / n)
pub fn log_gamma_stirling(n: f64) -> f64 {
    let correction = 1.0 / (12.0 * n - 1.0 / (10.0 * n));
    n * ((correction + n) / E).ln() + 0.5 * (TAU / n).ln()
}
