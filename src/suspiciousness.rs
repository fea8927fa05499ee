//! Spectrum-based suspiciousness scores: Dstar (star = 2), Ochiai, Barinel
//!
//! Unlike the correlation functions these never report `Undefined`: a zero
//! denominator, a negative square-root argument, or any other non-finite
//! intermediate scores 0.0, so such features rank low instead of dropping out.

use crate::coverage::CoverageCounts;
use crate::error::Result;
use crate::score::round6;

impl CoverageCounts {
    /// Dstar: Ncf² / (Ncs + Nuf)
    pub fn dstar(&self) -> f64 {
        fail_soft("dstar", self.ncf * self.ncf, self.ncs + self.nuf)
    }

    /// Ochiai: Ncf / sqrt((Ncf + Nuf)·(Ncf + Ncs))
    pub fn ochiai(&self) -> f64 {
        let denominator = (self.total_failing() * self.covered()).sqrt();
        fail_soft("ochiai", self.ncf, denominator)
    }

    /// Barinel: 1 − Ncs / (Ncs + Ncf)
    pub fn barinel(&self) -> f64 {
        let ratio = fail_soft_ratio(self.ncs, self.ncs + self.ncf);
        match ratio {
            Some(r) => round6(1.0 - r),
            None => {
                tracing::debug!(counts = ?self, "barinel failed soft to 0.0");
                0.0
            }
        }
    }
}

/// Dstar over raw observations
///
/// # Example
/// ```
/// use sospecha::suspiciousness::dstar;
///
/// // covered by both failing tests and one of two passing tests
/// let score = dstar(&[1.0, 1.0, 1.0, 0.0], &[1, 1, 0, 0]).unwrap();
/// assert_eq!(score, 4.0);
/// ```
pub fn dstar(feature: &[f64], label: &[u8]) -> Result<f64> {
    Ok(CoverageCounts::from_observations(feature, label)?.dstar())
}

/// Ochiai over raw observations
pub fn ochiai(feature: &[f64], label: &[u8]) -> Result<f64> {
    Ok(CoverageCounts::from_observations(feature, label)?.ochiai())
}

/// Barinel over raw observations
pub fn barinel(feature: &[f64], label: &[u8]) -> Result<f64> {
    Ok(CoverageCounts::from_observations(feature, label)?.barinel())
}

fn fail_soft(metric: &'static str, numerator: f64, denominator: f64) -> f64 {
    match fail_soft_ratio(numerator, denominator) {
        Some(ratio) => round6(ratio),
        None => {
            tracing::debug!(metric, numerator, denominator, "failed soft to 0.0");
            0.0
        }
    }
}

fn fail_soft_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 || denominator.is_nan() {
        return None;
    }
    let ratio = numerator / denominator;
    ratio.is_finite().then_some(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(ncf: f64, nuf: f64, ncs: f64, nus: f64) -> CoverageCounts {
        CoverageCounts { ncf, nuf, ncs, nus }
    }

    #[test]
    fn test_dstar() {
        // 3² / (1 + 1)
        assert_eq!(counts(3.0, 1.0, 1.0, 5.0).dstar(), 4.5);
    }

    #[test]
    fn test_ochiai() {
        // 2 / sqrt(4 · 3)
        let expected = round6(2.0 / 12f64.sqrt());
        assert_eq!(counts(2.0, 2.0, 1.0, 5.0).ochiai(), expected);
    }

    #[test]
    fn test_barinel() {
        // 1 − 1/4
        assert_eq!(counts(3.0, 0.0, 1.0, 2.0).barinel(), 0.75);
    }

    #[test]
    fn test_all_zero_counts_fail_soft() {
        let zero = CoverageCounts::default();
        assert_eq!(zero.dstar(), 0.0);
        assert_eq!(zero.ochiai(), 0.0);
        assert_eq!(zero.barinel(), 0.0);
    }

    #[test]
    fn test_dstar_zero_denominator_is_zero_not_infinite() {
        // covered by every failing test and no passing test
        assert_eq!(counts(2.0, 0.0, 0.0, 3.0).dstar(), 0.0);
    }

    #[test]
    fn test_ochiai_negative_sqrt_argument_fails_soft() {
        // weighted inputs can push a count negative
        assert_eq!(counts(1.0, -2.0, 0.5, 0.0).ochiai(), 0.0);
    }

    #[test]
    fn test_raw_observation_wrappers() {
        let feature = [1.0, 0.0, 1.0, 1.0, 0.0];
        let label = [1, 1, 0, 0, 0];
        // ncf = 1, nuf = 1, ncs = 2, nus = 1
        assert_eq!(dstar(&feature, &label).unwrap(), round6(1.0 / 3.0));
        assert_eq!(
            ochiai(&feature, &label).unwrap(),
            round6(1.0 / (2.0f64 * 3.0).sqrt())
        );
        assert_eq!(barinel(&feature, &label).unwrap(), round6(1.0 - 2.0 / 3.0));
    }

    #[test]
    fn test_raw_observation_shape_mismatch() {
        assert!(dstar(&[1.0], &[1, 0]).is_err());
        assert!(ochiai(&[1.0], &[1, 0]).is_err());
        assert!(barinel(&[1.0], &[1, 0]).is_err());
    }
}
