// Pearson and Spearman correlation
//
// Both share one kernel: sample covariance (n - 1 denominator) divided by the
// product of sample standard deviations. Spearman feeds it mid-ranks.

use crate::error::{ensure_same_len, Result};
use crate::rank::rank;
use crate::score::Score;

/// Below this |std(X)·std(Y)| a series is treated as constant
pub const DEGENERATE_EPSILON: f64 = 1e-5;

/// Pearson product-moment correlation of `x` and `y`
///
/// Returns `Score::Undefined` for fewer than two observations or when either
/// series is (numerically) constant.
///
/// # Example
/// ```
/// use sospecha::correlation::pearson;
/// use sospecha::Score;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(pearson(&x, &x).unwrap(), Score::Value(1.0));
/// ```
pub fn pearson(x: &[f64], y: &[f64]) -> Result<Score> {
    ensure_same_len("pearson", x.len(), y.len())?;
    Ok(moment_correlation(x, y))
}

/// Spearman rank correlation: Pearson over mid-ranks of both inputs
pub fn spearman(x: &[f64], y: &[f64]) -> Result<Score> {
    ensure_same_len("spearman", x.len(), y.len())?;
    Ok(moment_correlation(&rank(x), &rank(y)))
}

fn moment_correlation(x: &[f64], y: &[f64]) -> Score {
    let n = x.len();
    if n < 2 {
        tracing::trace!(n, "correlation undefined: fewer than two observations");
        return Score::Undefined;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let (cov, var_x, var_y) = x
        .iter()
        .zip(y)
        .fold((0.0, 0.0, 0.0), |(cov, vx, vy), (&xi, &yi)| {
            let dx = xi - mean_x;
            let dy = yi - mean_y;
            (cov + dx * dy, vx + dx * dx, vy + dy * dy)
        });

    let ddof = (n - 1) as f64;
    let cov = cov / ddof;
    let std_product = (var_x / ddof).sqrt() * (var_y / ddof).sqrt();

    if std_product.abs() < DEGENERATE_EPSILON {
        tracing::trace!(std_product, "correlation undefined: degenerate series");
        return Score::Undefined;
    }

    Score::rounded(cov / std_product)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_perfect_positive() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert_eq!(pearson(&x, &y).unwrap(), Score::Value(1.0));
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [10.0, 8.0, 6.0, 4.0, 2.0];
        assert_eq!(pearson(&x, &y).unwrap(), Score::Value(-1.0));
    }

    #[test]
    fn test_pearson_known_value() {
        // Σdx·dy = 4, Σdx² = Σdy² = 5 -> r = 0.8
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 3.0, 2.0, 4.0];
        assert_eq!(pearson(&x, &y).unwrap(), Score::Value(0.8));
    }

    #[test]
    fn test_pearson_constant_series_undefined() {
        let x = [3.0, 3.0, 3.0];
        let y = [1.0, 2.0, 3.0];
        assert_eq!(pearson(&x, &y).unwrap(), Score::Undefined);
    }

    #[test]
    fn test_pearson_single_observation_undefined() {
        assert_eq!(pearson(&[1.0], &[2.0]).unwrap(), Score::Undefined);
        assert_eq!(pearson(&[], &[]).unwrap(), Score::Undefined);
    }

    #[test]
    fn test_pearson_length_mismatch() {
        assert!(pearson(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn test_spearman_uses_ranks() {
        // monotone but non-linear
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 4.0, 9.0, 16.0, 100.0];
        assert_eq!(spearman(&x, &y).unwrap(), Score::Value(1.0));
        assert_ne!(pearson(&x, &y).unwrap(), Score::Value(1.0));
    }

    #[test]
    fn test_spearman_length_mismatch() {
        assert!(spearman(&[1.0], &[1.0, 2.0]).is_err());
    }
}
