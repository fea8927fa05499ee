// Kendall tau-b with tie correction
//
// Instead of the O(N²) pairwise sign sum:
//   1. sort by y and compress y into group ids
//   2. stable-sort by x (y-group order survives inside x ties), compress x
//   3. discordant pairs = inversions of the y-groups in x order
//   4. tie terms: xtie, ytie, and ntie (pairs tied in both)
//
//   tot = con + dis + xtie + ytie - ntie
//   tau = (tot - xtie - ytie + ntie - 2·dis) / sqrt(tot - xtie) / sqrt(tot - ytie)

use crate::error::{ensure_same_len, Result};
use crate::inversions::count_inversions;
use crate::rank::{dense_groups, tied_pairs};
use crate::score::Score;

/// Kendall's tau-b between `x` and `y`
///
/// `Score::Undefined` when either series is constant (no untied pairs).
///
/// # Example
/// ```
/// use sospecha::correlation::kendall;
/// use sospecha::Score;
///
/// let tau = kendall(&[1.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 2.0, 3.0]).unwrap();
/// assert_eq!(tau, Score::Value(0.8));
/// ```
pub fn kendall(x: &[f64], y: &[f64]) -> Result<Score> {
    ensure_same_len("kendall", x.len(), y.len())?;
    let n = x.len() as u64;

    let mut pairs: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
    pairs.sort_by(|a, b| a.1.total_cmp(&b.1));
    let y_sorted: Vec<f64> = pairs.iter().map(|p| p.1).collect();
    let y_groups = dense_groups(&y_sorted);

    let mut grouped: Vec<(f64, usize)> = pairs
        .iter()
        .zip(&y_groups)
        .map(|(&(xi, _), &g)| (xi, g))
        .collect();
    // sort_by is stable: equal x keep ascending y-group order
    grouped.sort_by(|a, b| a.0.total_cmp(&b.0));

    let x_sorted: Vec<f64> = grouped.iter().map(|p| p.0).collect();
    let x_groups = dense_groups(&x_sorted);
    let y_groups: Vec<usize> = grouped.iter().map(|p| p.1).collect();

    let dis = count_inversions(&y_groups);
    let ntie = joint_tied_pairs(&x_groups, &y_groups);
    let xtie = tied_pairs(&x_groups);
    let ytie = tied_pairs(&y_groups);
    let tot = n * n.saturating_sub(1) / 2;

    let x_untied = tot as i64 - xtie as i64;
    let y_untied = tot as i64 - ytie as i64;
    if x_untied <= 0 || y_untied <= 0 {
        tracing::trace!(tot, xtie, ytie, "kendall undefined: constant series");
        return Ok(Score::Undefined);
    }

    let con_minus_dis = tot as i64 - xtie as i64 - ytie as i64 + ntie as i64 - 2 * dis as i64;
    let tau = con_minus_dis as f64 / (x_untied as f64).sqrt() / (y_untied as f64).sqrt();
    Ok(Score::rounded(tau))
}

/// Σ C(run, 2) over runs of consecutive positions equal in both group ids
fn joint_tied_pairs(x_groups: &[usize], y_groups: &[usize]) -> u64 {
    let mut total = 0u64;
    let mut run = 0u64;
    for i in 0..x_groups.len() {
        if i > 0 && x_groups[i] == x_groups[i - 1] && y_groups[i] == y_groups[i - 1] {
            run += 1;
        } else {
            total += run * run.saturating_sub(1) / 2;
            run = 1;
        }
    }
    total + run * run.saturating_sub(1) / 2
}
