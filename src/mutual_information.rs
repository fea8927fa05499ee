//! Plug-in mutual information between two binary sequences
//!
//! I(X; Y) = Σ p(x,y) · ln(p(x,y) / (p(x)·p(y))) over joint outcomes that
//! actually occur. Unobserved outcomes contribute nothing. Result in nats.

use crate::error::{ensure_binary, ensure_same_len, Result};
use crate::score::round6;

/// Mutual information of `label` and `sample`, symmetric in its arguments
///
/// # Example
/// ```
/// use sospecha::mutual_information::binary_mutual_information;
///
/// let mi = binary_mutual_information(&[0, 1, 0], &[1, 0, 1]).unwrap();
/// assert_eq!(mi, 0.636514);
/// ```
pub fn binary_mutual_information(label: &[u8], sample: &[u8]) -> Result<f64> {
    ensure_same_len("mutual information", label.len(), sample.len())?;
    ensure_binary("label", label)?;
    ensure_binary("sample", sample)?;

    let n = label.len() as f64;
    let px = marginal(label, n);
    let py = marginal(sample, n);

    let mut joint = [[0u64; 2]; 2];
    for (&x, &y) in label.iter().zip(sample) {
        joint[usize::from(x)][usize::from(y)] += 1;
    }

    let mut score = 0.0;
    for (x, row) in joint.iter().enumerate() {
        for (y, &count) in row.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let pxy = count as f64 / n;
            score += pxy * (pxy / (px[x] * py[y])).ln();
        }
    }

    Ok(round6(score))
}

/// `[p(0), p(1)]`, with p(0) taken as (n − ones)/n rather than a zero count
fn marginal(values: &[u8], n: f64) -> [f64; 2] {
    let ones = values.iter().filter(|&&v| v == 1).count() as f64;
    [(n - ones) / n, ones / n]
}
