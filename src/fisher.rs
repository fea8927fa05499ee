//! Fisher score for two-class feature separability
//!
//! Per column: between-class scatter over within-class scatter,
//!
//!   SB = (n0/N)(μ0 − μ)² + (n1/N)(μ1 − μ)²
//!   SW = (SW0 + SW1) / N
//!
//! where SWc is the sum of squared deviations from the class mean.

use crate::error::{ensure_binary, ensure_same_len, MetricsError, Result};
use crate::score::Score;

/// Fisher score of every column of `samples` (N rows × M columns)
///
/// One score per column, in column order. A column with zero within-class
/// scatter, or with an empty class, scores `Undefined`.
///
/// # Example
/// ```
/// use sospecha::fisher::fisher_score;
/// use sospecha::Score;
///
/// let samples = vec![vec![1.0, 2.0, 3.0], vec![1.0, 0.0, 1.0], vec![1.0, 5.0, 6.0]];
/// let scores = fisher_score(&samples, &[1, 0, 1]).unwrap();
/// assert_eq!(scores, vec![Score::Undefined, Score::Value(1.814815), Score::Value(1.814815)]);
/// ```
pub fn fisher_score(samples: &[Vec<f64>], label: &[u8]) -> Result<Vec<Score>> {
    ensure_same_len("fisher score", label.len(), samples.len())?;
    ensure_binary("label", label)?;

    let width = samples.first().map_or(0, Vec::len);
    if let Some((row, r)) = samples.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(MetricsError::RaggedMatrix {
            row,
            expected: width,
            actual: r.len(),
        });
    }

    let scores = (0..width)
        .map(|col| {
            let column: Vec<f64> = samples.iter().map(|row| row[col]).collect();
            column_score(&column, label)
        })
        .collect();

    Ok(scores)
}

fn column_score(column: &[f64], label: &[u8]) -> Score {
    let n = column.len() as f64;
    let class0: Vec<f64> = select(column, label, 0);
    let class1: Vec<f64> = select(column, label, 1);

    let mean_all = mean(column);
    let mean0 = mean(&class0);
    let mean1 = mean(&class1);

    let between = class0.len() as f64 / n * (mean0 - mean_all).powi(2)
        + class1.len() as f64 / n * (mean1 - mean_all).powi(2);
    let within = (scatter(&class0, mean0) + scatter(&class1, mean1)) / n;

    if within == 0.0 {
        tracing::trace!(between, "fisher score undefined: zero within-class scatter");
        return Score::Undefined;
    }

    Score::rounded(between / within)
}

fn select(column: &[f64], label: &[u8], class: u8) -> Vec<f64> {
    column
        .iter()
        .zip(label)
        .filter(|(_, &l)| l == class)
        .map(|(&v, _)| v)
        .collect()
}

/// NaN for an empty slice
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn scatter(values: &[f64], center: f64) -> f64 {
    values.iter().map(|v| (v - center).powi(2)).sum()
}
