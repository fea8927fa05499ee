//! Error taxonomy for the metrics engine
//!
//! Only shape and domain violations are errors. Degenerate denominators are
//! ordinary results (`Score::Undefined` or a fail-soft 0.0) and never show up here.

use thiserror::Error;

/// Errors raised by metric entry points
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Shape mismatch in {what}: expected length {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Non-binary value in {what} at index {index}: {value} (expected 0 or 1)")]
    NonBinary {
        what: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Ragged feature matrix: row {row} has {actual} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MetricsError>;

/// Fail with `ShapeMismatch` unless both lengths agree
pub(crate) fn ensure_same_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(MetricsError::ShapeMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Fail with `NonBinary` on the first value outside {0, 1}
pub(crate) fn ensure_binary(what: &'static str, values: &[u8]) -> Result<()> {
    match values.iter().position(|&v| v > 1) {
        Some(index) => Err(MetricsError::NonBinary {
            what,
            index,
            value: f64::from(values[index]),
        }),
        None => Ok(()),
    }
}
