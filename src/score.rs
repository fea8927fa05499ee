//! Tagged metric results
//!
//! Correlation and Fisher paths report a degenerate denominator as
//! [`Score::Undefined`], distinct from any numeric value. Suspiciousness
//! scorers never produce `Undefined`; they fail soft to `0.0` instead.

use serde::{Serialize, Serializer};
use std::fmt;

/// Decimal digits kept on every final scalar
pub const PRECISION: i32 = 6;

/// Round to [`PRECISION`] decimal digits
pub fn round6(value: f64) -> f64 {
    let scale = 10f64.powi(PRECISION);
    (value * scale).round() / scale
}

/// A single metric result
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    /// Rounded numeric result (not clamped to any range)
    Value(f64),
    /// Mathematically undefined, e.g. constant series or 0/0
    Undefined,
}

impl Score {
    /// Round a raw result, mapping NaN to `Undefined`
    pub fn rounded(raw: f64) -> Self {
        if raw.is_nan() {
            Score::Undefined
        } else {
            Score::Value(round6(raw))
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Score::Value(v) => Some(v),
            Score::Undefined => None,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Score::Undefined)
    }

    /// Numeric view with `Undefined` as NaN
    pub fn to_f64(self) -> f64 {
        self.value().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Value(v) => write!(f, "{}", v),
            Score::Undefined => write!(f, "nan"),
        }
    }
}

// JSON has no NaN, so `Undefined` serializes as null.
impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Score::Value(v) => serializer.serialize_f64(*v),
            Score::Undefined => serializer.serialize_none(),
        }
    }
}
