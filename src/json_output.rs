//! Result records printed by the `sospecha` binary
//!
//! Each record renders either as one JSON object or as plain text lines.

use crate::chi_square::ChiSquareTest;
use crate::metric::Metric;
use crate::score::{round6, Score};
use serde::Serialize;

/// One metric evaluated on one feature vector
#[derive(Debug, Clone, Serialize)]
pub struct JsonScore {
    pub metric: Metric,
    /// `null` when undefined
    pub score: Score,
    pub observations: usize,
}

/// Goodness-of-fit result
#[derive(Debug, Clone, Serialize)]
pub struct JsonChiSquare {
    #[serde(flatten)]
    pub test: ChiSquareTest,
    pub confidence: f64,
}

impl From<ChiSquareTest> for JsonChiSquare {
    fn from(test: ChiSquareTest) -> Self {
        Self {
            confidence: round6(test.confidence()),
            test,
        }
    }
}

/// Fisher scores, one per column
#[derive(Debug, Clone, Serialize)]
pub struct JsonFisher {
    pub columns: usize,
    pub scores: Vec<Score>,
}

impl JsonScore {
    pub fn to_text(&self) -> String {
        format!("{}: {}", self.metric, self.score)
    }
}

impl JsonChiSquare {
    pub fn to_text(&self) -> String {
        format!(
            "statistic: {}\np-value: {}\ndof: {}",
            self.test.statistic, self.test.pvalue, self.test.dof
        )
    }
}

impl JsonFisher {
    pub fn to_text(&self) -> String {
        self.scores
            .iter()
            .enumerate()
            .map(|(col, score)| format!("column {}: {}", col, score))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
