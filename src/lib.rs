//! Sospecha - correlation and suspiciousness metrics for fault localization
//!
//! Relates a feature vector (e.g. per-test coverage of a program element) to a
//! binary pass/fail label over the same N observations. Every entry point is
//! a pure, stateless function of its inputs.
//!
//! - Correlation: Pearson, Spearman, Kendall tau-b
//! - Suspiciousness: Dstar, Ochiai, Barinel over coverage counts
//! - Chi-square goodness of fit with a self-contained gamma approximation
//! - Fisher score and binary mutual information

pub mod chi_square;
pub mod cli;
pub mod config;
pub mod correlation;
pub mod coverage;
pub mod dataset;
pub mod error;
pub mod fisher;
pub mod inversions;
pub mod json_output;
pub mod metric;
pub mod mutual_information;
pub mod rank;
pub mod score;
pub mod suspiciousness;

pub use coverage::CoverageCounts;
pub use error::{MetricsError, Result};
pub use metric::Metric;
pub use score::Score;
