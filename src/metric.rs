//! Single-entry dispatch over all feature-vs-label metrics

use crate::config::SeriesConfig;
use crate::correlation::{kendall, pearson, spearman};
use crate::coverage::CoverageCounts;
use crate::error::{MetricsError, Result};
use crate::mutual_information::binary_mutual_information;
use crate::score::Score;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Metric relating one feature vector to a binary outcome label
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    Pearson,
    Spearman,
    Kendall,
    Dstar,
    Ochiai,
    Barinel,
    /// 1 − p of the coverage chi-square test, `Undefined` when the statistic is not finite
    Chisq,
    /// Requires a 0/1 feature
    MutualInformation,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::Pearson,
        Metric::Spearman,
        Metric::Kendall,
        Metric::Dstar,
        Metric::Ochiai,
        Metric::Barinel,
        Metric::Chisq,
        Metric::MutualInformation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Pearson => "pearson",
            Metric::Spearman => "spearman",
            Metric::Kendall => "kendall",
            Metric::Dstar => "dstar",
            Metric::Ochiai => "ochiai",
            Metric::Barinel => "barinel",
            Metric::Chisq => "chisq",
            Metric::MutualInformation => "mutual-information",
        }
    }

    /// Score `feature` against `label`
    ///
    /// Suspiciousness metrics always come back as `Score::Value`.
    ///
    /// # Example
    /// ```
    /// use sospecha::{Metric, Score};
    ///
    /// let score = Metric::Ochiai.evaluate(&[1.0, 1.0, 0.0, 0.0], &[1, 0, 0, 0]).unwrap();
    /// assert_eq!(score, Score::Value(0.707107));
    /// ```
    pub fn evaluate(self, feature: &[f64], label: &[u8]) -> Result<Score> {
        self.evaluate_with(feature, label, &SeriesConfig::default())
    }

    /// [`Metric::evaluate`] with an explicit chi-square series rule
    pub fn evaluate_with(
        self,
        feature: &[f64],
        label: &[u8],
        series: &SeriesConfig,
    ) -> Result<Score> {
        match self {
            Metric::Pearson => pearson(feature, &label_as_f64(label)),
            Metric::Spearman => spearman(feature, &label_as_f64(label)),
            Metric::Kendall => kendall(feature, &label_as_f64(label)),
            Metric::Dstar => counts(feature, label).map(|c| Score::Value(c.dstar())),
            Metric::Ochiai => counts(feature, label).map(|c| Score::Value(c.ochiai())),
            Metric::Barinel => counts(feature, label).map(|c| Score::Value(c.barinel())),
            Metric::Chisq => {
                let test = counts(feature, label)?.chi_square(series)?;
                // 0/0 cells (feature covered everywhere, or a one-class label)
                if !test.statistic.is_finite() {
                    tracing::trace!(
                        statistic = test.statistic,
                        "chisq undefined: degenerate table"
                    );
                    return Ok(Score::Undefined);
                }
                Ok(Score::rounded(test.confidence()))
            }
            Metric::MutualInformation => {
                let sample = feature_as_binary(feature)?;
                binary_mutual_information(label, &sample).map(Score::Value)
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn counts(feature: &[f64], label: &[u8]) -> Result<CoverageCounts> {
    CoverageCounts::from_observations(feature, label)
}

fn label_as_f64(label: &[u8]) -> Vec<f64> {
    label.iter().map(|&l| f64::from(l)).collect()
}

fn feature_as_binary(feature: &[f64]) -> Result<Vec<u8>> {
    feature
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value == 0.0 {
                Ok(0)
            } else if value == 1.0 {
                Ok(1)
            } else {
                Err(MetricsError::NonBinary {
                    what: "feature",
                    index,
                    value,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEATURE: [f64; 6] = [1.0, 1.0, 1.0, 0.0, 1.0, 0.0];
    const LABEL: [u8; 6] = [1, 1, 0, 0, 0, 0];

    #[test]
    fn test_every_metric_evaluates() {
        for metric in Metric::ALL {
            let score = metric.evaluate(&FEATURE, &LABEL).unwrap();
            assert!(!score.is_undefined(), "{} undefined", metric);
        }
    }

    #[test]
    fn test_suspiciousness_dispatch_matches_counts() {
        let counts = CoverageCounts::from_observations(&FEATURE, &LABEL).unwrap();
        assert_eq!(
            Metric::Dstar.evaluate(&FEATURE, &LABEL).unwrap(),
            Score::Value(counts.dstar())
        );
        assert_eq!(
            Metric::Barinel.evaluate(&FEATURE, &LABEL).unwrap(),
            Score::Value(counts.barinel())
        );
    }

    #[test]
    fn test_suspiciousness_never_undefined() {
        let label = [0, 0, 0];
        let feature = [0.0, 0.0, 0.0];
        for metric in [Metric::Dstar, Metric::Ochiai, Metric::Barinel] {
            assert_eq!(metric.evaluate(&feature, &label).unwrap(), Score::Value(0.0));
        }
    }

    #[test]
    fn test_correlation_constant_label_undefined() {
        let label = [1, 1, 1];
        let feature = [0.0, 1.0, 0.5];
        assert!(Metric::Pearson.evaluate(&feature, &label).unwrap().is_undefined());
    }

    #[test]
    fn test_chisq_undefined_for_feature_covered_everywhere() {
        let label = [1, 0, 0, 0, 0, 0];
        let everywhere = [1.0; 6];
        assert_eq!(
            Metric::Chisq.evaluate(&everywhere, &label).unwrap(),
            Score::Undefined
        );

        // stat = 6 at dof 3 -> p ≈ 0.112
        let predictor = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let score = Metric::Chisq.evaluate(&predictor, &label).unwrap().to_f64();
        assert!(score > 0.85 && score < 0.95, "score = {}", score);
    }

    #[test]
    fn test_chisq_undefined_for_one_class_label() {
        let feature = [1.0, 0.0, 1.0];
        assert!(Metric::Chisq.evaluate(&feature, &[0, 0, 0]).unwrap().is_undefined());
        assert!(Metric::Chisq.evaluate(&feature, &[1, 1, 1]).unwrap().is_undefined());
    }

    #[test]
    fn test_mutual_information_requires_binary_feature() {
        let err = Metric::MutualInformation
            .evaluate(&[0.0, 0.5], &[0, 1])
            .unwrap_err();
        assert!(matches!(
            err,
            MetricsError::NonBinary {
                what: "feature",
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_names_round_trip_through_clap() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_str(metric.name(), false).unwrap(), metric);
        }
    }
}
