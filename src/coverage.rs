//! Coverage counts for a (feature, label) pair
//!
//! c = covered, u = uncovered, f = failing (label 1), s = succeeding (label 0).
//! Features are summed rather than counted, so weighted coverage inputs carry
//! fractional weight into the counts.

use crate::error::{ensure_binary, ensure_same_len, Result};
use serde::Serialize;

/// Aggregate co-occurrence counts between a feature and a binary label
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CoverageCounts {
    /// Covered and failing
    pub ncf: f64,
    /// Uncovered and failing
    pub nuf: f64,
    /// Covered and passing
    pub ncs: f64,
    /// Uncovered and passing
    pub nus: f64,
}

impl CoverageCounts {
    /// Reduce a feature vector and its aligned label to four counts
    ///
    /// # Example
    /// ```
    /// use sospecha::coverage::CoverageCounts;
    ///
    /// let counts = CoverageCounts::from_observations(&[1.0, 0.0, 1.0, 0.0], &[1, 1, 0, 0]).unwrap();
    /// assert_eq!((counts.ncf, counts.nuf, counts.ncs, counts.nus), (1.0, 1.0, 1.0, 1.0));
    /// ```
    pub fn from_observations(feature: &[f64], label: &[u8]) -> Result<Self> {
        ensure_same_len("coverage counts", label.len(), feature.len())?;
        ensure_binary("label", label)?;

        let mut counts = Self::default();
        let (mut failing, mut passing) = (0.0, 0.0);
        for (&weight, &outcome) in feature.iter().zip(label) {
            if outcome == 1 {
                counts.ncf += weight;
                failing += 1.0;
            } else {
                counts.ncs += weight;
                passing += 1.0;
            }
        }
        counts.nuf = failing - counts.ncf;
        counts.nus = passing - counts.ncs;

        Ok(counts)
    }

    /// Ncf + Nuf
    pub fn total_failing(&self) -> f64 {
        self.ncf + self.nuf
    }

    /// Ncs + Nus
    pub fn total_passing(&self) -> f64 {
        self.ncs + self.nus
    }

    /// Total covered weight, Ncf + Ncs
    pub fn covered(&self) -> f64 {
        self.ncf + self.ncs
    }

    /// Number of observations the counts were built from
    pub fn total(&self) -> f64 {
        self.total_failing() + self.total_passing()
    }

    /// `[Ncf, Nuf, Ncs, Nus]`
    pub fn as_array(&self) -> [f64; 4] {
        [self.ncf, self.nuf, self.ncs, self.nus]
    }
}
