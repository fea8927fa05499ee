// Engine configuration
//
// The only tunable numeric behavior is how the incomplete-gamma power series
// is truncated. The default reproduces the fixed 1000-term evaluation exactly;
// a convergence-based stop is available as an explicit opt-in.

use crate::error::{MetricsError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Hard cap on series terms for the converging preset
pub const CONVERGING_MAX_TERMS: usize = 10_000;

/// Truncation rule for the incomplete-gamma power series
///
/// # Example
/// ```
/// use sospecha::config::SeriesConfig;
///
/// let config = SeriesConfig::default();
/// assert_eq!(config.max_terms, 1000);
/// assert!(config.tolerance.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Number of series terms summed after the leading 1
    ///
    /// With no `tolerance`, exactly this many terms are always evaluated.
    pub max_terms: usize,

    /// Stop early once a term drops below `tolerance * running_sum`
    ///
    /// `None` (default): fixed-length evaluation.
    pub tolerance: Option<f64>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            max_terms: 1000,
            tolerance: None,
        }
    }
}

impl SeriesConfig {
    /// Convergence-based truncation
    ///
    /// Stops once the remaining terms no longer move the sum, which for small
    /// statistics is far fewer than 1000. Results can differ from the default
    /// in the last bits, so it is never selected implicitly.
    pub fn converging(tolerance: f64) -> Self {
        Self {
            max_terms: CONVERGING_MAX_TERMS,
            tolerance: Some(tolerance),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_terms == 0 {
            return Err(MetricsError::InvalidConfig(
                "series.max_terms must be >= 1".to_string(),
            ));
        }

        if let Some(tol) = self.tolerance {
            if !tol.is_finite() || tol <= 0.0 {
                return Err(MetricsError::InvalidConfig(format!(
                    "series.tolerance must be a positive finite number, got {}",
                    tol
                )));
            }
        }

        Ok(())
    }
}

/// Top-level engine configuration
///
/// # Example TOML
/// ```toml
/// [series]
/// max_terms = 5000
/// tolerance = 1e-15
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub series: SeriesConfig,
}

impl EngineConfig {
    /// Load and validate a TOML configuration file
    pub fn from_toml<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: EngineConfig =
            toml::from_str(content).context("Failed to parse TOML engine configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.series.validate()
    }
}
