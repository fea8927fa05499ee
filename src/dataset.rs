//! JSON input documents for the `sospecha` binary
//!
//! ```json
//! { "feature": [1, 0, 1, 1], "label": [1, 1, 0, 0] }
//! { "samples": [[1, 2], [0, 4]], "label": [1, 0] }
//! ```

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One feature vector with its aligned outcome label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observations {
    pub feature: Vec<f64>,
    pub label: Vec<u8>,
}

/// Row-major feature matrix (one row per observation) with its label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    pub samples: Vec<Vec<f64>>,
    pub label: Vec<u8>,
}

impl Observations {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_json(path.as_ref())
    }
}

impl FeatureMatrix {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_json(path.as_ref())
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON input: {}", path.display()))
}
