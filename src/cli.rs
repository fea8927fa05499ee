//! CLI argument parsing for sospecha

use crate::metric::Metric;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for metric results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "sospecha")]
#[command(version)]
#[command(about = "Correlation and suspiciousness metrics for pass/fail coverage", long_about = None)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Engine configuration file (TOML)
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug tracing on stderr
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score one feature vector against a pass/fail label
    Score {
        /// Metric to compute
        #[arg(short, long, value_enum)]
        metric: Metric,

        /// JSON file with "feature" and "label" arrays
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },

    /// Chi-square goodness-of-fit of observed against expected counts
    Chisquare {
        /// Observed counts, comma separated
        #[arg(long, value_delimiter = ',', required = true, num_args = 1..)]
        observed: Vec<f64>,

        /// Expected counts, comma separated
        #[arg(long, value_delimiter = ',', required = true, num_args = 1..)]
        expected: Vec<f64>,
    },

    /// Fisher score of every column of a feature matrix
    Fisher {
        /// JSON file with "samples" (rows) and "label" arrays
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
}
