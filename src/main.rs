use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use sospecha::chi_square::chisquare_with;
use sospecha::cli::{Cli, Command, OutputFormat};
use sospecha::config::EngineConfig;
use sospecha::dataset::{FeatureMatrix, Observations};
use sospecha::fisher::fisher_score;
use sospecha::json_output::{JsonChiSquare, JsonFisher, JsonScore};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn emit<T: Serialize>(format: OutputFormat, record: &T, text: String) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = match &args.config {
        Some(path) => EngineConfig::from_toml(path)?,
        None => EngineConfig::default(),
    };
    tracing::debug!(?config, "engine configuration");

    match args.command {
        Command::Score { metric, input } => {
            let obs = Observations::from_json_file(&input)?;
            let score = metric
                .evaluate_with(&obs.feature, &obs.label, &config.series)
                .with_context(|| format!("Failed to compute {} for {}", metric, input.display()))?;
            let record = JsonScore {
                metric,
                score,
                observations: obs.label.len(),
            };
            emit(args.format, &record, record.to_text())?;
        }
        Command::Chisquare { observed, expected } => {
            let test = chisquare_with(&observed, &expected, &config.series)
                .context("Failed to run chi-square test")?;
            let record = JsonChiSquare::from(test);
            emit(args.format, &record, record.to_text())?;
        }
        Command::Fisher { input } => {
            let matrix = FeatureMatrix::from_json_file(&input)?;
            let scores = fisher_score(&matrix.samples, &matrix.label).with_context(|| {
                format!("Failed to compute Fisher scores for {}", input.display())
            })?;
            let record = JsonFisher {
                columns: scores.len(),
                scores,
            };
            emit(args.format, &record, record.to_text())?;
        }
    }

    Ok(())
}
