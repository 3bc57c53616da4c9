use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use derivatives::{Estimator, EstimatorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Backward finite-difference derivative estimates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Input {
    /// Sample points as JSON, e.g. '[[0.0, 0.0], [2.0, 4.0]]'
    #[arg(long)]
    points: String,
    /// Estimator configuration (.toml, .yaml or .yml)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Input {
    fn load(&self) -> Result<(Estimator, Vec<[f64; 2]>)> {
        let cfg = match &self.config {
            Some(path) => EstimatorConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => EstimatorConfig::default(),
        };
        let points: Vec<[f64; 2]> =
            serde_json::from_str(&self.points).context("points must be a JSON array of [x, f] pairs")?;
        Ok((Estimator::new(cfg), points))
    }
}

#[derive(Subcommand)]
enum Command {
    /// Estimate df/dx from two points
    First(Input),
    /// Estimate d²f/dx² from three points
    Second(Input),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let value = match cli.command {
        Command::First(input) => {
            let (estimator, points) = input.load()?;
            estimator.first(&points)?
        }
        Command::Second(input) => {
            let (estimator, points) = input.load()?;
            estimator.second(&points)?
        }
    };
    println!("{}", value);
    Ok(())
}
