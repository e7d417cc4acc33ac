use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use logit::{train, CostVisualizer, SvgCostChart, TrainingConfig};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Fit a binary logistic-regression classifier with batch gradient descent.
#[derive(Parser)]
#[command(name = "logit", version, about, long_about = None)]
struct Cli {
    /// Comma-delimited file: feature1,feature2,label per line, no header
    path: PathBuf,

    /// Gradient-descent learning rate
    #[arg(short = 'a', long, default_value_t = 0.01)]
    learning_rate: f64,

    /// Number of gradient-descent iterations
    #[arg(short, long, default_value_t = 1000)]
    iterations: usize,

    /// Standardize features before fitting
    #[arg(short, long)]
    standardize: bool,

    /// Write the cost curve to this SVG file
    #[arg(short, long)]
    plot: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let config = TrainingConfig {
        learning_rate: cli.learning_rate,
        iterations: cli.iterations,
        standardize: cli.standardize,
    };

    let report = train(&cli.path, &config)
        .with_context(|| format!("training on {} failed", cli.path.display()))?;

    println!("initial cost: {}", report.initial_cost);
    println!("theta: {:?}", report.theta.as_slice());
    println!("final cost: {}", report.final_cost);
    println!("training accuracy: {:.2}%", report.accuracy * 100.0);

    if let Some(path) = cli.plot {
        let chart = SvgCostChart::new(&path);
        chart
            .render(&report.costs, config.iterations)
            .with_context(|| format!("failed to plot cost curve to {}", path.display()))?;
    }

    Ok(())
}
