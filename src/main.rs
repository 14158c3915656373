//! income_eval - census income classifier evaluation
//!
//! ```bash
//! income_eval run --data adult_sal.csv --threshold 0.5 --seed 101
//! income_eval evaluate --scores scores.csv --format text
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use income_eval::common::config::AppCfg;
use income_eval::common::log;
use income_eval::evaluation::{EvalReport, Threshold};
use income_eval::training::{FitConfig, SmartcoreLogistic};
use income_eval::{evaluate_file, run_file, RunOptions};

#[derive(Parser)]
#[command(name = "income_eval")]
#[command(about = "Logistic income classification with ROC/AUC evaluation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean the census CSV, fit a logistic model and evaluate it on a held-out split
    Run {
        /// Path to the census CSV (defaults to INCOME_EVAL_DATA_PATH)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Decision threshold in [0, 1]
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Seed for the train/test split
        #[arg(short, long)]
        seed: Option<u64>,

        /// Share of rows used for training
        #[arg(long)]
        train_fraction: Option<f64>,

        /// JSON fit config, e.g. '{"alpha":0.1}'
        #[arg(long, default_value = "{}")]
        fit: String,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Evaluate externally produced scores from a `label,score` CSV
    Evaluate {
        /// Path to the scores CSV
        #[arg(long)]
        scores: PathBuf,

        /// Decision threshold in [0, 1]
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

fn emit(report: &EvalReport, format: Format, output: Option<PathBuf>) -> Result<()> {
    let body = match format {
        Format::Json => report.to_json()?,
        Format::Text => report.render_text(),
    };
    match output {
        Some(path) => {
            fs::write(&path, body)
                .with_context(|| format!("Failed to write report: {:?}", path))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{body}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = AppCfg::load().context("Failed to load configuration")?;
    log::init(&cfg.log_level);

    match cli.command {
        Commands::Run {
            data,
            threshold,
            seed,
            train_fraction,
            fit,
            output,
            format,
        } => {
            if let Some(data) = data {
                cfg.data_path = data;
            }
            if let Some(t) = threshold {
                cfg.threshold = t;
            }
            if let Some(s) = seed {
                cfg.seed = s;
            }
            if let Some(f) = train_fraction {
                cfg.train_fraction = f;
            }
            cfg.validate()?;

            let fitter = SmartcoreLogistic::new(FitConfig::parse(&fit)?);
            let mut rng = StdRng::seed_from_u64(cfg.seed);
            let opts = RunOptions {
                train_fraction: cfg.train_fraction,
                threshold: Threshold::new(cfg.threshold)?,
            };

            info!(path = %cfg.data_path.display(), seed = cfg.seed, "starting run");
            let report = run_file(&cfg.data_path, &fitter, &mut rng, opts)
                .with_context(|| format!("Pipeline failed for {:?}", cfg.data_path))?;
            emit(&report, format, output)
        }

        Commands::Evaluate {
            scores,
            threshold,
            output,
            format,
        } => {
            let threshold = Threshold::new(threshold.unwrap_or(cfg.threshold))?;
            let report = evaluate_file(&scores, threshold)
                .with_context(|| format!("Evaluation failed for {:?}", scores))?;
            emit(&report, format, output)
        }
    }
}
