//! End-to-end run: load, clean, split, encode, fit, score, evaluate.

use rand::Rng;
use tracing::info;

use crate::common::error::EvalResult;
use crate::data::domain::{CensusRecord, Dataset};
use crate::data::features::FeatureEncoder;
use crate::data::service as data_service;
use crate::evaluation::service as evaluation_service;
use crate::evaluation::{EvalReport, Threshold};
use crate::inference::service as inference_service;
use crate::training::domain::ModelFitter;

/// Knobs for a pipeline run.
#[derive(Copy, Clone, Debug)]
pub struct RunOptions {
    pub train_fraction: f64,
    pub threshold: Threshold,
}

/// Evaluate a fitted model on a held-out split of an already loaded dataset.
///
/// Randomness and model fitting are both injected so a fixed seed and a
/// deterministic fitter reproduce the report bit for bit.
pub fn run_dataset<R>(
    dataset: &Dataset,
    fitter: &dyn ModelFitter,
    rng: &mut R,
    opts: RunOptions,
) -> EvalResult<EvalReport>
where
    R: Rng + ?Sized,
{
    let (train, test): (Vec<CensusRecord>, Vec<CensusRecord>) =
        data_service::train_test_split(&dataset.records, opts.train_fraction, rng)?;
    info!(
        dataset = dataset.id.as_str(),
        train = train.len(),
        test = test.len(),
        "split dataset"
    );

    let encoder = FeatureEncoder::fit(&train)?;
    let train_matrix = encoder.transform(&train);
    let test_matrix = encoder.transform(&test);

    let scorer = fitter.fit(&train_matrix.features, &train_matrix.labels)?;
    let scored = inference_service::score_batch(scorer.as_ref(), &test_matrix)?;

    let mut report = evaluation_service::evaluate(&scored, opts.threshold)?;
    report.dataset_id = Some(dataset.id.as_str().to_string());
    Ok(report)
}

/// Load the CSV at `path` and run [`run_dataset`] on it.
pub fn run_file<P, R>(
    path: P,
    fitter: &dyn ModelFitter,
    rng: &mut R,
    opts: RunOptions,
) -> EvalResult<EvalReport>
where
    P: AsRef<std::path::Path>,
    R: Rng + ?Sized,
{
    let dataset = data_service::load_csv(path)?;
    run_dataset(&dataset, fitter, rng, opts)
}

/// Evaluate scores produced by an external scorer (`label,score` CSV).
pub fn evaluate_file<P: AsRef<std::path::Path>>(
    path: P,
    threshold: Threshold,
) -> EvalResult<EvalReport> {
    let scored = inference_service::read_scores(path)?;
    evaluation_service::evaluate(&scored, threshold)
}
