//! Batch scoring: pair every design-matrix row's label with its probability.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::common::error::{EvalError, EvalResult};
use crate::common::{log, time};
use crate::data::features::DesignMatrix;
use crate::evaluation::domain::{Label, ScoredRecord};

use super::domain::Scorer;

/// Score every row. A scorer output outside [0, 1] aborts the batch.
pub fn score_batch(scorer: &dyn Scorer, matrix: &DesignMatrix) -> EvalResult<Vec<ScoredRecord>> {
    if matrix.nrows() != matrix.labels.len() {
        return Err(EvalError::invalid(format!(
            "{} feature rows but {} labels",
            matrix.nrows(),
            matrix.labels.len()
        )));
    }

    let start = time::now_ms();
    let scored = matrix
        .features
        .rows()
        .into_iter()
        .zip(&matrix.labels)
        .map(|(row, &label)| ScoredRecord::new(label, scorer.score(row)))
        .collect::<EvalResult<Vec<_>>>()?;

    debug!(rows = scored.len(), "batch scored");
    log::stage_done("inference", "score_batch", time::since_ms(start));
    Ok(scored)
}

#[derive(Debug, Deserialize)]
struct ScoreRow {
    label: u8,
    score: f64,
}

/// Read `label,score` pairs produced by an external scorer.
pub fn read_scores<P: AsRef<Path>>(path: P) -> EvalResult<Vec<ScoredRecord>> {
    let file = File::open(path.as_ref())?;
    read_scores_from(file)
}

/// Same as [`read_scores`] over any reader.
pub fn read_scores_from<R: std::io::Read>(reader: R) -> EvalResult<Vec<ScoredRecord>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    reader
        .deserialize::<ScoreRow>()
        .map(|row| {
            let row = row?;
            ScoredRecord::new(Label::try_from(row.label)?, row.score)
        })
        .collect()
}
