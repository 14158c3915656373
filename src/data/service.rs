//! Service layer responsible for loading, cleaning and splitting the dataset.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::common::error::{EvalError, EvalResult};
use crate::common::{ids, log, time};
use crate::evaluation::domain::Label;

use super::domain::{CensusRecord, Dataset, DatasetId, RawRecord};
use super::rebucket;

/// Marker used by the source data for a missing value.
const MISSING: &str = "?";

/// Load and clean a census CSV file.
pub fn load_csv<P: AsRef<Path>>(path: P) -> EvalResult<Dataset> {
    let start = time::now_ms();
    let bytes = fs::read(path.as_ref())?;
    let dataset = parse_csv(&bytes)?;
    info!(
        path = %path.as_ref().display(),
        dataset = dataset.id.as_str(),
        rows = dataset.len(),
        dropped = dataset.dropped,
        "dataset loaded"
    );
    log::stage_done("data", "load", time::since_ms(start));
    Ok(dataset)
}

/// Parse an in-memory CSV payload. The dataset id is a fingerprint of the bytes.
pub fn parse_csv(bytes: &[u8]) -> EvalResult<Dataset> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(bytes);

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (line, row) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = row?;
        match clean(raw)? {
            Some(record) => records.push(record),
            None => {
                debug!(line = line + 2, "dropping row with missing values");
                dropped += 1;
            }
        }
    }

    Ok(Dataset {
        id: DatasetId::new(ids::dataset_fingerprint(bytes)),
        records,
        dropped,
    })
}

/// Clean and re-bucket a single row. Returns `Ok(None)` when a categorical
/// field is missing.
pub fn clean(raw: RawRecord) -> EvalResult<Option<CensusRecord>> {
    let categorical = [
        &raw.type_employer,
        &raw.marital,
        &raw.occupation,
        &raw.relationship,
        &raw.race,
        &raw.sex,
        &raw.country,
    ];
    if categorical
        .iter()
        .any(|value| value.is_empty() || value.as_str() == MISSING)
    {
        return Ok(None);
    }

    let label = parse_income(&raw.income)?;

    Ok(Some(CensusRecord {
        age: raw.age,
        employer: rebucket::employer_group(&raw.type_employer),
        education_num: raw.education_num,
        marital: rebucket::marital_group(&raw.marital),
        occupation: rebucket::occupation_group(&raw.occupation),
        relationship: raw.relationship,
        race: raw.race,
        sex: raw.sex,
        capital_gain: raw.capital_gain,
        capital_loss: raw.capital_loss,
        hours_per_week: raw.hr_per_week,
        region: rebucket::country_region(&raw.country),
        label,
    }))
}

/// Encode the income column: `>50K` is positive, `<=50K` negative. The test
/// split of the public data carries a trailing period, which is accepted.
pub fn parse_income(value: &str) -> EvalResult<Label> {
    match value.trim().trim_end_matches('.') {
        ">50K" => Ok(Label::Positive),
        "<=50K" => Ok(Label::Negative),
        other => Err(EvalError::invalid(format!("unknown income label `{other}`"))),
    }
}

/// Shuffle with the injected generator and cut at `train_fraction`.
///
/// Both sides must end up non-empty.
pub fn train_test_split<T, R>(
    records: &[T],
    train_fraction: f64,
    rng: &mut R,
) -> EvalResult<(Vec<T>, Vec<T>)>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(EvalError::invalid(format!(
            "train fraction {train_fraction} must lie in (0, 1)"
        )));
    }

    let n = records.len();
    let n_train = (n as f64 * train_fraction).round() as usize;
    if n_train == 0 || n_train >= n {
        return Err(EvalError::invalid(format!(
            "cannot split {n} records at fraction {train_fraction}"
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    let train = indices[..n_train].iter().map(|&i| records[i].clone()).collect();
    let test = indices[n_train..].iter().map(|&i| records[i].clone()).collect();
    Ok((train, test))
}
