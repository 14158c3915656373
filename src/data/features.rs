//! Design-matrix encoding for cleaned census records.
//!
//! Numeric columns are z-scored and categorical columns one-hot encoded with
//! the first (alphabetical) level dropped as reference. All statistics and
//! level sets are learned from the training split only.

use std::collections::BTreeSet;

use ndarray::Array2;

use crate::common::error::{EvalError, EvalResult};
use crate::evaluation::domain::Label;

use super::domain::CensusRecord;

const NUMERIC: &[&str] = &[
    "age",
    "education_num",
    "capital_gain",
    "capital_loss",
    "hours_per_week",
];

const CATEGORICAL: &[&str] = &[
    "employer",
    "marital",
    "occupation",
    "relationship",
    "race",
    "sex",
    "region",
];

fn numeric_value(record: &CensusRecord, idx: usize) -> f64 {
    match idx {
        0 => record.age,
        1 => record.education_num,
        2 => record.capital_gain,
        3 => record.capital_loss,
        _ => record.hours_per_week,
    }
}

fn categorical_value(record: &CensusRecord, idx: usize) -> &str {
    match idx {
        0 => &record.employer,
        1 => &record.marital,
        2 => &record.occupation,
        3 => &record.relationship,
        4 => &record.race,
        5 => &record.sex,
        _ => &record.region,
    }
}

/// Feature matrix aligned row-by-row with its labels.
#[derive(Clone, Debug)]
pub struct DesignMatrix {
    pub features: Array2<f64>,
    pub labels: Vec<Label>,
    pub columns: Vec<String>,
}

impl DesignMatrix {
    pub fn nrows(&self) -> usize {
        self.features.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.features.ncols()
    }
}

/// Column standardisation and one-hot level sets fitted on training data.
#[derive(Clone, Debug)]
pub struct FeatureEncoder {
    /// `(mean, std)` per numeric column.
    scales: Vec<(f64, f64)>,
    /// Non-reference levels per categorical column, sorted.
    levels: Vec<Vec<String>>,
    columns: Vec<String>,
}

impl FeatureEncoder {
    /// Learn scaling statistics and category levels from `train`.
    pub fn fit(train: &[CensusRecord]) -> EvalResult<Self> {
        if train.is_empty() {
            return Err(EvalError::invalid("cannot fit feature encoder on no records"));
        }
        let n = train.len() as f64;

        let scales = (0..NUMERIC.len())
            .map(|idx| {
                let mean = train.iter().map(|r| numeric_value(r, idx)).sum::<f64>() / n;
                let var = train
                    .iter()
                    .map(|r| (numeric_value(r, idx) - mean).powi(2))
                    .sum::<f64>()
                    / n;
                let std = var.sqrt();
                (mean, if std > 0.0 { std } else { 1.0 })
            })
            .collect();

        let levels: Vec<Vec<String>> = (0..CATEGORICAL.len())
            .map(|idx| {
                let seen: BTreeSet<&str> =
                    train.iter().map(|r| categorical_value(r, idx)).collect();
                seen.into_iter().skip(1).map(str::to_string).collect()
            })
            .collect();

        let mut columns: Vec<String> = NUMERIC.iter().map(|c| c.to_string()).collect();
        for (name, lv) in CATEGORICAL.iter().zip(&levels) {
            columns.extend(lv.iter().map(|level| format!("{name}={level}")));
        }

        Ok(Self {
            scales,
            levels,
            columns,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Encode records into a design matrix. Levels unseen during `fit` encode
    /// as the reference level (all zeros).
    pub fn transform(&self, records: &[CensusRecord]) -> DesignMatrix {
        let mut features = Array2::<f64>::zeros((records.len(), self.columns.len()));

        for (row, record) in records.iter().enumerate() {
            for (idx, &(mean, std)) in self.scales.iter().enumerate() {
                features[[row, idx]] = (numeric_value(record, idx) - mean) / std;
            }

            let mut offset = self.scales.len();
            for (idx, levels) in self.levels.iter().enumerate() {
                let value = categorical_value(record, idx);
                if let Some(pos) = levels.iter().position(|level| level == value) {
                    features[[row, offset + pos]] = 1.0;
                }
                offset += levels.len();
            }
        }

        DesignMatrix {
            features,
            labels: records.iter().map(|r| r.label).collect(),
            columns: self.columns.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn record(age: f64, sex: &str, region: &str, label: Label) -> CensusRecord {
        CensusRecord {
            age,
            employer: "Private".into(),
            education_num: 10.0,
            marital: "Married".into(),
            occupation: "Sales".into(),
            relationship: "Husband".into(),
            race: "White".into(),
            sex: sex.into(),
            capital_gain: 0.0,
            capital_loss: 0.0,
            hours_per_week: 40.0,
            region: region.into(),
            label,
        }
    }

    #[test]
    fn numeric_columns_are_standardised_on_train() {
        let train = vec![
            record(20.0, "Male", "Asia", Label::Negative),
            record(40.0, "Female", "Europe", Label::Positive),
        ];
        let enc = FeatureEncoder::fit(&train).unwrap();
        let m = enc.transform(&train);

        assert_abs_diff_eq!(m.features[[0, 0]], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.features[[1, 0]], 1.0, epsilon = 1e-12);
        // constant column: std falls back to 1, value centred to 0
        assert_abs_diff_eq!(m.features[[0, 1]], 0.0, epsilon = 1e-12);
        assert_eq!(m.labels, vec![Label::Negative, Label::Positive]);
    }

    #[test]
    fn one_hot_drops_reference_level() {
        let train = vec![
            record(20.0, "Male", "Asia", Label::Negative),
            record(40.0, "Female", "Europe", Label::Positive),
        ];
        let enc = FeatureEncoder::fit(&train).unwrap();
        let cols = enc.columns();
        assert!(cols.contains(&"sex=Male".to_string()));
        assert!(!cols.contains(&"sex=Female".to_string()));
        assert!(cols.contains(&"region=Europe".to_string()));
        // single-level columns contribute nothing
        assert!(!cols.iter().any(|c| c.starts_with("employer=")));
        assert_eq!(cols.len(), NUMERIC.len() + 2);

        let m = enc.transform(&train);
        let male = cols.iter().position(|c| c == "sex=Male").unwrap();
        assert_eq!(m.features[[0, male]], 1.0);
        assert_eq!(m.features[[1, male]], 0.0);
    }

    #[test]
    fn unseen_levels_encode_as_reference() {
        let train = vec![
            record(20.0, "Male", "Asia", Label::Negative),
            record(40.0, "Female", "Europe", Label::Positive),
        ];
        let enc = FeatureEncoder::fit(&train).unwrap();
        let m = enc.transform(&[record(30.0, "Male", "Other", Label::Negative)]);
        let europe = enc
            .columns()
            .iter()
            .position(|c| c == "region=Europe")
            .unwrap();
        assert_eq!(m.features[[0, europe]], 0.0);
        assert_eq!(m.nrows(), 1);
        assert_eq!(m.ncols(), enc.columns().len());
    }

    #[test]
    fn empty_train_is_rejected() {
        assert!(FeatureEncoder::fit(&[]).is_err());
    }
}
