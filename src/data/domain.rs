//! Core dataset definitions for the census income table.

use serde::Deserialize;

use crate::evaluation::domain::Label;

/// Fingerprint-based identifier for a loaded dataset.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DatasetId(String);

impl DatasetId {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One CSV row as it appears on disk. Unknown columns (such as the unnamed
/// row index) are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRecord {
    pub age: f64,
    pub type_employer: String,
    #[serde(default)]
    pub fnlwgt: Option<f64>,
    #[serde(default)]
    pub education: Option<String>,
    pub education_num: f64,
    pub marital: String,
    pub occupation: String,
    pub relationship: String,
    pub race: String,
    pub sex: String,
    pub capital_gain: f64,
    pub capital_loss: f64,
    pub hr_per_week: f64,
    pub country: String,
    pub income: String,
}

/// Cleaned and re-bucketed record ready for feature encoding.
#[derive(Clone, Debug, PartialEq)]
pub struct CensusRecord {
    pub age: f64,
    pub employer: String,
    pub education_num: f64,
    pub marital: String,
    pub occupation: String,
    pub relationship: String,
    pub race: String,
    pub sex: String,
    pub capital_gain: f64,
    pub capital_loss: f64,
    pub hours_per_week: f64,
    pub region: String,
    pub label: Label,
}

/// A loaded dataset plus bookkeeping from the cleaning pass.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub id: DatasetId,
    pub records: Vec<CensusRecord>,
    /// Rows removed because a categorical field was missing.
    pub dropped: usize,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records labelled `>50K`.
    pub fn positives(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.label == Label::Positive)
            .count()
    }
}
