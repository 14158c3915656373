//! Serialisable evaluation output for the reporting/plotting side.

use std::fmt::Write as _;

use serde::Serialize;

use super::classifier::Threshold;
use super::confusion::ConfusionMatrix;
use super::domain::RocPoint;
use super::metrics::MetricsSummary;

/// Confusion matrix cells plus row and column margins.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfusionTable {
    #[serde(flatten)]
    pub cells: ConfusionMatrix,
    pub actual_negative_total: usize,
    pub actual_positive_total: usize,
    pub predicted_negative_total: usize,
    pub predicted_positive_total: usize,
    pub total: usize,
}

impl From<ConfusionMatrix> for ConfusionTable {
    fn from(cm: ConfusionMatrix) -> Self {
        Self {
            actual_negative_total: cm.actual_negatives(),
            actual_positive_total: cm.actual_positives(),
            predicted_negative_total: cm.predicted_negatives(),
            predicted_positive_total: cm.predicted_positives(),
            total: cm.total(),
            cells: cm,
        }
    }
}

/// Everything one evaluation run produces.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvalReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    pub threshold: Threshold,
    pub records: usize,
    pub confusion: ConfusionTable,
    pub metrics: MetricsSummary,
    pub roc: Vec<RocPoint>,
    pub auc: f64,
}

impl EvalReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Fixed-width terminal rendering of the table and metric block.
    pub fn render_text(&self) -> String {
        let mut s = String::new();
        if let Some(id) = &self.dataset_id {
            let _ = writeln!(s, "dataset:     {id}");
        }
        let _ = writeln!(s, "records:     {}", self.records);
        let _ = writeln!(s, "threshold:   {}", self.threshold.value());
        s.push('\n');
        let _ = writeln!(s, "{}", self.confusion.cells);
        s.push('\n');
        let m = &self.metrics;
        let _ = writeln!(s, "accuracy:    {:.4}", m.accuracy);
        let _ = writeln!(s, "error rate:  {:.4}", m.error_rate);
        let _ = writeln!(s, "prevalence:  {:.4}", m.prevalence);
        let _ = writeln!(s, "precision:   {:.4}", m.precision);
        if let Some(v) = m.sensitivity {
            let _ = writeln!(s, "sensitivity: {v:.4}");
        }
        if let Some(v) = m.specificity {
            let _ = writeln!(s, "specificity: {v:.4}");
        }
        let _ = writeln!(s, "roc points:  {}", self.roc.len());
        let _ = writeln!(s, "auc:         {:.4}", self.auc);
        s
    }
}
