//! Evaluation service: scored records in, full report out.

use tracing::info;

use crate::common::error::EvalResult;
use crate::common::{log, time};

use super::classifier::Threshold;
use super::confusion::ConfusionMatrix;
use super::domain::ScoredRecord;
use super::metrics::MetricsSummary;
use super::report::EvalReport;
use super::roc::RocCurve;

/// Run classifier, confusion matrix, metrics, ROC sweep and AUC over the
/// same records. Any undefined metric aborts the run.
pub fn evaluate(records: &[ScoredRecord], threshold: Threshold) -> EvalResult<EvalReport> {
    let start = time::now_ms();
    let result = build_report(records, threshold);
    match &result {
        Ok(report) => {
            info!(
                records = report.records,
                threshold = threshold.value(),
                accuracy = report.metrics.accuracy,
                auc = report.auc,
                "evaluation complete"
            );
            log::stage_done("evaluation", "evaluate", time::since_ms(start));
        }
        Err(err) => {
            log::stage_failed("evaluation", "evaluate", err.code(), time::since_ms(start));
        }
    }
    result
}

fn build_report(records: &[ScoredRecord], threshold: Threshold) -> EvalResult<EvalReport> {
    let cm = ConfusionMatrix::from_scored(records, threshold.value())?;
    let metrics = MetricsSummary::from_matrix(&cm)?;
    let curve = RocCurve::build(records)?;
    let roc = curve.points();
    let auc = super::auc::auc(&roc)?;

    Ok(EvalReport {
        dataset_id: None,
        threshold,
        records: records.len(),
        confusion: cm.into(),
        metrics,
        roc,
        auc,
    })
}
