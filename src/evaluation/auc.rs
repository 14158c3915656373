//! Area under the ROC curve by trapezoidal integration.

use crate::common::error::{EvalError, EvalResult};

use super::domain::RocPoint;
use super::roc::RocCurve;

/// Sum of `(x2 - x1) * (y1 + y2) / 2` over consecutive points, with
/// x = false positive rate and y = true positive rate. Points must be in
/// ascending false-positive-rate order, as the threshold sweep produces them,
/// and every rate must lie in [0, 1].
pub fn auc<'a, I>(points: I) -> EvalResult<f64>
where
    I: IntoIterator<Item = &'a RocPoint>,
{
    let mut iter = points.into_iter();
    let mut prev = check_rates(iter.next().ok_or(EvalError::undefined("auc"))?)?;
    let mut area = 0.0;
    let mut segments = 0usize;

    for point in iter {
        let point = check_rates(point)?;
        let dx = point.false_positive_rate - prev.false_positive_rate;
        if dx < 0.0 {
            return Err(EvalError::invalid(
                "roc points must be ordered by ascending false positive rate",
            ));
        }
        area += dx * (prev.true_positive_rate + point.true_positive_rate) / 2.0;
        segments += 1;
        prev = point;
    }

    if segments == 0 {
        return Err(EvalError::undefined("auc"));
    }
    // rates are validated, so this only absorbs rounding
    Ok(area.clamp(0.0, 1.0))
}

fn check_rates(point: &RocPoint) -> EvalResult<&RocPoint> {
    let in_unit = |r: f64| (0.0..=1.0).contains(&r);
    if !in_unit(point.false_positive_rate) || !in_unit(point.true_positive_rate) {
        return Err(EvalError::invalid(format!(
            "roc rates must lie in [0, 1], got fpr={} tpr={}",
            point.false_positive_rate, point.true_positive_rate
        )));
    }
    Ok(point)
}

impl RocCurve {
    /// Integrate the full sweep.
    pub fn auc(&self) -> EvalResult<f64> {
        let points = self.points();
        auc(&points)
    }
}
