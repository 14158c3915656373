//! Scalar metrics derived from a fixed confusion matrix.
//!
//! A zero denominator is reported as `UndefinedMetric`; values are never
//! coerced to 0 or NaN.

use serde::Serialize;

use crate::common::error::{EvalError, EvalResult};

use super::confusion::ConfusionMatrix;

fn ratio(numerator: usize, denominator: usize, metric: &'static str) -> EvalResult<f64> {
    if denominator == 0 {
        return Err(EvalError::undefined(metric));
    }
    Ok(numerator as f64 / denominator as f64)
}

impl ConfusionMatrix {
    /// (TP + TN) / total
    pub fn accuracy(&self) -> EvalResult<f64> {
        ratio(self.tp + self.tn, self.total(), "accuracy")
    }

    /// (FP + FN) / total, computed as `1 - accuracy` so the pair sums to 1.
    pub fn error_rate(&self) -> EvalResult<f64> {
        Ok(1.0 - self.accuracy().map_err(|_| EvalError::undefined("error_rate"))?)
    }

    /// Fraction of actual positives, (TP + FN) / total.
    pub fn prevalence(&self) -> EvalResult<f64> {
        ratio(self.actual_positives(), self.total(), "prevalence")
    }

    /// TP / (TP + FP); undefined when nothing was predicted positive.
    pub fn precision(&self) -> EvalResult<f64> {
        ratio(self.tp, self.predicted_positives(), "precision")
    }

    /// Sensitivity, TP / (TP + FN).
    pub fn true_positive_rate(&self) -> EvalResult<f64> {
        ratio(self.tp, self.actual_positives(), "true_positive_rate")
    }

    /// FP / (FP + TN).
    pub fn false_positive_rate(&self) -> EvalResult<f64> {
        ratio(self.fp, self.actual_negatives(), "false_positive_rate")
    }

    /// TN / (TN + FP).
    pub fn specificity(&self) -> EvalResult<f64> {
        ratio(self.tn, self.actual_negatives(), "specificity")
    }
}

/// Metric block reported for one threshold.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub accuracy: f64,
    pub error_rate: f64,
    pub prevalence: f64,
    pub precision: f64,
    /// `None` when the split holds no actual positives.
    pub sensitivity: Option<f64>,
    /// `None` when the split holds no actual negatives.
    pub specificity: Option<f64>,
}

impl MetricsSummary {
    /// All values come from the same matrix. Fails if any of accuracy,
    /// error rate, prevalence or precision is undefined.
    pub fn from_matrix(cm: &ConfusionMatrix) -> EvalResult<Self> {
        let accuracy = cm.accuracy()?;
        Ok(Self {
            accuracy,
            error_rate: 1.0 - accuracy,
            prevalence: cm.prevalence()?,
            precision: cm.precision()?,
            sensitivity: cm.true_positive_rate().ok(),
            specificity: cm.specificity().ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reference() -> ConfusionMatrix {
        ConfusionMatrix {
            tn: 2,
            fp: 0,
            fn_: 1,
            tp: 1,
        }
    }

    #[test]
    fn reference_scenario_metrics() {
        let m = MetricsSummary::from_matrix(&reference()).unwrap();
        assert_eq!(m.accuracy, 0.75);
        assert_eq!(m.error_rate, 0.25);
        assert_eq!(m.prevalence, 0.5);
        assert_eq!(m.precision, 1.0);
        assert_eq!(m.sensitivity, Some(0.5));
        assert_eq!(m.specificity, Some(1.0));
    }

    #[test]
    fn accuracy_and_error_rate_sum_to_exactly_one() {
        for tn in 0..12 {
            for fp in 0..5 {
                for fn_ in 0..5 {
                    for tp in 0..7 {
                        let cm = ConfusionMatrix { tn, fp, fn_, tp };
                        if cm.total() == 0 {
                            continue;
                        }
                        let acc = cm.accuracy().unwrap();
                        let err = cm.error_rate().unwrap();
                        assert_eq!(acc + err, 1.0, "{cm:?}");
                        assert_abs_diff_eq!(
                            err,
                            (fp + fn_) as f64 / cm.total() as f64,
                            epsilon = 1e-12
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn empty_matrix_is_undefined_everywhere() {
        let cm = ConfusionMatrix::default();
        for result in [
            cm.accuracy(),
            cm.error_rate(),
            cm.prevalence(),
            cm.precision(),
            cm.true_positive_rate(),
            cm.false_positive_rate(),
        ] {
            assert!(matches!(result, Err(EvalError::UndefinedMetric { .. })));
        }
        assert!(MetricsSummary::from_matrix(&cm).is_err());
    }

    #[test]
    fn precision_requires_positive_predictions() {
        let cm = ConfusionMatrix {
            tn: 3,
            fp: 0,
            fn_: 2,
            tp: 0,
        };
        assert!(matches!(
            cm.precision(),
            Err(EvalError::UndefinedMetric { metric: "precision" })
        ));
        assert!(MetricsSummary::from_matrix(&cm).is_err());
    }

    #[test]
    fn single_class_split_omits_rate() {
        let cm = ConfusionMatrix {
            tn: 0,
            fp: 0,
            fn_: 1,
            tp: 3,
        };
        let m = MetricsSummary::from_matrix(&cm).unwrap();
        assert_eq!(m.specificity, None);
        assert_eq!(m.sensitivity, Some(0.75));
        assert_eq!(m.prevalence, 1.0);
    }
}
