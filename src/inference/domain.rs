//! Scorer contract and the logistic scorer produced by model fitting.

use ndarray::{Array1, ArrayView1};

/// Maps one feature row to the probability of the positive class.
///
/// Implementations must be deterministic for a given row and model state.
pub trait Scorer: Send + Sync {
    fn score(&self, row: ArrayView1<'_, f64>) -> f64;
}

/// Numerically stable logistic function.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// `sigmoid(intercept + row . coefficients)`.
#[derive(Clone, Debug, PartialEq)]
pub struct LogisticScorer {
    pub coefficients: Array1<f64>,
    pub intercept: f64,
}

impl LogisticScorer {
    pub fn new(coefficients: Array1<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }
}

impl Scorer for LogisticScorer {
    fn score(&self, row: ArrayView1<'_, f64>) -> f64 {
        sigmoid(self.intercept + row.dot(&self.coefficients))
    }
}
