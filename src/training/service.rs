//! Model fitting backed by the `smartcore` logistic regression routine.

use ndarray::{Array1, Array2};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::{LogisticRegression, LogisticRegressionParameters};
use tracing::info;

use crate::common::error::{EvalError, EvalResult};
use crate::common::{log, time};
use crate::evaluation::domain::Label;
use crate::inference::domain::{LogisticScorer, Scorer};

use super::domain::{check_fit_inputs, FitConfig, ModelFitter, ModelKind};

/// Logistic regression fitted by smartcore's solver.
#[derive(Clone, Debug, Default)]
pub struct SmartcoreLogistic {
    cfg: FitConfig,
}

impl SmartcoreLogistic {
    pub fn new(cfg: FitConfig) -> Self {
        Self { cfg }
    }

    /// Fit and return the concrete scorer.
    pub fn fit_logistic(
        &self,
        features: &Array2<f64>,
        labels: &[Label],
    ) -> EvalResult<LogisticScorer> {
        check_fit_inputs(features, labels)?;
        let start = time::now_ms();

        let rows: Vec<Vec<f64>> = features.rows().into_iter().map(|r| r.to_vec()).collect();
        let x = DenseMatrix::from_2d_vec(&rows)
            .map_err(|e| EvalError::Fit(format!("feature matrix: {e:?}")))?;
        let y: Vec<i32> = labels.iter().map(|l| l.as_index() as i32).collect();

        let model = match self.cfg.model_kind {
            ModelKind::Logistic => {
                let params = LogisticRegressionParameters::default().with_alpha(self.cfg.alpha);
                LogisticRegression::<f64, i32, DenseMatrix<f64>, Vec<i32>>::fit(&x, &y, params)
                    .map_err(|e| EvalError::Fit(format!("{e:?}")))?
            }
        };

        let n_features = features.ncols();
        let coef = model.coefficients();
        let coefficients = match coef.shape() {
            (1, cols) if cols == n_features => {
                Array1::from_iter((0..n_features).map(|j| *coef.get((0, j))))
            }
            (rows, 1) if rows == n_features => {
                Array1::from_iter((0..n_features).map(|i| *coef.get((i, 0))))
            }
            shape => {
                return Err(EvalError::Fit(format!(
                    "unexpected coefficient shape {shape:?} for {n_features} features"
                )));
            }
        };
        let intercept = *model.intercept().get((0, 0));

        info!(
            model_kind = ?self.cfg.model_kind,
            alpha = self.cfg.alpha,
            rows = features.nrows(),
            features = n_features,
            intercept,
            "logistic model fitted"
        );
        log::stage_done("training", "fit", time::since_ms(start));
        Ok(LogisticScorer::new(coefficients, intercept))
    }
}

impl ModelFitter for SmartcoreLogistic {
    fn fit(&self, features: &Array2<f64>, labels: &[Label]) -> EvalResult<Box<dyn Scorer>> {
        Ok(Box::new(self.fit_logistic(features, labels)?))
    }
}
