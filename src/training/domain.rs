//! Domain types for model fitting.
//!
//! The optimiser itself lives behind [`ModelFitter`]; callers inject the
//! implementation and receive a [`Scorer`] back.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::common::error::{EvalError, EvalResult};
use crate::evaluation::domain::Label;
use crate::inference::domain::Scorer;

/// Supported model kinds.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    #[default]
    Logistic,
}

/// Hyper-parameters handed to the fitting routine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    pub model_kind: ModelKind,
    /// L2 penalty strength; 0 disables regularisation.
    pub alpha: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            model_kind: ModelKind::Logistic,
            alpha: 0.0,
        }
    }
}

impl FitConfig {
    /// Parse a JSON config blob; missing keys fall back to defaults.
    pub fn parse(raw: &str) -> EvalResult<Self> {
        let cfg: Self = serde_json::from_str(raw)?;
        if cfg.alpha < 0.0 {
            return Err(EvalError::invalid(format!(
                "alpha {} must be non-negative",
                cfg.alpha
            )));
        }
        Ok(cfg)
    }
}

/// Model fitting capability: `fit(features, labels) -> Scorer`.
pub trait ModelFitter {
    fn fit(&self, features: &Array2<f64>, labels: &[Label]) -> EvalResult<Box<dyn Scorer>>;
}

/// Shared argument checks every fitter performs before training.
pub fn check_fit_inputs(features: &Array2<f64>, labels: &[Label]) -> EvalResult<()> {
    if features.nrows() != labels.len() {
        return Err(EvalError::invalid(format!(
            "{} feature rows but {} labels",
            features.nrows(),
            labels.len()
        )));
    }
    let positives = labels.iter().filter(|l| l.is_positive()).count();
    if positives == 0 || positives == labels.len() {
        return Err(EvalError::invalid(
            "training labels must contain both classes",
        ));
    }
    Ok(())
}
