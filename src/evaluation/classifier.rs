//! Decision rule turning a probability into a hard label.

use serde::Serialize;

use crate::common::config::DEFAULT_THRESHOLD;
use crate::common::error::{EvalError, EvalResult};

use super::domain::{validate_score, Label};

/// User-facing decision threshold in [0, 1].
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> EvalResult<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EvalError::invalid(format!(
                "threshold {value} must lie in [0, 1]"
            )))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

/// Positive iff `score > threshold`; a score equal to the threshold is
/// negative. The threshold may be infinite (ROC sweep extremes).
pub fn classify(score: f64, threshold: f64) -> EvalResult<Label> {
    let score = validate_score(score)?;
    Ok(Label::from(score > threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_inequality_sends_ties_to_negative() {
        assert_eq!(classify(0.5, 0.5).unwrap(), Label::Negative);
        assert_eq!(classify(0.500_001, 0.5).unwrap(), Label::Positive);
        assert_eq!(classify(0.49, 0.5).unwrap(), Label::Negative);
    }

    #[test]
    fn sweep_extremes() {
        assert_eq!(classify(1.0, f64::INFINITY).unwrap(), Label::Negative);
        assert_eq!(classify(0.0, f64::NEG_INFINITY).unwrap(), Label::Positive);
    }

    #[test]
    fn invalid_scores_are_rejected() {
        assert!(matches!(
            classify(1.2, 0.5),
            Err(EvalError::InvalidScore { .. })
        ));
        assert!(classify(f64::NAN, 0.5).is_err());
    }

    #[test]
    fn threshold_bounds() {
        assert_eq!(Threshold::default().value(), 0.5);
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert!(Threshold::new(-0.01).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
    }
}
