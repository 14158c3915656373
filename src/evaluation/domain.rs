//! Domain primitives for threshold-based evaluation of a binary scorer.

use serde::Serialize;

use crate::common::error::{EvalError, EvalResult};

/// Binary class label. `Positive` is income above 50K.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Label {
    Negative = 0,
    Positive = 1,
}

impl Label {
    pub fn as_index(self) -> usize {
        self as usize
    }

    pub fn is_positive(self) -> bool {
        self == Label::Positive
    }
}

impl TryFrom<u8> for Label {
    type Error = EvalError;

    fn try_from(value: u8) -> EvalResult<Self> {
        match value {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            other => Err(EvalError::invalid(format!("label {other} is not 0 or 1"))),
        }
    }
}

impl From<bool> for Label {
    fn from(value: bool) -> Self {
        if value {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

/// Reject scores outside [0, 1], NaN included.
pub fn validate_score(score: f64) -> EvalResult<f64> {
    if (0.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(EvalError::InvalidScore { score })
    }
}

/// An actual label paired with the scorer's probability for the same row.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ScoredRecord {
    actual: Label,
    score: f64,
}

impl ScoredRecord {
    pub fn new(actual: Label, score: f64) -> EvalResult<Self> {
        Ok(Self {
            actual,
            score: validate_score(score)?,
        })
    }

    pub fn actual(&self) -> Label {
        self.actual
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// One point of the ROC sweep.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct RocPoint {
    /// Cut-off producing this point. The sweep extremes are infinite and
    /// serialise as `null`.
    pub threshold: f64,
    pub false_positive_rate: f64,
    pub true_positive_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_u8() {
        assert_eq!(Label::try_from(0).unwrap(), Label::Negative);
        assert_eq!(Label::try_from(1).unwrap(), Label::Positive);
        assert!(Label::try_from(2).is_err());
        assert_eq!(Label::Positive.as_index(), 1);
    }

    #[test]
    fn scored_record_rejects_out_of_range_scores() {
        assert!(ScoredRecord::new(Label::Positive, 0.0).is_ok());
        assert!(ScoredRecord::new(Label::Positive, 1.0).is_ok());
        assert!(matches!(
            ScoredRecord::new(Label::Negative, 1.01),
            Err(EvalError::InvalidScore { .. })
        ));
        assert!(matches!(
            ScoredRecord::new(Label::Negative, -0.1),
            Err(EvalError::InvalidScore { .. })
        ));
        assert!(ScoredRecord::new(Label::Negative, f64::NAN).is_err());
    }
}
