//! ROC curve construction by sweeping the decision threshold.
//!
//! Candidate thresholds are `+inf`, every distinct score, and `-inf`, visited
//! in descending order. Records are kept sorted by descending score so each
//! step only advances a cursor over the records that newly exceed the
//! threshold; every point equals the rates of the confusion matrix built at
//! that threshold with the strict `score > t` rule.

use crate::common::error::{EvalError, EvalResult};

use super::confusion::ConfusionMatrix;
use super::domain::{Label, RocPoint, ScoredRecord};

/// A finite, restartable ROC sweep over a fixed set of scored records.
#[derive(Clone, Debug)]
pub struct RocCurve {
    /// `(score, actual)` sorted by descending score.
    ranked: Vec<(f64, Label)>,
    /// Candidate thresholds, descending.
    thresholds: Vec<f64>,
    positives: usize,
    negatives: usize,
}

impl RocCurve {
    /// Prepare the sweep. Fails when the records contain no actual positives
    /// or no actual negatives, since one of the rates is then undefined.
    pub fn build(records: &[ScoredRecord]) -> EvalResult<Self> {
        let positives = records.iter().filter(|r| r.actual().is_positive()).count();
        let negatives = records.len() - positives;
        if positives == 0 {
            return Err(EvalError::undefined("true_positive_rate"));
        }
        if negatives == 0 {
            return Err(EvalError::undefined("false_positive_rate"));
        }

        let mut ranked: Vec<(f64, Label)> =
            records.iter().map(|r| (r.score(), r.actual())).collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut thresholds = Vec::with_capacity(ranked.len() + 2);
        thresholds.push(f64::INFINITY);
        thresholds.extend(ranked.iter().map(|(score, _)| *score));
        thresholds.dedup_by(|a, b| a == b);
        thresholds.push(f64::NEG_INFINITY);

        Ok(Self {
            ranked,
            thresholds,
            positives,
            negatives,
        })
    }

    /// Number of points the sweep yields.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Lazily walk the sweep from (0, 0) to (1, 1). May be called repeatedly.
    pub fn iter(&self) -> RocIter<'_> {
        RocIter {
            curve: self,
            next: 0,
            cursor: 0,
            tp: 0,
            fp: 0,
        }
    }

    /// Collect the full sweep.
    pub fn points(&self) -> Vec<RocPoint> {
        self.iter().collect()
    }

    /// Evaluate a single threshold by classifying every record.
    pub fn point_at(records: &[ScoredRecord], threshold: f64) -> EvalResult<RocPoint> {
        let cm = ConfusionMatrix::from_scored(records, threshold)?;
        Ok(RocPoint {
            threshold,
            false_positive_rate: cm.false_positive_rate()?,
            true_positive_rate: cm.true_positive_rate()?,
        })
    }
}

impl<'a> IntoIterator for &'a RocCurve {
    type Item = RocPoint;
    type IntoIter = RocIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the points of a [`RocCurve`].
#[derive(Clone, Debug)]
pub struct RocIter<'a> {
    curve: &'a RocCurve,
    next: usize,
    cursor: usize,
    tp: usize,
    fp: usize,
}

impl Iterator for RocIter<'_> {
    type Item = RocPoint;

    fn next(&mut self) -> Option<RocPoint> {
        let threshold = *self.curve.thresholds.get(self.next)?;
        self.next += 1;

        while let Some(&(score, actual)) = self.curve.ranked.get(self.cursor) {
            if score <= threshold {
                break;
            }
            match actual {
                Label::Positive => self.tp += 1,
                Label::Negative => self.fp += 1,
            }
            self.cursor += 1;
        }

        Some(RocPoint {
            threshold,
            false_positive_rate: self.fp as f64 / self.curve.negatives as f64,
            true_positive_rate: self.tp as f64 / self.curve.positives as f64,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.curve.thresholds.len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RocIter<'_> {}
