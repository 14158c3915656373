//! 2x2 cross-tabulation of actual versus predicted labels.

use std::fmt;

use serde::Serialize;

use crate::common::error::EvalResult;

use super::classifier::classify;
use super::domain::{Label, ScoredRecord};

/// Counts keyed by (actual, predicted).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ConfusionMatrix {
    /// Actual 0, predicted 0.
    pub tn: usize,
    /// Actual 0, predicted 1.
    pub fp: usize,
    /// Actual 1, predicted 0.
    #[serde(rename = "fn")]
    pub fn_: usize,
    /// Actual 1, predicted 1.
    pub tp: usize,
}

impl ConfusionMatrix {
    /// Single pass over `(actual, predicted)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Label, Label)>,
    {
        let mut cells = [[0usize; 2]; 2];
        for (actual, predicted) in pairs {
            cells[actual.as_index()][predicted.as_index()] += 1;
        }
        Self {
            tn: cells[0][0],
            fp: cells[0][1],
            fn_: cells[1][0],
            tp: cells[1][1],
        }
    }

    /// Classify every record at `threshold`, then cross-tabulate.
    pub fn from_scored(records: &[ScoredRecord], threshold: f64) -> EvalResult<Self> {
        let pairs = records
            .iter()
            .map(|r| Ok((r.actual(), classify(r.score(), threshold)?)))
            .collect::<EvalResult<Vec<_>>>()?;
        Ok(Self::from_pairs(pairs))
    }

    pub fn get(&self, actual: Label, predicted: Label) -> usize {
        match (actual, predicted) {
            (Label::Negative, Label::Negative) => self.tn,
            (Label::Negative, Label::Positive) => self.fp,
            (Label::Positive, Label::Negative) => self.fn_,
            (Label::Positive, Label::Positive) => self.tp,
        }
    }

    pub fn total(&self) -> usize {
        self.tn + self.fp + self.fn_ + self.tp
    }

    /// Row margin for actual positives (TP + FN).
    pub fn actual_positives(&self) -> usize {
        self.tp + self.fn_
    }

    /// Row margin for actual negatives (TN + FP).
    pub fn actual_negatives(&self) -> usize {
        self.tn + self.fp
    }

    /// Column margin for predicted positives (TP + FP).
    pub fn predicted_positives(&self) -> usize {
        self.tp + self.fp
    }

    /// Column margin for predicted negatives (TN + FN).
    pub fn predicted_negatives(&self) -> usize {
        self.tn + self.fn_
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "              predicted 0  predicted 1        sum")?;
        writeln!(
            f,
            "actual 0      {:>11}  {:>11}  {:>9}",
            self.tn,
            self.fp,
            self.actual_negatives()
        )?;
        writeln!(
            f,
            "actual 1      {:>11}  {:>11}  {:>9}",
            self.fn_,
            self.tp,
            self.actual_positives()
        )?;
        write!(
            f,
            "sum           {:>11}  {:>11}  {:>9}",
            self.predicted_negatives(),
            self.predicted_positives(),
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(pairs: &[(u8, f64)]) -> Vec<ScoredRecord> {
        pairs
            .iter()
            .map(|&(label, score)| {
                ScoredRecord::new(Label::try_from(label).unwrap(), score).unwrap()
            })
            .collect()
    }

    #[test]
    fn reference_scenario_at_half() {
        let records = scored(&[(1, 0.9), (1, 0.4), (0, 0.3), (0, 0.2)]);
        let cm = ConfusionMatrix::from_scored(&records, 0.5).unwrap();
        assert_eq!(
            cm,
            ConfusionMatrix {
                tn: 2,
                fp: 0,
                fn_: 1,
                tp: 1
            }
        );
        assert_eq!(cm.total(), 4);
        assert_eq!(cm.get(Label::Positive, Label::Negative), 1);
    }

    #[test]
    fn empty_input_yields_zero_matrix() {
        let cm = ConfusionMatrix::from_pairs(Vec::new());
        assert_eq!(cm, ConfusionMatrix::default());
        assert_eq!(cm.total(), 0);
    }

    #[test]
    fn cells_sum_to_record_count_and_ignore_order() {
        let records = scored(&[
            (1, 0.9),
            (0, 0.8),
            (1, 0.7),
            (0, 0.6),
            (1, 0.2),
            (0, 0.1),
            (0, 0.55),
        ]);
        let mut reversed = records.clone();
        reversed.reverse();

        for t in [0.0, 0.15, 0.5, 0.65, 0.9, 1.0] {
            let cm = ConfusionMatrix::from_scored(&records, t).unwrap();
            assert_eq!(cm.total(), records.len());
            assert_eq!(cm, ConfusionMatrix::from_scored(&reversed, t).unwrap());
            assert_eq!(cm.actual_positives(), 3);
            assert_eq!(cm.actual_negatives(), 4);
        }
    }

    #[test]
    fn margins_render_in_display() {
        let cm = ConfusionMatrix {
            tn: 2,
            fp: 0,
            fn_: 1,
            tp: 1,
        };
        let text = cm.to_string();
        assert!(text.contains("actual 0"));
        assert!(text.lines().last().unwrap().trim_end().ends_with('4'));
    }

    #[test]
    fn every_cell_is_addressable() {
        let cm = ConfusionMatrix::from_pairs([
            (Label::Negative, Label::Negative),
            (Label::Negative, Label::Positive),
            (Label::Negative, Label::Positive),
            (Label::Positive, Label::Negative),
            (Label::Positive, Label::Positive),
            (Label::Positive, Label::Positive),
            (Label::Positive, Label::Positive),
        ]);
        assert_eq!(cm.get(Label::Negative, Label::Negative), 1);
        assert_eq!(cm.get(Label::Negative, Label::Positive), 2);
        assert_eq!(cm.get(Label::Positive, Label::Negative), 1);
        assert_eq!(cm.get(Label::Positive, Label::Positive), 3);
        assert_eq!(cm.predicted_positives(), 5);
        assert_eq!(cm.predicted_negatives(), 2);
    }

    #[test]
    fn threshold_sweep_endpoints() {
        let records = scored(&[(1, 1.0), (0, 0.0)]);
        let none = ConfusionMatrix::from_scored(&records, f64::INFINITY).unwrap();
        assert_eq!(none.predicted_positives(), 0);
        let all = ConfusionMatrix::from_scored(&records, f64::NEG_INFINITY).unwrap();
        assert_eq!(all.predicted_negatives(), 0);
    }
}
