//! Evaluation of a binary scorer: threshold classification, confusion matrix,
//! summary metrics, ROC sweep and AUC.
//!
//! Every operation here is a pure function of its input records.

pub mod auc;
pub mod classifier;
pub mod confusion;
pub mod domain;
pub mod metrics;
pub mod report;
pub mod roc;
pub mod service;

pub use classifier::{classify, Threshold};
pub use confusion::ConfusionMatrix;
pub use domain::{Label, RocPoint, ScoredRecord};
pub use metrics::MetricsSummary;
pub use report::{ConfusionTable, EvalReport};
pub use roc::RocCurve;
