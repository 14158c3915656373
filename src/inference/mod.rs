//! Inference domain: the probability scorer contract and batch scoring.

pub mod domain;
pub mod service;

pub use domain::{LogisticScorer, Scorer};
