//! Training domain: the injectable model-fitting capability.

pub mod domain;
pub mod service;

pub use domain::{FitConfig, ModelFitter};
pub use service::SmartcoreLogistic;
