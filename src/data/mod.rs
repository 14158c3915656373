//! Data domain: loading, cleaning, re-bucketing and encoding the census table.

pub mod domain;
pub mod features;
pub mod rebucket;
pub mod service;

pub use domain::{CensusRecord, Dataset, DatasetId};
pub use features::{DesignMatrix, FeatureEncoder};
