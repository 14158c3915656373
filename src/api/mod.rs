//! Public entry points composing the pipeline stages.

pub mod pipeline;

pub use pipeline::{evaluate_file, run_dataset, run_file, RunOptions};
