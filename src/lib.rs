// lib.rs - census income classifier evaluation
pub mod api;
pub mod common;
pub mod data;
pub mod evaluation;
pub mod inference;
pub mod training;

pub use api::{evaluate_file, run_dataset, run_file, RunOptions};
pub use common::{EvalError, EvalResult};
