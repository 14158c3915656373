//! Shared utilities that glue the pipeline stages together.
pub mod config;
pub mod error;
pub mod ids;
pub mod log;
pub mod time;

pub use error::{ErrorCode, EvalError, EvalResult};
