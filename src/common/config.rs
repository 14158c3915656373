//! Runtime configuration loaded from the process environment.
//!
//! CLI flags override individual fields after `AppCfg::load`.

use std::env;
use std::path::PathBuf;

use crate::common::error::{EvalError, EvalResult};

pub const DEFAULT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_TRAIN_FRACTION: f64 = 0.7;
pub const DEFAULT_SEED: u64 = 101;

/// Snapshot of configuration values consumed by the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct AppCfg {
    pub data_path: PathBuf,
    pub seed: u64,
    pub train_fraction: f64,
    pub threshold: f64,
    pub log_level: String,
}

impl Default for AppCfg {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./data/adult_sal.csv"),
            seed: DEFAULT_SEED,
            train_fraction: DEFAULT_TRAIN_FRACTION,
            threshold: DEFAULT_THRESHOLD,
            log_level: "info".to_string(),
        }
    }
}

impl AppCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> EvalResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary key lookup (environment in production).
    pub fn from_lookup<F>(lookup: F) -> EvalResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cfg = Self {
            data_path: lookup("INCOME_EVAL_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            seed: parse_or(&lookup, "INCOME_EVAL_SEED", defaults.seed)?,
            train_fraction: parse_or(
                &lookup,
                "INCOME_EVAL_TRAIN_FRACTION",
                defaults.train_fraction,
            )?,
            threshold: parse_or(&lookup, "INCOME_EVAL_THRESHOLD", defaults.threshold)?,
            log_level: lookup("INCOME_EVAL_LOG_LEVEL").unwrap_or(defaults.log_level),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> EvalResult<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(EvalError::invalid(format!(
                "threshold {} must lie in [0, 1]",
                self.threshold
            )));
        }
        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(EvalError::invalid(format!(
                "train fraction {} must lie in (0, 1)",
                self.train_fraction
            )));
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> EvalResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| EvalError::invalid(format!("{key}: cannot parse `{raw}`"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let cfg = AppCfg::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, AppCfg::default());
    }

    #[test]
    fn env_values_override_defaults() {
        let cfg = AppCfg::from_lookup(lookup_from(&[
            ("INCOME_EVAL_DATA_PATH", "/tmp/adult.csv"),
            ("INCOME_EVAL_SEED", "7"),
            ("INCOME_EVAL_TRAIN_FRACTION", "0.8"),
            ("INCOME_EVAL_THRESHOLD", "0.3"),
            ("INCOME_EVAL_LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(cfg.data_path, PathBuf::from("/tmp/adult.csv"));
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.train_fraction, 0.8);
        assert_eq!(cfg.threshold, 0.3);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = AppCfg::from_lookup(lookup_from(&[("INCOME_EVAL_THRESHOLD", "1.5")]));
        assert!(matches!(err, Err(EvalError::InvalidInput(_))));

        let err = AppCfg::from_lookup(lookup_from(&[("INCOME_EVAL_TRAIN_FRACTION", "1")]));
        assert!(matches!(err, Err(EvalError::InvalidInput(_))));

        let err = AppCfg::from_lookup(lookup_from(&[("INCOME_EVAL_SEED", "abc")]));
        assert!(matches!(err, Err(EvalError::InvalidInput(_))));
    }
}
