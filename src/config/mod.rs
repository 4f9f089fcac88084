//! Configuration module for trustscore
//!
//! This module handles:
//! - The metric weight table and per-metric transforms
//! - Optional config files (trustscore.toml, .trustscorerc.json)
//! - Hub client settings

mod app_config;
mod scoring;

pub use app_config::{load_config, AppConfig};
pub use scoring::{MetricSpec, ScoringConfig, Transform, DEFAULT_CLAIMS_THRESHOLD};

use crate::models::MetricName;
use thiserror::Error;

/// Errors from building or validating configuration
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid weight {weight} for metric {metric}: weights must be finite and non-negative")]
    InvalidWeight { metric: MetricName, weight: f64 },

    #[error("Metric {0} is configured more than once")]
    DuplicateMetric(MetricName),

    #[error("Invalid claims threshold {0}: must be finite")]
    InvalidThreshold(f64),
}
