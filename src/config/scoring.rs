//! Metric weight table and per-metric transforms
//!
//! The table is built once and handed to the aggregator; nothing mutates
//! it after construction.

use crate::config::ConfigError;
use crate::models::{round3, MetricName};

/// Raw claims score at or above which `performance_claims` counts as verified
pub const DEFAULT_CLAIMS_THRESHOLD: f64 = 0.5;

/// Post-processing applied to a metric's raw score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Round to three decimals
    Round,
    /// `1.0` if the raw score reaches the threshold, else `0.0`
    Threshold(f64),
}

impl Transform {
    pub fn apply(&self, raw: f64) -> f64 {
        match self {
            Transform::Round => round3(raw),
            Transform::Threshold(t) => {
                if raw >= *t {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Weight and transform for a single metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSpec {
    pub name: MetricName,
    pub weight: f64,
    pub transform: Transform,
}

impl MetricSpec {
    pub fn new(name: MetricName, weight: f64) -> Self {
        Self {
            name,
            weight,
            transform: Transform::Round,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

/// The set of scored metrics with their weights
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    metrics: Vec<MetricSpec>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            metrics: vec![
                MetricSpec::new(MetricName::RampUpTime, 0.15),
                MetricSpec::new(MetricName::BusFactor, 0.10),
                MetricSpec::new(MetricName::PerformanceClaims, 0.15)
                    .with_transform(Transform::Threshold(DEFAULT_CLAIMS_THRESHOLD)),
                MetricSpec::new(MetricName::License, 0.15),
                MetricSpec::new(MetricName::SizeScore, 0.15),
                MetricSpec::new(MetricName::DatasetAndCodeScore, 0.10),
                MetricSpec::new(MetricName::DatasetQuality, 0.10),
                MetricSpec::new(MetricName::CodeQuality, 0.10),
            ],
        }
    }
}

impl ScoringConfig {
    /// Build a table from explicit specs.
    ///
    /// Rejects negative or non-finite weights and duplicate metrics.
    pub fn new(metrics: Vec<MetricSpec>) -> Result<Self, ConfigError> {
        for (i, spec) in metrics.iter().enumerate() {
            if !spec.weight.is_finite() || spec.weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    metric: spec.name,
                    weight: spec.weight,
                });
            }
            if metrics[..i].iter().any(|s| s.name == spec.name) {
                return Err(ConfigError::DuplicateMetric(spec.name));
            }
            if let Transform::Threshold(t) = spec.transform {
                if !t.is_finite() {
                    return Err(ConfigError::InvalidThreshold(t));
                }
            }
        }
        Ok(Self { metrics })
    }

    pub fn metrics(&self) -> &[MetricSpec] {
        &self.metrics
    }

    pub fn get(&self, name: MetricName) -> Option<&MetricSpec> {
        self.metrics.iter().find(|s| s.name == name)
    }

    pub fn total_weight(&self) -> f64 {
        self.metrics.iter().map(|s| s.weight).sum()
    }

    /// Validate that weights sum to 1.0 (with tolerance)
    pub fn is_normalized(&self) -> bool {
        (self.total_weight() - 1.0).abs() < 0.001
    }

    /// Replace the weight of one metric, keeping its transform
    pub(crate) fn set_weight(&mut self, name: MetricName, weight: f64) -> Result<(), ConfigError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConfigError::InvalidWeight {
                metric: name,
                weight,
            });
        }
        match self.metrics.iter_mut().find(|s| s.name == name) {
            Some(spec) => spec.weight = weight,
            None => self.metrics.push(MetricSpec::new(name, weight)),
        }
        Ok(())
    }

    /// Change the `performance_claims` threshold
    pub(crate) fn set_claims_threshold(&mut self, threshold: f64) -> Result<(), ConfigError> {
        if !threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        if let Some(spec) = self
            .metrics
            .iter_mut()
            .find(|s| s.name == MetricName::PerformanceClaims)
        {
            spec.transform = Transform::Threshold(threshold);
        }
        Ok(())
    }
}
