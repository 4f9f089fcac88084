//! Metric evaluators
//!
//! The scoring pipeline only sees the `Evaluator` trait. This module also
//! ships the default evaluator for each metric:
//!
//! - `ramp_up_time` - documentation, popularity and tutorial tags (Hub API)
//! - `license` - License section of the README
//! - `performance_claims` - benchmark keywords in the README
//! - `size_score` - total weight-file size
//! - `code_quality` - pylint ratings of repository Python files
//! - `bus_factor`, `dataset_and_code_score`, `dataset_quality` - fixed 1.0
//!
//! Each default is a `MetricScorer` wrapped in `Timed`.

mod base;
mod code_quality;
mod license;
mod performance;
mod ramp_up;
mod size;

pub use base::{Evaluator, MetricScorer, Timed};
pub use code_quality::{parse_pylint_score, CodeQualityScorer};
pub use license::{license_score_from_readme, license_section, LicenseScorer};
pub use performance::{claims_score, PerformanceClaimsScorer};
pub use ramp_up::{ramp_up_from_info, RampUpScorer};
pub use size::{size_score, weight_bytes, SizeScorer};

use crate::hub::HubClient;
use crate::models::MetricName;
use anyhow::Result;
use std::sync::Arc;

/// Scores every artifact with the same value
pub struct ConstantScorer {
    name: MetricName,
    value: f64,
}

impl ConstantScorer {
    pub fn new(name: MetricName, value: f64) -> Self {
        Self { name, value }
    }
}

impl MetricScorer for ConstantScorer {
    fn name(&self) -> MetricName {
        self.name
    }

    fn score(&self, _url: &str) -> Result<Option<f64>> {
        Ok(Some(self.value))
    }
}

/// Evaluators keyed by metric, at most one per metric
#[derive(Default)]
pub struct EvaluatorSet {
    evaluators: Vec<Box<dyn Evaluator>>,
}

impl EvaluatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default evaluators, all sharing one Hub client
    pub fn defaults(hub: Arc<HubClient>) -> Self {
        Self::new()
            .with(Timed::new(RampUpScorer::new(Arc::clone(&hub))))
            .with(Timed::new(ConstantScorer::new(MetricName::BusFactor, 1.0)))
            .with(Timed::new(LicenseScorer::new(Arc::clone(&hub))))
            .with(Timed::new(PerformanceClaimsScorer::new(Arc::clone(&hub))))
            .with(Timed::new(SizeScorer::new(Arc::clone(&hub))))
            .with(Timed::new(ConstantScorer::new(
                MetricName::DatasetAndCodeScore,
                1.0,
            )))
            .with(Timed::new(ConstantScorer::new(MetricName::DatasetQuality, 1.0)))
            .with(Timed::new(CodeQualityScorer::new(hub)))
    }

    /// Add an evaluator, replacing any existing one for the same metric
    pub fn with(mut self, evaluator: impl Evaluator + 'static) -> Self {
        self.insert(Box::new(evaluator));
        self
    }

    pub fn insert(&mut self, evaluator: Box<dyn Evaluator>) {
        let name = evaluator.name();
        self.evaluators.retain(|e| e.name() != name);
        self.evaluators.push(evaluator);
    }

    pub fn get(&self, name: MetricName) -> Option<&dyn Evaluator> {
        self.evaluators
            .iter()
            .find(|e| e.name() == name)
            .map(|e| &**e)
    }

    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }
}
