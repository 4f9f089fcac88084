//! Evaluator traits and the timing wrapper
//!
//! This module defines the seams between the scoring pipeline and the
//! individual metrics:
//! - `Evaluator`: what the pipeline calls, `calculate(url) -> MetricResult`
//! - `MetricScorer`: what a metric implements, a bare score computation
//! - `Timed`: adapts a `MetricScorer` into an `Evaluator` by measuring latency

use crate::models::{MetricName, MetricResult};
use anyhow::Result;
use std::time::Instant;
use tracing::debug;

/// An evaluator for one metric
///
/// Implementations may fail or even panic; the scoring pipeline isolates
/// every call.
pub trait Evaluator {
    /// Which metric this evaluator produces
    fn name(&self) -> MetricName;

    /// Compute the metric for an artifact URL
    fn calculate(&self, url: &str) -> Result<MetricResult>;
}

/// A metric computation without timing
///
/// # Example Implementation
///
/// ```ignore
/// pub struct StarsScorer;
///
/// impl MetricScorer for StarsScorer {
///     fn name(&self) -> MetricName {
///         MetricName::RampUpTime
///     }
///
///     fn score(&self, url: &str) -> Result<Option<f64>> {
///         Ok(Some(0.5))
///     }
/// }
///
/// let evaluator = Timed::new(StarsScorer);
/// ```
pub trait MetricScorer {
    fn name(&self) -> MetricName;

    /// `Ok(None)` when the metric has no signal for this artifact
    fn score(&self, url: &str) -> Result<Option<f64>>;
}

/// Times a `MetricScorer`. Scorer errors become `score: None` with the
/// elapsed latency still reported.
pub struct Timed<S> {
    scorer: S,
}

impl<S: MetricScorer> Timed<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }
}

impl<S: MetricScorer> Evaluator for Timed<S> {
    fn name(&self) -> MetricName {
        self.scorer.name()
    }

    fn calculate(&self, url: &str) -> Result<MetricResult> {
        let start = Instant::now();
        let score = match self.scorer.score(url) {
            Ok(score) => score,
            Err(e) => {
                debug!("{} scorer failed for {}: {:#}", self.scorer.name(), url, e);
                None
            }
        };
        let latency_ms = start.elapsed().as_millis() as u64;
        Ok(MetricResult::new(score, Some(latency_ms)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<f64>);

    impl MetricScorer for Fixed {
        fn name(&self) -> MetricName {
            MetricName::License
        }

        fn score(&self, _url: &str) -> Result<Option<f64>> {
            Ok(self.0)
        }
    }

    struct Broken;

    impl MetricScorer for Broken {
        fn name(&self) -> MetricName {
            MetricName::SizeScore
        }

        fn score(&self, _url: &str) -> Result<Option<f64>> {
            anyhow::bail!("network down")
        }
    }

    #[test]
    fn test_timed_reports_score_and_latency() {
        let evaluator = Timed::new(Fixed(Some(0.8)));
        assert_eq!(evaluator.name(), MetricName::License);
        let result = evaluator.calculate("u").unwrap();
        assert_eq!(result.score, Some(0.8));
        assert!(result.latency_ms.is_some());
    }

    #[test]
    fn test_timed_maps_error_to_missing_score() {
        let evaluator = Timed::new(Broken);
        let result = evaluator.calculate("u").unwrap();
        assert_eq!(result.score, None);
        assert!(result.latency_ms.is_some());
    }
}
