//! Weighted aggregation of per-metric results
//!
//! Runs every configured metric through the invoker and folds the
//! normalized values into one net score.

use crate::config::ScoringConfig;
use crate::metrics::EvaluatorSet;
use crate::models::{round3, MetricName};
use crate::scoring::invoker::{invoke, Invocation, LatencyAccumulator};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Normalized value per configured metric
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedMetrics {
    values: BTreeMap<MetricName, f64>,
}

impl NormalizedMetrics {
    pub fn insert(&mut self, name: MetricName, value: f64) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: MetricName) -> Option<f64> {
        self.values.get(&name).copied()
    }

    /// Value for `name`, `0.0` when the metric was not configured
    pub fn value_or_default(&self, name: MetricName) -> f64 {
        self.get(name).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(MetricName, f64)> for NormalizedMetrics {
    fn from_iter<I: IntoIterator<Item = (MetricName, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Everything computed for one artifact
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub metrics: NormalizedMetrics,
    pub net_score: f64,
    /// Sum of evaluator latencies, before the output floor is applied
    pub latency_ms: u64,
    /// One entry per configured metric, in configuration order
    pub invocations: Vec<Invocation>,
}

impl Aggregation {
    /// Invocations that fell back to the default score
    pub fn faults(&self) -> impl Iterator<Item = &Invocation> {
        self.invocations.iter().filter(|i| i.outcome.is_fault())
    }
}

/// Weighted average of the metrics present in `metrics`, rounded to three
/// decimals. `0.0` when the present weights sum to zero.
pub fn net_score(config: &ScoringConfig, metrics: &NormalizedMetrics) -> f64 {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    for spec in config.metrics() {
        if let Some(value) = metrics.get(spec.name) {
            weighted += value * spec.weight;
            total_weight += spec.weight;
        }
    }

    if total_weight > 0.0 {
        round3(weighted / total_weight)
    } else {
        0.0
    }
}

/// Scores artifacts against a fixed weight table and evaluator set
pub struct Aggregator {
    config: ScoringConfig,
    evaluators: EvaluatorSet,
}

impl Aggregator {
    pub fn new(config: ScoringConfig, evaluators: EvaluatorSet) -> Self {
        Self { config, evaluators }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Invoke every configured metric for `url` and combine the results
    pub fn aggregate(&self, url: &str) -> Aggregation {
        let mut latency = LatencyAccumulator::new();
        let invocations: Vec<Invocation> = self
            .config
            .metrics()
            .iter()
            .map(|spec| invoke(spec, self.evaluators.get(spec.name), url, &mut latency))
            .collect();

        let metrics: NormalizedMetrics = invocations
            .iter()
            .map(|inv| (inv.metric, inv.value))
            .collect();
        let net_score = net_score(&self.config, &metrics);

        let fault_count = invocations.iter().filter(|i| i.outcome.is_fault()).count();
        debug!(
            "Aggregated {} metrics for {} ({} defaulted, {}ms)",
            invocations.len(),
            url,
            fault_count,
            latency.total_ms()
        );
        info!("NET_SCORE {:.3} for {}", net_score, url);

        Aggregation {
            metrics,
            net_score,
            latency_ms: latency.total_ms(),
            invocations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MetricSpec;
    use crate::metrics::Evaluator;
    use crate::models::MetricResult;

    struct Fixed {
        name: MetricName,
        score: f64,
        latency: u64,
    }

    impl Evaluator for Fixed {
        fn name(&self) -> MetricName {
            self.name
        }

        fn calculate(&self, _url: &str) -> anyhow::Result<MetricResult> {
            Ok(MetricResult::scored(self.score, self.latency))
        }
    }

    struct Failing(MetricName);

    impl Evaluator for Failing {
        fn name(&self) -> MetricName {
            self.0
        }

        fn calculate(&self, _url: &str) -> anyhow::Result<MetricResult> {
            anyhow::bail!("unreachable host")
        }
    }

    fn uniform(score: f64, latency: u64) -> EvaluatorSet {
        MetricName::ALL.iter().fold(EvaluatorSet::new(), |set, &name| {
            set.with(Fixed {
                name,
                score,
                latency,
            })
        })
    }

    #[test]
    fn test_all_perfect() {
        let aggregator = Aggregator::new(ScoringConfig::default(), uniform(1.0, 10));
        let agg = aggregator.aggregate("https://huggingface.co/bert-base-uncased");
        assert_eq!(agg.net_score, 1.0);
        assert_eq!(agg.latency_ms, 80);
        assert_eq!(agg.metrics.len(), 8);
        assert_eq!(agg.faults().count(), 0);
    }

    #[test]
    fn test_failed_metric_weighs_as_zero() {
        let evaluators = uniform(1.0, 10).with(Failing(MetricName::License));
        let aggregator = Aggregator::new(ScoringConfig::default(), evaluators);
        let agg = aggregator.aggregate("u");
        assert_eq!(agg.metrics.get(MetricName::License), Some(0.0));
        // License weighs 0.15 and still counts in the denominator
        assert_eq!(agg.net_score, 0.85);
        assert_eq!(agg.latency_ms, 70);
        let faults: Vec<_> = agg.faults().map(|i| i.metric).collect();
        assert_eq!(faults, vec![MetricName::License]);
    }

    #[test]
    fn test_missing_evaluators_default() {
        let aggregator = Aggregator::new(ScoringConfig::default(), EvaluatorSet::new());
        let agg = aggregator.aggregate("u");
        assert_eq!(agg.metrics.len(), 8);
        assert_eq!(agg.net_score, 0.0);
        assert_eq!(agg.latency_ms, 0);
        assert_eq!(agg.faults().count(), 8);
    }

    #[test]
    fn test_weighted_mix() {
        let metrics: NormalizedMetrics = [
            (MetricName::RampUpTime, 0.5),
            (MetricName::BusFactor, 1.0),
            (MetricName::PerformanceClaims, 0.0),
            (MetricName::License, 1.0),
            (MetricName::SizeScore, 0.75),
            (MetricName::DatasetAndCodeScore, 1.0),
            (MetricName::DatasetQuality, 1.0),
            (MetricName::CodeQuality, 0.333),
        ]
        .into_iter()
        .collect();
        // 0.075 + 0.1 + 0 + 0.15 + 0.1125 + 0.1 + 0.1 + 0.0333 = 0.6708
        assert_eq!(net_score(&ScoringConfig::default(), &metrics), 0.671);
    }

    #[test]
    fn test_zero_weight_sum_is_zero() {
        let config = ScoringConfig::new(vec![
            MetricSpec::new(MetricName::License, 0.0),
            MetricSpec::new(MetricName::BusFactor, 0.0),
        ])
        .unwrap();
        let metrics: NormalizedMetrics =
            [(MetricName::License, 1.0), (MetricName::BusFactor, 1.0)]
                .into_iter()
                .collect();
        assert_eq!(net_score(&config, &metrics), 0.0);

        let aggregator = Aggregator::new(config, uniform(1.0, 1));
        assert_eq!(aggregator.aggregate("u").net_score, 0.0);
    }

    #[test]
    fn test_reduced_metric_set_divides_by_present_weight() {
        let config = ScoringConfig::new(vec![
            MetricSpec::new(MetricName::License, 0.15),
            MetricSpec::new(MetricName::SizeScore, 0.15),
        ])
        .unwrap();
        let evaluators = EvaluatorSet::new()
            .with(Fixed {
                name: MetricName::License,
                score: 1.0,
                latency: 2,
            })
            .with(Fixed {
                name: MetricName::SizeScore,
                score: 0.5,
                latency: 3,
            });
        let agg = Aggregator::new(config, evaluators).aggregate("u");
        assert_eq!(agg.net_score, 0.75);
        assert_eq!(agg.latency_ms, 5);
        assert_eq!(agg.metrics.get(MetricName::CodeQuality), None);
        assert_eq!(agg.metrics.value_or_default(MetricName::CodeQuality), 0.0);
    }
}
