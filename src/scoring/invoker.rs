//! Single-metric invocation with fault isolation
//!
//! Every evaluator call goes through [`invoke`]. Whatever the evaluator
//! does (returns an error, panics, is missing, or produces no usable score),
//! the caller gets a value in `[0, 1]`; failures become `0.0` and add no
//! latency. What happened is kept in the returned [`InvocationOutcome`].

use crate::config::MetricSpec;
use crate::metrics::Evaluator;
use crate::models::MetricName;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, warn};

/// Value substituted for any failed metric
pub const DEFAULT_SCORE: f64 = 0.0;

/// How one evaluator call went
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationOutcome {
    /// A usable score was produced
    Scored,
    /// The evaluator ran but had no score for this artifact
    NoScore,
    /// The evaluator returned a non-finite score
    InvalidScore(f64),
    /// The evaluator returned an error
    Failed(String),
    /// The evaluator panicked
    Panicked(String),
    /// No evaluator is registered for the metric
    Unavailable,
}

impl InvocationOutcome {
    pub fn is_fault(&self) -> bool {
        !matches!(self, InvocationOutcome::Scored)
    }
}

/// Result of invoking one metric
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub metric: MetricName,
    /// Normalized value, always finite and in `[0, 1]`
    pub value: f64,
    /// Latency added to the accumulator by this call
    pub latency_ms: u64,
    pub outcome: InvocationOutcome,
}

impl Invocation {
    fn fallback(metric: MetricName, outcome: InvocationOutcome) -> Self {
        Self {
            metric,
            value: DEFAULT_SCORE,
            latency_ms: 0,
            outcome,
        }
    }
}

/// Running total of evaluator latency for one artifact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatencyAccumulator {
    total_ms: u64,
}

impl LatencyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, ms: u64) {
        self.total_ms = self.total_ms.saturating_add(ms);
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }
}

/// Invoke the evaluator for `spec.name` on `url`.
///
/// Never fails and never panics. On success the metric's transform is
/// applied, the result is clamped to `[0, 1]` (an evaluator reporting
/// `1.7` yields `1.0`), and the reported latency is added to `latency`.
pub fn invoke(
    spec: &MetricSpec,
    evaluator: Option<&dyn Evaluator>,
    url: &str,
    latency: &mut LatencyAccumulator,
) -> Invocation {
    let metric = spec.name;

    let Some(evaluator) = evaluator else {
        warn!("No evaluator registered for {}", metric);
        return Invocation::fallback(metric, InvocationOutcome::Unavailable);
    };

    let result = match catch_unwind(AssertUnwindSafe(|| evaluator.calculate(url))) {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            warn!("Evaluator {} failed for {}: {:#}", metric, url, e);
            return Invocation::fallback(metric, InvocationOutcome::Failed(format!("{:#}", e)));
        }
        Err(panic_info) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            warn!("Evaluator {} panicked for {}: {}", metric, url, panic_msg);
            return Invocation::fallback(metric, InvocationOutcome::Panicked(panic_msg));
        }
    };

    let raw = match result.score {
        None => {
            debug!("Evaluator {} produced no score for {}", metric, url);
            return Invocation::fallback(metric, InvocationOutcome::NoScore);
        }
        Some(raw) if !raw.is_finite() => {
            warn!("Evaluator {} returned invalid score {} for {}", metric, raw, url);
            return Invocation::fallback(metric, InvocationOutcome::InvalidScore(raw));
        }
        Some(raw) => raw,
    };

    let value = spec.transform.apply(raw).clamp(0.0, 1.0);
    let latency_ms = result.latency_ms.unwrap_or(0);
    latency.add(latency_ms);

    debug!(
        "Metric {} = {} (raw {}, {}ms)",
        metric, value, raw, latency_ms
    );

    Invocation {
        metric,
        value,
        latency_ms,
        outcome: InvocationOutcome::Scored,
    }
}
