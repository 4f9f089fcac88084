//! Performance-claims metric
//!
//! A model "claims performance" when its README reports evaluation
//! results: any benchmark keyword appearing as a whole word.

use crate::hub::{owner_and_name, HubClient};
use crate::metrics::MetricScorer;
use crate::models::MetricName;
use crate::url::hub_model_id;
use anyhow::Result;
use regex::Regex;
use std::sync::{Arc, OnceLock};

const PERF_KEYWORDS: &[&str] = &[
    "accuracy",
    "f1",
    "precision",
    "recall",
    "auc",
    "bleu",
    "rouge",
    "mse",
    "rmse",
    "mae",
    "perplexity",
    "wer",
    "cer",
    "map",
    "results",
    "benchmark",
    "evaluation",
    "eval",
    "score",
];

fn claims_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternation = PERF_KEYWORDS
            .iter()
            .map(|kw| regex::escape(kw))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("valid regex")
    })
}

pub struct PerformanceClaimsScorer {
    hub: Arc<HubClient>,
}

impl PerformanceClaimsScorer {
    pub fn new(hub: Arc<HubClient>) -> Self {
        Self { hub }
    }
}

impl MetricScorer for PerformanceClaimsScorer {
    fn name(&self) -> MetricName {
        MetricName::PerformanceClaims
    }

    fn score(&self, url: &str) -> Result<Option<f64>> {
        let readme = hub_model_id(url)
            .filter(|id| owner_and_name(id).is_ok())
            .and_then(|id| self.hub.readme(&id).ok())
            .unwrap_or_default();
        Ok(Some(claims_score(&readme)))
    }
}

/// `1.0` when the text mentions an evaluation result, else `0.0`
pub fn claims_score(readme: &str) -> f64 {
    if readme.trim().is_empty() {
        return 0.0;
    }
    if claims_re().is_match(readme) {
        1.0
    } else {
        0.0
    }
}
