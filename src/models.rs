//! Core data models for trustscore
//!
//! These models are shared by the evaluators, the scoring pipeline
//! and the NDJSON reporter.

use serde::{Deserialize, Serialize};

/// The fixed set of metrics every artifact is scored on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    RampUpTime,
    BusFactor,
    License,
    PerformanceClaims,
    SizeScore,
    DatasetAndCodeScore,
    DatasetQuality,
    CodeQuality,
}

impl MetricName {
    /// All metrics, in output-record order
    pub const ALL: [MetricName; 8] = [
        MetricName::RampUpTime,
        MetricName::BusFactor,
        MetricName::PerformanceClaims,
        MetricName::License,
        MetricName::SizeScore,
        MetricName::DatasetAndCodeScore,
        MetricName::DatasetQuality,
        MetricName::CodeQuality,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::RampUpTime => "ramp_up_time",
            MetricName::BusFactor => "bus_factor",
            MetricName::License => "license",
            MetricName::PerformanceClaims => "performance_claims",
            MetricName::SizeScore => "size_score",
            MetricName::DatasetAndCodeScore => "dataset_and_code_score",
            MetricName::DatasetQuality => "dataset_quality",
            MetricName::CodeQuality => "code_quality",
        }
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw output of one evaluator call
///
/// `score: None` means the metric could not be computed;
/// `latency_ms: None` means the call was not timed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricResult {
    pub score: Option<f64>,
    pub latency_ms: Option<u64>,
}

impl MetricResult {
    pub fn new(score: Option<f64>, latency_ms: Option<u64>) -> Self {
        Self { score, latency_ms }
    }

    /// A scored result with measured latency
    pub fn scored(score: f64, latency_ms: u64) -> Self {
        Self::new(Some(score), Some(latency_ms))
    }
}

/// Artifact category written to every record
pub const MODEL_CATEGORY: &str = "MODEL";

/// One NDJSON line. Field order is part of the output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub name: String,
    pub category: String,
    #[serde(rename = "NET_SCORE")]
    pub net_score: f64,
    pub ramp_up_time: f64,
    pub bus_factor: f64,
    pub performance_claims: f64,
    pub license: f64,
    pub size_score: f64,
    pub dataset_and_code_score: f64,
    pub dataset_quality: f64,
    pub code_quality: f64,
    pub latency: u64,
}

/// Round to three decimal places, the precision of every score in the output.
///
/// Ties on the scaled value round away from zero (`f64::round`), so
/// `0.0045` becomes `0.005`.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
