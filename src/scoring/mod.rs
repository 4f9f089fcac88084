//! Weighted Trust Scoring
//!
//! This module turns per-metric evaluator results into one net score.
//!
//! # Scoring Formula
//!
//! ```text
//! NET_SCORE = round3( Σ value × weight / Σ weight )
//!
//! Where each value:
//!   value = clamp(transform(raw), 0, 1)   if the evaluator produced a finite score
//!   value = 0.0                           on any failure (error, panic, no score)
//! ```
//!
//! # Default Weights
//!
//! - ramp_up_time: 0.15
//! - bus_factor: 0.10
//! - performance_claims: 0.15 (thresholded at 0.5 to 0 or 1)
//! - license: 0.15
//! - size_score: 0.15
//! - dataset_and_code_score: 0.10
//! - dataset_quality: 0.10
//! - code_quality: 0.10
//!
//! # Example
//!
//! All metrics at 1.0 except a failed license evaluator:
//! NET_SCORE = (1.0 - 0.15) / 1.0 = 0.85

mod aggregator;
mod invoker;

pub use aggregator::{net_score, Aggregation, Aggregator, NormalizedMetrics};
pub use invoker::{
    invoke, Invocation, InvocationOutcome, LatencyAccumulator, DEFAULT_SCORE,
};
