//! Trustscore - trust scoring for pre-trained ML models
//!
//! Classifies Hugging Face URLs, groups dataset and code links with the
//! model that follows them, runs one evaluator per metric and folds the
//! results into a weighted NET_SCORE emitted as NDJSON.

pub mod cli;
pub mod config;
pub mod hub;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod reporters;
pub mod scoring;
pub mod url;
