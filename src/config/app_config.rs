//! Run-level configuration support
//!
//! Loads optional overrides from `trustscore.toml` or `.trustscorerc.json`
//! in the working directory, or from an explicit `--config` path.
//!
//! # Configuration Format
//!
//! ```toml
//! # trustscore.toml
//!
//! [scoring]
//! claims_threshold = 0.5
//!
//! [scoring.weights]
//! ramp_up_time = 0.2
//! license = 0.1
//!
//! [hub]
//! base_url = "https://huggingface.co"
//! timeout_secs = 10
//! ```

use crate::config::{ConfigError, ScoringConfig};
use crate::hub::HubConfig;
use crate::models::MetricName;
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// `[scoring]` section as written in the file
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ScoringSection {
    /// Per-metric weight overrides
    #[serde(default)]
    weights: BTreeMap<MetricName, f64>,

    /// Override for the performance_claims threshold
    #[serde(default)]
    claims_threshold: Option<f64>,
}

/// File layout before validation
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    scoring: ScoringSection,

    #[serde(default)]
    hub: HubConfig,
}

/// Validated configuration for one run
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub scoring: ScoringConfig,
    pub hub: HubConfig,
}

impl TryFrom<RawConfig> for AppConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let mut scoring = ScoringConfig::default();
        for (name, weight) in raw.scoring.weights {
            scoring.set_weight(name, weight)?;
        }
        if let Some(threshold) = raw.scoring.claims_threshold {
            scoring.set_claims_threshold(threshold)?;
        }
        if !scoring.is_normalized() {
            warn!(
                "Metric weights sum to {:.3}, not 1.0; NET_SCORE is divided by the weight sum",
                scoring.total_weight()
            );
        }
        Ok(Self {
            scoring,
            hub: raw.hub,
        })
    }
}

/// Load configuration for a run.
///
/// An explicit path must exist and parse. Without one, searches the
/// working directory for:
/// 1. `trustscore.toml`
/// 2. `.trustscorerc.json`
///
/// Returns defaults if no config file is found.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_file(path).with_context(|| format!("Failed to load {}", path.display()));
    }

    for name in ["trustscore.toml", ".trustscorerc.json"] {
        let path = dir.join(name);
        if path.exists() {
            let config =
                load_file(&path).with_context(|| format!("Failed to load {}", path.display()))?;
            debug!("Loaded config from {}", path.display());
            return Ok(config);
        }
    }

    debug!("No config file found, using defaults");
    Ok(AppConfig::default())
}

fn load_file(path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let raw: RawConfig = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };
    Ok(AppConfig::try_from(raw)?)
}
