//! Size metric
//!
//! Smaller weight files deploy on more hardware. Sums the sizes of the
//! repository's weight files and buckets the total in GiB.

use crate::hub::{owner_and_name, HubClient, Sibling};
use crate::metrics::MetricScorer;
use crate::models::MetricName;
use crate::url::hub_model_id;
use anyhow::Result;
use regex::Regex;
use std::sync::{Arc, OnceLock};

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

fn weight_file_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^(?:pytorch_model(?:-\d{5}-of-\d{5})?\.(?:bin|safetensors)|model(?:-\d{5}-of-\d{5})?\.safetensors)$",
        )
        .expect("valid regex")
    })
}

pub struct SizeScorer {
    hub: Arc<HubClient>,
}

impl SizeScorer {
    pub fn new(hub: Arc<HubClient>) -> Self {
        Self { hub }
    }
}

impl MetricScorer for SizeScorer {
    fn name(&self) -> MetricName {
        MetricName::SizeScore
    }

    fn score(&self, url: &str) -> Result<Option<f64>> {
        let Some(model_id) = hub_model_id(url) else {
            return Ok(None);
        };
        if owner_and_name(&model_id).is_err() {
            return Ok(None);
        }
        let info = self.hub.model_info(&model_id)?;
        Ok(weight_bytes(&info.siblings).map(size_score))
    }
}

/// Total bytes of recognised weight files, `None` when unknown
pub fn weight_bytes(siblings: &[Sibling]) -> Option<u64> {
    let total: u64 = siblings
        .iter()
        .filter(|s| weight_file_re().is_match(s.rfilename.trim()))
        .filter_map(|s| s.size)
        .sum();
    if total == 0 {
        None
    } else {
        Some(total)
    }
}

/// Bucket a weight total into a score
pub fn size_score(bytes: u64) -> f64 {
    let gib = bytes as f64 / GIB;
    if gib < 1.0 {
        1.0
    } else if gib < 10.0 {
        0.75
    } else if gib < 20.0 {
        0.5
    } else if gib < 40.0 {
        0.25
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sibling(name: &str, size: Option<u64>) -> Sibling {
        Sibling {
            rfilename: name.to_string(),
            size,
        }
    }

    #[test]
    fn test_buckets() {
        assert_eq!(size_score(500 * 1024 * 1024), 1.0);
        assert_eq!(size_score(2 * 1024 * 1024 * 1024), 0.75);
        assert_eq!(size_score(15 * 1024 * 1024 * 1024), 0.5);
        assert_eq!(size_score(30 * 1024 * 1024 * 1024), 0.25);
        assert_eq!(size_score(80 * 1024 * 1024 * 1024), 0.0);
    }

    #[test]
    fn test_only_weight_files_count() {
        let siblings = vec![
            sibling("model-00001-of-00002.safetensors", Some(100)),
            sibling("model-00002-of-00002.safetensors", Some(50)),
            sibling("pytorch_model.bin", Some(25)),
            sibling("tokenizer.json", Some(1_000_000)),
            sibling("README.md", None),
        ];
        assert_eq!(weight_bytes(&siblings), Some(175));
    }

    #[test]
    fn test_unknown_size() {
        assert_eq!(weight_bytes(&[sibling("model.safetensors", None)]), None);
        assert_eq!(weight_bytes(&[]), None);
    }
}
