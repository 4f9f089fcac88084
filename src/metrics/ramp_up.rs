//! Ramp-up time metric
//!
//! Approximates how quickly a newcomer can start using a model from Hub
//! metadata: documentation presence, popularity and tutorial tags.

use crate::hub::{owner_and_name, HubClient, ModelInfo};
use crate::metrics::MetricScorer;
use crate::models::{round3, MetricName};
use crate::url::hub_model_id;
use anyhow::Result;
use std::sync::Arc;

const README_WEIGHT: f64 = 0.6;
const LIKES_WEIGHT: f64 = 0.4;
const EXAMPLES_BONUS: f64 = 0.1;
/// Documentation signal when neither a README nor a model card exists
const NO_DOCS_SIGNAL: f64 = 0.3;

pub struct RampUpScorer {
    hub: Arc<HubClient>,
}

impl RampUpScorer {
    pub fn new(hub: Arc<HubClient>) -> Self {
        Self { hub }
    }
}

impl MetricScorer for RampUpScorer {
    fn name(&self) -> MetricName {
        MetricName::RampUpTime
    }

    fn score(&self, url: &str) -> Result<Option<f64>> {
        let Some(model_id) = hub_model_id(url) else {
            return Ok(None);
        };
        if owner_and_name(&model_id).is_err() {
            return Ok(None);
        }
        let info = self.hub.model_info(&model_id)?;
        Ok(Some(ramp_up_from_info(&info)))
    }
}

/// Combine documentation, popularity (likes, log-compressed so ~1k likes
/// saturates) and tutorial tags into a `[0, 1]` score
pub fn ramp_up_from_info(info: &ModelInfo) -> f64 {
    let likes = info.likes.unwrap_or(0) as f64;
    let likes_score = ((1.0 + likes).log10() / 3.0).clamp(0.0, 1.0);

    let readme_score = if info.has_readme() || info.has_card() {
        1.0
    } else {
        NO_DOCS_SIGNAL
    };

    let has_examples = info.tags.iter().any(|t| {
        let t = t.to_lowercase();
        t.contains("example") || t.contains("tutorial")
    });
    let bonus = if has_examples { EXAMPLES_BONUS } else { 0.0 };

    round3((README_WEIGHT * readme_score + LIKES_WEIGHT * likes_score + bonus).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::Sibling;

    #[test]
    fn test_undocumented_unpopular_model() {
        let info = ModelInfo::default();
        assert_eq!(ramp_up_from_info(&info), 0.18);
    }

    #[test]
    fn test_documented_popular_model_saturates() {
        let info = ModelInfo {
            likes: Some(5000),
            tags: vec!["Tutorial".to_string()],
            siblings: vec![Sibling {
                rfilename: "README.md".to_string(),
                size: None,
            }],
            card_data: None,
        };
        assert_eq!(ramp_up_from_info(&info), 1.0);
    }

    #[test]
    fn test_readme_only() {
        let info = ModelInfo {
            likes: Some(0),
            siblings: vec![Sibling {
                rfilename: "readme.md".to_string(),
                size: None,
            }],
            ..Default::default()
        };
        assert_eq!(ramp_up_from_info(&info), 0.6);
    }
}
