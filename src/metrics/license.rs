//! License compatibility metric
//!
//! Reads the `License` section of the model README. LGPL-2.1 is the
//! compatible license; copyleft GPL/AGPL, proprietary and non-commercial
//! terms are incompatible. Anything unclear scores 0.5.

use crate::hub::{owner_and_name, HubClient};
use crate::metrics::MetricScorer;
use crate::models::MetricName;
use crate::url::hub_model_id;
use anyhow::Result;
use regex::Regex;
use std::sync::{Arc, OnceLock};
use tracing::debug;

const COMPATIBLE: f64 = 1.0;
const INCOMPATIBLE: f64 = 0.0;
const UNCLEAR: f64 = 0.5;

fn license_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^[ \t]*#{1,6}[ \t]*license\b").expect("valid regex"))
}

fn any_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[ \t]*#{1,6}[ \t]+\S").expect("valid regex"))
}

fn version_2_1_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b2\.1\b").expect("valid regex"))
}

fn gpl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(?:agpl|gpl)\b").expect("valid regex"))
}

fn restrictive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\bproprietary\b|\bnon[- ]?commercial\b|\bno license\b").expect("valid regex")
    })
}

pub struct LicenseScorer {
    hub: Arc<HubClient>,
}

impl LicenseScorer {
    pub fn new(hub: Arc<HubClient>) -> Self {
        Self { hub }
    }
}

impl MetricScorer for LicenseScorer {
    fn name(&self) -> MetricName {
        MetricName::License
    }

    fn score(&self, url: &str) -> Result<Option<f64>> {
        let Some(model_id) = hub_model_id(url) else {
            return Ok(Some(UNCLEAR));
        };
        if owner_and_name(&model_id).is_err() {
            return Ok(Some(UNCLEAR));
        }
        match self.hub.readme(&model_id) {
            Ok(readme) => Ok(Some(license_score_from_readme(&readme))),
            Err(e) => {
                debug!("No README for {}: {}", model_id, e);
                Ok(Some(UNCLEAR))
            }
        }
    }
}

/// Extract the body of the first `# License` section, up to the next heading
pub fn license_section(markdown: &str) -> Option<String> {
    let mut lines = markdown.lines();
    lines.by_ref().find(|line| license_heading_re().is_match(line))?;
    let body: Vec<&str> = lines
        .take_while(|line| !any_heading_re().is_match(line))
        .collect();
    Some(body.join("\n"))
}

/// Score a README's license section
pub fn license_score_from_readme(markdown: &str) -> f64 {
    let Some(section) = license_section(markdown) else {
        return UNCLEAR;
    };
    let section = section.to_lowercase();
    let mentions_lgpl = section.contains("lgpl");

    if mentions_lgpl && version_2_1_re().is_match(&section) {
        return COMPATIBLE;
    }
    if !mentions_lgpl && gpl_re().is_match(&section) {
        return INCOMPATIBLE;
    }
    if restrictive_re().is_match(&section) {
        return INCOMPATIBLE;
    }
    UNCLEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lgpl_21_is_compatible() {
        let md = "# Model\nintro\n## License\nReleased under the LGPL 2.1 terms.\n## Usage\nMIT elsewhere\n";
        assert_eq!(license_score_from_readme(md), 1.0);
    }

    #[test]
    fn test_gpl_is_incompatible() {
        let md = "## License\nThis model is GPL-3.0 licensed.\n";
        assert_eq!(license_score_from_readme(md), 0.0);
    }

    #[test]
    fn test_non_commercial_is_incompatible() {
        let md = "### LICENSE\nCC BY-NC: non-commercial use only\n";
        assert_eq!(license_score_from_readme(md), 0.0);
    }

    #[test]
    fn test_missing_section_is_unclear() {
        assert_eq!(license_score_from_readme("# Model\nApache-2.0\n"), 0.5);
    }

    #[test]
    fn test_permissive_is_unclear() {
        assert_eq!(license_score_from_readme("## License\napache-2.0\n"), 0.5);
    }

    #[test]
    fn test_section_stops_at_next_heading() {
        let md = "## License\nmit\n## Training\nGPL tooling was used\n";
        assert_eq!(license_section(md).as_deref(), Some("mit"));
        assert_eq!(license_score_from_readme(md), 0.5);
    }
}
