//! Hub HTTP client
//!
//! Uses ureq (sync HTTP), no async runtime.

use crate::hub::{HubError, HubResult};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

fn default_base_url() -> String {
    "https://huggingface.co".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Hub endpoint and request timeout
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HubConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Model metadata returned by `/api/models/<id>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub siblings: Vec<Sibling>,
    #[serde(default, rename = "cardData")]
    pub card_data: Option<serde_json::Value>,
}

/// A file in the model repository
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sibling {
    #[serde(default)]
    pub rfilename: String,
    #[serde(default)]
    pub size: Option<u64>,
}

impl ModelInfo {
    pub fn has_readme(&self) -> bool {
        self.siblings
            .iter()
            .any(|s| s.rfilename.eq_ignore_ascii_case("readme.md"))
    }

    pub fn has_card(&self) -> bool {
        match &self.card_data {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Object(map)) => !map.is_empty(),
            Some(_) => true,
        }
    }
}

/// Sync Hub client
pub struct HubClient {
    config: HubConfig,
    agent: ureq::Agent,
}

fn make_agent(timeout_secs: u64) -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // Status codes are mapped to HubError::Status
        .timeout_global(Some(Duration::from_secs(timeout_secs)))
        .build()
        .new_agent()
}

impl HubClient {
    pub fn new(config: HubConfig) -> Self {
        let agent = make_agent(config.timeout_secs);
        Self { config, agent }
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    pub(crate) fn model_info_url(&self, model_id: &str) -> String {
        format!(
            "{}/api/models/{}?blobs=true",
            self.config.base_url.trim_end_matches('/'),
            model_id
        )
    }

    pub(crate) fn raw_file_url(&self, model_id: &str, path: &str) -> String {
        format!(
            "{}/{}/raw/main/{}",
            self.config.base_url.trim_end_matches('/'),
            model_id,
            path
        )
    }

    /// Fetch model metadata
    pub fn model_info(&self, model_id: &str) -> HubResult<ModelInfo> {
        let url = self.model_info_url(model_id);
        let response = self.get(&url)?;
        response
            .into_body()
            .read_json()
            .map_err(|e| HubError::ParseError(e.to_string()))
    }

    /// Fetch a raw text file from the model repository's main branch
    pub fn raw_file(&self, model_id: &str, path: &str) -> HubResult<String> {
        let url = self.raw_file_url(model_id, path);
        let response = self.get(&url)?;
        response
            .into_body()
            .read_to_string()
            .map_err(|e| HubError::ParseError(e.to_string()))
    }

    pub fn readme(&self, model_id: &str) -> HubResult<String> {
        self.raw_file(model_id, "README.md")
    }

    fn get(&self, url: &str) -> HubResult<ureq::http::Response<ureq::Body>> {
        debug!("GET {}", url);
        let response = self.agent.get(url).call().map_err(|e| HubError::RequestFailed {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(HubError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

/// Split a Hub model id into `(owner, name)`.
///
/// Ids without an owner (legacy ids such as `bert-base-uncased`) and
/// unresolved URLs are rejected.
pub(crate) fn owner_and_name(model_id: &str) -> HubResult<(&str, &str)> {
    if model_id.starts_with("http") {
        return Err(HubError::InvalidModelId(model_id.to_string()));
    }
    match model_id.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok((owner, name)),
        _ => Err(HubError::InvalidModelId(model_id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = HubConfig::default();
        assert_eq!(config.base_url, "https://huggingface.co");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_urls() {
        let client = HubClient::new(HubConfig {
            base_url: "http://localhost:8080/".to_string(),
            timeout_secs: 1,
        });
        assert_eq!(
            client.model_info_url("google/gemma-3-270m"),
            "http://localhost:8080/api/models/google/gemma-3-270m?blobs=true"
        );
        assert_eq!(
            client.raw_file_url("google/gemma-3-270m", "README.md"),
            "http://localhost:8080/google/gemma-3-270m/raw/main/README.md"
        );
    }

    #[test]
    fn test_owner_and_name() {
        assert_eq!(owner_and_name("google/gemma").unwrap(), ("google", "gemma"));
        assert!(owner_and_name("bert-base-uncased").is_err());
        assert!(owner_and_name("https://example.com/a/b").is_err());
        assert!(owner_and_name("/gemma").is_err());
    }

    #[test]
    fn test_model_info_parsing() {
        let json = r#"{
            "likes": 12,
            "tags": ["pytorch", "Example"],
            "siblings": [{"rfilename": "README.md"}, {"rfilename": "model.safetensors", "size": 1024}],
            "cardData": {"license": "mit"}
        }"#;
        let info: ModelInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.likes, Some(12));
        assert!(info.has_readme());
        assert!(info.has_card());
        assert_eq!(info.siblings[1].size, Some(1024));
    }

    #[test]
    fn test_model_info_tolerates_nulls() {
        let info: ModelInfo = serde_json::from_str(r#"{"likes": null, "cardData": null}"#).unwrap();
        assert_eq!(info.likes, None);
        assert!(!info.has_readme());
        assert!(!info.has_card());
    }
}
