//! Hugging Face Hub access
//!
//! A small sync client for the two endpoints the default evaluators need:
//! model metadata (`/api/models/<id>`) and raw repository files
//! (`/<id>/raw/main/<path>`).
//!
//! # Example
//!
//! ```rust,ignore
//! use trustscore::hub::{HubClient, HubConfig};
//!
//! let client = HubClient::new(HubConfig::default());
//! let info = client.model_info("google-bert/bert-base-uncased")?;
//! let readme = client.readme("google-bert/bert-base-uncased")?;
//! ```

mod client;

pub use client::{HubClient, HubConfig, ModelInfo, Sibling};
pub(crate) use client::owner_and_name;

use thiserror::Error;

/// Errors that can occur talking to the Hub
#[derive(Error, Debug)]
pub enum HubError {
    #[error("Request to {url} failed: {message}")]
    RequestFailed { url: String, message: String },

    #[error("Hub returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to parse Hub response: {0}")]
    ParseError(String),

    #[error("Not a Hub model id: {0}")]
    InvalidModelId(String),
}

pub type HubResult<T> = Result<T, HubError>;
