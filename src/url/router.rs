//! Groups an ordered URL list into model work items
//!
//! Dataset and code URLs are attached to the next model URL that follows
//! them. Anything left pending after the last model is dropped.

use crate::url::{classify, UrlKind};
use tracing::debug;

/// A model to score together with the dataset and code URLs listed before it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelItem {
    pub model_url: String,
    pub datasets: Vec<String>,
    pub code: Vec<String>,
}

impl ModelItem {
    pub fn new(model_url: impl Into<String>) -> Self {
        Self {
            model_url: model_url.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Default)]
pub struct UrlRouter;

impl UrlRouter {
    pub fn new() -> Self {
        Self
    }

    pub fn route<I, S>(&self, urls: I) -> Vec<ModelItem>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items = Vec::new();
        let mut datasets = Vec::new();
        let mut code = Vec::new();

        for url in urls {
            let url = url.as_ref().trim();
            if url.is_empty() {
                continue;
            }
            match classify(url) {
                UrlKind::Dataset => datasets.push(url.to_string()),
                UrlKind::Code => code.push(url.to_string()),
                UrlKind::Model => items.push(ModelItem {
                    model_url: url.to_string(),
                    datasets: std::mem::take(&mut datasets),
                    code: std::mem::take(&mut code),
                }),
                UrlKind::Unknown => debug!("Skipping unrecognized URL: {}", url),
            }
        }

        if !datasets.is_empty() || !code.is_empty() {
            debug!(
                "Dropping {} dataset and {} code URLs with no following model",
                datasets.len(),
                code.len()
            );
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_list(urls: &[&str]) -> Vec<ModelItem> {
        UrlRouter::new().route(urls)
    }

    #[test]
    fn test_grouping_basic() {
        let items = route_list(&[
            "https://huggingface.co/datasets/foo/bar",
            "https://github.com/acme/repo",
            "https://huggingface.co/google/gemma-3-270m",
        ]);
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert!(item.model_url.ends_with("google/gemma-3-270m"));
        assert_eq!(item.datasets, vec!["https://huggingface.co/datasets/foo/bar"]);
        assert_eq!(item.code, vec!["https://github.com/acme/repo"]);
    }

    #[test]
    fn test_skips_unknown() {
        let items = route_list(&[
            "https://example.com/whatever",
            "https://huggingface.co/google/gemma-3-270m",
        ]);
        assert_eq!(items.len(), 1);
        assert!(items[0].datasets.is_empty());
        assert!(items[0].code.is_empty());
    }

    #[test]
    fn test_multiple_models_split_groups() {
        let items = route_list(&[
            "https://huggingface.co/datasets/d1/a",
            "https://huggingface.co/google/modelA",
            "https://huggingface.co/datasets/d2/b",
            "https://github.com/foo/bar",
            "https://huggingface.co/openai/modelB",
        ]);
        assert_eq!(items.len(), 2);
        assert!(items[0].model_url.contains("google/modelA"));
        assert_eq!(items[0].datasets, vec!["https://huggingface.co/datasets/d1/a"]);
        assert!(items[1].model_url.contains("openai/modelB"));
        assert_eq!(items[1].datasets, vec!["https://huggingface.co/datasets/d2/b"]);
        assert_eq!(items[1].code, vec!["https://github.com/foo/bar"]);
    }

    #[test]
    fn test_empty_and_spaces() {
        assert!(route_list(&["", "   ", "\n"]).is_empty());
    }

    #[test]
    fn test_no_dangling_collections() {
        let items = route_list(&[
            "https://huggingface.co/datasets/d1/a",
            "https://huggingface.co/google/modelA",
            "https://huggingface.co/openai/modelB",
            "https://github.com/trailing/repo",
        ]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].datasets, vec!["https://huggingface.co/datasets/d1/a"]);
        assert!(items[1].datasets.is_empty());
        assert!(items[1].code.is_empty());
    }
}
