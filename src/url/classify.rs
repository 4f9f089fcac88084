//! URL classification
//!
//! Decides whether a URL names a Hub model, a Hub dataset, a GitHub
//! repository, or something else.

use regex::Regex;
use std::sync::OnceLock;

fn hf_dataset_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://huggingface\.co/datasets/[^/]+/[^/\s]+").expect("valid regex")
    })
}

fn hf_model_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https?://huggingface\.co/([^/]+)/[^/\s]+").expect("valid regex"))
}

fn github_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https?://github\.com/[^/]+/[^/\s]+").expect("valid regex"))
}

/// Kind of artifact a URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlKind {
    Model,
    Dataset,
    Code,
    Unknown,
}

impl std::fmt::Display for UrlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlKind::Model => write!(f, "MODEL"),
            UrlKind::Dataset => write!(f, "DATASET"),
            UrlKind::Code => write!(f, "CODE"),
            UrlKind::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Classify a URL. Surrounding whitespace is ignored.
pub fn classify(url: &str) -> UrlKind {
    let u = url.trim();
    if hf_dataset_re().is_match(u) {
        return UrlKind::Dataset;
    }
    if let Some(caps) = hf_model_re().captures(u) {
        if &caps[1] != "datasets" {
            return UrlKind::Model;
        }
    }
    if github_re().is_match(u) {
        return UrlKind::Code;
    }
    UrlKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let cases = [
            ("https://huggingface.co/google/gemma-3-270m", UrlKind::Model),
            ("https://huggingface.co/google/gemma-3-270m/tree/main", UrlKind::Model),
            ("https://huggingface.co/datasets/xlangai/AgentNet", UrlKind::Dataset),
            ("https://github.com/SkyworkAI/Matrix-Game", UrlKind::Code),
            ("https://github.com/user/repo", UrlKind::Code),
            (" https://huggingface.co/datasets/foo/bar ", UrlKind::Dataset),
            ("https://example.com/whatever", UrlKind::Unknown),
            ("not a url", UrlKind::Unknown),
        ];
        for (url, kind) in cases {
            assert_eq!(classify(url), kind, "{}", url);
        }
    }

    #[test]
    fn test_single_segment_dataset_is_not_a_model() {
        assert_eq!(classify("https://huggingface.co/datasets/foo"), UrlKind::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(UrlKind::Model.to_string(), "MODEL");
        assert_eq!(UrlKind::Unknown.to_string(), "UNKNOWN");
    }
}
