// ============================================================
// Layer 3 — Digest and DigestRequest
// ============================================================
// `DigestRequest` is the single input shape accepted by every
// outer surface (query string, JSON body, CLI flags).
// `Digest` is what the text pipeline produces for one document.

use serde::{Deserialize, Serialize};

use crate::domain::document::CleanedDocument;
use crate::domain::stats::TextStats;
use crate::domain::summary::Summary;

/// Which parts of the Gutenberg wrapper were found and removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoilerplateReport {
    pub header_removed: bool,
    pub footer_removed: bool,
}

/// Full result of running the pipeline over one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Digest {
    /// URL or path the raw text came from
    pub source:      String,
    pub cleaned:     CleanedDocument,
    pub stats:       TextStats,
    pub preview:     String,
    pub summary:     Summary,
    pub boilerplate: BoilerplateReport,
}

/// A request to fetch and digest one text.
///
/// Lengths left as `None` fall back to the configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestRequest {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub preview_len: Option<usize>,

    #[serde(default)]
    pub summary_sentences: Option<usize>,
}

impl DigestRequest {
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_preview_len(mut self, preview_len: usize) -> Self {
        self.preview_len = Some(preview_len);
        self
    }

    pub fn with_summary_sentences(mut self, summary_sentences: usize) -> Self {
        self.summary_sentences = Some(summary_sentences);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialises_with_missing_fields() {
        let req: DigestRequest = serde_json::from_str(r#"{"url":"https://a/b.txt"}"#).unwrap();
        assert_eq!(req.url.as_deref(), Some("https://a/b.txt"));
        assert_eq!(req.preview_len, None);
        assert_eq!(req.summary_sentences, None);
    }

    #[test]
    fn test_request_builder() {
        let req = DigestRequest::for_url("x.txt")
            .with_preview_len(10)
            .with_summary_sentences(2);
        assert_eq!(req.preview_len, Some(10));
        assert_eq!(req.summary_sentences, Some(2));
    }
}
