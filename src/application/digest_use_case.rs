// ============================================================
// Layer 2 — DigestUseCase
// ============================================================
// Orchestrates one request end to end:
//
//   Step 1: Validate the DigestRequest   (this file)
//   Step 2: Fetch the raw text           (TextSource, Layer 4)
//   Step 3: Run the text pipeline        (TextPipeline, Layer 4)
//
// Validation rules:
//   - url present and non-blank
//   - url parses, scheme is http or https
//   - url path ends in ".txt" (when require_txt_extension)
//   - preview_len in 1..=MAX_PREVIEW_LEN
//   - summary_sentences in 1..=MAX_SUMMARY_SENTENCES

use std::time::Instant;

use reqwest::Url;

use crate::data::pipeline::TextPipeline;
use crate::domain::{
    digest::{Digest, DigestRequest},
    document::RawDocument,
    error::DigestError,
    traits::TextSource,
};

/// Largest preview a caller may ask for, in characters
pub const MAX_PREVIEW_LEN: usize = 20_000;

/// Largest summary a caller may ask for, in sentences
pub const MAX_SUMMARY_SENTENCES: usize = 50;

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub url:               Url,
    pub preview_len:       usize,
    pub summary_sentences: usize,
}

pub struct DigestUseCase<S> {
    source:                S,
    pipeline:              TextPipeline,
    require_txt_extension: bool,
}

impl<S: TextSource> DigestUseCase<S> {
    pub fn new(source: S, pipeline: TextPipeline, require_txt_extension: bool) -> Self {
        Self { source, pipeline, require_txt_extension }
    }

    pub fn pipeline(&self) -> &TextPipeline {
        &self.pipeline
    }

    /// Validate, fetch and digest.
    pub async fn execute(&self, request: DigestRequest) -> Result<Digest, DigestError> {
        let started = Instant::now();

        // ── Step 1: Validate ─────────────────────────────────────────────────
        let valid = self.validate(&request)?;

        // ── Step 2: Fetch ────────────────────────────────────────────────────
        let raw = self.source.fetch(valid.url.as_str()).await.map_err(|e| {
            tracing::warn!("Fetch failed: {e}");
            e
        })?;

        // ── Step 3: Pipeline ─────────────────────────────────────────────────
        let digest = self.digest_document(&raw, valid.preview_len, valid.summary_sentences);

        tracing::info!(
            url       = %valid.url,
            bytes     = raw.byte_len(),
            words     = digest.stats.word_count,
            sentences = digest.stats.sentence_count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Digest complete"
        );
        Ok(digest)
    }

    /// Run the pipeline over a document that is already in hand.
    pub fn digest_document(
        &self,
        raw:               &RawDocument,
        preview_len:       usize,
        summary_sentences: usize,
    ) -> Digest {
        self.pipeline.process(raw, preview_len, summary_sentences)
    }

    /// Check a request at the boundary and fill in default lengths.
    pub fn validate(&self, request: &DigestRequest) -> Result<ValidatedRequest, DigestError> {
        let raw_url = request
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DigestError::invalid("Missing 'url' in request"))?;

        let url = Url::parse(raw_url)
            .map_err(|e| DigestError::invalid(format!("Invalid URL '{raw_url}': {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(DigestError::invalid(format!(
                "URL scheme must be http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.require_txt_extension && !url.path().to_ascii_lowercase().ends_with(".txt") {
            return Err(DigestError::invalid("URL must point to a .txt file"));
        }

        let defaults = self.pipeline.config();
        let preview_len = request.preview_len.unwrap_or(defaults.preview_len);
        if !(1..=MAX_PREVIEW_LEN).contains(&preview_len) {
            return Err(DigestError::invalid(format!(
                "preview_len must be between 1 and {MAX_PREVIEW_LEN}"
            )));
        }

        let summary_sentences = request.summary_sentences.unwrap_or(defaults.summary_sentences);
        if !(1..=MAX_SUMMARY_SENTENCES).contains(&summary_sentences) {
            return Err(DigestError::invalid(format!(
                "summary_sentences must be between 1 and {MAX_SUMMARY_SENTENCES}"
            )));
        }

        Ok(ValidatedRequest { url, preview_len, summary_sentences })
    }
}
