// ============================================================
// Layer 4 — Text Pipeline
// ============================================================
// Runs the straight-line transforms over one raw document:
//
//   Step 1: Strip Gutenberg header/footer  (boilerplate.rs)
//   Step 2: Normalise whitespace           (preprocessor.rs)
//   Step 3: Split into sentences           (splitter.rs)
//   Step 4: Compute statistics             (statistics.rs)
//   Step 5: Take the preview               (preview.rs)
//   Step 6: Take the summary               (summarizer.rs)
//
// The pipeline performs no I/O and holds no mutable state, so
// one instance can be shared by every request.

use serde::{Deserialize, Serialize};

use crate::data::{
    boilerplate::{BoilerplateStripper, DEFAULT_END_MARKERS, DEFAULT_START_MARKERS},
    preprocessor::Preprocessor,
    preview::{preview, DEFAULT_PREVIEW_LEN},
    splitter::{SentenceSplitter, DEFAULT_TERMINATORS},
    statistics::{self, DEFAULT_TOP_WORDS},
    summarizer::{summarize, DEFAULT_SUMMARY_SENTENCES},
};
use crate::domain::{
    digest::{BoilerplateReport, Digest},
    document::{CleanedDocument, RawDocument},
    stats::TextStats,
};

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// Marker phrases and terminators vary between Gutenberg editions,
// so they are data rather than hard-coded rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub start_markers:     Vec<String>,
    pub end_markers:       Vec<String>,
    pub terminators:       Vec<char>,
    pub preview_len:       usize,
    pub summary_sentences: usize,
    pub top_words:         usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            start_markers:     DEFAULT_START_MARKERS.iter().map(|s| s.to_string()).collect(),
            end_markers:       DEFAULT_END_MARKERS.iter().map(|s| s.to_string()).collect(),
            terminators:       DEFAULT_TERMINATORS.to_vec(),
            preview_len:       DEFAULT_PREVIEW_LEN,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            top_words:         DEFAULT_TOP_WORDS,
        }
    }
}

// ─── TextPipeline ─────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct TextPipeline {
    stripper:     BoilerplateStripper,
    preprocessor: Preprocessor,
    splitter:     SentenceSplitter,
    config:       PipelineConfig,
}

impl TextPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            stripper:     BoilerplateStripper::new(
                config.start_markers.as_slice(),
                config.end_markers.as_slice(),
            ),
            preprocessor: Preprocessor::new(),
            splitter:     SentenceSplitter::new(&config.terminators),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Steps 1–2 only: boilerplate removal plus normalisation.
    pub fn clean(&self, raw_text: &str) -> CleanedDocument {
        self.clean_with_report(raw_text).0
    }

    fn clean_with_report(&self, raw_text: &str) -> (CleanedDocument, BoilerplateReport) {
        let (body, report) = self.stripper.strip(raw_text);
        let mut text = self.preprocessor.clean(&body);

        // Unwrapping can join a phrase split across lines, or pull one
        // into the middle of a paragraph. Each scrub shortens the text.
        while self.stripper.contains_marker(&text) {
            text = self.preprocessor.clean(&self.stripper.scrub(&text));
        }

        (CleanedDocument::new(text), report)
    }

    /// Run the whole pipeline over `raw`.
    pub fn process(
        &self,
        raw:               &RawDocument,
        preview_len:       usize,
        summary_sentences: usize,
    ) -> Digest {
        // ── Steps 1–2: Clean ─────────────────────────────────────────────────
        let (cleaned, boilerplate) = self.clean_with_report(&raw.text);

        // ── Step 3: Sentences, shared by statistics and summary ─────────────
        let sentences = self.splitter.split(cleaned.as_str());

        // ── Steps 4–6 ────────────────────────────────────────────────────────
        let stats   = statistics::compute(cleaned.as_str(), &sentences, self.config.top_words);
        let preview = preview(cleaned.as_str(), preview_len).to_string();
        let summary = summarize(&sentences, summary_sentences);

        tracing::debug!(
            source    = %raw.source,
            raw_bytes = raw.byte_len(),
            words     = stats.word_count,
            sentences = stats.sentence_count,
            "Pipeline finished"
        );

        Digest {
            source: raw.source.clone(),
            cleaned,
            stats,
            preview,
            summary,
            boilerplate,
        }
    }

    /// `process` with the configured preview and summary lengths.
    pub fn process_default(&self, raw: &RawDocument) -> Digest {
        self.process(raw, self.config.preview_len, self.config.summary_sentences)
    }

    /// Statistics of the cleaned form of `raw_text`.
    pub fn stats(&self, raw_text: &str) -> TextStats {
        let cleaned   = self.clean(raw_text);
        let sentences = self.splitter.split(cleaned.as_str());
        statistics::compute(cleaned.as_str(), &sentences, self.config.top_words)
    }
}

impl Default for TextPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
