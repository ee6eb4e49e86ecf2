// ============================================================
// Layer 2 — AnalyzeUseCase
// ============================================================
// Statistics for text the caller pasted or supplied directly.
// Blank input is rejected as InvalidInput; everything else is
// cleaned by the same pipeline as fetched documents.

use crate::data::pipeline::TextPipeline;
use crate::domain::{error::DigestError, stats::TextStats};

pub struct AnalyzeUseCase {
    pipeline: TextPipeline,
}

impl AnalyzeUseCase {
    pub fn new(pipeline: TextPipeline) -> Self {
        Self { pipeline }
    }

    pub fn analyze(&self, text: &str) -> Result<TextStats, DigestError> {
        if text.trim().is_empty() {
            return Err(DigestError::invalid("Text input cannot be empty"));
        }

        let stats = self.pipeline.stats(text);
        tracing::debug!(words = stats.word_count, sentences = stats.sentence_count, "Analyzed text");
        Ok(stats)
    }
}
