// ============================================================
// Layer 4 — Extractive Summarizer
// ============================================================
// Takes the first N sentences verbatim, in original order.
// Fewer sentences than requested → all of them.

use crate::domain::summary::Summary;

/// Default number of sentences in a summary
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

pub fn summarize(sentences: &[&str], count: usize) -> Summary {
    Summary::new(
        sentences
            .iter()
            .take(count)
            .map(|s| s.to_string())
            .collect(),
    )
}
