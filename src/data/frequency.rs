// ============================================================
// Layer 4 — N-gram Frequency Analyzer
// ============================================================
// Counts n-grams over a token sequence and turns counts into
// (optionally smoothed) probabilities.
//
// Example with n = 2 over ["the", "cat", "the", "cat"]:
//   ("the", "cat") → 2
//   ("cat", "the") → 1
//
// Probability with additive smoothing k:
//   P(g) = (count(g) + k) / (total + k * distinct)

use std::collections::HashMap;

/// One n-gram, stored as its tokens in order
pub type NGram = Vec<String>;

pub struct FrequencyAnalyzer;

impl FrequencyAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Count every window of `n` consecutive tokens.
    /// `n == 0` or `n > tokens.len()` gives an empty table.
    pub fn calculate_ngrams(&self, tokens: &[String], n: usize) -> HashMap<NGram, usize> {
        let mut counts = HashMap::new();
        if n == 0 {
            return counts;
        }
        for window in tokens.windows(n) {
            *counts.entry(window.to_vec()).or_insert(0) += 1;
        }
        counts
    }

    /// Convert counts to probabilities with additive smoothing.
    pub fn calculate_probabilities(
        &self,
        counts:    &HashMap<NGram, usize>,
        smoothing: f64,
    ) -> HashMap<NGram, f64> {
        let total: usize = counts.values().sum();
        let denom = total as f64 + smoothing * counts.len() as f64;
        if denom <= 0.0 {
            return HashMap::new();
        }
        counts
            .iter()
            .map(|(gram, &count)| (gram.clone(), (count as f64 + smoothing) / denom))
            .collect()
    }

    /// The `k` most frequent n-grams, most frequent first.
    /// Ties are ordered lexicographically so output is stable.
    pub fn top(&self, counts: &HashMap<NGram, usize>, k: usize) -> Vec<(NGram, usize)> {
        let mut ranked: Vec<(NGram, usize)> = counts
            .iter()
            .map(|(gram, &count)| (gram.clone(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(k);
        ranked
    }
}

impl Default for FrequencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
