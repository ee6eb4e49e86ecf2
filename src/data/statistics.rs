// ============================================================
// Layer 4 — Text Statistics
// ============================================================
// Computes a TextStats record for cleaned text.
//
//   char_count      = Unicode scalar values in the text
//   word_count      = whitespace-delimited tokens
//   sentence_count  = sentences found by the splitter
//   word length     = letters/digits of a token once the
//                     surrounding punctuation is trimmed, so
//                     "..." counts as a word of length 0
//
// The sentences are passed in rather than recomputed so the
// pipeline splits the document only once.

use std::collections::HashMap;

use crate::data::splitter::{bare_word, normalized_words, words};
use crate::domain::stats::{TextStats, WordCount};

/// How many entries the most-common-words table holds by default
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Compute statistics for `text` given its already-split sentences.
pub fn compute(text: &str, sentences: &[&str], top_words: usize) -> TextStats {
    let char_count = text.chars().count();

    let mut word_count       = 0usize;
    let mut total_word_chars = 0usize;
    for token in words(text) {
        word_count       += 1;
        total_word_chars += bare_word(token).chars().count();
    }

    TextStats::from_counts(
        char_count,
        word_count,
        sentences.len(),
        total_word_chars,
        most_common_words(text, top_words),
    )
}

/// The `top` most frequent case-folded words.
///
/// Ties keep the order in which the words first appeared.
pub fn most_common_words(text: &str, top: usize) -> Vec<WordCount> {
    if top == 0 {
        return Vec::new();
    }

    // word → (count, first position)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (pos, word) in normalized_words(text).into_iter().enumerate() {
        counts.entry(word).or_insert((0, pos)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(top)
        .map(|(word, count, _)| WordCount::new(word, count))
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::splitter::SentenceSplitter;

    fn stats_for(text: &str) -> TextStats {
        let sentences = SentenceSplitter::default().split(text);
        compute(text, &sentences, DEFAULT_TOP_WORDS)
    }

    #[test]
    fn test_scenario_counts() {
        let s = stats_for("Hello world. This is a test. Another sentence here!");
        assert_eq!(s.char_count, 51);
        assert_eq!(s.word_count, 9);
        assert_eq!(s.sentence_count, 3);
        assert_eq!(s.avg_word_length, 4.44);
        assert_eq!(s.avg_sentence_length, 3.0);
    }

    #[test]
    fn test_empty_text_is_all_zero() {
        let s = stats_for("");
        assert_eq!(s, TextStats::default());
    }

    #[test]
    fn test_words_without_terminator() {
        let s = stats_for("no terminator here");
        assert_eq!(s.word_count, 3);
        assert_eq!(s.sentence_count, 1);
        assert_eq!(s.avg_sentence_length, 3.0);
    }

    #[test]
    fn test_punctuation_only_text_has_no_sentences() {
        let s = stats_for("... ---");
        assert_eq!(s.word_count, 2);
        assert_eq!(s.sentence_count, 0);
        assert_eq!(s.avg_sentence_length, 0.0);
        assert_eq!(s.avg_word_length, 0.0);
    }

    #[test]
    fn test_punctuation_tokens_lower_average_word_length() {
        // "cat" (3) + "--" (0) + "dog." (3) over three tokens
        let s = stats_for("cat -- dog.");
        assert_eq!(s.word_count, 3);
        assert_eq!(s.avg_word_length, 2.0);
    }

    #[test]
    fn test_most_common_words_order() {
        let top = most_common_words("b a b c a b", 2);
        assert_eq!(top, vec![WordCount::new("b", 3), WordCount::new("a", 2)]);
    }

    #[test]
    fn test_most_common_ties_keep_first_occurrence() {
        let top = most_common_words("Zeta alpha, zeta. ALPHA beta", 3);
        assert_eq!(
            top,
            vec![WordCount::new("zeta", 2), WordCount::new("alpha", 2), WordCount::new("beta", 1)]
        );
    }

    #[test]
    fn test_top_zero_is_empty() {
        assert!(most_common_words("a a a", 0).is_empty());
    }
}
