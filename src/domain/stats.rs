// ============================================================
// Layer 3 — TextStats Domain Type
// ============================================================
// A value record describing a cleaned document:
//   - char_count          characters in the cleaned text
//   - word_count          whitespace-delimited tokens
//   - sentence_count      sentences found by the splitter
//   - avg_word_length     letters per word (0 when no words);
//                         a punctuation-only token such as "---"
//                         is still a word, with length 0
//   - avg_sentence_length words per sentence (0 when no sentences)
//   - most_common_words   top-N case-folded words with counts
//
// The record is built once through `TextStats::from_counts`
// and never mutated afterwards. The zero guards live here so
// every caller gets them for free.

use serde::{Deserialize, Serialize};

/// One entry of the most-common-words table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word:  String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self { word: word.into(), count }
    }
}

/// Statistics for one cleaned document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub char_count:          usize,
    pub word_count:          usize,
    pub sentence_count:      usize,
    pub avg_word_length:     f64,
    pub avg_sentence_length: f64,
    pub most_common_words:   Vec<WordCount>,
}

impl TextStats {
    /// Build a stats record from raw counts.
    ///
    /// `total_word_chars` is the summed length of every word.
    /// Averages are rounded to two decimal places.
    pub fn from_counts(
        char_count:        usize,
        word_count:        usize,
        sentence_count:    usize,
        total_word_chars:  usize,
        most_common_words: Vec<WordCount>,
    ) -> Self {
        let avg_word_length = if word_count > 0 {
            round2(total_word_chars as f64 / word_count as f64)
        } else {
            0.0
        };

        let avg_sentence_length = if sentence_count > 0 {
            round2(word_count as f64 / sentence_count as f64)
        } else {
            0.0
        };

        Self {
            char_count,
            word_count,
            sentence_count,
            avg_word_length,
            avg_sentence_length,
            most_common_words,
        }
    }

    /// True when the document had no content at all
    pub fn is_empty(&self) -> bool {
        self.char_count == 0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
