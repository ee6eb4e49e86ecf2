// ============================================================
// Layer 4 — Sentence and Word Splitter
// ============================================================
// Splits cleaned text into sentences and words.
//
// Sentence rule:
//   A sentence ends at a terminator ('.', '!', '?' by default)
//   that is followed by whitespace or the end of the text.
//   Runs such as "...", "?!" or '."' count as ONE terminator,
//   so ellipses do not inflate the sentence count.
//   "3.14" and "e.g.x" do not split because no whitespace
//   follows the terminator.
//
// Any trailing text without a terminator is its own sentence.
// Fragments with no letters or digits ("...", "* * *") are
// dropped.
//
// Example:
//   "Wait... What?! Fine."  →  ["Wait...", "What?!", "Fine."]
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

/// Default sentence terminators
pub const DEFAULT_TERMINATORS: &[char] = &['.', '!', '?'];

/// Characters that may trail a terminator and still belong to the sentence
const CLOSERS: &[char] = &['"', '\'', '\u{201D}', '\u{2019}', ')', ']'];

#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    terminators: Vec<char>,
}

impl SentenceSplitter {
    /// Create a splitter with a custom terminator set.
    /// An empty set falls back to the defaults.
    pub fn new(terminators: &[char]) -> Self {
        let terminators = if terminators.is_empty() {
            DEFAULT_TERMINATORS.to_vec()
        } else {
            terminators.to_vec()
        };
        Self { terminators }
    }

    fn is_terminator(&self, c: char) -> bool {
        self.terminators.contains(&c)
    }

    /// Split `text` into trimmed sentence slices, in order.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start     = 0usize;
        let mut chars     = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if !self.is_terminator(c) {
                continue;
            }

            // Swallow the rest of the terminator run plus closing quotes
            let mut end = i + c.len_utf8();
            while let Some(&(j, next)) = chars.peek() {
                if self.is_terminator(next) || CLOSERS.contains(&next) {
                    end = j + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            let at_boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
            if at_boundary {
                push_sentence(&text[start..end], &mut sentences);
                start = end;
            }
        }

        push_sentence(&text[start..], &mut sentences);
        sentences
    }

    /// Number of sentences in `text`
    pub fn count(&self, text: &str) -> usize {
        self.split(text).len()
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINATORS)
    }
}

fn push_sentence<'a>(candidate: &'a str, out: &mut Vec<&'a str>) {
    let trimmed = candidate.trim();
    if trimmed.chars().any(char::is_alphanumeric) {
        out.push(trimmed);
    }
}

/// Whitespace-delimited tokens, punctuation included
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// A token with surrounding punctuation removed ("world." → "world")
pub fn bare_word(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Lower-cased bare words, skipping tokens that are pure punctuation.
/// Used for frequency tables where "The" and "the." are the same word.
pub fn normalized_words(text: &str) -> Vec<String> {
    words(text)
        .map(bare_word)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}
