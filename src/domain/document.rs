// ============================================================
// Layer 3 — Document Domain Types
// ============================================================
// A RawDocument is exactly what the fetcher returned.
// A CleanedDocument is the same text after boilerplate removal
// and whitespace normalisation. Neither keeps a reference to
// the other; both live only for the duration of one request.

use serde::{Deserialize, Serialize};

/// A document as obtained from an external source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    /// Where the text came from (URL or file path)
    pub source: String,

    /// The unmodified body text
    pub text: String,
}

impl RawDocument {
    /// Create a new RawDocument.
    ///
    /// Example:
    ///   let doc = RawDocument::new("https://www.gutenberg.org/files/1342/1342-0.txt", body);
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// Size of the body in bytes
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }
}

/// Text with Gutenberg header/footer removed and whitespace normalised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedDocument {
    pub text: String,
}

impl CleanedDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Number of characters (not bytes) in the cleaned text
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
