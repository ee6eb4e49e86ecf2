// ============================================================
// Layer 3 — Summary Domain Type
// ============================================================
// An extractive summary: the first K sentences of the cleaned
// document, verbatim and in their original order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub sentences: Vec<String>,
}

impl Summary {
    pub fn new(sentences: Vec<String>) -> Self {
        Self { sentences }
    }

    /// The summary as one string, sentences separated by a single space
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
