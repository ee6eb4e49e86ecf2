// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from a downloaded .txt file to the finished
// digest. The text pipeline flows in this order:
//
//   Gutenberg .txt (URL or file)
//       │
//       ▼
//   loader              → fetches the raw text
//       │
//       ▼
//   BoilerplateStripper → drops the licence header and footer
//       │
//       ▼
//   Preprocessor        → normalises whitespace, unwraps lines
//       │
//       ▼
//   SentenceSplitter    → sentences and words
//       │
//       ├──▶ statistics  → counts, averages, common words
//       ├──▶ preview     → first N characters
//       └──▶ summarizer  → first N sentences
//
// `pipeline` wires the steps together. `frequency` is the
// stand-alone n-gram analyzer used by the `ngrams` command.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Fetches text over HTTP or from a local file
pub mod loader;

/// Removes the Project Gutenberg header and footer
pub mod boilerplate;

/// Normalises whitespace
pub mod preprocessor;

/// Splits text into sentences and words
pub mod splitter;

/// Character / word / sentence statistics
pub mod statistics;

/// Fixed-length character preview
pub mod preview;

/// First-N-sentences extractive summary
pub mod summarizer;

/// N-gram counts and probabilities
pub mod frequency;

/// The full text pipeline
pub mod pipeline;
