// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// system works with: raw and cleaned documents, statistics,
// summaries and the digest that bundles them together.
//
// Rules for this layer:
//   - NO HTTP types (axum / reqwest) allowed here
//   - NO file I/O or network calls
//   - Only plain data, invariants and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Raw and cleaned documents
pub mod document;

// Statistics record computed from a cleaned document
pub mod stats;

// Extractive summary (first N sentences)
pub mod summary;

// The pipeline output and the request that asks for it
pub mod digest;

// Typed error kinds shared by every layer
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
