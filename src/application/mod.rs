// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal each:
//
//   digest_use_case  — validate a request, fetch the text,
//                      run the text pipeline
//   analyze_use_case — statistics for text the caller already has
//
// Rules for this layer:
//   - No text-processing rules here (that's Layer 4)
//   - No HTML, JSON shapes or printing (that's Layer 1)
//   - Only validation and workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Fetch-and-digest workflow
pub mod digest_use_case;

// Raw-text statistics workflow
pub mod analyze_use_case;
