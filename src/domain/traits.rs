// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits, never
// against concrete loaders, so a stub source can stand in for
// the network in tests.

use std::future::Future;

use crate::domain::document::RawDocument;
use crate::domain::error::FetchError;

// ─── TextSource ───────────────────────────────────────────────────────────────
/// Anything that can turn a URL into raw document text.
///
/// Implementations:
///   - HttpTextSource → downloads over HTTP(S) with reqwest
///   - test stubs     → return canned text or a canned error
pub trait TextSource: Send + Sync + 'static {
    /// Fetch the body behind `url`.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<RawDocument, FetchError>> + Send;
}
