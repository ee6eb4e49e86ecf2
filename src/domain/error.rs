// ============================================================
// Layer 3 — Error Kinds
// ============================================================
// Two failure families reach the outer layers:
//   - InvalidInput: the caller sent something unusable
//   - Fetch:        the external text source let us down
//
// The text pipeline itself has no error type: it never fails
// on well-formed string input.

use thiserror::Error;

/// Failures of the external fetcher.
///
/// Messages are stored as strings so the domain stays free of
/// HTTP client types and the error can be cloned freely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("'{url}' answered with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("'{url}' is not a text document (content type '{content_type}')")]
    NotText { url: String, content_type: String },

    #[error("'{url}' is larger than the {limit} byte limit")]
    TooLarge { url: String, limit: usize },

    #[error("error fetching '{url}': {message}")]
    Network { url: String, message: String },
}

/// Errors surfaced by the use cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl DigestError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// True for errors caused by the caller rather than the source
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
