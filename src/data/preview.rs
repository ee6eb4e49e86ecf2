// ============================================================
// Layer 4 — Preview
// ============================================================
// The first N characters of the cleaned text.
// Counting is per `char`, so a multi-byte character is never
// cut in half.

/// Default preview length in characters
pub const DEFAULT_PREVIEW_LEN: usize = 500;

/// Return at most `max_chars` characters from the start of `text`.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None                => text,
    }
}
