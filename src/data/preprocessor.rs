// ============================================================
// Layer 4 — Text Preprocessor (Normalisation)
// ============================================================
// Normalises whitespace in downloaded Gutenberg text.
//
// Gutenberg .txt files are hard-wrapped at ~70 columns, use
// CRLF line endings and separate paragraphs with blank lines.
// They may also carry a byte order mark, tabs, non-breaking
// spaces and stray control characters.
//
// Cleaning steps (applied in order):
//   1. CRLF and lone CR become LF
//   2. Tabs, NBSP, zero-width spaces, BOM and other control
//      characters become plain spaces
//   3. Each paragraph (run of non-blank lines) is unwrapped
//      into a single line with single spaces between words
//   4. Paragraphs are joined with exactly one blank line
//
// The output has no leading or trailing whitespace, and
// running `clean` on its own output returns it unchanged.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

#[derive(Debug, Clone, Copy)]
pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Normalise whitespace in `text` and return an owned String.
    pub fn clean(&self, text: &str) -> String {

        // ── Step 1: Unify line endings ────────────────────────────────────────
        let unified = text.replace("\r\n", "\n").replace('\r', "\n");

        // ── Step 2: Normalise individual characters ───────────────────────────
        let mapped: String = unified
            .chars()
            .map(|c| match c {
                '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                c if c.is_control() && c != '\n' => ' ',
                c => c,
            })
            .collect();

        // ── Step 3: Unwrap paragraphs ─────────────────────────────────────────
        // A blank line closes the current paragraph; every other line
        // contributes its words to it.
        let mut paragraphs: Vec<String> = Vec::new();
        let mut current:    Vec<&str>   = Vec::new();

        for line in mapped.split('\n') {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.extend(line.split_whitespace());
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join(" "));
        }

        // ── Step 4: One blank line between paragraphs ────────────────────────
        paragraphs.join("\n\n")
    }
}

/// Implement Default so Preprocessor can be created with Preprocessor::default()
impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
