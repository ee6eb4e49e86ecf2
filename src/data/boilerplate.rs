// ============================================================
// Layer 4 — Gutenberg Boilerplate Stripper
// ============================================================
// Project Gutenberg wraps every text in a licence header and
// footer. The body sits between two marker lines such as:
//
//   *** START OF THE PROJECT GUTENBERG EBOOK PRIDE AND PREJUDICE ***
//   ...the actual book...
//   *** END OF THE PROJECT GUTENBERG EBOOK PRIDE AND PREJUDICE ***
//
// Rules:
//   - start marker found → drop everything up to the end of
//     the marker's line
//   - end marker found after it → drop everything from the
//     start of the marker's line
//   - no markers → text passes through unchanged
//   - any other line inside the body that carries a marker
//     phrase (a repeated header, a second book) is dropped
//
// Cleaned text must never contain a marker phrase, otherwise
// cleaning it a second time would cut it again. `scrub`
// removes phrases that only appear once lines are unwrapped.
//
// Matching is ASCII case-insensitive. Wording differs between
// editions ("THIS" vs "THE"), so the phrases are configurable.

use std::borrow::Cow;

use crate::domain::digest::BoilerplateReport;

/// Default phrases that open the body of a Gutenberg text
pub const DEFAULT_START_MARKERS: &[&str] = &[
    "START OF THIS PROJECT GUTENBERG EBOOK",
    "START OF THE PROJECT GUTENBERG EBOOK",
    "*END*THE SMALL PRINT",
];

/// Default phrases that close the body of a Gutenberg text
pub const DEFAULT_END_MARKERS: &[&str] = &[
    "END OF THIS PROJECT GUTENBERG EBOOK",
    "END OF THE PROJECT GUTENBERG EBOOK",
];

#[derive(Debug, Clone)]
pub struct BoilerplateStripper {
    /// Upper-cased start phrases
    start_markers: Vec<String>,
    /// Upper-cased end phrases
    end_markers: Vec<String>,
}

impl BoilerplateStripper {
    pub fn new<S: AsRef<str>>(start_markers: &[S], end_markers: &[S]) -> Self {
        let upper = |markers: &[S]| -> Vec<String> {
            markers
                .iter()
                .map(|m| m.as_ref().trim().to_ascii_uppercase())
                .filter(|m| !m.is_empty())
                .collect()
        };
        Self {
            start_markers: upper(start_markers),
            end_markers:   upper(end_markers),
        }
    }

    /// Strip the header and footer, returning the body slice and
    /// a report of what was removed.
    pub fn strip<'a>(&self, text: &'a str) -> (Cow<'a, str>, BoilerplateReport) {
        // ASCII upper-casing keeps byte offsets identical, so positions
        // found in `upper` are valid char boundaries in `text`.
        let upper = text.to_ascii_uppercase();

        let start_hit = earliest(&upper, 0, &self.start_markers);
        let body_start = match start_hit {
            Some(pos) => line_end(text, pos),
            None      => 0,
        };

        let end_hit = earliest(&upper, body_start, &self.end_markers);
        let body_end = match end_hit {
            Some(pos) => line_start(text, body_start, pos),
            None      => text.len(),
        };

        let report = BoilerplateReport {
            header_removed: start_hit.is_some(),
            footer_removed: end_hit.is_some(),
        };

        tracing::debug!(
            header_removed = report.header_removed,
            footer_removed = report.footer_removed,
            body_bytes     = body_end - body_start,
            "Boilerplate scan finished"
        );

        (self.drop_marker_lines(&text[body_start..body_end]), report)
    }

    /// True when `text` contains any start or end phrase.
    pub fn contains_marker(&self, text: &str) -> bool {
        let upper = text.to_ascii_uppercase();
        self.markers().any(|m| upper.contains(m))
    }

    /// Replace every marker phrase in `text` with a single space.
    pub fn scrub(&self, text: &str) -> String {
        let mut out = text.to_string();
        loop {
            let upper = out.to_ascii_uppercase();
            let hit = self
                .markers()
                .filter_map(|m| upper.find(m).map(|pos| (pos, m.len())))
                .min();
            match hit {
                Some((pos, len)) => out.replace_range(pos..pos + len, " "),
                None             => return out,
            }
        }
    }

    fn markers(&self) -> impl Iterator<Item = &str> {
        self.start_markers
            .iter()
            .chain(self.end_markers.iter())
            .map(String::as_str)
    }

    fn drop_marker_lines<'a>(&self, body: &'a str) -> Cow<'a, str> {
        if !self.contains_marker(body) {
            return Cow::Borrowed(body);
        }

        let mut kept    = String::with_capacity(body.len());
        let mut dropped = 0usize;
        for line in body.split_inclusive('\n') {
            let upper = line.to_ascii_uppercase();
            if self.markers().any(|m| upper.contains(m)) {
                dropped += 1;
            } else {
                kept.push_str(line);
            }
        }
        tracing::debug!(dropped, "Dropped repeated marker lines from body");
        Cow::Owned(kept)
    }
}

impl Default for BoilerplateStripper {
    fn default() -> Self {
        Self::new(DEFAULT_START_MARKERS, DEFAULT_END_MARKERS)
    }
}

/// Byte offset of the earliest marker occurrence at or after `from`
fn earliest(upper: &str, from: usize, markers: &[String]) -> Option<usize> {
    markers
        .iter()
        .filter_map(|m| upper[from..].find(m.as_str()))
        .min()
        .map(|pos| from + pos)
}

/// Offset just past the newline ending the line that contains `pos`
fn line_end(text: &str, pos: usize) -> usize {
    match text[pos..].find('\n') {
        Some(nl) => pos + nl + 1,
        None     => text.len(),
    }
}

/// Offset of the first byte of the line containing `pos`, never before `floor`
fn line_start(text: &str, floor: usize, pos: usize) -> usize {
    match text[floor..pos].rfind('\n') {
        Some(nl) => floor + nl + 1,
        None     => floor,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_text_between_markers() {
        let s = BoilerplateStripper::default();
        let input = "Header stuff\n*** START OF THE PROJECT GUTENBERG EBOOK EMMA ***\n\
                     Body line.\n*** END OF THE PROJECT GUTENBERG EBOOK EMMA ***\nLicence";
        let (body, report) = s.strip(input);
        assert_eq!(body, "Body line.\n");
        assert!(report.header_removed);
        assert!(report.footer_removed);
    }

    #[test]
    fn test_plain_markers_without_asterisks() {
        let s = BoilerplateStripper::default();
        let input = "START OF THIS PROJECT GUTENBERG EBOOK\nHello world.\nEND OF THIS PROJECT GUTENBERG EBOOK";
        let (body, _) = s.strip(input);
        assert_eq!(body, "Hello world.\n");
    }

    #[test]
    fn test_missing_markers_pass_through() {
        let s = BoilerplateStripper::default();
        let (body, report) = s.strip("Just some text.");
        assert_eq!(body, "Just some text.");
        assert_eq!(report, BoilerplateReport::default());
    }

    #[test]
    fn test_only_start_marker_drops_header() {
        let s = BoilerplateStripper::default();
        let (body, report) = s.strip("licence\n*** START OF THE PROJECT GUTENBERG EBOOK X ***\nbody");
        assert_eq!(body, "body");
        assert!(report.header_removed);
        assert!(!report.footer_removed);
    }

    #[test]
    fn test_only_end_marker_drops_footer() {
        let s = BoilerplateStripper::default();
        let (body, report) = s.strip("body\n*** END OF THE PROJECT GUTENBERG EBOOK X ***\nlicence");
        assert_eq!(body, "body\n");
        assert!(!report.header_removed);
        assert!(report.footer_removed);
    }

    #[test]
    fn test_marker_match_ignores_case() {
        let s = BoilerplateStripper::default();
        let (body, _) = s.strip("*** Start of the Project Gutenberg eBook ***\nbody\n*** End of the Project Gutenberg eBook ***");
        assert_eq!(body, "body\n");
    }

    #[test]
    fn test_multibyte_text_around_markers() {
        let s = BoilerplateStripper::default();
        let (body, _) = s.strip("é\nSTART OF THE PROJECT GUTENBERG EBOOK ü\nnaïve café\nEND OF THE PROJECT GUTENBERG EBOOK");
        assert_eq!(body, "naïve café\n");
    }

    #[test]
    fn test_repeated_start_marker_line_is_dropped() {
        let s = BoilerplateStripper::default();
        let input = "START OF THE PROJECT GUTENBERG EBOOK\nIntro line.\n\
                     *** START OF THE PROJECT GUTENBERG EBOOK ***\nBody text here.";
        let (body, report) = s.strip(input);
        assert_eq!(body, "Intro line.\nBody text here.");
        assert!(report.header_removed);
        assert!(!s.contains_marker(&body));
    }

    #[test]
    fn test_scrub_removes_phrases_inside_a_line() {
        let s = BoilerplateStripper::default();
        let out = s.scrub("Intro. start of the project gutenberg ebook Body.");
        assert_eq!(out, "Intro.   Body.");
        assert!(!s.contains_marker(&out));
    }

    #[test]
    fn test_custom_markers() {
        let s = BoilerplateStripper::new(&["BEGIN"], &["FINIS"]);
        let (body, _) = s.strip("junk BEGIN here\nstory\nFINIS\n");
        assert_eq!(body, "story\n");
    }
}
