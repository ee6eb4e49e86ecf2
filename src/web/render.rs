// ============================================================
// Layer 1b — HTML Rendering
// ============================================================
// Builds the three HTML pages served to browsers:
//   - index_page:  the URL form
//   - report_page: statistics, preview and summary
//   - error_page:  status code plus message
//
// Every piece of user-supplied or fetched text passes through
// `escape_html` before it is inserted into markup.

use axum::http::StatusCode;

use crate::application::digest_use_case::{MAX_PREVIEW_LEN, MAX_SUMMARY_SENTENCES};
use crate::domain::digest::Digest;

const STYLE: &str = "\
body { font-family: Georgia, serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
h1 { font-size: 1.6rem; }
form label { display: block; margin-top: .6rem; }
input[type=url] { width: 100%; padding: .4rem; }
table { border-collapse: collapse; margin: 1rem 0; }
td, th { border: 1px solid #ccc; padding: .3rem .7rem; text-align: left; }
pre { white-space: pre-wrap; background: #f7f5f0; padding: 1rem; }
.error { color: #a00; }
";

/// Escape the five characters that matter inside HTML text and attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c    => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

pub fn index_page(preview_len: usize, summary_sentences: usize) -> String {
    let body = format!(
        "<h1>Project Gutenberg Text Digest</h1>\n\
         <p>Paste the URL of a plain-text Gutenberg book, e.g. \
         <code>https://www.gutenberg.org/files/1342/1342-0.txt</code>.</p>\n\
         <form action=\"/report\" method=\"get\">\n\
         <label>URL <input type=\"url\" name=\"url\" required></label>\n\
         <label>Preview length (characters) \
         <input type=\"number\" name=\"preview_len\" min=\"1\" max=\"{MAX_PREVIEW_LEN}\" value=\"{preview_len}\"></label>\n\
         <label>Summary sentences \
         <input type=\"number\" name=\"summary_sentences\" min=\"1\" max=\"{MAX_SUMMARY_SENTENCES}\" value=\"{summary_sentences}\"></label>\n\
         <p><button type=\"submit\">Digest</button></p>\n\
         </form>"
    );
    layout("Gutenberg Text Digest", &body)
}

pub fn report_page(digest: &Digest) -> String {
    let stats = &digest.stats;

    let mut common = String::new();
    for wc in &stats.most_common_words {
        common.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(&wc.word),
            wc.count
        ));
    }

    let boilerplate = match (digest.boilerplate.header_removed, digest.boilerplate.footer_removed) {
        (true, true)   => "header and footer removed",
        (true, false)  => "header removed, no footer marker found",
        (false, true)  => "footer removed, no header marker found",
        (false, false) => "no Gutenberg markers found, text used as-is",
    };

    let body = format!(
        "<h1>Digest</h1>\n\
         <p>Source: <a href=\"{src}\">{src}</a></p>\n\
         <p>Boilerplate: {boilerplate}</p>\n\
         <h2>Statistics</h2>\n\
         <table>\n\
         <tr><th>Characters</th><td>{chars}</td></tr>\n\
         <tr><th>Words</th><td>{words}</td></tr>\n\
         <tr><th>Sentences</th><td>{sentences}</td></tr>\n\
         <tr><th>Average word length</th><td>{awl:.2}</td></tr>\n\
         <tr><th>Average sentence length</th><td>{asl:.2}</td></tr>\n\
         </table>\n\
         <h2>Most common words</h2>\n<table>{common}</table>\n\
         <h2>Summary</h2>\n<p>{summary}</p>\n\
         <h2>Preview</h2>\n<pre>{preview}</pre>\n\
         <p><a href=\"/\">Digest another text</a></p>",
        src       = escape_html(&digest.source),
        chars     = stats.char_count,
        words     = stats.word_count,
        sentences = stats.sentence_count,
        awl       = stats.avg_word_length,
        asl       = stats.avg_sentence_length,
        summary   = escape_html(&digest.summary.text()),
        preview   = escape_html(&digest.preview),
    );
    layout("Digest", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>Error {code}</h1>\n<p class=\"error\">{message}</p>\n<p><a href=\"/\">Back</a></p>",
        code    = status.as_u16(),
        message = escape_html(message),
    );
    layout("Error", &body)
}
