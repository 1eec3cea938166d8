//! Paragraph stage: blank-line separated blocks become `<p>` elements.
//!
//! Runs last among the Markdown stages. Headers and lists have already been
//! turned into single-line or newline-joined markup by then, so they stay
//! inside whichever paragraph block they landed in instead of being split.

use once_cell::sync::Lazy;
use regex::Regex;

/// A newline, any whitespace (further blank or whitespace-only lines), and
/// a closing newline: one paragraph boundary however many blank lines it spans.
static RE_PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Insert `</p>\n<p>` at every boundary and wrap the whole buffer in `<p>…</p>`.
pub fn paragraphs(corpus: &str) -> String {
    let inner = RE_PARAGRAPH_BREAK.replace_all(corpus, "</p>\n<p>");
    format!("<p>{inner}</p>")
}
