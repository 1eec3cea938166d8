//! Conversion results.

use serde::{Deserialize, Serialize};

/// The converted document plus counts describing what the stages produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The final HTML, without a trailing newline.
    pub html: String,
    pub stats: ConversionStats,
}

/// Block counts are taken from the finished HTML, so they describe the
/// output as written rather than what each stage matched along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// `<h1>` through `<h6>` elements.
    pub headings: usize,
    /// `<ul>` and `<ol>` containers after merging.
    pub lists: usize,
    pub list_items: usize,
    pub paragraphs: usize,
    pub input_bytes: usize,
    pub output_bytes: usize,
    /// Wall-clock time spent in the stages, in microseconds.
    pub duration_us: u64,
}

impl ConversionStats {
    /// Count block elements in finished HTML.
    pub(crate) fn from_html(input_bytes: usize, html: &str, duration_us: u64) -> Self {
        let headings = (1..=6)
            .map(|level| html.matches(&format!("<h{level}>")).count())
            .sum();
        Self {
            headings,
            lists: html.matches("<ul>").count() + html.matches("<ol>").count(),
            list_items: html.matches("<li>").count(),
            paragraphs: html.matches("<p>").count(),
            input_bytes,
            output_bytes: html.len(),
            duration_us,
        }
    }
}
