//! Header stage: `# title` through `###### title` become `<h1>`–`<h6>`.
//!
//! A header line is exactly `n` hashes at the start of a line, at least one
//! space or tab, then some text. The text is trimmed of the surrounding
//! spaces and tabs. `#title` (no whitespace), a line of hashes with no text,
//! and runs of seven or more hashes are all left alone.
//!
//! Levels are tried from 6 down to 1. With line anchoring the patterns cannot
//! overlap today, but keeping the longest-first order means a looser level-1
//! pattern can never eat the front of a `######` line and leave stray hashes
//! in the output.

use once_cell::sync::Lazy;
use regex::Regex;

/// Deepest heading level HTML defines.
pub const MAX_LEVEL: usize = 6;

/// One `(level, pattern)` pair per heading level, deepest first.
static RE_HEADERS: Lazy<Vec<(usize, Regex)>> = Lazy::new(|| {
    (1..=MAX_LEVEL)
        .rev()
        .map(|level| {
            let pattern = format!(r"(?m)^#{{{level}}}[ \t]+(\S[^\n]*?)[ \t]*$");
            (level, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Rewrite every header line in `corpus`.
pub fn headers(corpus: &str) -> String {
    let mut text = corpus.to_string();
    for (level, re) in RE_HEADERS.iter() {
        let replacement = format!("<h{level}>${{1}}</h{level}>");
        text = re.replace_all(&text, replacement.as_str()).to_string();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_space_is_not_a_header() {
        assert_eq!(headers("#hello"), "#hello");
    }

    #[test]
    fn every_level() {
        assert_eq!(headers("# hello"), "<h1>hello</h1>");
        assert_eq!(headers("## hello"), "<h2>hello</h2>");
        assert_eq!(headers("###  \t hello"), "<h3>hello</h3>");
        assert_eq!(headers("####\thello"), "<h4>hello</h4>");
        assert_eq!(headers("#####\t   hello"), "<h5>hello</h5>");
        assert_eq!(headers("######    hello"), "<h6>hello</h6>");
    }

    #[test]
    fn seven_hashes_untouched() {
        assert_eq!(headers("#######\t hello"), "#######\t hello");
        assert_eq!(headers("####### hello"), "####### hello");
    }

    #[test]
    fn trailing_whitespace_trimmed() {
        assert_eq!(headers("## spaced out \t "), "<h2>spaced out</h2>");
    }

    #[test]
    fn hashes_without_text_untouched() {
        assert_eq!(headers("##   "), "##   ");
    }

    #[test]
    fn only_at_line_start() {
        assert_eq!(headers("see # not a header"), "see # not a header");
        assert_eq!(headers("  # indented"), "  # indented");
    }

    #[test]
    fn consecutive_lines() {
        assert_eq!(
            headers("# One\n## Two\ntext\n### Three"),
            "<h1>One</h1>\n<h2>Two</h2>\ntext\n<h3>Three</h3>"
        );
    }

    #[test]
    fn inner_hashes_kept() {
        assert_eq!(headers("# C# tips"), "<h1>C# tips</h1>");
    }
}
