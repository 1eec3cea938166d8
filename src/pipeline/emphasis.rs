//! Bold and italics stages.
//!
//! Both match the shortest span on a single line, so `**a** and **b**` is
//! two strong elements rather than one spanning the middle. Bold must run
//! first: it claims the double delimiters and leaves any single `*` hugging
//! the inner text for italics, which is how `***x***` ends up as
//! `<strong><em>x</em></strong>`.

use once_cell::sync::Lazy;
use regex::Regex;

// ── Bold ─────────────────────────────────────────────────────────────────────
//
// `\*?` on each side keeps one extra asterisk inside the span, so `***x***`
// captures `*x*` instead of `*x` (which would leave the closing `*` outside
// the `</strong>` and produce crossed tags after italics).
//
// A match must also span the whole asterisk run on both ends. The regex
// crate has no lookaround, so a candidate that starts right after a `*` or
// ends right before one is rejected in code and the search resumes one byte
// later. Runs of four or more asterisks are therefore never bolded.

static RE_BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(\*?[^*\n][^\n]*?\*?)\*\*").unwrap());

/// Replace `**text**` with `<strong>text</strong>`.
pub fn bold(corpus: &str) -> String {
    let mut out = String::with_capacity(corpus.len());
    let mut copied = 0;
    let mut pos = 0;
    while let Some(caps) = RE_BOLD.captures_at(corpus, pos) {
        let Some(span) = caps.get(0) else { break };
        let inside_run =
            corpus[..span.start()].ends_with('*') || corpus[span.end()..].starts_with('*');
        if inside_run {
            // `span.start()` sits on an ASCII `*`, so the next byte is a char boundary.
            pos = span.start() + 1;
            continue;
        }
        out.push_str(&corpus[copied..span.start()]);
        out.push_str("<strong>");
        out.push_str(&caps[1]);
        out.push_str("</strong>");
        copied = span.end();
        pos = span.end();
    }
    out.push_str(&corpus[copied..]);
    out
}

// ── Italics ──────────────────────────────────────────────────────────────────
//
// The opener must be followed by a non-space character. That keeps a `* item`
// list marker, which the list stage still needs, from being read as the start
// of an emphasis span.

static RE_ITALICS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\s][^\n]*?)\*").unwrap());

/// Replace `*text*` with `<em>text</em>`.
pub fn italics(corpus: &str) -> String {
    RE_ITALICS.replace_all(corpus, "<em>${1}</em>").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(bold("**bold**"), "<strong>bold</strong>");
    }

    #[test]
    fn test_bold_shortest_span() {
        assert_eq!(
            bold("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_bold_does_not_cross_lines() {
        assert_eq!(bold("**open\nclose**"), "**open\nclose**");
    }

    #[test]
    fn test_bold_unterminated_passes_through() {
        assert_eq!(bold("**never closed"), "**never closed");
        assert_eq!(bold("****"), "****");
    }

    #[test]
    fn test_bold_keeps_inner_asterisk() {
        assert_eq!(bold("**a*b**"), "<strong>a*b</strong>");
    }

    #[test]
    fn test_bold_skips_long_asterisk_runs() {
        assert_eq!(bold("****bold****"), "****bold****");
        assert_eq!(bold("**x****"), "**x****");
        assert_eq!(bold("a ****b**** **c**"), "a ****b**** <strong>c</strong>");
    }

    #[test]
    fn test_long_asterisk_runs_stay_well_nested() {
        assert_eq!(italics(&bold("****bold****")), "***<em>bold</em>***");
        assert_eq!(italics(&bold("**x****")), "*<em>x</em>***");
    }

    #[test]
    fn test_italics() {
        assert_eq!(italics("*italic*"), "<em>italic</em>");
    }

    #[test]
    fn test_italics_shortest_span() {
        assert_eq!(italics("*a* then *b*"), "<em>a</em> then <em>b</em>");
    }

    #[test]
    fn test_italics_ignores_spaced_asterisks() {
        assert_eq!(italics("2 * 3 * 4"), "2 * 3 * 4");
        assert_eq!(italics("* item"), "* item");
    }

    #[test]
    fn test_italics_does_not_cross_lines() {
        assert_eq!(italics("*open\nclose*"), "*open\nclose*");
    }

    #[test]
    fn test_triple_asterisks_nest_strong_outside() {
        let once = bold("***hello***");
        assert_eq!(once, "<strong>*hello*</strong>");
        assert_eq!(italics(&once), "<strong><em>hello</em></strong>");
    }

    #[test]
    fn test_mixed_on_one_line() {
        let out = italics(&bold("**b** and *i*"));
        assert_eq!(out, "<strong>b</strong> and <em>i</em>");
    }
}
