//! List stage: runs of `- `, `+ `, `* ` and `N. ` lines become `<ul>`/`<ol>`.
//!
//! The stage works in three passes over the whole buffer:
//!
//! 1. Wrap every marker line on its own: `<ul><li>…</li></ul>` or
//!    `<ol><li>…</li></ol>`.
//! 2. Where a list of one kind is directly followed by a list of the other
//!    kind, insert a blank line between them so the paragraph stage sees two
//!    blocks.
//! 3. Where a list is directly followed by a list of the same kind, drop the
//!    `</ul>\n<ul>` seam so the items share one container.
//!
//! "Directly followed" means on the next line. Any other line in between,
//! including a blank one, ends the run.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[-+*] (.*)$").unwrap());
static RE_ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\. (.*)$").unwrap());

/// Wrap list marker lines and merge adjacent items into containers.
pub fn lists(corpus: &str) -> String {
    let s = wrap_items(corpus);
    let s = separate_opposite_lists(&s);
    merge_adjacent_lists(&s)
}

// ── Pass 1: one container per item ───────────────────────────────────────────

fn wrap_items(input: &str) -> String {
    // Unordered first. A wrapped line starts with `<ul>`, so the ordered
    // pattern cannot match it again (and vice versa).
    let s = RE_UNORDERED_ITEM.replace_all(input, "<ul><li>${1}</li></ul>");
    RE_ORDERED_ITEM
        .replace_all(&s, "<ol><li>${1}</li></ol>")
        .to_string()
}

// ── Pass 2: blank line between a <ul> and an adjacent <ol> ───────────────────

fn separate_opposite_lists(input: &str) -> String {
    input
        .replace("</ul>\n<ol>", "</ul>\n\n<ol>")
        .replace("</ol>\n<ul>", "</ol>\n\n<ul>")
}

// ── Pass 3: merge same-kind neighbours ───────────────────────────────────────

fn merge_adjacent_lists(input: &str) -> String {
    input.replace("</ul>\n<ul>", "\n").replace("</ol>\n<ol>", "\n")
}
