//! Pipeline stages for Markdown-to-HTML conversion.
//!
//! Each Markdown stage is a pure `&str -> String` function with no state of
//! its own; the only thing passed between them is the text.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ headers ──▶ bold ──▶ italics ──▶ lists ──▶ paragraphs ──▶ wrap
//! (file/stdin)                                                   (<article>)
//! ```
//!
//! 1. [`input`]: read the file or stream, strip trailing newlines
//! 2. [`headers`](mod@headers): `#`..`######` lines, deepest level first
//! 3. [`emphasis`]: `**bold**`, then `*italics*`; the order makes
//!    `***x***` nest as strong around em
//! 4. [`lists`](mod@lists): wrap marker lines, then separate and merge neighbours
//! 5. [`paragraphs`](mod@paragraphs): split on blank lines; runs last so block
//!    markup from the earlier stages is never split
//!
//! The document wrap lives in [`crate::convert`] because it depends on
//! configuration.

pub mod emphasis;
pub mod headers;
pub mod input;
pub mod lists;
pub mod paragraphs;

pub use emphasis::{bold, italics};
pub use headers::headers;
pub use lists::lists;
pub use paragraphs::paragraphs;

/// A single text-to-text rewrite.
pub type StageFn = fn(&str) -> String;

/// The Markdown stages in the order they must run.
pub const STAGES: [(&str, StageFn); 5] = [
    ("headers", headers),
    ("bold", bold),
    ("italics", italics),
    ("lists", lists),
    ("paragraphs", paragraphs),
];
