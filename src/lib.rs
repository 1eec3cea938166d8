//! # md2html
//!
//! Convert a small subset of Markdown to HTML: headers, bold, italics,
//! unordered and ordered lists, and paragraphs.
//!
//! There is no tokenizer and no syntax tree. The document is one string that
//! passes through a fixed sequence of regex rewrites, each stage consuming
//! the previous stage's output. Most of the behaviour lives in the order of
//! those stages and in the edge cases each one handles.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. Input       file or stdin, trailing newlines stripped
//!  ├─ 2. Headers     `#`..`######` → <h1>..<h6>, level 6 first
//!  ├─ 3. Bold        **x** → <strong>x</strong>
//!  ├─ 4. Italics     *x* → <em>x</em>   (after bold: ***x*** nests correctly)
//!  ├─ 5. Lists       -, +, * and N. lines → merged <ul>/<ol>
//!  ├─ 6. Paragraphs  blank-line blocks → <p>
//!  └─ 7. Wrap        <article>…</article>
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use md2html::{convert_str, ConversionConfig};
//!
//! let output = convert_str("# Title\n\nSome **bold** text.\n", &ConversionConfig::default());
//! assert_eq!(
//!     output.html,
//!     "<article><p><h1>Title</h1></p>\n<p>Some <strong>bold</strong> text.</p></article>"
//! );
//! assert_eq!(output.stats.paragraphs, 2);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2html` binary (clap + anyhow + tracing-subscriber) |
//!
//! ## Not supported
//!
//! Links, images, code blocks, tables, nested lists, and CommonMark edge
//! cases in general. Unmatched syntax is left in the output as written.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{
    convert_file, convert_reader, convert_str, convert_to_file, html, wrap_document, write_output,
};
pub use error::Md2HtmlError;
pub use output::{ConversionOutput, ConversionStats};
pub use pipeline::{bold, headers, italics, lists, paragraphs};
