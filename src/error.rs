//! Error types for the md2html library.
//!
//! Only reading input and writing output can fail. Malformed Markdown
//! (an unterminated `**`, seven `#` characters, a stray `*`) is never an
//! error: the stage whose pattern does not match leaves the text as it was.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the md2html library.
#[derive(Debug, Error)]
pub enum Md2HtmlError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Markdown file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but reading it failed part-way.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid UTF-8 text.
    #[error("File is not valid UTF-8 text: '{path}'")]
    NotUtf8 { path: PathBuf },

    /// Reading the document from standard input failed.
    #[error("Failed to read Markdown from standard input: {0}")]
    StdinReadFailed(#[source] std::io::Error),

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output HTML file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
