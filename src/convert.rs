//! Conversion entry points.
//!
//! [`html`] is the plain pipeline with default framing and no statistics.
//! The `convert_*` functions add configuration, input handling, and
//! [`ConversionStats`]. All of them are synchronous and hold no shared state,
//! so they can be called from any number of threads at once.
//!
//! Running [`html`] over its own output is not a no-op: the paragraph stage
//! and the document wrap apply again. Convert Markdown once.

use crate::config::ConversionConfig;
use crate::error::Md2HtmlError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::{input, STAGES};
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert Markdown to HTML using the default configuration.
///
/// # Example
/// ```rust
/// assert_eq!(
///     md2html::html("***hello***"),
///     "<article><p><strong><em>hello</em></strong></p></article>"
/// );
/// ```
pub fn html(corpus: &str) -> String {
    let text = run_stages(corpus);
    wrap_document(&text, crate::config::DEFAULT_DOCUMENT_TAG)
}

/// Wrap finished markup in `<tag>…</tag>`.
pub fn wrap_document(text: &str, tag: &str) -> String {
    format!("<{tag}>{text}</{tag}>")
}

/// Convert an in-memory document.
///
/// Infallible: `config` must already be valid. The builder guarantees that;
/// a config assembled by hand or deserialised should go through
/// [`ConversionConfig::validate`] first, because `document_tag` is spliced
/// into the markup as-is. The fallible `convert_*` entry points validate for
/// you. Markdown that does not match any stage passes through unchanged.
pub fn convert_str(markdown: &str, config: &ConversionConfig) -> ConversionOutput {
    let start = Instant::now();
    let corpus = if config.strip_trailing_newlines {
        input::strip_trailing_newlines(markdown)
    } else {
        markdown
    };

    let text = run_stages(corpus);
    let html = if config.wrap_document {
        wrap_document(&text, &config.document_tag)
    } else {
        text
    };

    let duration_us = start.elapsed().as_micros() as u64;
    let stats = ConversionStats::from_html(markdown.len(), &html, duration_us);
    debug!(
        "Converted {} bytes to {} bytes in {}us",
        stats.input_bytes, stats.output_bytes, stats.duration_us
    );
    ConversionOutput { html, stats }
}

/// Read a Markdown file and convert it.
///
/// # Errors
/// An invalid `config`, or a failed read: missing file, permission denied,
/// I/O error, or non-UTF-8 content.
pub fn convert_file(
    path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Md2HtmlError> {
    config.validate()?;
    let path = path.as_ref();
    info!("Starting conversion: {}", path.display());
    let markdown = input::read_file(path)?;
    let output = convert_str(&markdown, config);
    info!(
        "Conversion complete: {} headings, {} lists, {} paragraphs",
        output.stats.headings, output.stats.lists, output.stats.paragraphs
    );
    Ok(output)
}

/// Read a whole stream (usually stdin) and convert it.
pub fn convert_reader(
    reader: impl Read,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Md2HtmlError> {
    config.validate()?;
    info!("Starting conversion from stream");
    let markdown = input::read_stream(reader)?;
    Ok(convert_str(&markdown, config))
}

/// Convert a file and write the HTML (plus a trailing newline) to `output_path`.
pub fn convert_to_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Md2HtmlError> {
    let output = convert_file(input_path, config)?;
    write_output(output_path, &output)?;
    Ok(output.stats)
}

/// Write converted HTML plus a trailing newline to `path`, creating parent
/// directories as needed.
///
/// Uses atomic write (temp file in the destination directory + rename) so a
/// failed run never leaves a half-written file behind.
pub fn write_output(path: impl AsRef<Path>, output: &ConversionOutput) -> Result<(), Md2HtmlError> {
    let path = path.as_ref();
    let write_err = |e: std::io::Error| Md2HtmlError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(output.html.as_bytes()).map_err(write_err)?;
    tmp.write_all(b"\n").map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    info!("Wrote {} bytes to {}", output.stats.output_bytes + 1, path.display());
    Ok(())
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Push the buffer through every stage in order.
fn run_stages(corpus: &str) -> String {
    let mut text = corpus.to_string();
    for (name, stage) in STAGES.iter() {
        text = stage(&text);
        debug!("Stage {}: {} bytes", name, text.len());
    }
    text
}
