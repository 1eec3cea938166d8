//! CLI binary for md2html.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use md2html::pipeline::input::InputSource;
use md2html::{convert_str, write_output, ConversionConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert a file (stdout)
  md2html notes.md

  # Read from a pipe
  cat notes.md | md2html

  # Write to a file
  md2html notes.md -o notes.html

  # Paragraph-level fragment without the <article> wrapper
  md2html --fragment notes.md

  # HTML plus block counts as JSON
  md2html --json notes.md

SUPPORTED SYNTAX:
  # .. ######      headings (space or tab after the hashes)
  **bold**         <strong>
  *italic*         <em>
  - + *            unordered list items
  1. 2. ...        ordered list items
  blank line       paragraph break
"#;

/// Convert Markdown files to HTML.
#[derive(Parser, Debug)]
#[command(
    name = "md2html",
    version,
    about = "Convert Markdown files to HTML",
    long_about = "Convert a subset of Markdown (headings, bold, italics, lists, paragraphs) \
to HTML. Reads a file, or standard input when no file is given.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown file to convert. Omit or pass `-` to read standard input.
    markdown_file: Option<String>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long, env = "MD2HTML_OUTPUT")]
    output: Option<PathBuf>,

    /// Emit the paragraph-level fragment without the outer document element.
    #[arg(long, env = "MD2HTML_FRAGMENT")]
    fragment: bool,

    /// Element used to wrap the document.
    #[arg(long, env = "MD2HTML_TAG", default_value = md2html::config::DEFAULT_DOCUMENT_TAG)]
    tag: String,

    /// Keep trailing newlines from the input.
    #[arg(long, env = "MD2HTML_KEEP_TRAILING_NEWLINES")]
    keep_trailing_newlines: bool,

    /// Output structured JSON (ConversionOutput) instead of HTML.
    #[arg(long, env = "MD2HTML_JSON", conflicts_with = "output")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2HTML_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MD2HTML_QUIET", conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Logs go to stderr; stdout carries only the converted document.
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli)?;
    let source = InputSource::from_arg(cli.markdown_file.as_deref());

    // ── Convert ──────────────────────────────────────────────────────────
    let markdown = source.read().with_context(|| match source {
        InputSource::File(ref path) => format!("Failed to read {}", path.display()),
        InputSource::Stdin => "Failed to read Markdown from stdin".to_string(),
    })?;
    let output = convert_str(&markdown, &config);
    info!(
        "Converted {} headings, {} lists, {} paragraphs",
        output.stats.headings, output.stats.lists, output.stats.paragraphs
    );

    // ── Write to file ────────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        write_output(output_path, &output)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        return Ok(());
    }

    // ── Write to stdout ──────────────────────────────────────────────────
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut handle, &output)
            .context("Failed to serialise output")?;
        handle.write_all(b"\n").context("Failed to write to stdout")?;
    } else {
        handle
            .write_all(output.html.as_bytes())
            .context("Failed to write to stdout")?;
        handle.write_all(b"\n").context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli) -> Result<ConversionConfig> {
    ConversionConfig::builder()
        .wrap_document(!cli.fragment)
        .document_tag(cli.tag.clone())
        .strip_trailing_newlines(!cli.keep_trailing_newlines)
        .build()
        .context("Invalid configuration")
}
