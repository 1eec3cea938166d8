//! Input resolution: read a Markdown file or a stream into one buffer.
//!
//! The whole document is read up front. Every stage rewrites the complete
//! buffer, so there is nothing to gain from streaming. Trailing newlines are
//! stripped here, once, before the first stage sees the text.

use crate::error::Md2HtmlError;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path spelling that means "read standard input" on the command line.
pub const STDIN_MARKER: &str = "-";

/// Where the Markdown comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

impl InputSource {
    /// Interpret a command-line argument; `None` and `-` both mean stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some(STDIN_MARKER) => InputSource::Stdin,
            Some(path) => InputSource::File(PathBuf::from(path)),
        }
    }

    /// Read the whole source into a string.
    pub fn read(&self) -> Result<String, Md2HtmlError> {
        match self {
            InputSource::File(path) => read_file(path),
            InputSource::Stdin => read_stream(std::io::stdin().lock()),
        }
    }
}

/// Read a local file, mapping I/O failures onto [`Md2HtmlError`].
pub fn read_file(path: &Path) -> Result<String, Md2HtmlError> {
    let path_buf = path.to_path_buf();
    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!("Read {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        Err(e) => Err(match e.kind() {
            ErrorKind::NotFound => Md2HtmlError::FileNotFound { path: path_buf },
            ErrorKind::PermissionDenied => Md2HtmlError::PermissionDenied { path: path_buf },
            ErrorKind::InvalidData => Md2HtmlError::NotUtf8 { path: path_buf },
            _ => Md2HtmlError::ReadFailed {
                path: path_buf,
                source: e,
            },
        }),
    }
}

/// Read any reader (stdin, a socket, an in-memory cursor) to the end.
pub fn read_stream(mut reader: impl Read) -> Result<String, Md2HtmlError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(Md2HtmlError::StdinReadFailed)?;
    debug!("Read {} bytes from stream", text.len());
    Ok(text)
}

/// Drop every trailing `\n`. Other trailing whitespace is kept.
pub fn strip_trailing_newlines(text: &str) -> &str {
    text.trim_end_matches('\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(InputSource::from_arg(Some("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some("doc.md")),
            InputSource::File(PathBuf::from("doc.md"))
        );
    }

    #[test]
    fn test_strip_trailing_newlines() {
        assert_eq!(strip_trailing_newlines("text\n\n\n"), "text");
        assert_eq!(strip_trailing_newlines("text \t"), "text \t");
        assert_eq!(strip_trailing_newlines("\n\n"), "");
        assert_eq!(strip_trailing_newlines("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_read_stream() {
        let text = read_stream(Cursor::new("# hi\n")).unwrap();
        assert_eq!(text, "# hi\n");
    }

    #[test]
    fn test_read_stream_invalid_utf8() {
        let err = read_stream(Cursor::new(vec![0xff, 0xfe])).unwrap_err();
        assert!(matches!(err, Md2HtmlError::StdinReadFailed(_)));
    }

    #[test]
    fn test_read_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "- a\n").unwrap();
        assert_eq!(InputSource::File(path).read().unwrap(), "- a\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, Md2HtmlError::FileNotFound { .. }));
    }

    #[test]
    fn test_non_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.md");
        std::fs::write(&path, [0xc3, 0x28]).unwrap();
        let err = read_file(&path).unwrap_err();
        assert!(matches!(err, Md2HtmlError::NotUtf8 { .. }));
    }
}
