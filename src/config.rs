//! Configuration types for Markdown-to-HTML conversion.
//!
//! The conversion stages themselves take no options. What varies between
//! uses is the framing around them: whether the paragraph-level fragment is
//! wrapped in an outer document element, which element that is, and whether
//! trailing newlines are stripped from the input before the first stage.
//! All of it lives in [`ConversionConfig`], built via [`ConversionConfigBuilder`].

use crate::error::Md2HtmlError;
use serde::{Deserialize, Serialize};

/// Element used by the document wrap when none is configured.
pub const DEFAULT_DOCUMENT_TAG: &str = "article";

/// Configuration for a Markdown-to-HTML conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use md2html::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .wrap_document(true)
///     .document_tag("main")
///     .build()
///     .unwrap();
/// assert_eq!(config.document_tag, "main");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Wrap the paragraph-stage output in `<tag>…</tag>`. Default: true.
    ///
    /// Turn this off to get a bare fragment (`<p>…</p>` blocks only) for
    /// embedding into an existing page.
    pub wrap_document: bool,

    /// Element name for the document wrap. Default: `article`.
    pub document_tag: String,

    /// Strip trailing `\n` characters from the input before conversion.
    /// Default: true.
    ///
    /// Without this a file ending in a newline gains an empty last line,
    /// which shows up inside the closing `</p>`.
    pub strip_trailing_newlines: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            wrap_document: true,
            document_tag: DEFAULT_DOCUMENT_TAG.to_string(),
            strip_trailing_newlines: true,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Check the invariants the builder enforces.
    ///
    /// Useful for configs that arrive through deserialisation rather than
    /// the builder.
    pub fn validate(&self) -> Result<(), Md2HtmlError> {
        validate_tag(&self.document_tag)
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn wrap_document(mut self, v: bool) -> Self {
        self.config.wrap_document = v;
        self
    }

    pub fn document_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.document_tag = tag.into();
        self
    }

    pub fn strip_trailing_newlines(mut self, v: bool) -> Self {
        self.config.strip_trailing_newlines = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Md2HtmlError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// An element name must be non-empty ASCII alphanumerics starting with a
/// letter, so it can be spliced into `<tag>` without escaping.
fn validate_tag(tag: &str) -> Result<(), Md2HtmlError> {
    let mut chars = tag.chars();
    match chars.next() {
        None => Err(Md2HtmlError::InvalidConfig(
            "document tag must not be empty".into(),
        )),
        Some(first) if !first.is_ascii_alphabetic() => Err(Md2HtmlError::InvalidConfig(format!(
            "document tag must start with an ASCII letter, got '{tag}'"
        ))),
        Some(_) if !chars.all(|c| c.is_ascii_alphanumeric()) => {
            Err(Md2HtmlError::InvalidConfig(format!(
                "document tag must be ASCII letters and digits only, got '{tag}'"
            )))
        }
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_latest_behaviour() {
        let c = ConversionConfig::default();
        assert!(c.wrap_document);
        assert_eq!(c.document_tag, "article");
        assert!(c.strip_trailing_newlines);
    }

    #[test]
    fn builder_sets_fields() {
        let c = ConversionConfig::builder()
            .wrap_document(false)
            .document_tag("section")
            .strip_trailing_newlines(false)
            .build()
            .unwrap();
        assert!(!c.wrap_document);
        assert_eq!(c.document_tag, "section");
        assert!(!c.strip_trailing_newlines);
    }

    #[test]
    fn heading_like_tags_are_valid() {
        assert!(ConversionConfig::builder().document_tag("h1").build().is_ok());
    }

    #[test]
    fn rejects_bad_tags() {
        for tag in ["", "1div", "div class", "x>", "é"] {
            let err = ConversionConfig::builder().document_tag(tag).build();
            assert!(
                matches!(err, Err(Md2HtmlError::InvalidConfig(_))),
                "tag {tag:?} should be rejected"
            );
        }
    }

    #[test]
    fn deserialises_partial_json_with_defaults() {
        let c: ConversionConfig = serde_json::from_str(r#"{"wrap_document": false}"#).unwrap();
        assert!(!c.wrap_document);
        assert_eq!(c.document_tag, DEFAULT_DOCUMENT_TAG);
        assert!(c.validate().is_ok());
    }
}
