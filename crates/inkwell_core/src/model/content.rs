//! Content block model.
//!
//! # Responsibility
//! - Define the renderable units that make up an article body.
//! - Turn loosely-shaped wire records into typed blocks at construction time.
//!
//! # Invariants
//! - Every block carries the field its `type` requires, and that field is not
//!   blank.
//! - `img` sources are absolute `http(s)` URLs.
//! - Block order inside an article is reading order; nothing here reorders.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire tag for paragraph blocks.
pub const BLOCK_TYPE_PARAGRAPH: &str = "p";
/// Wire tag for section heading blocks.
pub const BLOCK_TYPE_HEADING: &str = "h2";
/// Wire tag for pull quote blocks.
pub const BLOCK_TYPE_QUOTE: &str = "quote";
/// Wire tag for embedded figure blocks.
pub const BLOCK_TYPE_IMAGE: &str = "img";
/// Wire tag for code listing blocks.
pub const BLOCK_TYPE_CODE: &str = "code";

static HTTP_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/]+\S*$").expect("valid url regex"));

/// Returns whether `value` is an absolute `http`/`https` URL without spaces.
pub(crate) fn is_http_url(value: &str) -> bool {
    HTTP_URL_RE.is_match(value)
}

/// One renderable unit inside an article body.
///
/// Serialized with an internal `type` tag (`p|h2|quote|img|code`), matching
/// the external article schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    /// Body paragraph.
    #[serde(rename = "p")]
    Paragraph { text: String },
    /// Section heading.
    #[serde(rename = "h2")]
    Heading { text: String },
    /// Pull quote.
    #[serde(rename = "quote")]
    Quote { text: String },
    /// Embedded figure with optional caption.
    #[serde(rename = "img")]
    Image {
        src: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// Code listing, displayed verbatim.
    #[serde(rename = "code")]
    Code { code: String },
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn quote(text: impl Into<String>) -> Self {
        Self::Quote { text: text.into() }
    }

    pub fn image(src: impl Into<String>, caption: Option<String>) -> Self {
        Self::Image {
            src: src.into(),
            caption,
        }
    }

    pub fn code(code: impl Into<String>) -> Self {
        Self::Code { code: code.into() }
    }

    /// Returns the wire tag of this block.
    pub fn block_type(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => BLOCK_TYPE_PARAGRAPH,
            Self::Heading { .. } => BLOCK_TYPE_HEADING,
            Self::Quote { .. } => BLOCK_TYPE_QUOTE,
            Self::Image { .. } => BLOCK_TYPE_IMAGE,
            Self::Code { .. } => BLOCK_TYPE_CODE,
        }
    }

    /// Returns prose text for text-bearing blocks (`p`, `h2`, `quote`).
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Paragraph { text } | Self::Heading { text } | Self::Quote { text } => {
                Some(text.as_str())
            }
            Self::Image { .. } | Self::Code { .. } => None,
        }
    }

    /// Checks the required-field contract for this block's variant.
    ///
    /// Blocks built through deserialization already passed this check; blocks
    /// built in code are checked again when they enter an article store.
    pub fn validate(&self) -> Result<(), ContentBlockError> {
        let block_type = self.block_type();
        match self {
            Self::Paragraph { text } | Self::Heading { text } | Self::Quote { text } => {
                require_non_blank(text, block_type, "text")
            }
            Self::Image { src, .. } => {
                require_non_blank(src, block_type, "src")?;
                if !is_http_url(src) {
                    return Err(ContentBlockError::InvalidUrl { value: src.clone() });
                }
                Ok(())
            }
            Self::Code { code } => require_non_blank(code, block_type, "code"),
        }
    }
}

/// Validation error for a single content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlockError {
    /// Field required by the block type is absent or blank.
    MissingField {
        block_type: &'static str,
        field: &'static str,
    },
    /// `type` tag is not one of `p|h2|quote|img|code`.
    UnknownType(String),
    /// `img` source is not an absolute http(s) URL.
    InvalidUrl { value: String },
}

impl Display for ContentBlockError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { block_type, field } => {
                write!(f, "`{block_type}` block requires a non-empty `{field}`")
            }
            Self::UnknownType(value) => write!(
                f,
                "unknown content block type `{value}`; expected p|h2|quote|img|code"
            ),
            Self::InvalidUrl { value } => {
                write!(f, "image source `{value}` is not an http(s) URL")
            }
        }
    }
}

impl Error for ContentBlockError {}

/// Loose wire shape of a content block, before variant checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl TryFrom<RawContentBlock> for ContentBlock {
    type Error = ContentBlockError;

    fn try_from(raw: RawContentBlock) -> Result<Self, Self::Error> {
        let block = match raw.kind.as_str() {
            BLOCK_TYPE_PARAGRAPH => Self::Paragraph {
                text: take_required(raw.text, BLOCK_TYPE_PARAGRAPH, "text")?,
            },
            BLOCK_TYPE_HEADING => Self::Heading {
                text: take_required(raw.text, BLOCK_TYPE_HEADING, "text")?,
            },
            BLOCK_TYPE_QUOTE => Self::Quote {
                text: take_required(raw.text, BLOCK_TYPE_QUOTE, "text")?,
            },
            BLOCK_TYPE_IMAGE => Self::Image {
                src: take_required(raw.src, BLOCK_TYPE_IMAGE, "src")?,
                caption: raw.caption,
            },
            BLOCK_TYPE_CODE => Self::Code {
                code: take_required(raw.code, BLOCK_TYPE_CODE, "code")?,
            },
            _ => return Err(ContentBlockError::UnknownType(raw.kind)),
        };
        block.validate()?;
        Ok(block)
    }
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawContentBlock::deserialize(deserializer)?;
        Self::try_from(raw).map_err(<D::Error as serde::de::Error>::custom)
    }
}

fn take_required(
    value: Option<String>,
    block_type: &'static str,
    field: &'static str,
) -> Result<String, ContentBlockError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ContentBlockError::MissingField { block_type, field }),
    }
}

fn require_non_blank(
    value: &str,
    block_type: &'static str,
    field: &'static str,
) -> Result<(), ContentBlockError> {
    if value.trim().is_empty() {
        return Err(ContentBlockError::MissingField { block_type, field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::is_http_url;

    #[test]
    fn http_url_check_accepts_absolute_urls_only() {
        assert!(is_http_url("https://images.unsplash.com/photo-1?w=150"));
        assert!(is_http_url("http://example.com"));
        assert!(!is_http_url("images/cover.png"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("https://example.com/with space.png"));
        assert!(!is_http_url("ftp://example.com/a.png"));
    }
}
