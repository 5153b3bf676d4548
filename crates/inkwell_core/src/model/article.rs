//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical blog post record and its embedded author.
//! - Validate article-level invariants before a record joins a store.
//!
//! # Invariants
//! - `id` is non-blank; uniqueness is enforced by the store, not here.
//! - `content` keeps authored order.
//! - Hero and author images are absolute `http(s)` URLs.

use crate::model::content::{is_http_url, ContentBlock, ContentBlockError, RawContentBlock};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable routing identifier of an article.
pub type ArticleId = String;

/// Author card embedded in every article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// May be blank; display falls back to a generic label.
    #[serde(default)]
    pub role: String,
    pub image: String,
    #[serde(default)]
    pub bio: String,
}

/// One blog post.
///
/// Field names serialize in camelCase (`readTime`) to match the external
/// article schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ArticleRecord")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// Optional; display falls back to `excerpt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub excerpt: String,
    /// Hero image URL.
    pub image: String,
    /// Single primary classification.
    pub category: String,
    /// Display-only date label, not parsed.
    pub date: String,
    /// Display-only reading time label, e.g. `8 min`.
    pub read_time: String,
    /// Free-form badge label, e.g. `+85%` or `Hot`.
    pub trend: String,
    /// Secondary, cross-cutting classification.
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: Author,
    /// Body blocks in reading order.
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl Article {
    /// Returns whether `tag` is one of this article's tags (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    /// Validates article-level fields and every content block.
    ///
    /// # Errors
    /// - `BlankField` when a required display field is empty.
    /// - `InvalidUrl` when the hero or author image is not an http(s) URL.
    /// - `Block` with the offending block index when a block is malformed.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        for (field, value) in [
            ("id", self.id.as_str()),
            ("title", self.title.as_str()),
            ("excerpt", self.excerpt.as_str()),
            ("image", self.image.as_str()),
            ("category", self.category.as_str()),
            ("author.name", self.author.name.as_str()),
            ("author.image", self.author.image.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(ArticleValidationError::BlankField(field));
            }
        }

        for (field, value) in [
            ("image", self.image.as_str()),
            ("author.image", self.author.image.as_str()),
        ] {
            if !is_http_url(value) {
                return Err(ArticleValidationError::InvalidUrl {
                    field,
                    value: value.to_string(),
                });
            }
        }

        for (index, block) in self.content.iter().enumerate() {
            block
                .validate()
                .map_err(|source| ArticleValidationError::Block { index, source })?;
        }

        Ok(())
    }
}

/// Article validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleValidationError {
    BlankField(&'static str),
    InvalidUrl {
        field: &'static str,
        value: String,
    },
    /// Content block at `index` violates its variant contract.
    Block {
        index: usize,
        source: ContentBlockError,
    },
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "article field `{field}` cannot be empty"),
            Self::InvalidUrl { field, value } => write!(
                f,
                "article field `{field}` is not an http(s) URL: `{value}`"
            ),
            Self::Block { index, source } => write!(f, "content block #{index}: {source}"),
        }
    }
}

impl Error for ArticleValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Block { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Loose wire shape of an article; blocks are checked on conversion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub excerpt: String,
    pub image: String,
    pub category: String,
    pub date: String,
    pub read_time: String,
    pub trend: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: Author,
    #[serde(default)]
    pub content: Vec<RawContentBlock>,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = ArticleValidationError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        let content = record
            .content
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                ContentBlock::try_from(raw)
                    .map_err(|source| ArticleValidationError::Block { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let article = Self {
            id: record.id,
            title: record.title,
            subtitle: record.subtitle,
            excerpt: record.excerpt,
            image: record.image,
            category: record.category,
            date: record.date,
            read_time: record.read_time,
            trend: record.trend,
            tags: record.tags,
            author: record.author,
            content,
        };
        article.validate()?;
        Ok(article)
    }
}
