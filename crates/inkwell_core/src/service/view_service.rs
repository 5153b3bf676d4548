//! Display projection for articles.
//!
//! # Responsibility
//! - Resolve optional/blank display fields to their fallbacks.
//! - Keep the fallback policy out of rendering code.
//!
//! # Invariants
//! - Blank `subtitle` (missing or whitespace-only) resolves to `excerpt`.
//! - Blank author `role` resolves to `DEFAULT_AUTHOR_ROLE`.

use crate::model::article::{Article, Author};
use crate::model::content::ContentBlock;

/// Role label shown when an author has none.
pub const DEFAULT_AUTHOR_ROLE: &str = "Author";

/// Article prepared for display, with fallbacks applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleView<'a> {
    pub article: &'a Article,
    pub subtitle: &'a str,
    pub author_role: &'a str,
}

impl<'a> ArticleView<'a> {
    pub fn from_article(article: &'a Article) -> Self {
        Self {
            article,
            subtitle: resolve_subtitle(article),
            author_role: resolve_author_role(&article.author),
        }
    }

    pub fn id(&self) -> &'a str {
        self.article.id.as_str()
    }

    pub fn title(&self) -> &'a str {
        self.article.title.as_str()
    }

    pub fn blocks(&self) -> &'a [ContentBlock] {
        &self.article.content
    }
}

/// `subtitle` when present and non-blank, otherwise `excerpt`.
pub fn resolve_subtitle(article: &Article) -> &str {
    article
        .subtitle
        .as_deref()
        .filter(|subtitle| !subtitle.trim().is_empty())
        .unwrap_or(article.excerpt.as_str())
}

/// Author role, or `DEFAULT_AUTHOR_ROLE` when blank.
pub fn resolve_author_role(author: &Author) -> &str {
    if author.role.trim().is_empty() {
        DEFAULT_AUTHOR_ROLE
    } else {
        author.role.as_str()
    }
}
