//! Article lookup use-cases.
//!
//! # Responsibility
//! - Resolve one article by id for detail views.
//! - Apply the fallback policy for unknown ids in one place.
//!
//! # Invariants
//! - Lookups are pure reads over the repository.
//! - `resolve_or_default` fails only when the fallback id is missing too.

use crate::model::article::{Article, ArticleId};
use crate::repo::article_store::ArticleRepository;
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Article rendered when a detail view receives an unknown id.
pub const DEFAULT_FALLBACK_ID: &str = "1";

pub type LookupResult<T> = Result<T, LookupError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Neither the requested id nor the fallback id exists.
    NotFound {
        id: ArticleId,
        fallback_id: ArticleId,
    },
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { id, fallback_id } => write!(
                f,
                "article not found: `{id}` (fallback `{fallback_id}` is missing as well)"
            ),
        }
    }
}

impl Error for LookupError {}

/// Lookup facade over a repository implementation.
pub struct LookupService<'s, R: ArticleRepository + ?Sized> {
    repo: &'s R,
}

impl<'s, R: ArticleRepository + ?Sized> LookupService<'s, R> {
    pub fn new(repo: &'s R) -> Self {
        Self { repo }
    }

    /// Returns the article with exactly this id.
    pub fn find_by_id(&self, id: &str) -> Option<&'s Article> {
        let repo: &'s R = self.repo;
        repo.get(id)
    }

    /// Resolves `id`, falling back to `fallback_id` when it is unknown.
    ///
    /// # Contract
    /// - Known `id` -> that article.
    /// - Unknown `id` -> the fallback article.
    /// - Both unknown -> `LookupError::NotFound`; this indicates broken
    ///   content, not bad user input.
    pub fn resolve_or_default(&self, id: &str, fallback_id: &str) -> LookupResult<&'s Article> {
        if let Some(article) = self.find_by_id(id) {
            return Ok(article);
        }

        match self.find_by_id(fallback_id) {
            Some(article) => {
                debug!(
                    "event=lookup_fallback module=lookup status=ok requested_len={} fallback={}",
                    id.len(),
                    fallback_id
                );
                Ok(article)
            }
            None => {
                error!(
                    "event=lookup_fallback module=lookup status=error error_code=fallback_missing fallback={}",
                    fallback_id
                );
                Err(LookupError::NotFound {
                    id: id.to_string(),
                    fallback_id: fallback_id.to_string(),
                })
            }
        }
    }
}
