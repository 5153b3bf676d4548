//! "Keep reading" selection for detail views.

use crate::model::article::Article;
use crate::repo::article_store::ArticleRepository;

/// Number of related articles shown under a detail view.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Related-content selector over a repository implementation.
pub struct RelatedSelector<'s, R: ArticleRepository + ?Sized> {
    repo: &'s R,
}

impl<'s, R: ArticleRepository + ?Sized> RelatedSelector<'s, R> {
    pub fn new(repo: &'s R) -> Self {
        Self { repo }
    }

    /// First `limit` articles in repository order, skipping `current_id`.
    ///
    /// # Contract
    /// - Deterministic: no shuffling.
    /// - Fewer candidates than `limit` -> all of them, no padding.
    /// - `limit == 0` -> empty.
    pub fn related_to(&self, current_id: &str, limit: usize) -> Vec<&'s Article> {
        let repo: &'s R = self.repo;
        repo.all()
            .iter()
            .filter(|article| article.id != current_id)
            .take(limit)
            .collect()
    }
}
