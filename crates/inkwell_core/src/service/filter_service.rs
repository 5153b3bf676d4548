//! Category/tag filtering for listing views.
//!
//! # Responsibility
//! - Derive the articles visible under one selector.
//! - Report selector counts for the listing selector bar.
//!
//! # Invariants
//! - `ALL_SELECTOR` returns the whole repository in order.
//! - Any other selector matches on exact category OR exact tag membership.
//! - Output keeps repository order; nothing is re-sorted.

use crate::model::article::Article;
use crate::repo::article_store::ArticleRepository;
use std::collections::HashSet;

/// Reserved selector meaning "no filtering".
pub const ALL_SELECTOR: &str = "All";

/// Selector bar offered by the blog listing page.
pub const LISTING_SELECTORS: [&str; 7] = ["All", "Design", "Coding", "AI", "Opinion", "UX", "Life"];

/// Number of articles a selector yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorCount {
    pub selector: String,
    pub count: usize,
}

/// Returns whether `article` is visible under `selector`.
///
/// Matching is case-sensitive and exact: selector `AI` does not match
/// category `AI Tools`.
pub fn matches_selector(article: &Article, selector: &str) -> bool {
    selector == ALL_SELECTOR || article.category == selector || article.has_tag(selector)
}

/// Category filter facade over a repository implementation.
pub struct CategoryFilter<'s, R: ArticleRepository + ?Sized> {
    repo: &'s R,
}

impl<'s, R: ArticleRepository + ?Sized> CategoryFilter<'s, R> {
    pub fn new(repo: &'s R) -> Self {
        Self { repo }
    }

    /// Articles visible under `selector`, in repository order.
    ///
    /// An unmatched selector yields an empty list, not an error.
    pub fn filter_by_category(&self, selector: &str) -> Vec<&'s Article> {
        let repo: &'s R = self.repo;
        repo.all()
            .iter()
            .filter(|article| matches_selector(article, selector))
            .collect()
    }

    /// Counts matches for each selector, keeping the given order.
    pub fn selector_counts(&self, selectors: &[&str]) -> Vec<SelectorCount> {
        selectors
            .iter()
            .map(|selector| SelectorCount {
                selector: (*selector).to_string(),
                count: self
                    .repo
                    .all()
                    .iter()
                    .filter(|article| matches_selector(article, selector))
                    .count(),
            })
            .collect()
    }

    /// Every selector that matches at least one article.
    ///
    /// Starts with `ALL_SELECTOR`, then categories and tags in first-seen
    /// store order, deduplicated.
    pub fn known_selectors(&self) -> Vec<&'s str> {
        let repo: &'s R = self.repo;
        let mut seen = HashSet::new();
        let mut selectors = vec![ALL_SELECTOR];
        seen.insert(ALL_SELECTOR);

        for article in repo.all() {
            let tags = article.tags.iter().map(String::as_str);
            for candidate in std::iter::once(article.category.as_str()).chain(tags) {
                if seen.insert(candidate) {
                    selectors.push(candidate);
                }
            }
        }

        selectors
    }
}
