//! Core content model and queries for the Inkwell blog.
//! This crate is the single source of truth for article invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::article::{Article, ArticleId, ArticleValidationError, Author};
pub use model::comment::{Comment, CommentId};
pub use model::content::{ContentBlock, ContentBlockError};
pub use repo::article_store::{ArticleRepository, ArticleStore, StoreError, StoreResult};
pub use service::comment_service::{CommentError, CommentThread};
pub use service::filter_service::{
    matches_selector, CategoryFilter, SelectorCount, ALL_SELECTOR, LISTING_SELECTORS,
};
pub use service::lookup_service::{LookupError, LookupResult, LookupService, DEFAULT_FALLBACK_ID};
pub use service::related_service::{RelatedSelector, DEFAULT_RELATED_LIMIT};
pub use service::view_service::{
    resolve_author_role, resolve_subtitle, ArticleView, DEFAULT_AUTHOR_ROLE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
