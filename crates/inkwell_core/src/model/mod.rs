//! Blog domain model.
//!
//! # Responsibility
//! - Define the article, author, content block and comment records.
//! - Keep wire-shape decisions (field names, block tags) next to the types.
//!
//! # Invariants
//! - Articles are identified by a stable, non-blank `ArticleId`.
//! - A `ContentBlock` value always satisfies its variant's field contract
//!   once it has passed construction-time validation.

pub mod article;
pub mod comment;
pub mod content;
