//! Query and use-case services over the article repository.
//!
//! # Responsibility
//! - Answer the questions views ask: one article, a filtered list, related
//!   articles, display-ready fields, session comments.
//! - Keep views decoupled from how articles are stored.
//!
//! # Invariants
//! - Services never mutate the repository.
//! - Every query is a deterministic function of repository contents.

pub mod comment_service;
pub mod filter_service;
pub mod lookup_service;
pub mod related_service;
pub mod view_service;
