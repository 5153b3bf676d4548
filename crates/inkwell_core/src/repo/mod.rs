//! Repository layer: the article collection and its read-only contract.
//!
//! # Responsibility
//! - Define the data access seam used by query services.
//! - Own construction-time validation of static article content.
//!
//! # Invariants
//! - Stores are validated once, at construction, and never mutated after.
//! - Construction failures are fatal; callers should refuse to start.

pub mod article_store;
