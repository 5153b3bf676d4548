//! Comment record shown under an article.
//!
//! Comments are session-local: nothing in core persists them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one comment within a session.
pub type CommentId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    /// Display name of the commenter.
    pub user: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Relative display label, e.g. `2 hours ago`.
    pub date: String,
    /// Comment body exactly as typed.
    pub text: String,
    pub likes: u32,
}
