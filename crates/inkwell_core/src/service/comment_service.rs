//! Session-local comment thread for one article.
//!
//! # Responsibility
//! - Hold the comment list shown under a detail view.
//! - Accept new guest comments.
//!
//! # Invariants
//! - Newest comment first; posting prepends.
//! - Blank (whitespace-only) text is rejected; accepted text is stored as typed.
//! - Nothing is persisted: a new thread starts from the sample comments.

use crate::model::article::ArticleId;
use crate::model::comment::{Comment, CommentId};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const GUEST_USER: &str = "Guest User";
const JUST_NOW_LABEL: &str = "Just now";
const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentError {
    EmptyText,
}

impl Display for CommentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "comment text cannot be empty"),
        }
    }
}

impl Error for CommentError {}

/// Ephemeral comment list bound to one article id.
#[derive(Debug, Clone)]
pub struct CommentThread {
    article_id: ArticleId,
    comments: Vec<Comment>,
}

impl CommentThread {
    /// Creates an empty thread.
    pub fn new(article_id: impl Into<ArticleId>) -> Self {
        Self {
            article_id: article_id.into(),
            comments: Vec::new(),
        }
    }

    /// Creates a thread pre-filled with the three sample comments.
    pub fn with_sample_comments(article_id: impl Into<ArticleId>) -> Self {
        Self {
            article_id: article_id.into(),
            comments: sample_comments(),
        }
    }

    pub fn article_id(&self) -> &str {
        self.article_id.as_str()
    }

    /// Comments, newest first.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Posts a guest comment at the top of the thread.
    ///
    /// # Errors
    /// - `CommentError::EmptyText` when `text` is blank.
    pub fn post(&mut self, text: impl Into<String>) -> Result<&Comment, CommentError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CommentError::EmptyText);
        }

        let id = Uuid::new_v4();
        self.comments.insert(
            0,
            Comment {
                id,
                user: GUEST_USER.to_string(),
                avatar: avatar_url(&id.to_string()),
                date: JUST_NOW_LABEL.to_string(),
                text,
                likes: 0,
            },
        );
        info!(
            "event=comment_post module=comment status=ok article_id={} comments={}",
            self.article_id,
            self.comments.len()
        );
        Ok(&self.comments[0])
    }

    /// Finds a comment by id.
    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }
}

fn avatar_url(seed: &str) -> String {
    format!("{AVATAR_BASE_URL}{seed}")
}

fn sample_comments() -> Vec<Comment> {
    [
        (
            1,
            "Dev_Pro_99",
            "Felix",
            "2 hours ago",
            "This article completely changed how I think about system architecture. The point about database bottlenecks is spot on!",
            12,
        ),
        (
            2,
            "Sarah Jenkins",
            "Aneka",
            "5 hours ago",
            "I disagree with the second point. In my experience, microservices add too much complexity for small teams.",
            8,
        ),
        (
            3,
            "AlexM",
            "Alex",
            "1 day ago",
            "Great read! Would love to see a follow-up on the implementation details.",
            5,
        ),
    ]
    .into_iter()
    .map(|(id, user, seed, date, text, likes)| Comment {
        id: Uuid::from_u128(id),
        user: user.to_string(),
        avatar: avatar_url(seed),
        date: date.to_string(),
        text: text.to_string(),
        likes,
    })
    .collect()
}
