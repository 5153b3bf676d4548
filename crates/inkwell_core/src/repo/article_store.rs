//! Article repository contract and in-memory store.
//!
//! # Responsibility
//! - Hold the ordered, read-only article collection.
//! - Reject broken content at construction instead of at render time.
//!
//! # Invariants
//! - Article ids are unique within one store.
//! - Every stored article passed `Article::validate()`.
//! - Iteration order is insertion order; no API hands out `&mut Article`.

use crate::model::article::{Article, ArticleId, ArticleRecord, ArticleValidationError};
use crate::model::content::ContentBlockError;
use log::{error, info};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

const SEED_JSON: &str = include_str!("../../data/articles.json");

pub type StoreResult<T> = Result<T, StoreError>;

/// Construction-time store error. Every variant is fatal for startup.
#[derive(Debug)]
pub enum StoreError {
    /// Two articles share the same id.
    DuplicateId(ArticleId),
    /// A content block misses the field its type requires.
    MalformedContentBlock {
        article_id: ArticleId,
        index: usize,
        source: ContentBlockError,
    },
    /// Article-level field is blank or malformed.
    InvalidArticle {
        article_id: ArticleId,
        source: ArticleValidationError,
    },
    /// Input is not a JSON array of article records.
    Parse(serde_json::Error),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StoreError {
    fn from_validation(article_id: &str, err: ArticleValidationError) -> Self {
        match err {
            ArticleValidationError::Block { index, source } => Self::MalformedContentBlock {
                article_id: article_id.to_string(),
                index,
                source,
            },
            other => Self::InvalidArticle {
                article_id: article_id.to_string(),
                source: other,
            },
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate article id `{id}`"),
            Self::MalformedContentBlock {
                article_id,
                index,
                source,
            } => write!(
                f,
                "malformed content block #{index} in article `{article_id}`: {source}"
            ),
            Self::InvalidArticle { article_id, source } => {
                write!(f, "invalid article `{article_id}`: {source}")
            }
            Self::Parse(err) => write!(f, "invalid article data: {err}"),
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateId(_) => None,
            Self::MalformedContentBlock { source, .. } => Some(source),
            Self::InvalidArticle { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Read-only access to an ordered article collection.
///
/// Services depend on this trait rather than on `ArticleStore`, so fixtures
/// can stand in for the seed store.
pub trait ArticleRepository {
    /// Full collection in store order.
    fn all(&self) -> &[Article];

    /// Article with exactly this id, if any.
    fn get(&self, id: &str) -> Option<&Article> {
        self.all().iter().find(|article| article.id == id)
    }
}

/// Validated, immutable article collection.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    articles: Vec<Article>,
    positions: HashMap<ArticleId, usize>,
}

impl ArticleStore {
    /// Builds a store from already-typed articles.
    ///
    /// # Errors
    /// - `DuplicateId` when two articles share an id.
    /// - `MalformedContentBlock` / `InvalidArticle` when validation fails.
    pub fn new(articles: Vec<Article>) -> StoreResult<Self> {
        let mut positions = HashMap::with_capacity(articles.len());
        for (position, article) in articles.iter().enumerate() {
            article
                .validate()
                .map_err(|err| StoreError::from_validation(&article.id, err))?;
            if positions.insert(article.id.clone(), position).is_some() {
                return Err(StoreError::DuplicateId(article.id.clone()));
            }
        }

        Ok(Self {
            articles,
            positions,
        })
    }

    /// Parses a JSON array of article records and validates it.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let records: Vec<ArticleRecord> = serde_json::from_str(json)?;
        let articles = records
            .into_iter()
            .map(|record| {
                let article_id = record.id.clone();
                Article::try_from(record)
                    .map_err(|err| StoreError::from_validation(&article_id, err))
            })
            .collect::<StoreResult<Vec<_>>>()?;
        Self::new(articles)
    }

    /// Reads and validates a JSON article file.
    ///
    /// # Side effects
    /// - Emits `store_load` logging events with duration and status.
    pub fn load_from_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let started_at = Instant::now();
        info!("event=store_load module=store status=start source=file");

        let result = std::fs::read_to_string(path)
            .map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|json| Self::from_json_str(&json));
        log_load_result("file", started_at, &result);
        result
    }

    /// Builds the store from the embedded seed articles.
    pub fn seed() -> StoreResult<Self> {
        let started_at = Instant::now();
        let result = Self::from_json_str(SEED_JSON);
        log_load_result("seed", started_at, &result);
        result
    }

    /// Full collection in insertion order.
    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    /// Article with exactly this id, if any.
    pub fn get(&self, id: &str) -> Option<&Article> {
        self.positions
            .get(id)
            .and_then(|position| self.articles.as_slice().get(*position))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Ids in store order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.articles.iter().map(|article| article.id.as_str())
    }

    /// Serializes the collection back to its external JSON shape.
    pub fn to_json_pretty(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.articles)?)
    }
}

impl ArticleRepository for ArticleStore {
    fn all(&self) -> &[Article] {
        ArticleStore::all(self)
    }

    fn get(&self, id: &str) -> Option<&Article> {
        ArticleStore::get(self, id)
    }
}

impl ArticleRepository for [Article] {
    fn all(&self) -> &[Article] {
        self
    }
}

impl ArticleRepository for Vec<Article> {
    fn all(&self) -> &[Article] {
        self.as_slice()
    }
}

fn log_load_result(source: &str, started_at: Instant, result: &StoreResult<ArticleStore>) {
    match result {
        Ok(store) => info!(
            "event=store_load module=store status=ok source={} articles={} duration_ms={}",
            source,
            store.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_load module=store status=error source={} duration_ms={} error={}",
            source,
            started_at.elapsed().as_millis(),
            err
        ),
    }
}
