//! Process configuration resolved from the environment.
//!
//! # Responsibility
//! - Read `INKWELL_*` variables once at startup.
//! - Supply defaults for the content source, fallback id and logging.
//!
//! # Invariants
//! - Blank variables count as unset.
//! - Logging stays disabled unless a log directory is configured.

use crate::logging::{default_log_level, LogSettings, LoggingError};
use crate::repo::article_store::{ArticleStore, StoreResult};
use crate::service::lookup_service::DEFAULT_FALLBACK_ID;
use crate::service::related_service::DEFAULT_RELATED_LIMIT;
use std::path::PathBuf;

/// JSON article file replacing the embedded seed.
pub const ENV_CONTENT_PATH: &str = "INKWELL_CONTENT_PATH";
/// Absolute directory for rolling log files.
pub const ENV_LOG_DIR: &str = "INKWELL_LOG_DIR";
/// Log level; defaults to `default_log_level()`.
pub const ENV_LOG_LEVEL: &str = "INKWELL_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` uses the embedded seed articles.
    pub content_path: Option<PathBuf>,
    pub fallback_id: String,
    pub related_limit: usize,
    /// `None` leaves logging off.
    pub logging: Option<LogSettings>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            fallback_id: DEFAULT_FALLBACK_ID.to_string(),
            related_limit: DEFAULT_RELATED_LIMIT,
            logging: None,
        }
    }
}

impl AppConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary variable source.
    ///
    /// # Errors
    /// - Returns `LoggingError` when a configured log level or directory is
    ///   invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoggingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let logging = match non_blank(ENV_LOG_DIR) {
            Some(log_dir) => {
                let level = non_blank(ENV_LOG_LEVEL);
                let level = level.as_deref().unwrap_or(default_log_level());
                Some(LogSettings::parse(level, &log_dir)?)
            }
            None => None,
        };

        Ok(Self {
            content_path: non_blank(ENV_CONTENT_PATH).map(PathBuf::from),
            logging,
            ..Self::default()
        })
    }

    /// Builds the article store from the configured source.
    pub fn load_store(&self) -> StoreResult<ArticleStore> {
        match &self.content_path {
            Some(path) => ArticleStore::load_from_path(path),
            None => ArticleStore::seed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ENV_CONTENT_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.fallback_id, "1");
        assert_eq!(config.related_limit, 3);
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config =
            AppConfig::from_lookup(lookup_from(&[(ENV_CONTENT_PATH, "  "), (ENV_LOG_DIR, "")]))
                .unwrap();
        assert_eq!(config.content_path, None);
        assert_eq!(config.logging, None);
    }

    #[test]
    fn log_dir_enables_logging_with_requested_level() {
        let dir = std::env::temp_dir().join("inkwell-config-test");
        let dir_str = dir.to_str().unwrap();
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_LOG_DIR, dir_str),
            (ENV_LOG_LEVEL, "WARNING"),
            (ENV_CONTENT_PATH, "/srv/articles.json"),
        ]))
        .unwrap();

        let logging = config.logging.expect("logging should be configured");
        assert_eq!(logging.level, "warn");
        assert_eq!(logging.log_dir, dir);
        assert_eq!(
            config.content_path,
            Some(PathBuf::from("/srv/articles.json"))
        );
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let dir = std::env::temp_dir();
        let err = AppConfig::from_lookup(lookup_from(&[
            (ENV_LOG_DIR, dir.to_str().unwrap()),
            (ENV_LOG_LEVEL, "verbose"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("unsupported log level"));
    }
}
