//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `DISC_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{
    DEFAULT_MIN_ANSWER_WORDS, DEFAULT_RELEVANCE_THRESHOLD, DEFAULT_TOKEN_CACHE_CAPACITY,
    DEFAULT_TOP_N,
};

/// Scorer configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `DISC_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Fitted vectorizer artifact (JSON). Required to load a scorer.
    pub vectorizer_path: Option<PathBuf>,

    /// Reference corpus artifact (JSON). Required to load a scorer.
    pub corpus_path: Option<PathBuf>,

    /// Sentence encoder directory. `None` runs the encoder in stub mode.
    pub encoder_path: Option<PathBuf>,

    /// Matches returned per accepted answer. Default: `4`.
    pub top_n: usize,

    /// Best-match score an answer needs to be accepted. Default: `0.4`.
    pub relevance_threshold: f32,

    /// Words an answer needs to be scored at all. Default: `15`.
    pub min_answer_words: usize,

    /// Token embeddings kept in memory; `0` disables the cache. Default: `10_000`.
    pub token_cache_capacity: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vectorizer_path: None,
            corpus_path: None,
            encoder_path: None,
            top_n: DEFAULT_TOP_N,
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            min_answer_words: DEFAULT_MIN_ANSWER_WORDS,
            token_cache_capacity: DEFAULT_TOKEN_CACHE_CAPACITY,
        }
    }
}

impl Config {
    pub const ENV_VECTORIZER_PATH: &'static str = "DISC_VECTORIZER_PATH";
    pub const ENV_CORPUS_PATH: &'static str = "DISC_CORPUS_PATH";
    pub const ENV_ENCODER_PATH: &'static str = "DISC_ENCODER_PATH";
    pub const ENV_TOP_N: &'static str = "DISC_TOP_N";
    pub const ENV_RELEVANCE_THRESHOLD: &'static str = "DISC_RELEVANCE_THRESHOLD";
    pub const ENV_MIN_ANSWER_WORDS: &'static str = "DISC_MIN_ANSWER_WORDS";
    pub const ENV_TOKEN_CACHE_CAPACITY: &'static str = "DISC_TOKEN_CACHE_CAPACITY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            vectorizer_path: Self::parse_optional_path_from_env(Self::ENV_VECTORIZER_PATH),
            corpus_path: Self::parse_optional_path_from_env(Self::ENV_CORPUS_PATH),
            encoder_path: Self::parse_optional_path_from_env(Self::ENV_ENCODER_PATH),
            top_n: Self::parse_from_env(Self::ENV_TOP_N, defaults.top_n)?,
            relevance_threshold: Self::parse_from_env(
                Self::ENV_RELEVANCE_THRESHOLD,
                defaults.relevance_threshold,
            )?,
            min_answer_words: Self::parse_from_env(
                Self::ENV_MIN_ANSWER_WORDS,
                defaults.min_answer_words,
            )?,
            token_cache_capacity: Self::parse_from_env(
                Self::ENV_TOKEN_CACHE_CAPACITY,
                defaults.token_cache_capacity,
            )?,
        })
    }

    /// Validates paths and ranges (does not open artifacts).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_TOP_N,
                reason: "must be at least 1".to_string(),
            });
        }

        if !self.relevance_threshold.is_finite() || !(-1.0..=1.0).contains(&self.relevance_threshold)
        {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_RELEVANCE_THRESHOLD,
                reason: format!("{} is outside [-1, 1]", self.relevance_threshold),
            });
        }

        for path in [&self.vectorizer_path, &self.corpus_path].into_iter().flatten() {
            Self::check_file(path)?;
        }

        if let Some(ref path) = self.encoder_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns the vectorizer and corpus paths, which a scorer cannot load without.
    pub fn require_artifacts(&self) -> Result<(&Path, &Path), ConfigError> {
        let vectorizer = self
            .vectorizer_path
            .as_deref()
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_VECTORIZER_PATH,
            })?;
        let corpus = self.corpus_path.as_deref().ok_or(ConfigError::MissingEnvVar {
            name: Self::ENV_CORPUS_PATH,
        })?;
        Ok((vectorizer, corpus))
    }

    fn check_file(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(ConfigError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::ParseError {
                    name: var_name,
                    value: value.clone(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    }
}
