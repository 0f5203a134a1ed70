//! Run configuration
//!
//! Built once at startup and handed to [`crate::app::App`]. The only value
//! read from the environment is the OpenAI credential; everything else is a
//! compiled-in default that the CLI may override.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ARTICLES_DIR: &str = "articles";
pub const DEFAULT_POSTS_PER_RUN: usize = 3;
pub const DEFAULT_TOPICS: [&str; 5] = ["weather", "science", "nature", "news", "today weather"];

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub chat_model: String,
    pub articles_dir: PathBuf,
    pub posts_per_run: usize,
    pub topics: Vec<String>,
}

impl Config {
    pub fn new(openai_api_key: String) -> Self {
        Self {
            openai_api_key,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            articles_dir: PathBuf::from(DEFAULT_ARTICLES_DIR),
            posts_per_run: DEFAULT_POSTS_PER_RUN,
            topics: DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Load the credential from the process environment (and `.env`, if any).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
        Self::from_api_key(api_key)
    }

    fn from_api_key(api_key: String) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(Error::Config(format!(
                "{} not set. Export it or add it to .env before running.",
                API_KEY_VAR
            )));
        }
        Ok(Self::new(api_key))
    }

    pub fn with_articles_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.articles_dir = dir.into();
        self
    }

    pub fn with_posts_per_run(mut self, posts: usize) -> Self {
        self.posts_per_run = posts;
        self
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Where article images are stored, always `<articles_dir>/images`.
    pub fn images_dir(&self) -> PathBuf {
        self.articles_dir.join("images")
    }

    pub fn articles_dir(&self) -> &Path {
        &self.articles_dir
    }

    pub fn validate(&self) -> Result<()> {
        if self.posts_per_run == 0 {
            return Err(Error::Config("posts per run must be at least 1".to_string()));
        }
        if self.topics.is_empty() {
            return Err(Error::Config("topic pool is empty".to_string()));
        }
        if self.topics.iter().any(|t| t.trim().is_empty()) {
            return Err(Error::Config("topic pool contains a blank topic".to_string()));
        }
        Ok(())
    }
}
