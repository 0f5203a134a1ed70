//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Completion provider error: {0}")]
    Provider(String),

    /// The model answered, but not with a usable JSON object.
    #[error("Article parse error: {message}")]
    Parse { message: String, raw: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Failures that cost a single article; the run carries on without it.
    pub fn is_article_failure(&self) -> bool {
        matches!(self, Error::Provider(_) | Error::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
