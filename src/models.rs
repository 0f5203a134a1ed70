//! Data models
//!
//! The per-article records that flow from the completion parser to the page
//! renderer, plus the summary returned by a run.

use std::path::PathBuf;

/// Fields the model is asked to produce, after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent {
    pub title: String,
    pub meta: String,
    /// Advisory only; the image provider is keyed by a numeric seed.
    pub image_keyword: String,
    /// Trusted HTML fragment, rendered without escaping.
    pub body: String,
}

/// One generated post, from parsed content to the files written for it.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub topic: String,
    pub title: String,
    pub meta: String,
    pub image_keyword: String,
    pub body: String,
    pub slug: String,
    pub image_file: Option<String>,
    pub image_credit: String,
}

impl ArticleDraft {
    pub fn new(topic: String, content: ArticleContent, slug: String) -> Self {
        Self {
            topic,
            title: content.title,
            meta: content.meta,
            image_keyword: content.image_keyword,
            body: content.body,
            slug,
            image_file: None,
            image_credit: String::new(),
        }
    }

    pub fn html_file_name(&self) -> String {
        format!("{}.html", self.slug)
    }

    pub fn image_file_name(&self) -> String {
        format!("{}.jpg", self.slug)
    }

    pub fn attach_image(&mut self, credit: String) {
        self.image_file = Some(self.image_file_name());
        self.image_credit = credit;
    }
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub created: Vec<PathBuf>,
    pub skipped: usize,
}
