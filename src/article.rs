//! Parsing of article JSON out of free-form completion text.
//!
//! The model is asked for JSON only but routinely wraps it in prose or code
//! fences. The object is taken to span from the first `{` to the last `}`;
//! braces outside the object (or a truncated object) make the slice invalid
//! and the article is rejected.

use crate::models::ArticleContent;
use crate::{Error, Result};
use serde::Deserialize;

const DEFAULT_BODY: &str = "<p>No content generated.</p>";

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    meta: Option<String>,
    image_keyword: Option<String>,
    body: Option<String>,
}

/// Slice `raw` from its first `{` to its last `}`, inclusive.
pub fn extract_json_object(raw: &str) -> Result<&str> {
    let start = raw.find('{').ok_or_else(|| parse_error("no '{' in output", raw))?;
    let end = raw.rfind('}').ok_or_else(|| parse_error("no '}' in output", raw))?;

    if end < start {
        return Err(parse_error("last '}' comes before first '{'", raw));
    }

    Ok(&raw[start..=end])
}

/// Parse the article fields for `topic`, filling in defaults for missing keys.
pub fn parse_article(raw: &str, topic: &str) -> Result<ArticleContent> {
    let json = extract_json_object(raw)?;
    let article: RawArticle = serde_json::from_str(json)
        .map_err(|e| parse_error(&format!("invalid article JSON: {}", e), raw))?;

    Ok(ArticleContent {
        title: article
            .title
            .unwrap_or_else(|| format!("{} Update", title_case(topic))),
        meta: article.meta.unwrap_or_default(),
        image_keyword: article.image_keyword.unwrap_or_else(|| topic.to_string()),
        body: article.body.unwrap_or_else(|| DEFAULT_BODY.to_string()),
    })
}

fn parse_error(message: &str, raw: &str) -> Error {
    Error::Parse {
        message: message.to_string(),
        raw: raw.to_string(),
    }
}

/// Capitalise the first letter of every whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
