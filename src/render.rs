//! Static HTML pages for generated articles
//!
//! Every page is a complete document with no external dependencies beyond the
//! site stylesheet. Text fields are escaped by `maud`; the article body is
//! model-produced HTML and is inserted as-is.

use chrono::{DateTime, Datelike, Utc};
use maud::{html, PreEscaped, DOCTYPE};

pub const SITE_NAME: &str = "Weather Now";
pub const CONTACT_EMAIL: &str = "contact@weathernow.example";

/// Web path under which article images are served.
const IMAGE_URL_PREFIX: &str = "/articles/images/";

/// Inputs for one article page.
#[derive(Debug, Clone, Copy)]
pub struct PageContent<'a> {
    pub title: &'a str,
    pub meta: &'a str,
    pub image_file: Option<&'a str>,
    pub image_credit: &'a str,
    pub body_html: &'a str,
}

/// Render `page`, stamped as published now.
pub fn render_page(page: &PageContent<'_>) -> String {
    render_page_at(page, Utc::now())
}

/// Render `page` with an explicit publication time.
pub fn render_page_at(page: &PageContent<'_>, published: DateTime<Utc>) -> String {
    let published_label = published.format("%Y-%m-%d %H:%M UTC").to_string();
    let image_file = page.image_file.filter(|file| !file.is_empty());

    let document = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) " - " (SITE_NAME) }
                meta name="description" content=(page.meta);
                link rel="stylesheet" href="/style.css";
            }
            body {
                header {
                    h1 { a href="/index.html" { (SITE_NAME) } }
                }
                main {
                    article {
                        h2 { (page.title) }
                        p { "Published: " (published_label) }
                        @if let Some(file) = image_file {
                            figure {
                                img src=(format!("{}{}", IMAGE_URL_PREFIX, file)) alt=(page.image_credit);
                                figcaption { (page.image_credit) }
                            }
                        }
                        (PreEscaped(page.body_html))
                        p {
                            em { "Author: " (SITE_NAME) " | Contact: " (CONTACT_EMAIL) }
                        }
                    }
                }
                footer {
                    p { "© " (published.year()) " " (SITE_NAME) }
                }
            }
        }
    };

    document.into_string()
}
